use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatcfgConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = CatcfgConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CatcfgConfig::load(data_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CatcfgConfig::load(data_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(data_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_show_round_trips() {
        let temp = tempfile::tempdir().unwrap();

        run(
            temp.path(),
            ConfigAction::Set("export-dir".to_string(), "/tmp/reports".to_string()),
        )
        .unwrap();

        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().export_dir, "/tmp/reports");
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let temp = tempfile::tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("bogus".to_string())).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
