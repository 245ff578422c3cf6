use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

use catcfg::api::{CategoryApi, CmdResult, ConfigAction};
use catcfg::config::CatcfgConfig;
use catcfg::draft::DraftSlot;
use catcfg::error::{CatcfgError, Result};
use catcfg::model::CategoryRecord;
use catcfg::store::fs::FileStore;

mod args;
mod output;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CategoryApi<FileStore>,
    slot: DraftSlot,
    draft: CategoryRecord,
    export_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Edit { assignments }) => handle_edit(&mut ctx, assignments),
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::Save) => handle_save(&mut ctx),
        Some(Commands::Load { id }) => handle_load(&mut ctx, id),
        Some(Commands::Delete) => handle_delete(&mut ctx),
        Some(Commands::Copy) => handle_copy(&mut ctx),
        Some(Commands::List { filter }) => handle_list(&ctx, filter),
        Some(Commands::Export { format, out }) => handle_export(&ctx, format, out),
        Some(Commands::Fields) => {
            output::print_fields(catcfg::fields::REGISTRY);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("CATCFG_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "catcfg", "catcfg")
        .ok_or_else(|| CatcfgError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;

    let config = CatcfgConfig::load(&data_dir).unwrap_or_default();
    let export_dir = PathBuf::from(config.export_dir);

    let store = FileStore::new(data_dir.clone());
    let api = CategoryApi::new(store, data_dir.clone());
    let slot = DraftSlot::new(data_dir);
    let draft = slot.load()?.unwrap_or_else(CategoryRecord::new_draft);

    Ok(AppContext {
        api,
        slot,
        draft,
        export_dir,
    })
}

/// Persist any replacement draft, then render the command's messages.
fn finish(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    if let Some(draft) = result.draft {
        ctx.slot.save(&draft)?;
        ctx.draft = draft;
    }
    output::print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.new_record()?;
    finish(ctx, result)
}

fn handle_edit(ctx: &mut AppContext, assignments: Vec<String>) -> Result<()> {
    let result = ctx.api.edit(&ctx.draft, &assignments)?;
    finish(ctx, result)
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.view(&ctx.draft)?;
    output::print_report(&result.sections);
    output::print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.save(&ctx.draft)?;
    output::print_messages(&result.messages);
    Ok(())
}

fn handle_load(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.load_record(&id)?;
    finish(ctx, result)
}

fn handle_delete(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.delete(&ctx.draft)?;
    finish(ctx, result)
}

fn handle_copy(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.duplicate(&ctx.draft)?;
    finish(ctx, result)
}

fn handle_list(ctx: &AppContext, filter: Option<String>) -> Result<()> {
    let result = ctx.api.list_records(filter.as_deref())?;
    output::print_records(&result.records);
    output::print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, format: String, out: Option<PathBuf>) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| ctx.export_dir.clone());
    let result = ctx.api.export(&ctx.draft, &format, &out_dir)?;
    if let Some(path) = &result.report_path {
        println!("{}", path.display());
    }
    output::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("export-dir = {}", config.export_dir);
    }
    output::print_messages(&result.messages);
    Ok(())
}
