use catcfg::api::{CmdMessage, MessageLevel};
use catcfg::export::ReportSection;
use catcfg::fields::{FieldKind, FieldSpec};
use catcfg::model::CategoryRecord;
use colored::*;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 26;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_records(records: &[CategoryRecord]) {
    if records.is_empty() {
        println!("No records in local store.");
        return;
    }

    let id_width = records.iter().map(|r| r.id.width()).max().unwrap_or(0);
    for record in records {
        let padding = " ".repeat(id_width.saturating_sub(record.id.width()));
        println!("  {}{}  {}", record.id.yellow(), padding, record.name);
    }
    println!();
    println!("{}", format!("{} record(s)", records.len()).dimmed());
}

pub fn print_report(sections: &[ReportSection]) {
    println!("{}", "AURORA ENTERPRISE".bold());
    println!("{}", "Configuration Management Solution".dimmed());
    println!();

    for section in sections {
        println!("{}", section.title.bold().underline());
        for row in &section.rows {
            let padding = " ".repeat(LABEL_WIDTH.saturating_sub(row.label.width()));
            let value = if row.value == "N/A" {
                row.value.dimmed().to_string()
            } else {
                row.value.clone()
            };
            println!("  {}{}  {}", row.label.dimmed(), padding, value);
        }
        println!();
    }
}

pub fn print_fields(specs: &[FieldSpec]) {
    for spec in specs {
        let kind = match spec.kind {
            FieldKind::Text => "text".to_string(),
            FieldKind::Switch => "switch".to_string(),
            FieldKind::ReadOnly => "read-only".to_string(),
            FieldKind::Select(options) => {
                let values: Vec<&str> = options
                    .iter()
                    .map(|opt| {
                        if opt.value.is_empty() {
                            "\"\""
                        } else {
                            opt.value
                        }
                    })
                    .collect();
                format!("select: {}", values.join(", "))
            }
        };
        let padding = " ".repeat(24usize.saturating_sub(spec.name.width()));
        println!("  {}{}  {}", spec.name.yellow(), padding, kind.dimmed());
    }
}
