//! Print the question catalog.

use std::path::PathBuf;

use anyhow::Result;
use checkup_core::QuestionBank;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::config::CheckupConfig;

#[derive(Args, Debug, Default)]
pub struct QuestionsArgs {
    /// Question catalog (TOML) to print instead of the builtin one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: QuestionsArgs, config: &CheckupConfig) -> Result<()> {
    let catalog = args.catalog.as_deref().or(config.catalog.path.as_deref());
    let bank = super::load_bank(catalog)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bank.to_file())?);
    } else {
        println!("{}", build_table(&bank));
        println!("{} questions", bank.question_count());
    }
    Ok(())
}

/// One row per question, numbered "section.item" from 1.
fn build_table(bank: &QuestionBank) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("Section").fg(Color::Cyan),
        Cell::new("Question").fg(Color::Cyan),
    ]);

    for (s, section) in bank.sections().iter().enumerate() {
        let heading = match &section.subsection {
            Some(subsection) => format!("{} / {}", section.title, subsection),
            None => section.title.clone(),
        };
        for (i, item) in section.items.iter().enumerate() {
            table.add_row(vec![
                Cell::new(format!("{}.{}", s + 1, i + 1)),
                Cell::new(&heading),
                Cell::new(&item.question),
            ]);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_question() {
        let bank = QuestionBank::builtin();
        let table = build_table(&bank);
        assert_eq!(table.row_iter().count(), bank.question_count());
    }

    #[test]
    fn table_numbers_and_labels_sections() {
        let mut table = build_table(&QuestionBank::builtin());
        table.set_width(200);
        let rendered = table.to_string();
        assert!(rendered.contains("1.1"));
        assert!(rendered.contains("2.2"));
        assert!(rendered.contains("Administration of Medicines / Preparation and hygiene"));
    }

    #[test]
    fn json_output_matches_catalog_format() {
        let bank = QuestionBank::builtin();
        let json = serde_json::to_value(bank.to_file()).unwrap();
        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["title"], "Training and Policy");
        assert!(sections[0].get("subsection").is_none());
        assert_eq!(sections[1]["subsection"], "Preparation and hygiene");
    }
}
