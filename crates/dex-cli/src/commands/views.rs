//! Output shapes shared by several commands.

use dex_core::{EnrichedDetail, SummaryRecord};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::{self, table};
use crate::ui;

/// One listing row, with the id derived from the record URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub id: Option<u32>,
    pub name: String,
    pub url: String,
}

impl From<&SummaryRecord> for RecordRow {
    fn from(record: &SummaryRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name.clone(),
            url: record.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageRow {
    pub id: u32,
    pub name: String,
    pub sprite: String,
}

/// Enriched detail as printed by `show` and numeric `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: Option<u32>,
    pub name: String,
    pub url: String,
    pub image: Option<String>,
    pub category_tags: Vec<String>,
    pub lineage: Vec<LineageRow>,
}

impl DetailView {
    #[must_use]
    pub fn new(detail: &EnrichedDetail, sprite_base_url: &str) -> Self {
        Self {
            id: detail.id(),
            name: detail.record.name.clone(),
            url: detail.record.url.clone(),
            image: detail.record.image.clone(),
            category_tags: detail.category_tags.clone(),
            lineage: detail
                .lineage
                .iter()
                .map(|entry| LineageRow {
                    id: entry.id,
                    name: entry.name.clone(),
                    sprite: entry.sprite_url(sprite_base_url),
                })
                .collect(),
        }
    }

    /// `pichu (#172) -> pikachu (#25) -> raichu (#26)`
    #[must_use]
    pub fn lineage_line(&self) -> String {
        self.lineage
            .iter()
            .map(|row| format!("{} (#{})", row.name, row.id))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    fn table_rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec![
                "id".to_string(),
                self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            ],
            vec!["name".to_string(), self.name.clone()],
        ];
        rows.extend(
            self.category_tags
                .iter()
                .map(|tag| vec!["type".to_string(), tag.clone()]),
        );
        rows.push(vec!["evolution".to_string(), self.lineage_line()]);
        rows.push(vec![
            "image".to_string(),
            self.image.clone().unwrap_or_else(|| "-".to_string()),
        ]);
        rows.push(vec!["url".to_string(), self.url.clone()]);
        rows
    }
}

/// Print a detail; tables get one row per field and per type tag.
pub fn print_detail(view: &DetailView, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let rendered = table::render_table(
                &["field", "value"],
                &view.table_rows(),
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            );
            println!("{rendered}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output::output(view, format),
    }
}

/// Print listing rows; tables show only id and name.
pub fn print_rows(rows: &[RecordRow], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            let items = rows
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", output::render_array_table(&items, Some(&["id", "name"])));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output::output(&rows, format),
    }
}
