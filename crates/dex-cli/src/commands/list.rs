use anyhow::Context;
use dex_catalog::{BrowsePage, CatalogClient, CatalogTransport};
use dex_core::PageWindow;
use serde::Serialize;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::views::{RecordRow, print_rows};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub page: u32,
    pub label: String,
    pub total_records: Option<u64>,
    pub total_pages: Option<u64>,
    pub has_previous: bool,
    pub has_next: bool,
    pub records: Vec<RecordRow>,
}

impl From<&BrowsePage> for ListResponse {
    fn from(page: &BrowsePage) -> Self {
        Self {
            page: page.page_number(),
            label: page.label(),
            total_records: page.meta.total_records,
            total_pages: page.meta.total_pages,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            records: page.results.iter().map(RecordRow::from).collect(),
        }
    }
}

impl ListResponse {
    /// `Page 2 of 35  (prev: --page 1, next: --page 3)`
    fn footer(&self) -> String {
        let mut hints = Vec::new();
        if self.has_previous {
            hints.push(format!("prev: --page {}", self.page - 1));
        }
        if self.has_next {
            hints.push(format!("next: --page {}", self.page.saturating_add(1)));
        }
        if hints.is_empty() {
            self.label.clone()
        } else {
            format!("{}  ({})", self.label, hints.join(", "))
        }
    }
}

pub async fn build<T: CatalogTransport>(
    page: u32,
    catalog: &CatalogClient<T>,
) -> anyhow::Result<ListResponse> {
    let window = PageWindow::new(page)?;
    let page = catalog
        .browse(window)
        .await
        .with_context(|| format!("failed to load page {}", window.page_number))?;
    Ok(ListResponse::from(&page))
}

/// Handle `dex list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = args.page.unwrap_or_else(|| ctx.config.general.default_page());
    let response = build(page, &ctx.catalog).await?;

    match flags.format {
        OutputFormat::Table => {
            print_rows(&response.records, flags.format)?;
            if !flags.quiet {
                println!("\n{}", response.footer());
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}
