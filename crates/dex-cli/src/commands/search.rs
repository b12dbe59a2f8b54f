use anyhow::Context;
use dex_catalog::session::SearchRequest;
use dex_catalog::{CatalogClient, CatalogTransport, Query, SearchOutcome, SearchSession};
use serde::Serialize;

use crate::cli::root_commands::SearchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::views::{DetailView, RecordRow, print_detail, print_rows};
use crate::context::AppContext;
use crate::output::output;

/// Search result as printed; mirrors [`SearchOutcome`].
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum SearchView {
    Detail(Box<DetailView>),
    Listing(Vec<RecordRow>),
    Empty,
}

impl SearchView {
    fn new(outcome: &SearchOutcome, sprite_base_url: &str) -> Self {
        match outcome {
            SearchOutcome::Detail(detail) => {
                Self::Detail(Box::new(DetailView::new(detail, sprite_base_url)))
            }
            SearchOutcome::Listing(records) => {
                Self::Listing(records.iter().map(RecordRow::from).collect())
            }
            SearchOutcome::Empty => Self::Empty,
        }
    }
}

pub async fn build<T: CatalogTransport>(
    query: &str,
    page: u32,
    catalog: &CatalogClient<T>,
    sprite_base_url: &str,
) -> anyhow::Result<SearchView> {
    let mut session = SearchSession::new();

    match session.set_search(query) {
        SearchRequest::Resolve { generation, id } => {
            let tagged = catalog.resolve_by_id_tagged(generation, id).await;
            session.apply_detail(tagged);
        }
        SearchRequest::Local => {
            if matches!(session.query(), Query::Name(_)) {
                let (generation, window) = session.request_page(page)?;
                let tagged = catalog.browse_tagged(generation, window).await;
                session
                    .apply_page(tagged)
                    .with_context(|| format!("failed to load page {page} for name search"))?;
            }
        }
    }

    Ok(SearchView::new(&session.outcome(), sprite_base_url))
}

/// Handle `dex search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = args.page.unwrap_or_else(|| ctx.config.general.default_page());
    let view = build(&args.query, page, &ctx.catalog, ctx.sprite_base_url()).await?;

    match (&view, flags.format) {
        (SearchView::Detail(detail), OutputFormat::Table) => print_detail(detail, flags.format),
        (SearchView::Listing(rows), OutputFormat::Table) => print_rows(rows, flags.format),
        (SearchView::Empty, OutputFormat::Table) => {
            if !flags.quiet {
                println!("No results for '{}'", args.query.trim());
            }
            Ok(())
        }
        (_, OutputFormat::Json | OutputFormat::Raw) => output(&view, flags.format),
    }
}
