use anyhow::Context;
use dex_catalog::{CatalogClient, CatalogTransport};
use dex_core::PaginationMeta;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total_records: Option<u64>,
    pub total_pages: Option<u64>,
}

pub async fn build<T: CatalogTransport>(
    catalog: &CatalogClient<T>,
) -> anyhow::Result<CountResponse> {
    let total = catalog
        .total_count()
        .await
        .context("total count unavailable")?;
    let meta = PaginationMeta::from_total(total);
    Ok(CountResponse {
        total_records: meta.total_records,
        total_pages: meta.total_pages,
    })
}

/// Handle `dex count`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(&ctx.catalog).await?;
    output(&response, flags.format)
}
