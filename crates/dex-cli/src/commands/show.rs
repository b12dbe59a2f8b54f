use anyhow::Context;
use dex_catalog::{CatalogClient, CatalogTransport};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::views::{DetailView, print_detail};
use crate::context::AppContext;

pub async fn build<T: CatalogTransport>(
    id: u32,
    catalog: &CatalogClient<T>,
    sprite_base_url: &str,
) -> anyhow::Result<DetailView> {
    let detail = catalog
        .resolve_by_id(id)
        .await
        .with_context(|| format!("no detail available for identifier {id}"))?;
    Ok(DetailView::new(&detail, sprite_base_url))
}

/// Handle `dex show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = build(args.id, &ctx.catalog, ctx.sprite_base_url()).await?;
    print_detail(&view, flags.format)
}

#[cfg(test)]
mod tests {
    use dex_catalog::CatalogClient;
    use dex_catalog::test_support::{BASE_URL, ScriptedTransport, pikachu_transport};
    use pretty_assertions::assert_eq;

    use super::build;

    const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

    #[tokio::test]
    async fn shows_enriched_detail() {
        let catalog = CatalogClient::with_transport(pikachu_transport(), BASE_URL);

        let view = build(25, &catalog, SPRITES).await.unwrap();

        assert_eq!(view.name, "pikachu");
        assert_eq!(view.category_tags, vec!["electric"]);
        assert_eq!(view.lineage_line(), "pichu (#172) -> pikachu (#25) -> raichu (#26)");
        assert_eq!(view.lineage[2].sprite, format!("{SPRITES}/26.png"));
    }

    #[tokio::test]
    async fn missing_identifier_reports_failed_step() {
        let catalog = CatalogClient::with_transport(ScriptedTransport::new(), BASE_URL);

        let err = build(0, &catalog, SPRITES).await.unwrap_err();
        let message = format!("{err:#}");

        assert!(message.starts_with("no detail available for identifier 0"));
        assert!(message.contains("Failed to fetch Pokemon by ID"));
    }
}
