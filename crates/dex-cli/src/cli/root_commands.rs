use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse one page of the catalog.
    List(ListArgs),
    /// Total number of species in the catalog.
    Count,
    /// Look up one record by identifier, with types and evolution line.
    Show(ShowArgs),
    /// Search by number (identifier lookup) or by name (filters the loaded page).
    Search(SearchArgs),
    /// Dump the JSON schema for a record type.
    Schema(SchemaArgs),
}

/// Arguments for `dex list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 1 (defaults to `general.default_page`).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
}

/// Arguments for `dex show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Record identifier (e.g. 25).
    pub id: u32,
}

/// Arguments for `dex search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search input: digits look up an identifier, anything else filters names.
    pub query: String,
    /// Page whose records a name search filters (defaults to `general.default_page`).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
}

/// Arguments for `dex schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `enriched_detail`. Omit to list available names.
    pub type_name: Option<String>,
}
