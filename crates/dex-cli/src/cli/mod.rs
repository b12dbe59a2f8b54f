use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dex` binary.
#[derive(Debug, Parser)]
#[command(name = "dex", version, about = "dex - species catalog browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dex", "--format", "table", "--verbose", "count"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Count));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dex", "list", "--page", "3", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::List(args) => assert_eq!(args.page, Some(3)),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["dex", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["dex", "search", "pika", "--page", "0"]).is_err());
    }

    #[test]
    fn show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["dex", "show", "pikachu"]).is_err());
        let cli = Cli::try_parse_from(["dex", "show", "25"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Show(ref args) if args.id == 25));
    }

    #[test]
    fn search_keeps_raw_query() {
        let cli = Cli::try_parse_from(["dex", "search", " PIKA "]).expect("cli should parse");
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, " PIKA ");
                assert_eq!(args.page, None);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dex", "--format", "xml", "count"]).is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["dex", "count"]).expect("cli should parse");
        assert_eq!(cli.global_flags().color, ColorMode::Auto);
    }
}
