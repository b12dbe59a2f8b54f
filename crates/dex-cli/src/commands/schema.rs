use anyhow::bail;
use dex_core::schema::{SCHEMA_NAMES, schema_for_name};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `dex schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(type_name) = args.type_name.as_deref() else {
        return output(&SCHEMA_NAMES, flags.format);
    };

    let Some(schema) = schema_for_name(type_name) else {
        bail!(
            "unknown schema type '{type_name}' (available: {})",
            SCHEMA_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}
