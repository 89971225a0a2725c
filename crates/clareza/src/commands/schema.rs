//! Schema command: JSON Schema of the score report.

use clap::Args;
use clareza_core::ReadabilityReport;
use tracing::{debug, instrument};

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Render the JSON Schema for [`ReadabilityReport`].
pub fn report_schema(compact: bool) -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ReadabilityReport);
    let rendered = if compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    Ok(rendered)
}

/// Print the report schema to stdout.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(compact = args.compact, "executing schema command");
    println!("{}", report_schema(args.compact)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_report_fields() {
        let schema: serde_json::Value = serde_json::from_str(&report_schema(false).unwrap()).unwrap();
        assert_eq!(schema["title"], "ReadabilityReport");
        let props = &schema["properties"];
        assert!(props.get("score").is_some());
        assert!(props.get("items").is_some());
        assert!(props.get("totals").is_some());
    }

    #[test]
    fn compact_is_single_line() {
        assert!(!report_schema(true).unwrap().contains('\n'));
    }
}
