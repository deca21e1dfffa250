//! Dump schema of the REST API server.

use std::io::Write;

use utoipa::OpenApi as _;

use crate::common::io::std::open_write_or_stdout;
use crate::server::run::openapi::ApiDoc;

/// Command line arguments for `server schema` sub command.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about = "Dump REST API schema", long_about = None)]
pub struct Args {
    /// Path to the output file.  Use stdout if missing.
    #[arg(long)]
    pub output_file: Option<String>,
}

/// Main entry point for `server schema` sub command.
///
/// # Errors
///
/// In the case that the schema could not be converted or written.
pub fn run(args_common: &crate::common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("args_common = {:?}", &args_common);
    tracing::info!("args = {:?}", &args);

    let schema_yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| anyhow::anyhow!("Failed to convert OpenAPI to YAML: {}", e))?;
    let mut output = open_write_or_stdout(args.output_file.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to open output file: {}", e))?;
    write!(output, "{}", &schema_yaml)
        .map_err(|e| anyhow::anyhow!("Failed to write output: {}", e))?;
    output.flush()?;

    tracing::info!("All done. Have a nice day!");
    Ok(())
}
