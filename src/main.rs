//! Main entry point for the `oncokb-query` CLI.

use clap::{Args, Parser, Subcommand};

use oncokb_query::{annotate, common, server};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Construction of OncoKB annotation queries",
    long_about = "Build the queries sent to the OncoKB annotation endpoints and summarize \
    the responses.  Queries can be built in batch from TSV files or served via a REST API."
)]
struct Cli {
    /// Commonly used arguments
    #[command(flatten)]
    common: common::Args,

    /// The sub command to run
    #[command(subcommand)]
    command: Commands,
}

/// Enum supporting the parsing of top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Annotation-related commands.
    Annotate(Annotate),
    /// Server-related commands.
    Server(Server),
}

/// Parsing of "annotate *" sub commands.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
struct Annotate {
    /// The sub command to run
    #[command(subcommand)]
    command: AnnotateCommands,
}

/// Enum supporting the parsing of "annotate *" sub commands.
#[derive(Debug, Subcommand)]
enum AnnotateCommands {
    Queries(annotate::queries::Args),
    Indicator(annotate::indicator::Args),
}

/// Parsing of "server *" sub commands.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
struct Server {
    /// The sub command to run
    #[command(subcommand)]
    command: ServerCommands,
}

/// Enum supporting the parsing of "server *" sub commands.
#[derive(Debug, Subcommand)]
enum ServerCommands {
    Run(server::run::Args),
    Schema(server::schema::Args),
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Build a tracing subscriber according to the configuration in `cli.common`.
    let collector = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(cli.common.tracing_level())
        .compact()
        .finish();

    // Install collector and go into sub commands.
    tracing::subscriber::with_default(collector, || {
        tracing::info!("oncokb-query {} startup", common::version());

        match &cli.command {
            Commands::Annotate(annotate) => match &annotate.command {
                AnnotateCommands::Queries(args) => annotate::queries::run(&cli.common, args)?,
                AnnotateCommands::Indicator(args) => {
                    annotate::indicator::run(&cli.common, args)?
                }
            },
            Commands::Server(server) => match &server.command {
                ServerCommands::Run(args) => actix_web::rt::System::new()
                    .block_on(server::run::run(&cli.common, args))?,
                ServerCommands::Schema(args) => server::schema::run(&cli.common, args)?,
            },
        }

        tracing::info!("All done. Have a nice day!");

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[rstest::rstest]
    #[case(&["oncokb-query", "annotate", "queries", "--path-input-tsv", "in.tsv", "--path-output-json", "out.json"])]
    #[case(&["oncokb-query", "-v", "annotate", "indicator", "--path-input-json", "in.json"])]
    #[case(&["oncokb-query", "server", "run", "--listen-port", "8081"])]
    #[case(&["oncokb-query", "server", "schema"])]
    fn parse_commands(#[case] argv: &[&str]) -> Result<(), anyhow::Error> {
        Cli::try_parse_from(argv)?;

        Ok(())
    }
}
