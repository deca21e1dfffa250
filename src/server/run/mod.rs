/// Implementation of Actix server.
pub mod actix_server;

/// Module with OpenAPI documentation.
pub mod openapi {
    use crate::indicator::{
        IndicatorQuery, IndicatorQueryResp, MutationEffect, OncoKbCardDataType,
    };
    use crate::query::evidence::{EvidenceType, LevelOfEvidence, PartialEvidenceQuery};
    use crate::query::seqvars::{AnnotateMutationByProteinChangeQuery, QueryVariant};
    use crate::query::{
        AnnotateCopyNumberAlterationQuery, AnnotateStructuralVariantQuery, QueryGene,
        StructuralVariantType,
    };
    use crate::server::run::actix_server::cnv::CopyNumberAlterationQuery;
    use crate::server::run::actix_server::indicator::{AvailableDataTypesResponse, EvidenceQuery};
    use crate::server::run::actix_server::seqvars::{
        ProteinChangeQuery, VariantIdQuery, VariantQuery,
    };
    use crate::server::run::actix_server::strucvars::{
        StructuralVariantFromGenesQuery, StructuralVariantIdQuery, StructuralVariantQuery,
    };
    use crate::server::run::actix_server::versions::{SoftwareVersions, VersionsInfoResponse};

    use super::actix_server::{
        cnv, indicator, seqvars, strucvars, versions, CustomError, QueryIdResponse,
    };

    /// Utoipa-based `OpenAPI` generation helper.
    #[derive(utoipa::OpenApi)]
    #[openapi(
        paths(
            versions::handle,
            seqvars::handle_variant_id,
            seqvars::handle_variant,
            seqvars::handle_protein_change,
            cnv::handle,
            strucvars::handle_structural_variant_id,
            strucvars::handle_structural_variant,
            strucvars::handle_structural_variant_from_genes,
            indicator::handle_evidence,
            indicator::handle_available_data_types,
        ),
        components(schemas(
            CustomError,
            QueryIdResponse,
            VersionsInfoResponse,
            SoftwareVersions,
            QueryGene,
            EvidenceType,
            LevelOfEvidence,
            PartialEvidenceQuery,
            StructuralVariantType,
            QueryVariant,
            AnnotateMutationByProteinChangeQuery,
            AnnotateCopyNumberAlterationQuery,
            AnnotateStructuralVariantQuery,
            IndicatorQuery,
            IndicatorQueryResp,
            MutationEffect,
            OncoKbCardDataType,
            AvailableDataTypesResponse,
            VariantIdQuery,
            VariantQuery,
            ProteinChangeQuery,
            CopyNumberAlterationQuery,
            StructuralVariantIdQuery,
            StructuralVariantQuery,
            StructuralVariantFromGenesQuery,
            EvidenceQuery,
        ))
    )]
    pub struct ApiDoc;
}

/// Command line arguments for `server run` sub command.
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Run OncoKB query REST API server", long_about = None)]
pub struct Args {
    /// Whether to suppress printing hints.
    #[arg(long, default_value_t = false)]
    pub suppress_hints: bool,

    /// IP to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    pub listen_host: String,
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    pub listen_port: u16,
}

/// Example endpoint calls, relative to `/api/v1/`.
const EXAMPLES: &[&str] = &[
    "query/variantId?entrez_gene_id=673&tumor_type=MEL&alteration=V600E",
    "query/proteinChange?entrez_gene_id=673&alteration=V600E&protein_start=600&protein_end=600",
    "query/copyNumberAlteration?entrez_gene_id=2064&tumor_type=BRCA&alteration=Amplification",
    "query/structuralVariant?entrez_gene_id=238&tumor_type=NSCLC&protein_change=EML4-ALK%20fusion",
    "query/structuralVariantFromGenes?site1_entrez_gene_id=27436&site2_entrez_gene_id=238&sv_type=FUSION",
    "query/evidence",
    "versionsInfo",
];

/// Print some hints via `tracing::info!`.
fn print_hints(args: &Args) {
    tracing::info!(
        "Launching server main on http://{}:{} ...",
        args.listen_host.as_str(),
        args.listen_port
    );

    // Short-circuit if no hints are to be
    if args.suppress_hints {
        return;
    }

    let prefix = format!(
        "try: http://{host}:{port}/api/v1/",
        host = args.listen_host,
        port = args.listen_port
    );
    for example in EXAMPLES {
        tracing::info!("{}{}", prefix, example);
    }
    tracing::info!(
        "docs: http://{}:{}/swagger-ui/",
        args.listen_host.as_str(),
        args.listen_port
    );
}

/// Main entry point for `server run` sub command.
///
/// # Errors
///
/// In the case that there is an error running the server.
pub async fn run(args_common: &crate::common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("args_common = {:?}", &args_common);
    tracing::info!("args = {:?}", &args);

    // Print the server URL and some hints (the latter: unless suppressed).
    print_hints(args);
    // Launch the Actix web server.
    actix_server::main(args).await?;

    tracing::info!("All done. Have a nice day!");
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser as _;
    use pretty_assertions::assert_eq;
    use utoipa::OpenApi as _;

    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["run"]);

        assert_eq!(args.listen_host, "127.0.0.1");
        assert_eq!(args.listen_port, 8080);
        assert!(!args.suppress_hints);
    }

    #[test]
    fn openapi_lists_all_paths() {
        let api = openapi::ApiDoc::openapi();
        let mut paths = api.paths.paths.keys().cloned().collect::<Vec<_>>();
        paths.sort();

        assert_eq!(
            paths,
            vec![
                "/api/v1/indicator/availableDataTypes",
                "/api/v1/query/copyNumberAlteration",
                "/api/v1/query/evidence",
                "/api/v1/query/proteinChange",
                "/api/v1/query/structuralVariant",
                "/api/v1/query/structuralVariantFromGenes",
                "/api/v1/query/structuralVariantId",
                "/api/v1/query/variant",
                "/api/v1/query/variantId",
                "/api/v1/versionsInfo",
            ]
        );
    }

    #[test]
    fn openapi_errors_are_bad_request() {
        let api = openapi::ApiDoc::openapi();
        for (path, item) in &api.paths.paths {
            for operation in [&item.get, &item.post].into_iter().flatten() {
                let mut statuses = operation
                    .responses
                    .responses
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>();
                statuses.sort();

                assert_eq!(statuses, vec!["200", "400"], "path {}", path);
            }
        }
    }
}
