//! Actix web server exposing the query builders.

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use utoipa::OpenApi as _;

use crate::query::evidence::{parse_evidence_types, EvidenceType};

pub mod cnv;
pub mod indicator;
pub mod seqvars;
pub mod strucvars;
pub mod versions;

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct CustomError {
    err: String,
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.err)
    }
}

impl CustomError {
    fn new(err: anyhow::Error) -> Self {
        CustomError {
            err: err.to_string(),
        }
    }
}

impl std::error::Error for CustomError {}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Parse the optional comma-separated `evidence_types` query parameter.
///
/// A missing or empty list yields `None` so that OncoKB returns all evidence.
fn evidence_types_param(value: Option<&str>) -> Result<Option<Vec<EvidenceType>>, CustomError> {
    match value {
        None => Ok(None),
        Some(value) => {
            let evidence_types = parse_evidence_types(value).map_err(CustomError::new)?;
            Ok(Some(evidence_types).filter(|types| !types.is_empty()))
        }
    }
}

/// Identifier of a query.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct QueryIdResponse {
    /// The query identifier.
    pub id: String,
}

/// Register all endpoints with the given service config.
///
/// Malformed query strings and JSON bodies are reported as `CustomError`, too.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|e, _| {
        CustomError::new(anyhow::anyhow!("{}", e)).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|e, _| {
        CustomError::new(anyhow::anyhow!("{}", e)).into()
    }));

    cfg.service(seqvars::handle_variant_id)
        .service(seqvars::handle_variant)
        .service(seqvars::handle_protein_change)
        .service(cnv::handle)
        .service(strucvars::handle_structural_variant_id)
        .service(strucvars::handle_structural_variant)
        .service(strucvars::handle_structural_variant_from_genes)
        .service(indicator::handle_evidence)
        .service(indicator::handle_available_data_types)
        .service(versions::handle);
}

/// Main entry point for running the REST server.
#[allow(clippy::unused_async)]
pub async fn main(args: &super::Args) -> std::io::Result<()> {
    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .configure(configure)
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", super::openapi::ApiDoc::openapi()),
            )
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((args.listen_host.as_str(), args.listen_port))?
    .run()
    .await
}
