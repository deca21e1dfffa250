//! Implementation of `/api/v1/query/copyNumberAlteration` endpoint.

use actix_web::{
    get,
    web::{self, Json},
};

use crate::query::{generate_copy_number_alteration_query, AnnotateCopyNumberAlterationQuery};

use super::{evidence_types_param, CustomError};

/// Query parameters of the `/api/v1/query/copyNumberAlteration` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct CopyNumberAlterationQuery {
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Copy number alteration, e.g., `Amplification`.
    pub alteration: String,
    /// Comma-separated evidence types.
    pub evidence_types: Option<String>,
}

/// Build a query for annotating a copy number alteration.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryCopyNumberAlteration",
    params(CopyNumberAlterationQuery),
    responses(
        (status = 200, description = "Copy number alteration query.", body = AnnotateCopyNumberAlterationQuery),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/copyNumberAlteration")]
async fn handle(
    query: web::Query<CopyNumberAlterationQuery>,
) -> actix_web::Result<Json<AnnotateCopyNumberAlterationQuery>, CustomError> {
    if query.alteration.is_empty() {
        return Err(CustomError::new(anyhow::anyhow!(
            "alteration must not be empty"
        )));
    }
    let evidence_types = evidence_types_param(query.evidence_types.as_deref())?;
    Ok(Json(generate_copy_number_alteration_query(
        query.entrez_gene_id,
        query.tumor_type.as_deref(),
        &query.alteration,
        evidence_types,
    )))
}
