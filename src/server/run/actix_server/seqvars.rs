//! Implementation of the endpoints for sequence variant queries.
//!
//! - `/api/v1/query/variantId`
//! - `/api/v1/query/variant`
//! - `/api/v1/query/proteinChange`

use actix_web::{
    get,
    web::{self, Json},
};

use crate::query::{
    generate_protein_change_query, generate_query_variant, generate_query_variant_id,
    AnnotateMutationByProteinChangeQuery, QueryVariant,
};

use super::{evidence_types_param, CustomError, QueryIdResponse};

/// Query parameters of the `/api/v1/query/variantId` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct VariantIdQuery {
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Alteration, e.g., `V600E`.
    pub alteration: Option<String>,
    /// Mutation type / consequence.
    pub mutation_type: Option<String>,
}

/// Compute the identifier of a variant query.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryVariantId",
    params(VariantIdQuery),
    responses(
        (status = 200, description = "Query identifier.", body = QueryIdResponse),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/variantId")]
async fn handle_variant_id(
    query: web::Query<VariantIdQuery>,
) -> actix_web::Result<Json<QueryIdResponse>, CustomError> {
    Ok(Json(QueryIdResponse {
        id: generate_query_variant_id(
            query.entrez_gene_id,
            query.tumor_type.as_deref(),
            query.alteration.as_deref(),
            query.mutation_type.as_deref(),
        ),
    }))
}

/// Query parameters of the `/api/v1/query/variant` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct VariantQuery {
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Alteration, e.g., `V600E`.
    pub alteration: Option<String>,
    /// Mutation type / consequence.
    pub mutation_type: Option<String>,
    /// Protein start position.
    pub protein_start: Option<i32>,
    /// Protein end position.
    pub protein_end: Option<i32>,
    /// Alteration type, defaults to `Mutation`.
    pub alteration_type: Option<String>,
}

/// Build a legacy variant query.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryVariant",
    params(VariantQuery),
    responses(
        (status = 200, description = "Legacy variant query.", body = QueryVariant),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/variant")]
async fn handle_variant(
    query: web::Query<VariantQuery>,
) -> actix_web::Result<Json<QueryVariant>, CustomError> {
    Ok(Json(generate_query_variant(
        query.entrez_gene_id,
        query.tumor_type.as_deref(),
        query.alteration.as_deref(),
        query.mutation_type.as_deref(),
        query.protein_start,
        query.protein_end,
        query.alteration_type.as_deref(),
    )))
}

/// Query parameters of the `/api/v1/query/proteinChange` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct ProteinChangeQuery {
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Protein change, e.g., `V600E`.
    pub alteration: Option<String>,
    /// Mutation type / consequence.
    pub mutation_type: Option<String>,
    /// Protein start position.
    pub protein_start: Option<i32>,
    /// Protein end position.
    pub protein_end: Option<i32>,
    /// Comma-separated evidence types.
    pub evidence_types: Option<String>,
}

/// Build a query for annotating a mutation by protein change.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryProteinChange",
    params(ProteinChangeQuery),
    responses(
        (status = 200, description = "Protein change query.", body = AnnotateMutationByProteinChangeQuery),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/proteinChange")]
async fn handle_protein_change(
    query: web::Query<ProteinChangeQuery>,
) -> actix_web::Result<Json<AnnotateMutationByProteinChangeQuery>, CustomError> {
    let evidence_types = evidence_types_param(query.evidence_types.as_deref())?;
    Ok(Json(generate_protein_change_query(
        query.entrez_gene_id,
        query.tumor_type.as_deref(),
        query.alteration.as_deref(),
        query.mutation_type.as_deref(),
        query.protein_start,
        query.protein_end,
        evidence_types,
    )))
}
