//! Implementation of the endpoints for structural variant queries.

use actix_web::{
    get,
    web::{self, Json},
};

use crate::query::{
    generate_annotate_structural_variant_query,
    generate_annotate_structural_variant_query_from_genes, generate_query_structural_variant_id,
    AnnotateStructuralVariantQuery, StructuralVariantType,
};

use super::{evidence_types_param, CustomError, QueryIdResponse};

/// Query parameters of the `/api/v1/query/structuralVariantId` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct StructuralVariantIdQuery {
    /// Entrez gene ID of the first site.
    pub site1_entrez_gene_id: i32,
    /// Entrez gene ID of the second site.
    pub site2_entrez_gene_id: Option<i32>,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Structural variant type.
    pub sv_type: StructuralVariantType,
}

/// Compute the identifier of a structural variant query.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryStructuralVariantId",
    params(StructuralVariantIdQuery),
    responses(
        (status = 200, description = "Query identifier.", body = QueryIdResponse),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/structuralVariantId")]
async fn handle_structural_variant_id(
    query: web::Query<StructuralVariantIdQuery>,
) -> actix_web::Result<Json<QueryIdResponse>, CustomError> {
    Ok(Json(QueryIdResponse {
        id: generate_query_structural_variant_id(
            query.site1_entrez_gene_id,
            query.site2_entrez_gene_id,
            query.tumor_type.as_deref(),
            query.sv_type,
        ),
    }))
}

/// Query parameters of the `/api/v1/query/structuralVariant` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct StructuralVariantQuery {
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Free-text protein change, e.g., `EML4-ALK fusion`.
    pub protein_change: String,
    /// Mutation type / consequence.
    pub mutation_type: Option<String>,
    /// Comma-separated evidence types.
    pub evidence_types: Option<String>,
}

/// Build a structural variant query from a free-text protein change.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryStructuralVariant",
    params(StructuralVariantQuery),
    responses(
        (status = 200, description = "Structural variant query.", body = AnnotateStructuralVariantQuery),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/structuralVariant")]
async fn handle_structural_variant(
    query: web::Query<StructuralVariantQuery>,
) -> actix_web::Result<Json<AnnotateStructuralVariantQuery>, CustomError> {
    let evidence_types = evidence_types_param(query.evidence_types.as_deref())?;
    Ok(Json(generate_annotate_structural_variant_query(
        query.entrez_gene_id,
        query.tumor_type.as_deref(),
        &query.protein_change,
        query.mutation_type.as_deref(),
        evidence_types,
    )))
}

/// Query parameters of the `/api/v1/query/structuralVariantFromGenes` endpoint.
#[derive(
    Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub struct StructuralVariantFromGenesQuery {
    /// Entrez gene ID of the first site.
    pub site1_entrez_gene_id: i32,
    /// Entrez gene ID of the second site.
    pub site2_entrez_gene_id: Option<i32>,
    /// OncoTree tumor type.
    pub tumor_type: Option<String>,
    /// Structural variant type.
    pub sv_type: StructuralVariantType,
    /// Comma-separated evidence types.
    pub evidence_types: Option<String>,
}

/// Build a structural variant query from the two genes involved.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    operation_id = "queryStructuralVariantFromGenes",
    params(StructuralVariantFromGenesQuery),
    responses(
        (status = 200, description = "Structural variant query.", body = AnnotateStructuralVariantQuery),
        (status = 400, description = "Invalid query.", body = CustomError)
    )
)]
#[get("/api/v1/query/structuralVariantFromGenes")]
async fn handle_structural_variant_from_genes(
    query: web::Query<StructuralVariantFromGenesQuery>,
) -> actix_web::Result<Json<AnnotateStructuralVariantQuery>, CustomError> {
    let evidence_types = evidence_types_param(query.evidence_types.as_deref())?;
    Ok(Json(generate_annotate_structural_variant_query_from_genes(
        query.site1_entrez_gene_id,
        query.site2_entrez_gene_id,
        query.tumor_type.as_deref(),
        query.sv_type,
        evidence_types,
    )))
}
