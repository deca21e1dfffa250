//! Queries for sequence variants (mutations).

use parse_display::{Display, FromStr};

use super::evidence::EvidenceType;
use super::id::generate_query_variant_id;
use super::strucvars::StructuralVariantType;
use super::{non_empty, QueryGene};

/// Alteration types set by the query builders.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Display, FromStr)]
pub enum AlterationType {
    #[default]
    #[display("Mutation")]
    Mutation,
    #[display("structural_variant")]
    StructuralVariant,
}

/// Whether the alteration text describes an intragenic event.
pub fn is_intragenic_alteration(alteration: &str) -> bool {
    alteration.to_lowercase().contains("intragenic")
}

/// Query in the format of the legacy OncoKB `Query` model.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariant {
    /// Query identifier.
    pub id: String,
    /// HGNC symbol, always empty as the gene is given by `entrez_gene_id`.
    pub hugo_symbol: String,
    /// OncoTree tumor type, `null` if unknown.
    pub tumor_type: Option<String>,
    /// Alteration type, e.g., `Mutation`.
    pub alteration_type: String,
    /// Entrez gene ID.
    pub entrez_gene_id: i32,
    /// Alteration, e.g., `V600E`.
    pub alteration: String,
    /// Consequence, `any` if unknown.
    pub consequence: String,
    /// Protein start position, `-1` if unknown.
    pub protein_start: i32,
    /// Protein end position, `-1` if unknown.
    pub protein_end: i32,
    /// Query type, always `web`.
    #[serde(rename = "type")]
    pub query_type: String,
    /// HGVS description, always empty.
    pub hgvs: String,
    /// Structural variant type; required by the model even for mutations.
    pub sv_type: StructuralVariantType,
}

/// Build a legacy variant query.
///
/// Alterations mentioning `intragenic` are turned into structural variant
/// deletions, whatever `alteration_type` was given.
pub fn generate_query_variant(
    entrez_gene_id: i32,
    tumor_type: Option<&str>,
    alteration: Option<&str>,
    mutation_type: Option<&str>,
    protein_pos_start: Option<i32>,
    protein_pos_end: Option<i32>,
    alteration_type: Option<&str>,
) -> QueryVariant {
    let mut query = QueryVariant {
        id: generate_query_variant_id(entrez_gene_id, tumor_type, alteration, mutation_type),
        hugo_symbol: String::new(),
        tumor_type: tumor_type.map(str::to_string),
        alteration_type: non_empty(alteration_type)
            .map(str::to_string)
            .unwrap_or_else(|| AlterationType::Mutation.to_string()),
        entrez_gene_id,
        alteration: alteration.unwrap_or_default().to_string(),
        consequence: non_empty(mutation_type).unwrap_or("any").to_string(),
        protein_start: protein_pos_start.unwrap_or(-1),
        protein_end: protein_pos_end.unwrap_or(-1),
        query_type: String::from("web"),
        hgvs: String::new(),
        sv_type: StructuralVariantType::Deletion,
    };

    if is_intragenic_alteration(&query.alteration) {
        tracing::trace!(
            "reclassifying {:?} as structural variant",
            &query.alteration
        );
        query.alteration_type = AlterationType::StructuralVariant.to_string();
        query.sv_type = StructuralVariantType::Deletion;
        query.consequence = String::new();
    }

    query
}

/// Query for the `annotate/mutations/byProteinChange` endpoint.
#[serde_with::skip_serializing_none]
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateMutationByProteinChangeQuery {
    /// Query identifier.
    pub id: String,
    /// Protein change, e.g., `V600E`.
    pub alteration: Option<String>,
    /// Consequence, e.g., `missense_variant`.
    pub consequence: Option<String>,
    /// The affected gene.
    pub gene: QueryGene,
    /// Protein end position.
    pub protein_end: Option<i32>,
    /// Protein start position.
    pub protein_start: Option<i32>,
    /// OncoTree tumor type, explicitly `null` when missing.
    #[serialize_always]
    pub tumor_type: Option<String>,
    /// Evidence types to return.
    pub evidence_types: Option<Vec<EvidenceType>>,
}

/// Build a query for annotating a mutation by its protein change.
pub fn generate_protein_change_query(
    entrez_gene_id: i32,
    tumor_type: Option<&str>,
    alteration: Option<&str>,
    mutation_type: Option<&str>,
    protein_pos_start: Option<i32>,
    protein_pos_end: Option<i32>,
    evidence_types: Option<Vec<EvidenceType>>,
) -> AnnotateMutationByProteinChangeQuery {
    AnnotateMutationByProteinChangeQuery {
        id: generate_query_variant_id(entrez_gene_id, tumor_type, alteration, mutation_type),
        alteration: alteration.map(str::to_string),
        consequence: mutation_type.map(str::to_string),
        gene: QueryGene::from_entrez_gene_id(entrez_gene_id),
        protein_end: protein_pos_end,
        protein_start: protein_pos_start,
        tumor_type: tumor_type.map(str::to_string),
        evidence_types,
    }
}
