//! Queries for copy number alterations.

use super::evidence::EvidenceType;
use super::id::generate_query_variant_id;
use super::QueryGene;

/// Query for the `annotate/copyNumberAlterations` endpoint.
#[serde_with::skip_serializing_none]
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateCopyNumberAlterationQuery {
    /// Query identifier.
    pub id: String,
    /// Upper-case copy number alteration, e.g., `AMPLIFICATION`.
    ///
    /// The misspelling is part of the OncoKB API.
    pub copy_name_alteration_type: String,
    /// The affected gene.
    pub gene: QueryGene,
    /// OncoTree tumor type, explicitly `null` when missing.
    #[serialize_always]
    pub tumor_type: Option<String>,
    /// Evidence types to return.
    pub evidence_types: Option<Vec<EvidenceType>>,
}

/// Build a query for annotating a copy number alteration.
pub fn generate_copy_number_alteration_query(
    entrez_gene_id: i32,
    tumor_type: Option<&str>,
    alteration: &str,
    evidence_types: Option<Vec<EvidenceType>>,
) -> AnnotateCopyNumberAlterationQuery {
    AnnotateCopyNumberAlterationQuery {
        id: generate_query_variant_id(entrez_gene_id, tumor_type, Some(alteration), None),
        copy_name_alteration_type: alteration.to_uppercase(),
        gene: QueryGene::from_entrez_gene_id(entrez_gene_id),
        tumor_type: tumor_type.map(str::to_string),
        evidence_types,
    }
}
