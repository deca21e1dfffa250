//! Construction of OncoKB annotation queries.
//!
//! All builders in this module are pure functions of their arguments.  The
//! identifiers they generate can be recomputed from the inputs alone, which is
//! what allows matching OncoKB responses back to the rows that requested them
//! (see [`crate::indicator::generate_id_to_indicator_map`]).

pub mod cnv;
pub mod evidence;
pub mod id;
pub mod seqvars;
pub mod strucvars;

pub use cnv::{generate_copy_number_alteration_query, AnnotateCopyNumberAlterationQuery};
pub use evidence::{generate_partial_evidence_query, EvidenceType, LevelOfEvidence};
pub use id::{generate_query_structural_variant_id, generate_query_variant_id};
pub use seqvars::{
    generate_protein_change_query, generate_query_variant, AnnotateMutationByProteinChangeQuery,
    QueryVariant,
};
pub use strucvars::{
    generate_annotate_structural_variant_query,
    generate_annotate_structural_variant_query_from_genes, AnnotateStructuralVariantQuery,
    StructuralVariantType,
};

/// Gene reference as used in the OncoKB annotate endpoints.
///
/// OncoKB accepts either the Entrez gene ID or the HGNC symbol.
#[serde_with::skip_serializing_none]
#[derive(
    Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct QueryGene {
    /// Entrez gene ID.
    pub entrez_gene_id: Option<i32>,
    /// HGNC gene symbol.
    pub hugo_symbol: Option<String>,
}

impl QueryGene {
    /// Reference a gene by its Entrez ID.
    pub fn from_entrez_gene_id(entrez_gene_id: i32) -> Self {
        Self {
            entrez_gene_id: Some(entrez_gene_id),
            hugo_symbol: None,
        }
    }

    /// Reference a gene by its HGNC symbol.
    pub fn from_hugo_symbol<S: Into<String>>(hugo_symbol: S) -> Self {
        Self {
            entrez_gene_id: None,
            hugo_symbol: Some(hugo_symbol.into()),
        }
    }
}

/// Returns the value unless it is missing or empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
