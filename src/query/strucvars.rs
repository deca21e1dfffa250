//! Queries for structural variants (fusions, intragenic deletions, ...).

use once_cell::sync::Lazy;
use parse_display::{Display, FromStr};
use regex::Regex;

use super::evidence::EvidenceType;
use super::id::{generate_query_structural_variant_id, generate_query_variant_id};
use super::QueryGene;

/// Structural variant type as understood by OncoKB.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
    Display,
    FromStr,
    serde::Deserialize,
    serde::Serialize,
    strum::EnumIter,
    utoipa::ToSchema,
)]
#[display(style = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum StructuralVariantType {
    #[default]
    Deletion,
    Translocation,
    Duplication,
    Insertion,
    Inversion,
    Fusion,
    Unknown,
}

/// Query for the `annotate/structuralVariants` endpoint.
#[serde_with::skip_serializing_none]
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateStructuralVariantQuery {
    /// Query identifier.
    pub id: String,
    /// The 5' gene.
    pub gene_a: QueryGene,
    /// The 3' gene; equal to `gene_a` for intragenic events.
    pub gene_b: QueryGene,
    /// Type of the structural variant.
    pub structural_variant_type: StructuralVariantType,
    /// Whether this is an in-frame, functional fusion.
    pub functional_fusion: bool,
    /// OncoTree tumor type, explicitly `null` when missing.
    #[serialize_always]
    pub tumor_type: Option<String>,
    /// Evidence types to return.
    pub evidence_types: Option<Vec<EvidenceType>>,
}

/// Matches `<gene>-intragenic`, anywhere in the text.
///
/// Gene symbols are ASCII word characters only, also under case folding.
static INTRAGENIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)((?-u:\w)+)-intragenic").expect("invalid intragenic regex")
});

/// Matches `<geneA>-<geneB>` with an optional ` fusion` suffix, anywhere in the text.
static FUSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)((?-u:\w)+)-((?-u:\w)+)(\s+fusion)?").expect("invalid fusion regex")
});

/// Gene symbols and classification derived from the free-text description of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedStructuralVariant {
    gene_a: String,
    gene_b: String,
    sv_type: StructuralVariantType,
    functional_fusion: bool,
}

/// Interpret free text such as `BRAF-intragenic` or `EML4-ALK fusion`.
///
/// Intragenic events are tried first, then fusions; text matching neither is
/// used as both gene symbols of a non-functional fusion.
fn parse_structural_variant(protein_change: &str) -> ParsedStructuralVariant {
    if let Some(caps) = INTRAGENIC_REGEX.captures(protein_change) {
        tracing::trace!("{:?} parsed as intragenic deletion", protein_change);
        return ParsedStructuralVariant {
            gene_a: caps[1].to_string(),
            gene_b: caps[1].to_string(),
            sv_type: StructuralVariantType::Deletion,
            functional_fusion: false,
        };
    }

    if let Some(caps) = FUSION_REGEX.captures(protein_change) {
        tracing::trace!("{:?} parsed as fusion", protein_change);
        return ParsedStructuralVariant {
            gene_a: caps[1].to_string(),
            gene_b: caps[2].to_string(),
            sv_type: StructuralVariantType::Fusion,
            functional_fusion: true,
        };
    }

    tracing::trace!("{:?} used verbatim as gene symbol", protein_change);
    ParsedStructuralVariant {
        gene_a: protein_change.to_string(),
        gene_b: protein_change.to_string(),
        sv_type: StructuralVariantType::Fusion,
        functional_fusion: false,
    }
}

/// Build a structural variant query from the free-text protein change of a single gene.
pub fn generate_annotate_structural_variant_query(
    entrez_gene_id: i32,
    tumor_type: Option<&str>,
    protein_change: &str,
    mutation_type: Option<&str>,
    evidence_types: Option<Vec<EvidenceType>>,
) -> AnnotateStructuralVariantQuery {
    let id = generate_query_variant_id(
        entrez_gene_id,
        tumor_type,
        Some(protein_change),
        mutation_type,
    );
    let parsed = parse_structural_variant(protein_change);

    AnnotateStructuralVariantQuery {
        id,
        gene_a: QueryGene::from_hugo_symbol(parsed.gene_a),
        gene_b: QueryGene::from_hugo_symbol(parsed.gene_b),
        structural_variant_type: parsed.sv_type,
        functional_fusion: parsed.functional_fusion,
        tumor_type: tumor_type.map(str::to_string),
        evidence_types,
    }
}

/// Whether an event between the two sites is an intragenic deletion.
///
/// Intragenic events are usually stored with only one gene, so the second
/// site is either missing or equal to the first one.
pub fn is_intragenic(
    site1_entrez_gene_id: i32,
    site2_entrez_gene_id: Option<i32>,
    structural_variant_type: StructuralVariantType,
) -> bool {
    structural_variant_type == StructuralVariantType::Deletion
        && site2_entrez_gene_id.map_or(true, |site2| site2 == site1_entrez_gene_id)
}

/// Build a structural variant query from the two genes involved.
///
/// Everything but an intragenic deletion is treated as a functional fusion.
pub fn generate_annotate_structural_variant_query_from_genes(
    site1_entrez_gene_id: i32,
    site2_entrez_gene_id: Option<i32>,
    tumor_type: Option<&str>,
    structural_variant_type: StructuralVariantType,
    evidence_types: Option<Vec<EvidenceType>>,
) -> AnnotateStructuralVariantQuery {
    let intragenic = is_intragenic(
        site1_entrez_gene_id,
        site2_entrez_gene_id,
        structural_variant_type,
    );
    let gene_b = if intragenic {
        QueryGene::from_entrez_gene_id(site1_entrez_gene_id)
    } else {
        QueryGene {
            entrez_gene_id: site2_entrez_gene_id,
            hugo_symbol: None,
        }
    };

    AnnotateStructuralVariantQuery {
        id: generate_query_structural_variant_id(
            site1_entrez_gene_id,
            site2_entrez_gene_id,
            tumor_type,
            structural_variant_type,
        ),
        gene_a: QueryGene::from_entrez_gene_id(site1_entrez_gene_id),
        gene_b,
        structural_variant_type,
        functional_fusion: !intragenic,
        tumor_type: tumor_type.map(str::to_string),
        evidence_types,
    }
}
