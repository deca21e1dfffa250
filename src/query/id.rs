//! Generation of query identifiers.
//!
//! The identifiers double as lookup keys for the responses, so their format
//! must stay stable.  In particular, absent optional components are simply
//! left out (two queries differing only in an absent component collide) and a
//! missing second site of a structural variant is rendered as `undefined`.

use super::{non_empty, StructuralVariantType};

/// Trim the identifier and replace all remaining whitespace by underscores.
fn normalize(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Generate the identifier of a single-gene variant query.
///
/// The result is `{entrez_gene_id}[_{tumor_type}][_{alteration}][_{mutation_type}]`
/// where missing or empty components are omitted.
pub fn generate_query_variant_id(
    entrez_gene_id: i32,
    tumor_type: Option<&str>,
    alteration: Option<&str>,
    mutation_type: Option<&str>,
) -> String {
    let mut id = entrez_gene_id.to_string();
    for part in [tumor_type, alteration, mutation_type]
        .into_iter()
        .filter_map(non_empty)
    {
        id.push('_');
        id.push_str(part);
    }

    normalize(&id)
}

/// Generate the identifier of a structural variant query built from two genes.
///
/// The result is `{site1}_{site2}_{sv_type}[_{tumor_type}]`; a missing `site2`
/// is written as `undefined`.
pub fn generate_query_structural_variant_id(
    site1_entrez_gene_id: i32,
    site2_entrez_gene_id: Option<i32>,
    tumor_type: Option<&str>,
    structural_variant_type: StructuralVariantType,
) -> String {
    let site2 = site2_entrez_gene_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| String::from("undefined"));
    let mut id = format!(
        "{}_{}_{}",
        site1_entrez_gene_id, site2, structural_variant_type
    );
    if let Some(tumor_type) = non_empty(tumor_type) {
        id.push('_');
        id.push_str(tumor_type);
    }

    normalize(&id)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[rstest::rstest]
    #[case(None, None, None, "1")]
    #[case(Some("LUAD"), None, None, "1_LUAD")]
    #[case(Some("LUAD"), Some("V600E"), None, "1_LUAD_V600E")]
    #[case(Some("LUAD"), Some("V600E"), Some("missense"), "1_LUAD_V600E_missense")]
    #[case(None, Some("V600E"), Some("missense"), "1_V600E_missense")]
    #[case(Some(""), Some("V600E"), Some(""), "1_V600E")]
    #[case(Some("lung cancer"), None, None, "1_lung_cancer")]
    #[case(Some("lung\tcancer"), Some("  V600E "), None, "1_lung_cancer___V600E")]
    fn query_variant_id(
        #[case] tumor_type: Option<&str>,
        #[case] alteration: Option<&str>,
        #[case] mutation_type: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            generate_query_variant_id(1, tumor_type, alteration, mutation_type),
            expected
        );
    }

    #[test]
    fn query_variant_id_trims_trailing_whitespace() {
        assert_eq!(
            generate_query_variant_id(7157, Some("BRCA"), Some("R273H "), None),
            "7157_BRCA_R273H"
        );
    }

    #[test]
    fn query_variant_id_collides_on_omitted_fields() {
        // Tumor type and alteration are indistinguishable once concatenated.
        assert_eq!(
            generate_query_variant_id(1, Some("X"), None, None),
            generate_query_variant_id(1, None, Some("X"), None),
        );
    }

    #[rstest::rstest]
    #[case(1, Some(2), None, StructuralVariantType::Fusion, "1_2_FUSION")]
    #[case(1, None, None, StructuralVariantType::Deletion, "1_undefined_DELETION")]
    #[case(
        1,
        Some(1),
        Some("Lung Adenocarcinoma"),
        StructuralVariantType::Deletion,
        "1_1_DELETION_Lung_Adenocarcinoma"
    )]
    #[case(5, Some(6), Some(""), StructuralVariantType::Translocation, "5_6_TRANSLOCATION")]
    fn query_structural_variant_id(
        #[case] site1: i32,
        #[case] site2: Option<i32>,
        #[case] tumor_type: Option<&str>,
        #[case] sv_type: StructuralVariantType,
        #[case] expected: &str,
    ) {
        assert_eq!(
            generate_query_structural_variant_id(site1, site2, tumor_type, sv_type),
            expected
        );
    }

    #[test]
    fn query_structural_variant_id_is_space_free() {
        use strum::IntoEnumIterator;

        for sv_type in StructuralVariantType::iter() {
            for site2 in [None, Some(1), Some(-3)] {
                let id = generate_query_structural_variant_id(
                    1,
                    site2,
                    Some(" breast  cancer "),
                    sv_type,
                );
                assert_eq!(id, id.trim());
                assert!(!id.contains(char::is_whitespace), "{}", id);
            }
        }
    }
}
