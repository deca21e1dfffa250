//! Handling of OncoKB indicator responses.
//!
//! Only the subset of the `IndicatorQueryResp` model that is needed for
//! matching responses to queries and for deciding which annotation cards to
//! show is modelled here.  Unknown fields are ignored on reading.

use indexmap::{IndexMap, IndexSet};
use parse_display::{Display, FromStr};

/// The query as echoed back by OncoKB.
#[serde_with::skip_serializing_none]
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorQuery {
    /// Identifier of the original query.
    pub id: String,
    pub alteration: Option<String>,
    pub alteration_type: Option<String>,
    pub consequence: Option<String>,
    pub entrez_gene_id: Option<i32>,
    pub hugo_symbol: Option<String>,
    pub protein_start: Option<i32>,
    pub protein_end: Option<i32>,
    pub sv_type: Option<String>,
    pub tumor_type: Option<String>,
}

/// Biological effect of a mutation.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase", default)]
pub struct MutationEffect {
    pub known_effect: String,
    pub description: String,
}

/// Annotation returned by OncoKB for one query.
#[serde_with::skip_serializing_none]
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorQueryResp {
    /// The query this response answers.
    pub query: IndicatorQuery,
    /// Oncogenicity, e.g., `Likely Oncogenic`.
    pub oncogenic: String,
    pub gene_exist: bool,
    pub variant_exist: bool,
    pub allele_exist: bool,
    pub hotspot: bool,
    pub vus: bool,
    pub mutation_effect: Option<MutationEffect>,
    pub highest_sensitive_level: Option<String>,
    pub highest_resistance_level: Option<String>,
    pub highest_prognostic_implication_level: Option<String>,
    pub highest_diagnostic_implication_level: Option<String>,
    pub data_version: Option<String>,
    pub last_update: Option<String>,
}

/// Whether an optional level is set to a non-empty value.
fn has_level(level: &Option<String>) -> bool {
    level.as_deref().is_some_and(|s| !s.is_empty())
}

impl IndicatorQueryResp {
    /// Whether a therapeutic sensitivity level is available.
    pub fn has_sensitive_level(&self) -> bool {
        has_level(&self.highest_sensitive_level)
    }

    /// Whether a therapeutic resistance level is available.
    pub fn has_resistance_level(&self) -> bool {
        has_level(&self.highest_resistance_level)
    }

    /// Whether a prognostic level is available.
    pub fn has_prognostic_level(&self) -> bool {
        has_level(&self.highest_prognostic_implication_level)
    }

    /// Whether a diagnostic level is available.
    pub fn has_diagnostic_level(&self) -> bool {
        has_level(&self.highest_diagnostic_implication_level)
    }
}

/// Kind of annotation card that can be shown for a set of annotations.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Display,
    FromStr,
    serde::Deserialize,
    serde::Serialize,
    strum::EnumIter,
    utoipa::ToSchema,
)]
#[display(style = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OncoKbCardDataType {
    /// Oncogenicity and biological effect.
    Biological,
    /// Therapeutic sensitivity.
    Txs,
    /// Therapeutic resistance.
    Txr,
    /// Prognostic implications.
    Px,
    /// Diagnostic implications.
    Dx,
}

/// Compute the card data types available for the given annotations.
///
/// `BIOLOGICAL` is present as soon as there is any annotation; the other types
/// are present if at least one annotation carries the corresponding level.
/// The result is in order of first occurrence.
pub fn calculate_oncokb_available_data_type<'a, I>(annotations: I) -> Vec<OncoKbCardDataType>
where
    I: IntoIterator<Item = &'a IndicatorQueryResp>,
{
    let mut result = IndexSet::new();
    for annotation in annotations {
        result.insert(OncoKbCardDataType::Biological);
        if annotation.has_sensitive_level() {
            result.insert(OncoKbCardDataType::Txs);
        }
        if annotation.has_resistance_level() {
            result.insert(OncoKbCardDataType::Txr);
        }
        if annotation.has_prognostic_level() {
            result.insert(OncoKbCardDataType::Px);
        }
        if annotation.has_diagnostic_level() {
            result.insert(OncoKbCardDataType::Dx);
        }
    }
    result.into_iter().collect()
}

/// Map query identifiers to their responses.
///
/// A later response with the same identifier replaces an earlier one but keeps
/// its position.
pub fn generate_id_to_indicator_map<I>(data: I) -> IndexMap<String, IndicatorQueryResp>
where
    I: IntoIterator<Item = IndicatorQueryResp>,
{
    data.into_iter()
        .map(|indicator| (indicator.query.id.clone(), indicator))
        .collect()
}

/// Default filter for indicators: keep (likely) oncogenic ones.
pub fn default_oncokb_indicator_filter(indicator: &IndicatorQueryResp) -> bool {
    indicator
        .oncogenic
        .to_lowercase()
        .trim()
        .contains("oncogenic")
}
