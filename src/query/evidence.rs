//! Evidence types and levels of the OncoKB annotation service.

use itertools::Itertools;
use parse_display::{Display, FromStr};
use strum::IntoEnumIterator;

/// Evidence type that can be requested from OncoKB.
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
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceType {
    GeneSummary,
    MutationSummary,
    TumorTypeSummary,
    GeneTumorTypeSummary,
    PrognosticSummary,
    DiagnosticSummary,
    GeneBackground,
    Oncogenic,
    MutationEffect,
    Vus,
    PrognosticImplication,
    DiagnosticImplication,
    StandardTherapeuticImplicationsForDrugSensitivity,
    StandardTherapeuticImplicationsForDrugResistance,
    InvestigationalTherapeuticImplicationsDrugSensitivity,
    InvestigationalTherapeuticImplicationsDrugResistance,
}

impl EvidenceType {
    /// Return vector of all values of `EvidenceType`.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Evidence types requested by default, in request order.
pub const DEFAULT_EVIDENCE_TYPES: &[EvidenceType] = &[
    EvidenceType::GeneSummary,
    EvidenceType::GeneBackground,
    EvidenceType::Oncogenic,
    EvidenceType::MutationEffect,
    EvidenceType::Vus,
    EvidenceType::MutationSummary,
    EvidenceType::TumorTypeSummary,
    EvidenceType::StandardTherapeuticImplicationsForDrugSensitivity,
    EvidenceType::StandardTherapeuticImplicationsForDrugResistance,
    EvidenceType::InvestigationalTherapeuticImplicationsDrugSensitivity,
    EvidenceType::InvestigationalTherapeuticImplicationsDrugResistance,
];

/// Level of evidence as used by OncoKB.
#[derive(
    Debug,
    PartialEq,
    Eq,
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
pub enum LevelOfEvidence {
    #[display("LEVEL_0")]
    #[serde(rename = "LEVEL_0")]
    Level0,
    #[display("LEVEL_1")]
    #[serde(rename = "LEVEL_1")]
    Level1,
    #[display("LEVEL_2")]
    #[serde(rename = "LEVEL_2")]
    Level2,
    #[display("LEVEL_3A")]
    #[serde(rename = "LEVEL_3A")]
    Level3A,
    #[display("LEVEL_3B")]
    #[serde(rename = "LEVEL_3B")]
    Level3B,
    #[display("LEVEL_4")]
    #[serde(rename = "LEVEL_4")]
    Level4,
    #[display("LEVEL_R1")]
    #[serde(rename = "LEVEL_R1")]
    LevelR1,
    #[display("LEVEL_R2")]
    #[serde(rename = "LEVEL_R2")]
    LevelR2,
    #[display("LEVEL_R3")]
    #[serde(rename = "LEVEL_R3")]
    LevelR3,
    #[display("LEVEL_Px1")]
    #[serde(rename = "LEVEL_Px1")]
    LevelPx1,
    #[display("LEVEL_Px2")]
    #[serde(rename = "LEVEL_Px2")]
    LevelPx2,
    #[display("LEVEL_Px3")]
    #[serde(rename = "LEVEL_Px3")]
    LevelPx3,
    #[display("LEVEL_Dx1")]
    #[serde(rename = "LEVEL_Dx1")]
    LevelDx1,
    #[display("LEVEL_Dx2")]
    #[serde(rename = "LEVEL_Dx2")]
    LevelDx2,
    #[display("LEVEL_Dx3")]
    #[serde(rename = "LEVEL_Dx3")]
    LevelDx3,
    #[display("LEVEL_Fda1")]
    #[serde(rename = "LEVEL_Fda1")]
    LevelFda1,
    #[display("LEVEL_Fda2")]
    #[serde(rename = "LEVEL_Fda2")]
    LevelFda2,
    #[display("LEVEL_Fda3")]
    #[serde(rename = "LEVEL_Fda3")]
    LevelFda3,
    #[display("NO")]
    #[serde(rename = "NO")]
    No,
}

/// Short level names grouped by kind of implication, ordered from weakest to strongest.
pub struct Levels {
    pub sensitivity: &'static [&'static str],
    pub resistance: &'static [&'static str],
    pub all: &'static [&'static str],
}

pub const LEVELS: Levels = Levels {
    sensitivity: &["4", "3B", "3A", "2", "1", "0"],
    resistance: &["R3", "R2", "R1"],
    all: &["4", "R3", "3B", "3A", "R2", "2", "1", "R1", "0"],
};

/// Levels requested by default.
pub const DEFAULT_LEVELS: &[LevelOfEvidence] = &[
    LevelOfEvidence::Level1,
    LevelOfEvidence::Level2,
    LevelOfEvidence::Level3A,
    LevelOfEvidence::Level3B,
    LevelOfEvidence::Level4,
    LevelOfEvidence::LevelR1,
    LevelOfEvidence::LevelR2,
];

/// Source reported to OncoKB.
pub const QUERY_SOURCE: &str = "cbioportal";

/// Common evidence part of the OncoKB evidence queries.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct PartialEvidenceQuery {
    /// Comma-separated list of evidence types.
    pub evidence_types: String,
    /// Whether to only return the highest level.
    pub highest_level_only: bool,
    /// Levels to return.
    pub levels: Vec<LevelOfEvidence>,
    /// Source of the query.
    pub source: String,
}

/// Join evidence types into the comma-separated form OncoKB expects.
pub fn join_evidence_types(evidence_types: &[EvidenceType]) -> String {
    evidence_types.iter().join(",")
}

/// Parse a comma-separated list of evidence types; blank entries are skipped.
pub fn parse_evidence_types(value: &str) -> Result<Vec<EvidenceType>, anyhow::Error> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<EvidenceType>()
                .map_err(|e| anyhow::anyhow!("invalid evidence type {:?}: {}", s, e))
        })
        .collect()
}

/// Build the evidence part of a query.
///
/// Missing or empty `evidence_types` fall back to [`DEFAULT_EVIDENCE_TYPES`].
pub fn generate_partial_evidence_query(evidence_types: Option<&str>) -> PartialEvidenceQuery {
    let evidence_types = match evidence_types {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => join_evidence_types(DEFAULT_EVIDENCE_TYPES),
    };
    PartialEvidenceQuery {
        evidence_types,
        highest_level_only: false,
        levels: DEFAULT_LEVELS.to_vec(),
        source: QUERY_SOURCE.to_string(),
    }
}
