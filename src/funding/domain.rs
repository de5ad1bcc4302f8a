use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The twelve DST care domains, in the order they appear on the decision
/// support tool. Map keys and factor listings follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareDomain {
    Breathing,
    Nutrition,
    Continence,
    SkinIntegrity,
    Mobility,
    Communication,
    PsychologicalNeeds,
    Cognition,
    Behaviour,
    DrugTherapies,
    AlteredConsciousness,
    OtherNeeds,
}

impl CareDomain {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Breathing,
            Self::Nutrition,
            Self::Continence,
            Self::SkinIntegrity,
            Self::Mobility,
            Self::Communication,
            Self::PsychologicalNeeds,
            Self::Cognition,
            Self::Behaviour,
            Self::DrugTherapies,
            Self::AlteredConsciousness,
            Self::OtherNeeds,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Breathing => "Breathing",
            Self::Nutrition => "Nutrition",
            Self::Continence => "Continence",
            Self::SkinIntegrity => "Skin Integrity",
            Self::Mobility => "Mobility",
            Self::Communication => "Communication",
            Self::PsychologicalNeeds => "Psychological & Emotional Needs",
            Self::Cognition => "Cognition",
            Self::Behaviour => "Behaviour",
            Self::DrugTherapies => "Drug Therapies & Medication",
            Self::AlteredConsciousness => "Altered States of Consciousness",
            Self::OtherNeeds => "Other Significant Care Needs",
        }
    }
}

/// Assessed level of need within a single domain. Declaration order is the
/// clinical ordering, so `Ord` comparisons follow severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedLevel {
    NoNeeds,
    Low,
    Moderate,
    High,
    Severe,
    Priority,
}

impl NeedLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::NoNeeds,
            Self::Low,
            Self::Moderate,
            Self::High,
            Self::Severe,
            Self::Priority,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoNeeds => "No Needs",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
            Self::Priority => "Priority",
        }
    }
}

/// Care setting the profile was assessed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareType {
    Residential,
    Nursing,
    ResidentialDementia,
    NursingDementia,
    Respite,
}

impl CareType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Residential,
            Self::Nursing,
            Self::ResidentialDementia,
            Self::NursingDementia,
            Self::Respite,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "residential care",
            Self::Nursing => "nursing care",
            Self::ResidentialDementia => "residential dementia care",
            Self::NursingDementia => "nursing dementia care",
            Self::Respite => "respite care",
        }
    }

    /// Whether the setting includes a registered nursing element.
    pub const fn includes_nursing(self) -> bool {
        matches!(self, Self::Nursing | Self::NursingDementia)
    }
}

/// Named bonus rules applied on top of the base domain score. Declaration
/// order is the evaluation and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusRule {
    MultipleSevere,
    Unpredictability,
    MultipleHigh,
    ComplexTherapies,
}

impl BonusRule {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::MultipleSevere,
            Self::Unpredictability,
            Self::MultipleHigh,
            Self::ComplexTherapies,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MultipleSevere => "multiple severe needs",
            Self::Unpredictability => "unpredictable or fluctuating needs",
            Self::MultipleHigh => "multiple high behavioural needs",
            Self::ComplexTherapies => "complex therapy requirements",
        }
    }
}

/// Probability band a profile classifies into for CHC purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityBand {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl EligibilityBand {
    pub const fn ordered() -> [Self; 4] {
        [Self::VeryHigh, Self::High, Self::Moderate, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

/// Outcome of the local authority capital assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportBand {
    FullyFunded,
    PartiallyFunded,
    SelfFunding,
}

impl SupportBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyFunded => "Fully Funded",
            Self::PartiallyFunded => "Partially Funded",
            Self::SelfFunding => "Self-Funding",
        }
    }
}

/// Why a declared property was or was not counted in the means test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisregardReason {
    NoProperty,
    DeferredPaymentEligible,
    QualifyingRelative,
    PropertyCounted,
}

impl DisregardReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoProperty => "no property declared",
            Self::DeferredPaymentEligible => "deferred payment agreement eligible",
            Self::QualifyingRelative => "qualifying relative in residence",
            Self::PropertyCounted => "property value counted in full",
        }
    }
}

/// Funding route a savings figure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsSource {
    ContinuingHealthcare,
    LocalAuthority,
}

/// Assessment recorded for a single DST domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAssessment {
    pub domain: CareDomain,
    pub level: NeedLevel,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Property declared for the means test. Values are whole pounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub value: u32,
    pub is_main_residence: bool,
    pub has_qualifying_relative: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifying_relative_details: Option<String>,
}

/// Fully populated patient profile supplied by the intake boundary.
///
/// Monetary fields are whole pounds sterling; unsigned types make negative
/// amounts unrepresentable. The assessment map holds at most one entry per
/// domain and iterates in domain definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u8,
    #[serde(default)]
    pub domain_assessments: BTreeMap<CareDomain, DomainAssessment>,

    pub has_primary_health_need: bool,
    pub requires_nursing_care: bool,

    pub has_peg_feeding: bool,
    pub has_tracheostomy: bool,
    pub requires_injections: bool,
    pub requires_ventilator: bool,
    pub requires_dialysis: bool,

    pub has_unpredictable_needs: bool,
    pub has_fluctuating_condition: bool,
    pub has_high_risk_behaviours: bool,

    pub capital_assets: u32,
    pub weekly_income: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyDetails>,

    pub care_type: CareType,
    pub is_permanent_care: bool,
}

impl PatientProfile {
    /// Whether any complex therapy indicator is set.
    pub fn receives_complex_therapies(&self) -> bool {
        self.has_peg_feeding
            || self.has_tracheostomy
            || self.requires_injections
            || self.requires_ventilator
            || self.requires_dialysis
    }

    /// Whether any unpredictability indicator is set.
    pub fn has_unpredictable_presentation(&self) -> bool {
        self.has_unpredictable_needs
            || self.has_fluctuating_condition
            || self.has_high_risk_behaviours
    }
}

/// CHC eligibility assessment with its audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChcEligibility {
    pub probability_percent: u8,
    pub is_likely_eligible: bool,
    pub threshold_band: EligibilityBand,
    pub base_score: u32,
    pub total_score: u32,
    pub domain_scores: BTreeMap<CareDomain, u32>,
    pub bonuses_applied: Vec<BonusRule>,
    pub key_factors: Vec<String>,
    pub reasoning: String,
}

/// Local authority support assessment from the means test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaSupport {
    pub support_band: SupportBand,
    pub is_fully_funded: bool,
    pub tariff_income_per_week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_contribution: Option<u32>,
    pub assessed_capital: u32,
    pub full_support_probability_percent: u8,
    pub top_up_probability_percent: u8,
    pub reasoning: String,
}

/// Deferred payment agreement eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpaEligibility {
    pub is_eligible: bool,
    pub property_disregarded: bool,
    pub disregard_reason: DisregardReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_charge: Option<u32>,
    pub reasoning: String,
}

/// Projected savings against privately funded care. Weekly figures in the
/// breakdown are attributed to the funding route that produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedSavings {
    pub weekly: u32,
    pub annual: u32,
    pub five_year: u32,
    /// Rough planning estimate only; never part of a financial guarantee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_estimate: Option<u32>,
    pub breakdown: BTreeMap<SavingsSource, u32>,
}

/// Complete calculation output: the unmodified input profile, the four
/// assessments, and the ordered recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingOutcome {
    pub profile: PatientProfile,
    pub calculated_at: DateTime<Utc>,
    pub chc: ChcEligibility,
    pub la_support: LaSupport,
    pub dpa: DpaEligibility,
    pub savings: ProjectedSavings,
    pub recommendations: Vec<String>,
}

impl FundingOutcome {
    /// Nested key-value document for the wire, with unset optionals omitted.
    pub fn as_document(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
