//! Scoring weights, probability bands, and means test rates.
//!
//! The standard policy mirrors the published England figures for the
//! 2025-26 charging year. Deployments with local variations construct
//! their own [`FundingPolicy`] instead of editing the tables here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::funding::domain::{BonusRule, CareDomain, CareType, EligibilityBand, NeedLevel};

/// Hard upper bound on any reported probability. Nothing the calculator
/// produces is a guarantee, so 100 is never reported.
pub const PROBABILITY_CAP_PERCENT: u8 = 98;

/// A policy table is missing or degenerate for a value the calculation needs.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("no score weight configured for need level {0:?}")]
    MissingLevelWeight(NeedLevel),
    #[error("no bonus score configured for rule {0:?}")]
    MissingBonusScore(BonusRule),
    #[error("no probability band configured for {0:?}")]
    MissingBand(EligibilityBand),
    #[error("no weekly care cost configured for {0:?}")]
    MissingCareCost(CareType),
    #[error("tariff rate must be greater than zero")]
    ZeroTariffRate,
    #[error("score ceiling must be greater than zero")]
    ZeroScoreCeiling,
}

/// Inclusive probability range a threshold band maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityBand {
    pub min_percent: u8,
    pub max_percent: u8,
}

impl ProbabilityBand {
    pub fn span(self) -> u8 {
        self.max_percent.saturating_sub(self.min_percent)
    }
}

/// Domain groupings the bonus rules quantify over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainGroups {
    /// Domains where severe needs indicate intensive clinical input.
    pub critical: BTreeSet<CareDomain>,
    /// Domains where clustered high needs indicate complex presentation.
    pub behavioural: BTreeSet<CareDomain>,
}

/// Capital limits and charging rates for the local authority means test.
/// All figures are whole pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeansTestRates {
    pub lower_capital_limit: u32,
    pub upper_capital_limit: u32,
    /// Pounds of capital per pound of weekly tariff income.
    pub tariff_rate: u32,
    pub personal_expenses_allowance: u32,
}

/// Complete rule book for one calculation run. Fields are open so that
/// deployments can start from [`FundingPolicy::standard`] and adjust;
/// calculation code reads the tables through the fallible lookups below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingPolicy {
    pub level_weights: BTreeMap<NeedLevel, u32>,
    pub bonus_scores: BTreeMap<BonusRule, u32>,
    pub bands: BTreeMap<EligibilityBand, ProbabilityBand>,
    pub domain_groups: DomainGroups,
    pub means_test: MeansTestRates,
    pub weekly_care_costs: BTreeMap<CareType, u32>,
    pub score_ceiling: u32,
}

impl FundingPolicy {
    /// Policy matching the published England figures for 2025-26.
    pub fn standard() -> Self {
        Self {
            level_weights: standard_level_weights(),
            bonus_scores: standard_bonus_scores(),
            bands: standard_bands(),
            domain_groups: standard_domain_groups(),
            means_test: MeansTestRates {
                lower_capital_limit: 14_250,
                upper_capital_limit: 23_250,
                tariff_rate: 250,
                personal_expenses_allowance: 30,
            },
            weekly_care_costs: standard_care_costs(),
            score_ceiling: 80,
        }
    }

    pub fn level_weight(&self, level: NeedLevel) -> Result<u32, PolicyError> {
        self.level_weights
            .get(&level)
            .copied()
            .ok_or(PolicyError::MissingLevelWeight(level))
    }

    pub fn bonus_score(&self, rule: BonusRule) -> Result<u32, PolicyError> {
        self.bonus_scores
            .get(&rule)
            .copied()
            .ok_or(PolicyError::MissingBonusScore(rule))
    }

    pub fn band_range(&self, band: EligibilityBand) -> Result<ProbabilityBand, PolicyError> {
        self.bands
            .get(&band)
            .copied()
            .ok_or(PolicyError::MissingBand(band))
    }

    pub fn weekly_care_cost(&self, care_type: CareType) -> Result<u32, PolicyError> {
        self.weekly_care_costs
            .get(&care_type)
            .copied()
            .ok_or(PolicyError::MissingCareCost(care_type))
    }

    pub fn checked_score_ceiling(&self) -> Result<u32, PolicyError> {
        if self.score_ceiling == 0 {
            return Err(PolicyError::ZeroScoreCeiling);
        }
        Ok(self.score_ceiling)
    }
}

fn standard_level_weights() -> BTreeMap<NeedLevel, u32> {
    BTreeMap::from([
        (NeedLevel::NoNeeds, 0),
        (NeedLevel::Low, 0),
        (NeedLevel::Moderate, 0),
        (NeedLevel::High, 5),
        (NeedLevel::Severe, 15),
        (NeedLevel::Priority, 40),
    ])
}

fn standard_bonus_scores() -> BTreeMap<BonusRule, u32> {
    BTreeMap::from([
        (BonusRule::MultipleSevere, 15),
        (BonusRule::Unpredictability, 10),
        (BonusRule::MultipleHigh, 10),
        (BonusRule::ComplexTherapies, 15),
    ])
}

fn standard_bands() -> BTreeMap<EligibilityBand, ProbabilityBand> {
    BTreeMap::from([
        (
            EligibilityBand::VeryHigh,
            ProbabilityBand {
                min_percent: 80,
                max_percent: PROBABILITY_CAP_PERCENT,
            },
        ),
        (
            EligibilityBand::High,
            ProbabilityBand {
                min_percent: 60,
                max_percent: 79,
            },
        ),
        (
            EligibilityBand::Moderate,
            ProbabilityBand {
                min_percent: 35,
                max_percent: 59,
            },
        ),
        (
            EligibilityBand::Low,
            ProbabilityBand {
                min_percent: 5,
                max_percent: 34,
            },
        ),
    ])
}

fn standard_domain_groups() -> DomainGroups {
    DomainGroups {
        critical: BTreeSet::from([
            CareDomain::Breathing,
            CareDomain::Nutrition,
            CareDomain::Continence,
            CareDomain::SkinIntegrity,
            CareDomain::Mobility,
            CareDomain::DrugTherapies,
            CareDomain::AlteredConsciousness,
        ]),
        behavioural: BTreeSet::from([
            CareDomain::Communication,
            CareDomain::PsychologicalNeeds,
            CareDomain::Cognition,
            CareDomain::Behaviour,
        ]),
    }
}

fn standard_care_costs() -> BTreeMap<CareType, u32> {
    BTreeMap::from([
        (CareType::Residential, 1_200),
        (CareType::Nursing, 1_450),
        (CareType::ResidentialDementia, 1_350),
        (CareType::NursingDementia, 1_600),
        (CareType::Respite, 1_300),
    ])
}
