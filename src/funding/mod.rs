//! Funding eligibility calculation for long-term care placements.
//!
//! A profile flows through four stages: domain scoring, threshold
//! classification, the local authority means test, and result composition.
//! Every stage is pure and deterministic, so one profile and one policy
//! always yield the same outcome apart from the calculation timestamp.

pub mod domain;
pub mod validate;

pub(crate) mod classify;
pub(crate) mod compose;
pub(crate) mod scoring;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::error::CalculatorError;
use crate::policy::FundingPolicy;

pub use domain::{
    BonusRule, CareDomain, CareType, ChcEligibility, DisregardReason, DomainAssessment,
    DpaEligibility, EligibilityBand, FundingOutcome, LaSupport, NeedLevel, PatientProfile,
    ProjectedSavings, PropertyDetails, SavingsSource, SupportBand,
};
pub use validate::{assessment_map, ProfileGuard, ProfileViolation, MAX_ASSESSABLE_AGE};

/// Stateless calculator applying one policy to patient profiles.
#[derive(Debug, Clone)]
pub struct FundingCalculator {
    policy: FundingPolicy,
    guard: ProfileGuard,
}

impl FundingCalculator {
    pub fn new(policy: FundingPolicy) -> Self {
        Self {
            policy,
            guard: ProfileGuard::default(),
        }
    }

    /// Calculator over the published standard policy.
    pub fn standard() -> Self {
        Self::new(FundingPolicy::standard())
    }

    pub fn policy(&self) -> &FundingPolicy {
        &self.policy
    }

    /// Runs the full pipeline over one profile.
    pub fn evaluate(&self, profile: &PatientProfile) -> Result<FundingOutcome, CalculatorError> {
        self.guard.check(profile)?;

        let breakdown = scoring::score_domains(profile, &self.policy)?;
        let (band, range) = classify::probability_range(breakdown.counts, &self.policy)?;
        debug!(total_score = breakdown.total(), ?band, "clinical scoring complete");

        let means = means_test::run_means_test(profile, self.policy.means_test)?;
        debug!(
            ?means.support,
            assessed_capital = means.assessed_capital,
            "means test complete"
        );

        let outcome =
            compose::compose_outcome(profile, &self.policy, &breakdown, band, range, &means)?;
        debug!(
            chc_probability = outcome.chc.probability_percent,
            dpa_eligible = outcome.dpa.is_eligible,
            "funding eligibility calculated"
        );

        Ok(outcome)
    }
}

/// Runs one profile through the standard policy.
pub fn compute_funding_eligibility(
    profile: &PatientProfile,
) -> Result<FundingOutcome, CalculatorError> {
    FundingCalculator::standard().evaluate(profile)
}
