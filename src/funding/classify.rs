use crate::funding::domain::EligibilityBand;
use crate::funding::scoring::LevelCounts;
use crate::policy::{FundingPolicy, PolicyError, ProbabilityBand};

/// Maps level counts to a threshold band. First matching rule wins and the
/// final rule is a catch-all, so classification never fails.
pub fn classify_band(counts: LevelCounts) -> EligibilityBand {
    // Very high: any priority, or 2+ severe, or severe alongside 4+ high.
    if counts.priority >= 1 || counts.severe >= 2 || (counts.severe >= 1 && counts.high >= 4) {
        return EligibilityBand::VeryHigh;
    }
    // High: one severe with a small cluster of high needs.
    if counts.severe >= 1 && (2..=3).contains(&counts.high) {
        return EligibilityBand::High;
    }
    // Moderate: high needs alone, but many of them.
    if counts.high >= 5 {
        return EligibilityBand::Moderate;
    }
    EligibilityBand::Low
}

pub fn probability_range(
    counts: LevelCounts,
    policy: &FundingPolicy,
) -> Result<(EligibilityBand, ProbabilityBand), PolicyError> {
    let band = classify_band(counts);
    let range = policy.band_range(band)?;
    Ok((band, range))
}
