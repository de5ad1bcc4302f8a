use std::collections::BTreeMap;

use chrono::Utc;

use crate::funding::domain::{
    CareType, ChcEligibility, DpaEligibility, EligibilityBand, FundingOutcome, LaSupport,
    NeedLevel, PatientProfile, ProjectedSavings, SavingsSource, SupportBand,
};
use crate::funding::means_test::MeansAssessment;
use crate::funding::scoring::ScoreBreakdown;
use crate::policy::{
    FundingPolicy, MeansTestRates, PolicyError, ProbabilityBand, PROBABILITY_CAP_PERCENT,
};

/// Deterministic point inside the classified band: linear in the total
/// score normalized by the ceiling, rounded to nearest, never above the cap.
pub fn point_probability(total_score: u32, range: ProbabilityBand, score_ceiling: u32) -> u8 {
    let clamped = total_score.min(score_ceiling);
    let offset = (u32::from(range.span()) * clamped + score_ceiling / 2) / score_ceiling;
    let percent = u32::from(range.min_percent) + offset;
    percent.min(u32::from(PROBABILITY_CAP_PERCENT)) as u8
}

pub fn chc_result(
    profile: &PatientProfile,
    breakdown: &ScoreBreakdown,
    band: EligibilityBand,
    range: ProbabilityBand,
    score_ceiling: u32,
) -> ChcEligibility {
    let total_score = breakdown.total();
    let probability_percent = point_probability(total_score, range, score_ceiling);
    let is_likely_eligible = matches!(band, EligibilityBand::VeryHigh | EligibilityBand::High);

    let mut key_factors = Vec::new();
    for (domain, assessment) in &profile.domain_assessments {
        if assessment.level >= NeedLevel::High {
            key_factors.push(format!(
                "{} needs assessed as {}",
                domain.label(),
                assessment.level.label()
            ));
        }
    }
    for award in &breakdown.bonuses {
        key_factors.push(format!("uplift applied for {}", award.rule.label()));
    }
    if profile.has_primary_health_need {
        key_factors.push("clinician indicates a primary health need".to_string());
    }

    let reasoning = format!(
        "Scored {total_score} ({} base, {} bonus) across {} assessed domains, placing the \
         profile in the {} threshold band at {probability_percent}% likelihood.",
        breakdown.base_score,
        breakdown.bonus_total(),
        profile.domain_assessments.len(),
        band.label(),
    );

    ChcEligibility {
        probability_percent,
        is_likely_eligible,
        threshold_band: band,
        base_score: breakdown.base_score,
        total_score,
        domain_scores: breakdown.domain_scores.clone(),
        bonuses_applied: breakdown.fired_rules(),
        key_factors,
        reasoning,
    }
}

/// Likelihood the local authority meets the full cost, from the assessed
/// capital's position between the limits. Indicative only.
fn full_support_probability(assessed_capital: u32, rates: MeansTestRates) -> u8 {
    if assessed_capital > rates.upper_capital_limit {
        return 0;
    }
    if assessed_capital <= rates.lower_capital_limit {
        return 90;
    }
    let span = rates.upper_capital_limit - rates.lower_capital_limit;
    if span == 0 {
        return 10;
    }
    let progress = assessed_capital - rates.lower_capital_limit;
    let drop = (80 * progress + span / 2) / span;
    (90 - drop) as u8
}

const fn top_up_probability(support: SupportBand) -> u8 {
    match support {
        SupportBand::FullyFunded => 70,
        SupportBand::PartiallyFunded => 45,
        SupportBand::SelfFunding => 15,
    }
}

pub fn la_result(
    means: &MeansAssessment,
    capped_contribution: Option<u32>,
    rates: MeansTestRates,
) -> LaSupport {
    let reason = means.property.reason.label();
    let reasoning = match means.support {
        SupportBand::SelfFunding => format!(
            "Assessed capital of £{} exceeds the £{} upper limit ({reason}), so care is \
             self-funded until capital falls below the limit.",
            means.assessed_capital, rates.upper_capital_limit,
        ),
        SupportBand::FullyFunded => format!(
            "Assessed capital of £{} sits within the £{} upper limit ({reason}) and no weekly \
             contribution arises from tariff income or assessable income, so the local \
             authority meets the full cost.",
            means.assessed_capital, rates.upper_capital_limit,
        ),
        SupportBand::PartiallyFunded => format!(
            "Assessed capital of £{} is within the £{} upper limit ({reason}); a weekly \
             contribution of £{} is due from tariff income of £{} plus assessable income.",
            means.assessed_capital,
            rates.upper_capital_limit,
            capped_contribution.unwrap_or(0),
            means.tariff_income,
        ),
    };

    LaSupport {
        support_band: means.support,
        is_fully_funded: matches!(means.support, SupportBand::FullyFunded),
        tariff_income_per_week: means.tariff_income,
        weekly_contribution: capped_contribution,
        assessed_capital: means.assessed_capital,
        full_support_probability_percent: full_support_probability(means.assessed_capital, rates),
        top_up_probability_percent: top_up_probability(means.support),
        reasoning,
    }
}

pub fn dpa_result(
    profile: &PatientProfile,
    means: &MeansAssessment,
    capped_contribution: Option<u32>,
    rates: MeansTestRates,
) -> DpaEligibility {
    let weekly_charge = if means.dpa_eligible {
        capped_contribution.filter(|charge| *charge > 0)
    } else {
        None
    };

    let reasoning = if means.dpa_eligible {
        match weekly_charge {
            Some(charge) => format!(
                "The main residence can be deferred against care fees; an estimated £{charge} \
                 per week accrues under the agreement."
            ),
            None => "The main residence can be deferred against care fees; no weekly charge \
                     is due at current income."
                .to_string(),
        }
    } else {
        let cause = match &profile.property {
            None => "no property is available to defer against",
            Some(property) if !property.is_main_residence => {
                "the property is not the main residence"
            }
            Some(property) if property.has_qualifying_relative => {
                "a qualifying relative occupies the property, which is disregarded instead"
            }
            Some(_) if !profile.is_permanent_care || profile.care_type == CareType::Respite => {
                "the placement is not a permanent one"
            }
            Some(_) if profile.capital_assets > rates.upper_capital_limit => {
                "non-property capital exceeds the upper limit"
            }
            Some(_) => "the qualifying conditions are not met",
        };
        format!("A deferred payment agreement is unavailable because {cause}.")
    };

    DpaEligibility {
        is_eligible: means.dpa_eligible,
        property_disregarded: means.property.disregarded,
        disregard_reason: means.property.reason,
        weekly_charge,
        reasoning,
    }
}

pub fn savings_result(
    profile: &PatientProfile,
    chc_likely: bool,
    support: SupportBand,
    capped_contribution: Option<u32>,
    weekly_care_cost: u32,
) -> ProjectedSavings {
    let residual_charge = if chc_likely {
        0
    } else {
        match support {
            SupportBand::SelfFunding => weekly_care_cost,
            _ => capped_contribution.unwrap_or(0),
        }
    };

    let weekly = weekly_care_cost.saturating_sub(residual_charge);
    let annual = weekly.saturating_mul(52);
    let five_year = annual.saturating_mul(5);
    let lifetime_estimate = profile.is_permanent_care.then(|| {
        let remaining_years = u32::from(90u8.saturating_sub(profile.age)).clamp(2, 15);
        annual.saturating_mul(remaining_years)
    });

    let mut breakdown = BTreeMap::new();
    if weekly > 0 {
        let source = if chc_likely {
            SavingsSource::ContinuingHealthcare
        } else {
            SavingsSource::LocalAuthority
        };
        breakdown.insert(source, weekly);
    }

    ProjectedSavings {
        weekly,
        annual,
        five_year,
        lifetime_estimate,
        breakdown,
    }
}

/// Next steps in fixed priority order: clinical funding first, then the
/// property route, then the financial assessment, then evidence gathering.
pub fn recommendations(
    profile: &PatientProfile,
    chc: &ChcEligibility,
    means: &MeansAssessment,
    capped_contribution: Option<u32>,
) -> Vec<String> {
    let mut steps = Vec::new();

    if chc.is_likely_eligible {
        steps.push(
            "Request a full NHS continuing healthcare assessment; the profile meets the \
             threshold indicators."
                .to_string(),
        );
    } else if chc.threshold_band == EligibilityBand::Moderate {
        steps.push(
            "Ask for a continuing healthcare checklist screening to confirm whether a full \
             assessment is warranted."
                .to_string(),
        );
    }

    if profile.care_type.includes_nursing() || profile.requires_nursing_care {
        steps.push(
            "Apply for NHS-funded nursing care so the nursing element is met directly by \
             the NHS."
                .to_string(),
        );
    }

    if means.dpa_eligible {
        steps.push(
            "Consider a deferred payment agreement to avoid selling the home during care."
                .to_string(),
        );
    }

    match means.support {
        SupportBand::FullyFunded => steps.push(
            "Complete the local authority financial assessment to put full funding in place."
                .to_string(),
        ),
        SupportBand::PartiallyFunded => steps.push(format!(
            "Budget for the assessed weekly contribution of £{} and confirm it at the local \
             authority financial assessment.",
            capped_contribution.unwrap_or(0),
        )),
        SupportBand::SelfFunding => steps.push(
            "Plan for self-funding and request a new financial assessment once capital \
             approaches the upper limit."
                .to_string(),
        ),
    }

    if profile.has_primary_health_need && !chc.is_likely_eligible {
        steps.push(
            "Gather clinical evidence for the primary health need before the next review."
                .to_string(),
        );
    }

    steps
}

pub fn compose_outcome(
    profile: &PatientProfile,
    policy: &FundingPolicy,
    breakdown: &ScoreBreakdown,
    band: EligibilityBand,
    range: ProbabilityBand,
    means: &MeansAssessment,
) -> Result<FundingOutcome, PolicyError> {
    let rates = policy.means_test;
    let score_ceiling = policy.checked_score_ceiling()?;
    let weekly_care_cost = policy.weekly_care_cost(profile.care_type)?;
    let capped_contribution = means
        .weekly_contribution
        .map(|contribution| contribution.min(weekly_care_cost));

    let chc = chc_result(profile, breakdown, band, range, score_ceiling);
    let la_support = la_result(means, capped_contribution, rates);
    let dpa = dpa_result(profile, means, capped_contribution, rates);
    let savings = savings_result(
        profile,
        chc.is_likely_eligible,
        means.support,
        capped_contribution,
        weekly_care_cost,
    );
    let recommendations = recommendations(profile, &chc, means, capped_contribution);

    Ok(FundingOutcome {
        profile: profile.clone(),
        calculated_at: Utc::now(),
        chc,
        la_support,
        dpa,
        savings,
        recommendations,
    })
}
