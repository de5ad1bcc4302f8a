use super::common::*;
use crate::error::CalculatorError;
use crate::funding::domain::{
    BonusRule, CareDomain, CareType, EligibilityBand, NeedLevel, SavingsSource, SupportBand,
};
use crate::funding::validate::ProfileViolation;
use crate::funding::{compute_funding_eligibility, FundingCalculator};
use crate::policy::{FundingPolicy, PolicyError};

#[test]
fn severe_needs_scenario_end_to_end() {
    let outcome = compute_funding_eligibility(&severe_needs_profile()).expect("calculation");

    assert_eq!(outcome.chc.threshold_band, EligibilityBand::VeryHigh);
    assert!(outcome.chc.is_likely_eligible);
    assert_eq!(outcome.chc.base_score, 35);
    assert_eq!(outcome.chc.total_score, 50);
    assert_eq!(outcome.chc.probability_percent, 91);
    assert_eq!(outcome.chc.bonuses_applied, vec![BonusRule::MultipleSevere]);

    assert_eq!(outcome.la_support.tariff_income_per_week, 43);
    assert_eq!(outcome.la_support.assessed_capital, 25_000);
    assert_eq!(outcome.la_support.support_band, SupportBand::SelfFunding);
    assert_eq!(outcome.la_support.weekly_contribution, None);

    assert!(!outcome.dpa.is_eligible);
    assert_eq!(outcome.dpa.weekly_charge, None);

    // CHC-likely, so the full residential cost counts as savings.
    assert_eq!(outcome.savings.weekly, 1_200);
    assert_eq!(
        outcome.savings.breakdown.get(&SavingsSource::ContinuingHealthcare),
        Some(&1_200)
    );
}

#[test]
fn identical_profiles_calculate_identically() {
    let calculator = FundingCalculator::standard();
    let profile = severe_needs_profile();

    let first = calculator.evaluate(&profile).expect("first run");
    let second = calculator.evaluate(&profile).expect("second run");

    assert_eq!(first.profile, second.profile);
    assert_eq!(first.chc, second.chc);
    assert_eq!(first.la_support, second.la_support);
    assert_eq!(first.dpa, second.dpa);
    assert_eq!(first.savings, second.savings);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn empty_assessments_land_in_the_low_band() {
    let outcome = compute_funding_eligibility(&baseline_profile()).expect("calculation");

    assert_eq!(outcome.chc.threshold_band, EligibilityBand::Low);
    assert_eq!(outcome.chc.total_score, 0);
    assert_eq!(outcome.chc.probability_percent, 5);
    assert!(!outcome.chc.is_likely_eligible);
    assert!(outcome.chc.domain_scores.is_empty());
}

#[test]
fn probability_never_exceeds_the_cap() {
    let mut profile = profile_with(&[
        (CareDomain::Breathing, NeedLevel::Priority),
        (CareDomain::Nutrition, NeedLevel::Severe),
        (CareDomain::Continence, NeedLevel::Severe),
        (CareDomain::SkinIntegrity, NeedLevel::Severe),
        (CareDomain::Mobility, NeedLevel::Severe),
        (CareDomain::DrugTherapies, NeedLevel::Severe),
        (CareDomain::AlteredConsciousness, NeedLevel::Severe),
        (CareDomain::Communication, NeedLevel::High),
        (CareDomain::PsychologicalNeeds, NeedLevel::High),
        (CareDomain::Cognition, NeedLevel::High),
        (CareDomain::Behaviour, NeedLevel::High),
        (CareDomain::OtherNeeds, NeedLevel::High),
    ]);
    profile.has_peg_feeding = true;
    profile.has_unpredictable_needs = true;
    profile.has_primary_health_need = true;

    let outcome = compute_funding_eligibility(&profile).expect("calculation");

    assert_eq!(outcome.chc.bonuses_applied.len(), 4);
    assert_eq!(outcome.chc.probability_percent, 98);
}

#[test]
fn age_violations_surface_through_the_calculator() {
    let mut profile = baseline_profile();
    profile.age = 130;

    match compute_funding_eligibility(&profile) {
        Err(CalculatorError::Validation(ProfileViolation::AgeOutOfRange { age: 130, max: 120 })) => {
        }
        other => panic!("expected age violation, got {other:?}"),
    }
}

#[test]
fn broken_policy_surfaces_a_configuration_error() {
    let mut policy = FundingPolicy::standard();
    policy.weekly_care_costs.remove(&CareType::Residential);
    let calculator = FundingCalculator::new(policy);

    match calculator.evaluate(&baseline_profile()) {
        Err(CalculatorError::Configuration(PolicyError::MissingCareCost(
            CareType::Residential,
        ))) => {}
        other => panic!("expected missing care cost, got {other:?}"),
    }
}

#[test]
fn document_omits_unset_optional_fields() {
    let outcome = compute_funding_eligibility(&severe_needs_profile()).expect("calculation");
    let document = outcome.as_document().expect("document");

    assert!(document["la_support"].get("weekly_contribution").is_none());
    assert!(document["dpa"].get("weekly_charge").is_none());
    assert!(document["profile"].get("property").is_none());
    assert_eq!(document["chc"]["probability_percent"], 91);
    assert_eq!(document["chc"]["threshold_band"], "very_high");
}

#[test]
fn nursing_dementia_care_uses_its_own_weekly_cost() {
    let mut profile = severe_needs_profile();
    profile.care_type = CareType::NursingDementia;
    profile.capital_assets = 9_000;

    let outcome = compute_funding_eligibility(&profile).expect("calculation");

    // CHC-likely against the £1,600 nursing dementia cost.
    assert_eq!(outcome.savings.weekly, 1_600);
    assert!(outcome
        .recommendations
        .iter()
        .any(|step| step.contains("NHS-funded nursing care")));
}

#[test]
fn contributions_are_capped_at_the_weekly_care_cost() {
    let mut profile = baseline_profile();
    profile.capital_assets = 20_000;
    profile.weekly_income = 2_000;

    let outcome = compute_funding_eligibility(&profile).expect("calculation");

    // Tariff £23 plus assessable income £1,970 exceeds the £1,200 residential cost.
    assert_eq!(outcome.la_support.support_band, SupportBand::PartiallyFunded);
    assert_eq!(outcome.la_support.tariff_income_per_week, 23);
    assert_eq!(outcome.la_support.weekly_contribution, Some(1_200));
    assert_eq!(outcome.savings.weekly, 0);
    assert!(outcome.savings.breakdown.is_empty());
}
