use std::collections::BTreeMap;

use crate::funding::domain::{
    CareDomain, CareType, DomainAssessment, NeedLevel, PatientProfile, PropertyDetails,
};
use crate::policy::{FundingPolicy, MeansTestRates};

pub(super) fn assessment(domain: CareDomain, level: NeedLevel) -> DomainAssessment {
    DomainAssessment {
        domain,
        level,
        description: format!("{} recorded at intake", domain.label()),
        evidence: None,
    }
}

pub(super) fn assessments(
    levels: &[(CareDomain, NeedLevel)],
) -> BTreeMap<CareDomain, DomainAssessment> {
    levels
        .iter()
        .map(|(domain, level)| (*domain, assessment(*domain, *level)))
        .collect()
}

pub(super) fn baseline_profile() -> PatientProfile {
    PatientProfile {
        age: 82,
        domain_assessments: BTreeMap::new(),
        has_primary_health_need: false,
        requires_nursing_care: false,
        has_peg_feeding: false,
        has_tracheostomy: false,
        requires_injections: false,
        requires_ventilator: false,
        requires_dialysis: false,
        has_unpredictable_needs: false,
        has_fluctuating_condition: false,
        has_high_risk_behaviours: false,
        capital_assets: 0,
        weekly_income: 0,
        property: None,
        care_type: CareType::Residential,
        is_permanent_care: true,
    }
}

pub(super) fn profile_with(levels: &[(CareDomain, NeedLevel)]) -> PatientProfile {
    PatientProfile {
        domain_assessments: assessments(levels),
        ..baseline_profile()
    }
}

pub(super) fn main_residence(value: u32) -> PropertyDetails {
    PropertyDetails {
        value,
        is_main_residence: true,
        has_qualifying_relative: false,
        qualifying_relative_details: None,
    }
}

pub(super) fn policy() -> FundingPolicy {
    FundingPolicy::standard()
}

pub(super) fn rates() -> MeansTestRates {
    FundingPolicy::standard().means_test
}

/// 82 year old with two severe physical domains, one high behavioural
/// domain, and £25,000 in savings.
pub(super) fn severe_needs_profile() -> PatientProfile {
    PatientProfile {
        capital_assets: 25_000,
        ..profile_with(&[
            (CareDomain::Continence, NeedLevel::Severe),
            (CareDomain::Mobility, NeedLevel::Severe),
            (CareDomain::Behaviour, NeedLevel::High),
        ])
    }
}
