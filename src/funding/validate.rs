use std::collections::BTreeMap;

use crate::funding::domain::{CareDomain, DomainAssessment, PatientProfile};

/// Oldest age the calculator will assess.
pub const MAX_ASSESSABLE_AGE: u8 = 120;

/// Ways a submitted profile can be structurally invalid.
#[derive(Debug, thiserror::Error)]
pub enum ProfileViolation {
    #[error("age {age} is outside the assessable range 0 to {max}")]
    AgeOutOfRange { age: u8, max: u8 },
    #[error("assessment stored under {key:?} describes domain {found:?}")]
    MismatchedDomainKey { key: CareDomain, found: CareDomain },
    #[error("more than one assessment supplied for {0:?}")]
    DuplicateDomain(CareDomain),
}

/// Structural checks applied to every profile before calculation.
#[derive(Debug, Clone)]
pub struct ProfileGuard {
    max_age: u8,
}

impl Default for ProfileGuard {
    fn default() -> Self {
        Self {
            max_age: MAX_ASSESSABLE_AGE,
        }
    }
}

impl ProfileGuard {
    /// Limits above [`MAX_ASSESSABLE_AGE`] are clamped; a custom guard can
    /// only tighten the default.
    pub fn new(max_age: u8) -> Self {
        Self {
            max_age: max_age.min(MAX_ASSESSABLE_AGE),
        }
    }

    /// Rejects profiles no downstream stage could score coherently.
    ///
    /// An empty assessment map is allowed; it scores zero and lands in the
    /// lowest band rather than failing.
    pub fn check(&self, profile: &PatientProfile) -> Result<(), ProfileViolation> {
        if profile.age > self.max_age {
            return Err(ProfileViolation::AgeOutOfRange {
                age: profile.age,
                max: self.max_age,
            });
        }

        for (key, assessment) in &profile.domain_assessments {
            if *key != assessment.domain {
                return Err(ProfileViolation::MismatchedDomainKey {
                    key: *key,
                    found: assessment.domain,
                });
            }
        }

        Ok(())
    }
}

/// Builds the profile's assessment map from a flat list, rejecting a second
/// entry for any domain instead of silently keeping one of them.
pub fn assessment_map(
    assessments: Vec<DomainAssessment>,
) -> Result<BTreeMap<CareDomain, DomainAssessment>, ProfileViolation> {
    let mut map = BTreeMap::new();
    for assessment in assessments {
        let domain = assessment.domain;
        if map.insert(domain, assessment).is_some() {
            return Err(ProfileViolation::DuplicateDomain(domain));
        }
    }
    Ok(map)
}
