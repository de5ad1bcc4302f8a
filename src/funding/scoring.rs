use std::collections::{BTreeMap, BTreeSet};

use crate::funding::domain::{BonusRule, CareDomain, DomainAssessment, NeedLevel, PatientProfile};
use crate::policy::{FundingPolicy, PolicyError};

/// Number of assessed domains at each scoring level, over the full map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCounts {
    pub priority: usize,
    pub severe: usize,
    pub high: usize,
}

/// Discrete bonus contribution, kept so outcomes carry an audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusAward {
    pub rule: BonusRule,
    pub score: u32,
}

/// Output of the domain scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub domain_scores: BTreeMap<CareDomain, u32>,
    pub base_score: u32,
    pub bonuses: Vec<BonusAward>,
    pub counts: LevelCounts,
}

impl ScoreBreakdown {
    pub fn bonus_total(&self) -> u32 {
        self.bonuses.iter().map(|award| award.score).sum()
    }

    pub fn total(&self) -> u32 {
        self.base_score + self.bonus_total()
    }

    pub fn fired_rules(&self) -> Vec<BonusRule> {
        self.bonuses.iter().map(|award| award.rule).collect()
    }
}

/// Counts assessed domains at `level`, optionally restricted to a group.
/// Domains absent from the map simply do not count.
pub fn count_at_level(
    assessments: &BTreeMap<CareDomain, DomainAssessment>,
    level: NeedLevel,
    within: Option<&BTreeSet<CareDomain>>,
) -> usize {
    assessments
        .iter()
        .filter(|(domain, assessment)| {
            assessment.level == level && within.is_none_or(|group| group.contains(*domain))
        })
        .count()
}

pub fn score_domains(
    profile: &PatientProfile,
    policy: &FundingPolicy,
) -> Result<ScoreBreakdown, PolicyError> {
    let assessments = &profile.domain_assessments;

    let counts = LevelCounts {
        priority: count_at_level(assessments, NeedLevel::Priority, None),
        severe: count_at_level(assessments, NeedLevel::Severe, None),
        high: count_at_level(assessments, NeedLevel::High, None),
    };

    let mut domain_scores = BTreeMap::new();
    for (domain, assessment) in assessments {
        domain_scores.insert(*domain, policy.level_weight(assessment.level)?);
    }

    // Priority counts once as presence; severe and high accumulate per domain.
    let mut base_score = 0;
    if counts.priority > 0 {
        base_score += policy.level_weight(NeedLevel::Priority)?;
    }
    base_score += counts.severe as u32 * policy.level_weight(NeedLevel::Severe)?;
    base_score += counts.high as u32 * policy.level_weight(NeedLevel::High)?;

    let mut bonuses = Vec::new();
    let groups = &policy.domain_groups;
    for rule in BonusRule::ordered() {
        let fired = match rule {
            BonusRule::MultipleSevere => {
                count_at_level(assessments, NeedLevel::Severe, Some(&groups.critical)) >= 2
            }
            BonusRule::Unpredictability => profile.has_unpredictable_presentation(),
            BonusRule::MultipleHigh => {
                count_at_level(assessments, NeedLevel::High, Some(&groups.behavioural)) >= 3
            }
            BonusRule::ComplexTherapies => profile.receives_complex_therapies(),
        };
        if fired {
            bonuses.push(BonusAward {
                rule,
                score: policy.bonus_score(rule)?,
            });
        }
    }

    Ok(ScoreBreakdown {
        domain_scores,
        base_score,
        bonuses,
        counts,
    })
}
