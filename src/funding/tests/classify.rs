use super::common::*;
use crate::funding::classify::{classify_band, probability_range};
use crate::funding::domain::EligibilityBand;
use crate::funding::scoring::LevelCounts;

fn counts(priority: usize, severe: usize, high: usize) -> LevelCounts {
    LevelCounts {
        priority,
        severe,
        high,
    }
}

#[test]
fn any_priority_classifies_very_high() {
    assert_eq!(classify_band(counts(1, 0, 0)), EligibilityBand::VeryHigh);
    assert_eq!(classify_band(counts(1, 1, 9)), EligibilityBand::VeryHigh);
}

#[test]
fn two_severe_classifies_very_high() {
    assert_eq!(classify_band(counts(0, 2, 0)), EligibilityBand::VeryHigh);
}

#[test]
fn severe_with_four_high_classifies_very_high() {
    assert_eq!(classify_band(counts(0, 1, 4)), EligibilityBand::VeryHigh);
}

#[test]
fn severe_with_small_high_cluster_classifies_high() {
    assert_eq!(classify_band(counts(0, 1, 2)), EligibilityBand::High);
    assert_eq!(classify_band(counts(0, 1, 3)), EligibilityBand::High);
}

#[test]
fn lone_severe_without_cluster_classifies_low() {
    assert_eq!(classify_band(counts(0, 1, 0)), EligibilityBand::Low);
    assert_eq!(classify_band(counts(0, 1, 1)), EligibilityBand::Low);
}

#[test]
fn five_high_without_severe_classifies_moderate() {
    assert_eq!(classify_band(counts(0, 0, 5)), EligibilityBand::Moderate);
    assert_eq!(classify_band(counts(0, 0, 9)), EligibilityBand::Moderate);
}

#[test]
fn four_high_without_severe_classifies_low() {
    assert_eq!(classify_band(counts(0, 0, 4)), EligibilityBand::Low);
}

#[test]
fn no_needs_classifies_low() {
    assert_eq!(classify_band(counts(0, 0, 0)), EligibilityBand::Low);
}

#[test]
fn probability_range_returns_the_configured_band() {
    let (band, range) = probability_range(counts(1, 0, 0), &policy()).expect("band configured");

    assert_eq!(band, EligibilityBand::VeryHigh);
    assert_eq!(range.min_percent, 80);
    assert_eq!(range.max_percent, 98);
}
