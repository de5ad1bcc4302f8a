//! Deterministic eligibility and funding calculator for long-term care
//! assessments.
//!
//! Given a patient profile the calculator estimates NHS continuing
//! healthcare eligibility, local authority support under the means test,
//! deferred payment agreement eligibility, and the projected savings
//! against privately funded care, together with an ordered list of next
//! steps. The whole calculation is pure; embedding services stay in
//! charge of transport, persistence, and presentation.

pub mod error;
pub mod funding;
pub mod policy;

pub use error::CalculatorError;
pub use funding::{
    compute_funding_eligibility, DomainAssessment, FundingCalculator, FundingOutcome,
    PatientProfile, PropertyDetails,
};
pub use policy::{FundingPolicy, PolicyError, PROBABILITY_CAP_PERCENT};
