//! Core data models for the take-home pay engine.
//!
//! This module contains the engagement inputs and the breakdown produced from
//! them.

mod engagement;
mod pay_breakdown;

pub use engagement::EngagementInputs;
pub use pay_breakdown::PayBreakdown;
