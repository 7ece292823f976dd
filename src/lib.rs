//! Take-home pay calculator for UK contractors.
//!
//! This crate turns a day rate, days worked, agency fee, salary sacrifice
//! pension and tax code into an itemised monthly breakdown: employer National
//! Insurance, apprenticeship levy, income tax, employee National Insurance and
//! net pay. Thresholds and rates come from YAML configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
