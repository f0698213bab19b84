//! K1 Screener - Eligibility screening engine for K-1 fiance(e) visa intake.
//!
//! This crate implements the rule evaluation, navigation, and financial
//! calculation core behind a guided screening questionnaire for the
//! petitioner (sponsor) and beneficiary of a K-1 case.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
