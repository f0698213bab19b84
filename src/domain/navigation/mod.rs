//! Screen flow navigation.
//!
//! Screens are registered once in [`screen`], ordered per role in
//! [`flow`], and walked by the [`navigator`]. Gate decisions on leaving
//! a section live with the screening rules, not here.

pub mod flow;
pub mod navigator;
pub mod screen;

pub use flow::{flow, BENEFICIARY_FLOW, SPONSOR_FLOW};
pub use navigator::Navigator;
pub use screen::ScreenId;
