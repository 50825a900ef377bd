//! Presentational Yew widgets: an inline grid wrapper and a weekday picker
//! with a sliding selection indicator.

pub mod components;
pub mod hooks;
pub mod services;

pub use components::{GridWrapper, WeekdayPicker};
pub use hooks::IndicatorConfig;
pub use shared::WeekdayTag;
