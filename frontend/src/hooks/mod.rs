pub mod use_indicator_geometry;

pub use use_indicator_geometry::{use_indicator_geometry, ButtonRegistry, IndicatorConfig};
