use std::rc::Rc;
use gloo::timers::callback::Timeout;
use shared::{Cancel, IndicatorGeometry, PendingTask, WeekdayTag};
use yew::prelude::*;
use crate::services::logging::Logger;
use crate::services::measure::measure_indicator;

const COMPONENT: &str = "indicator-geometry-hook";

/// Configuration for the sliding indicator measurement
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorConfig {
    /// Delay before measuring; 0 defers to the next task after paint
    pub measure_delay_ms: u32,
    /// Debug-log every successful measurement
    pub log_measurements: bool,
    /// Notified with the measured weekday each time a deferred measurement runs
    pub on_measure: Option<Callback<WeekdayTag>>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            measure_delay_ms: 0,
            log_measurements: false,
            on_measure: None,
        }
    }
}

/// Non-owning handles to the seven weekday buttons, indexed like `WEEKDAYS`
#[derive(Clone, Default, PartialEq)]
pub struct ButtonRegistry {
    buttons: [NodeRef; 7],
}

impl ButtonRegistry {
    pub fn get(&self, tag: WeekdayTag) -> &NodeRef {
        &self.buttons[tag.index()]
    }
}

/// A scheduled measurement; cancelling clears the browser timeout
struct DeferredMeasurement(Timeout);

impl Cancel for DeferredMeasurement {
    fn cancel(self) {
        // The returned closure has not run and is simply dropped
        let _ = self.0.cancel();
    }
}

/// Hook tracking where the selection highlight should be drawn
///
/// Every change of `selected` (and the first render) schedules one deferred
/// measurement of the selected button. A newer change, or unmounting, cancels
/// a measurement that has not run yet, so only the latest one can write.
/// Measurements that cannot find their elements are skipped and the previous
/// geometry is kept.
#[hook]
pub fn use_indicator_geometry(
    selected: WeekdayTag,
    registry: Rc<ButtonRegistry>,
    config: IndicatorConfig,
) -> IndicatorGeometry {
    let geometry = use_state(IndicatorGeometry::default);
    let pending = use_mut_ref(PendingTask::<DeferredMeasurement>::new);

    {
        let geometry = geometry.clone();
        let pending = pending.clone();

        use_effect_with(selected, move |selected| {
            let tag = *selected;
            let button = registry.get(tag).clone();
            let log_measurements = config.log_measurements;
            let on_measure = config.on_measure.clone();

            let timeout = Timeout::new(config.measure_delay_ms, move || {
                if let Some(on_measure) = &on_measure {
                    on_measure.emit(tag);
                }
                match measure_indicator(tag, &button) {
                    Ok(measured) => {
                        if log_measurements {
                            Logger::debug_with_component(
                                COMPONENT,
                                &format!("Indicator for {} at {}px, {}px wide", tag, measured.offset, measured.width),
                            );
                        }
                        geometry.set(measured);
                    }
                    Err(e) => {
                        Logger::debug_with_component(COMPONENT, &format!("Skipping indicator measurement: {}", e));
                    }
                }
            });
            pending.borrow_mut().replace(DeferredMeasurement(timeout));

            move || {
                pending.borrow_mut().cancel();
            }
        });
    }

    *geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = IndicatorConfig::default();
        assert_eq!(config.measure_delay_ms, 0);
        assert!(!config.log_measurements);
        assert!(config.on_measure.is_none());
    }

    #[test]
    fn test_registry_is_indexed_by_tag() {
        let registry = ButtonRegistry::default();
        for tag in WeekdayTag::ALL {
            assert!(registry.get(tag).get().is_none());
        }
        assert_eq!(registry.buttons.len(), WeekdayTag::ALL.len());
    }
}
