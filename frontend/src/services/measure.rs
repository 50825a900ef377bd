use shared::{ElementRect, IndicatorGeometry, WeekdayTag};
use thiserror::Error;
use web_sys::Element;
use yew::NodeRef;

/// Why a deferred indicator measurement could not read the DOM
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("button for {tag} is not mounted")]
    ButtonUnavailable { tag: WeekdayTag },
    #[error("button for {tag} has no container element")]
    ContainerUnavailable { tag: WeekdayTag },
}

pub fn element_rect(element: &Element) -> ElementRect {
    let rect = element.get_bounding_client_rect();
    ElementRect {
        left: rect.left(),
        width: rect.width(),
    }
}

/// Measure the highlight geometry for the button of `tag` against its parent
pub fn measure_indicator(tag: WeekdayTag, button: &NodeRef) -> Result<IndicatorGeometry, MeasureError> {
    let button = button
        .cast::<Element>()
        .ok_or(MeasureError::ButtonUnavailable { tag })?;
    let container = button
        .parent_element()
        .ok_or(MeasureError::ContainerUnavailable { tag })?;

    Ok(IndicatorGeometry::from_rects(
        element_rect(&button),
        element_rect(&container),
    ))
}
