use shared::{SelectionState, WeekdayTag, WEEKDAYS};
use yew::prelude::*;
use crate::hooks::use_indicator_geometry::{use_indicator_geometry, ButtonRegistry, IndicatorConfig};
use crate::services::date_utils::today_weekday;
use crate::services::logging::Logger;

const COMPONENT: &str = "weekday-picker";

#[derive(Properties, PartialEq)]
pub struct WeekdayPickerProps {
    /// Called with the new weekday on every selection change, and once after mount
    pub on_weekday_change: Callback<WeekdayTag>,
    /// Extra classes for the outer container
    #[prop_or_default]
    pub class: Classes,
    /// Initial weekday; defaults to today's local weekday
    #[prop_or_default]
    pub today: Option<WeekdayTag>,
    #[prop_or_default]
    pub config: IndicatorConfig,
}

#[function_component(WeekdayPicker)]
pub fn weekday_picker(props: &WeekdayPickerProps) -> Html {
    let selection = {
        let today = props.today;
        use_state(move || SelectionState::new(today.unwrap_or_else(today_weekday)))
    };
    let registry = use_memo((), |_| ButtonRegistry::default());
    let geometry = use_indicator_geometry(selection.selected(), registry.clone(), props.config.clone());

    // Tell the parent which day is selected by default, once per mount
    {
        let on_weekday_change = props.on_weekday_change.clone();
        let initial = selection.selected();
        use_effect_with((), move |_| {
            Logger::info_with_component(COMPONENT, &format!("Initial weekday {}", initial));
            on_weekday_change.emit(initial);
            || ()
        });
    }

    let on_select = {
        let selection = selection.clone();
        let on_weekday_change = props.on_weekday_change.clone();
        Callback::from(move |tag: WeekdayTag| {
            // Re-selecting the active day is a silent no-op
            if let Some(next) = selection.select(tag) {
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Weekday changed {} -> {}", selection.selected(), tag),
                );
                selection.set(next);
                on_weekday_change.emit(tag);
            }
        })
    };

    html! {
        <div class={classes!("weekday-picker", props.class.clone())}>
            {if geometry.is_visible() {
                html! { <div class="weekday-indicator" style={geometry.style()} /> }
            } else {
                html! {}
            }}

            {for WEEKDAYS.iter().map(|option| {
                let tag = option.value;
                let is_active = selection.is_active(tag);
                let onclick = {
                    let on_select = on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tag))
                };

                html! {
                    <button
                        type="button"
                        key={tag.as_str()}
                        ref={registry.get(tag).clone()}
                        class={classes!("weekday-button", is_active.then(|| "active"))}
                        data-weekday={tag.as_str()}
                        title={option.label}
                        {onclick}
                    >
                        {option.short_label}
                    </button>
                }
            })}
        </div>
    }
}
