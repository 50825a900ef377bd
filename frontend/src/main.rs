use yew::prelude::*;
use weekday_widgets::{GridWrapper, WeekdayPicker, WeekdayTag};
use weekday_widgets::services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let selected_weekday = use_state(|| Option::<WeekdayTag>::None);

    let on_weekday_change = {
        let selected_weekday = selected_weekday.clone();
        Callback::from(move |weekday: WeekdayTag| {
            Logger::info_with_component("demo-app", &format!("Parent received {}", weekday));
            selected_weekday.set(Some(weekday));
        })
    };

    html! {
        <main class="container">
            <WeekdayPicker {on_weekday_change} class="demo-picker" />

            <GridWrapper class="demo-grid">
                <div class="card">
                    {match *selected_weekday {
                        Some(weekday) => format!("Showing {} ({})", weekday.option().label, weekday),
                        None => "Loading...".to_string(),
                    }}
                </div>
                <div class="card">{"Second card"}</div>
                <div class="card">{"Third card"}</div>
            </GridWrapper>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
