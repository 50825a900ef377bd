use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GridWrapperProps {
    #[prop_or_default]
    pub children: Children,
    /// Class applied to the outer container
    #[prop_or_default]
    pub class: Classes,
}

/// Lays out each child in its own inline-block wrapper, in the given order
#[function_component(GridWrapper)]
pub fn grid_wrapper(props: &GridWrapperProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            {for props.children.iter().enumerate().map(|(index, child)| html! {
                <div key={index} class="inline-block">
                    {child}
                </div>
            })}
        </div>
    }
}
