use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    pub(crate) is_open: bool,
    pub(crate) aria_label: AttrValue,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
}

/// Round toggle that points into the page while the panel is open.
#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let path = if props.is_open {
        "M15 6l-6 6 6 6"
    } else {
        "M9 6l6 6-6 6"
    };
    html! {
        <button
            class={classes!("arrow-button", props.is_open.then_some("arrow-button-open"))}
            type="button"
            aria-label={props.aria_label.clone()}
            aria-expanded={props.is_open.to_string()}
            onclick={props.onclick.clone()}
        >
            <svg class="arrow" width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
                <path
                    d={path}
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </button>
    }
}
