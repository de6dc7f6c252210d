use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SeparatorProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Separator)]
pub(crate) fn separator(props: &SeparatorProps) -> Html {
    html! { <div class={classes!("separator", props.class.clone())} role="separator"></div> }
}
