use customizer_core::{ArticleAttribute, ArticleOption};
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    pub(crate) title: AttrValue,
    pub(crate) attribute: ArticleAttribute,
    pub(crate) selected: ArticleOption,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<ArticleOption>,
}

/// Dropdown over one attribute's option set.
#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let attribute = props.attribute;
    let id = format!("{}-select", attribute.key());
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            match attribute.find(&target.value()) {
                Ok(option) => onchange.emit(option),
                Err(err) => {
                    console::warn!("ignored select value", attribute.key(), err.to_string());
                }
            }
        })
    };

    html! {
        <div class="select-container">
            <label class="select-title" for={id.clone()}>{props.title.clone()}</label>
            <select
                id={id.clone()}
                name={attribute.key()}
                value={props.selected.value()}
                class={classes!("select", props.selected.class_name(), props.class.clone())}
                onchange={onchange}
            >
                {for attribute.options().iter().map(|option| {
                    let selected = *option == props.selected;
                    html! {
                        <option
                            value={option.value()}
                            selected={selected}
                            class={classes!("option", option.option_class_name())}
                        >
                            {option.title()}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
