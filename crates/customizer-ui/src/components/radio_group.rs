use customizer_core::{ArticleAttribute, ArticleOption};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    pub(crate) title: AttrValue,
    pub(crate) name: AttrValue,
    pub(crate) attribute: ArticleAttribute,
    pub(crate) selected: ArticleOption,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<ArticleOption>,
}

/// Inline radio buttons over one attribute's option set.
#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    html! {
        <fieldset class={classes!("radio-group", props.class.clone())}>
            <legend class="radio-group-title">{props.title.clone()}</legend>
            <div class="radio-group-options">
                {for props.attribute.options().iter().copied().map(|option| {
                    let onclick = {
                        let onchange = props.onchange.clone();
                        Callback::from(move |_: MouseEvent| onchange.emit(option))
                    };
                    let id = format!("{}-{}", props.attribute.key(), option.class_name());
                    html! {
                        <div class="radio-option">
                            <input
                                type="radio"
                                id={id.clone()}
                                name={props.name.clone()}
                                value={option.value()}
                                class="radio"
                                checked={option == props.selected}
                                onclick={onclick}
                            />
                            <label class={classes!("radio-label", option.class_name())} for={id.clone()}>
                                {option.title()}
                            </label>
                        </div>
                    }
                })}
            </div>
        </fieldset>
    }
}
