use yew::prelude::*;

/// Form role of a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    Submit,
    Reset,
}

impl ButtonKind {
    const fn as_type(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    const fn as_class(self) -> &'static str {
        match self {
            Self::Submit => "button-submit",
            Self::Reset => "button-reset",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    pub(crate) title: AttrValue,
    pub(crate) kind: ButtonKind,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!("button", props.kind.as_class(), props.class.clone());
    html! {
        <button class={classes} type={props.kind.as_type()}>
            {props.title.clone()}
        </button>
    }
}
