//! Typography wrapper shared by the panel heading and the article preview.

use yew::prelude::*;

/// Element rendered by [`Text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextTag {
    H1,
    H2,
    P,
}

impl TextTag {
    const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::P => "p",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or(TextTag::P)]
    pub(crate) tag: TextTag,
    #[prop_or(18)]
    pub(crate) size: u16,
    #[prop_or(400)]
    pub(crate) weight: u16,
    #[prop_or_default]
    pub(crate) uppercase: bool,
    /// Follow the article's `--font-*` custom properties instead of fixed styles.
    #[prop_or_default]
    pub(crate) dynamic: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    let classes = classes!(
        "text",
        format!("size-{}", props.size),
        format!("weight-{}", props.weight),
        props.uppercase.then_some("uppercase"),
        props.dynamic.then_some("dynamic"),
        props.class.clone()
    );
    html! {
        <@{props.tag.as_str()} class={classes}>
            { for props.children.iter() }
        </@>
    }
}
