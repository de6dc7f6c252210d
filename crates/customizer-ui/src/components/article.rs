use crate::components::text::{Text, TextTag};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Sample article styled through the container's custom properties.
#[function_component(Article)]
pub(crate) fn article() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <article class="article">
            <Text tag={TextTag::H1} size={45} weight={800} uppercase={true} dynamic={true}>
                {bundle.text("article.title", "")}
            </Text>
            <Text tag={TextTag::P} size={22} weight={800} dynamic={true} class="article-subtitle">
                {bundle.text("article.subtitle", "")}
            </Text>
            <Text dynamic={true}>
                {bundle.text("article.body", "")}
            </Text>
        </article>
    }
}
