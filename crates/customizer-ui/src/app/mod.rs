use crate::components::article::Article;
use crate::components::article_params_form::ArticleParamsForm;
use crate::i18n::TranslationBundle;
use customizer_core::ArticleState;
use gloo::console;
use preferences::load_locale;
use yew::prelude::*;
use yewdux::prelude::{Store, use_store};

mod preferences;

/// Applied article settings shared between the panel and the preview.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub(crate) struct ArticleStore {
    pub(crate) applied: ArticleState,
}

#[function_component(CustomizerApp)]
pub(crate) fn customizer_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(load_locale()), ());
    let (store, dispatch) = use_store::<ArticleStore>();

    let on_apply = Callback::from(move |next: ArticleState| {
        match serde_json::to_string(&next) {
            Ok(json) => {
                console::info!("article settings applied", json);
            }
            Err(err) => {
                console::warn!("article settings not serializable", err.to_string());
            }
        }
        dispatch.reduce_mut(|store| store.applied = next);
    });

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main
                class="main"
                lang={bundle.locale.code()}
                style={store.applied.inline_style()}
            >
                <ArticleParamsForm article_state={store.applied} on_apply={on_apply} />
                <Article />
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the customizer into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    console::info!("article customizer starting");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CustomizerApp>::with_root(root).render();
    } else {
        yew::Renderer::<CustomizerApp>::new().render();
    }
}
