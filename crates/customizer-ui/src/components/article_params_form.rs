//! Collapsible article settings panel.
//!
//! # Design
//! - Panel state lives in a [`PanelState`]; every event goes through
//!   [`PanelState::reduce`] against the latest stored value, so events that
//!   land before a re-render still compose.
//! - Parent state changes are forwarded as [`PanelAction::Sync`].
//! - The parent's state is touched solely through `on_apply` (submit and reset).
//! - The arrow toggle sits inside the outside-click root so pressing it never
//!   counts as an outside click.

use crate::components::arrow_button::ArrowButton;
use crate::components::button::{Button, ButtonKind};
use crate::components::radio_group::RadioGroup;
use crate::components::select::Select;
use crate::components::separator::Separator;
use crate::components::text::{Text, TextTag};
use crate::hooks::use_outside_click_close;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use customizer_core::{ArticleAttribute, ArticleOption, ArticleState, PanelAction, PanelState};
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleParamsFormProps {
    /// Currently applied selection, owned by the parent.
    pub(crate) article_state: ArticleState,
    /// Receives the new selection on apply and reset.
    pub(crate) on_apply: Callback<ArticleState>,
}

#[function_component(ArticleParamsForm)]
pub(crate) fn article_params_form(props: &ArticleParamsFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let panel = use_state(|| PanelState::new(props.article_state));
    let current = {
        let initial = *panel;
        use_mut_ref(move || initial)
    };
    let root_ref = use_node_ref();

    let dispatch = {
        let panel = panel.clone();
        let current = current.clone();
        let applied = props.article_state;
        let on_apply = props.on_apply.clone();
        Callback::from(move |action: PanelAction| {
            let result = current.borrow().reduce(&applied, action);
            match result {
                Ok(transition) => {
                    if transition.state != *current.borrow() {
                        *current.borrow_mut() = transition.state;
                        panel.set(transition.state);
                    }
                    if let Some(next) = transition.applied {
                        on_apply.emit(next);
                    }
                }
                Err(err) => {
                    console::warn!("settings panel rejected action", err.to_string());
                }
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |applied: &ArticleState| {
                dispatch.emit(PanelAction::Sync(*applied));
                || ()
            },
            props.article_state,
        );
    }

    use_outside_click_close(root_ref.clone(), panel.is_open(), {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.emit(PanelAction::OutsideClick))
    });

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(PanelAction::Toggle))
    };
    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatch.emit(PanelAction::Apply);
        })
    };
    let on_reset = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            event.prevent_default();
            dispatch.emit(PanelAction::Reset);
        })
    };
    let on_change = |attribute: ArticleAttribute| {
        let dispatch = dispatch.clone();
        Callback::from(move |option: ArticleOption| {
            dispatch.emit(PanelAction::Change { attribute, option });
        })
    };

    let open = panel.is_open();
    let draft = panel.draft();
    let select_for = |attribute: ArticleAttribute| {
        html! {
            <Select
                title={bundle.attribute_label(attribute)}
                attribute={attribute}
                selected={draft.get(attribute)}
                onchange={on_change(attribute)}
            />
        }
    };
    let toggle_label = if open {
        bundle.text("panel.close", "Close")
    } else {
        bundle.text("panel.open", "Open")
    };

    html! {
        <div class="article-params" ref={root_ref}>
            <ArrowButton is_open={open} aria_label={toggle_label} onclick={on_toggle} />
            <aside
                class={classes!("container", open.then_some("container-open"))}
                aria-hidden={(!open).to_string()}
            >
                <form class="form" onsubmit={on_submit} onreset={on_reset}>
                    <Text tag={TextTag::H2} size={31} weight={800} uppercase={true}>
                        {bundle.text("panel.heading", "")}
                    </Text>
                    {select_for(ArticleAttribute::FontFamily)}
                    <RadioGroup
                        title={bundle.attribute_label(ArticleAttribute::FontSize)}
                        name={ArticleAttribute::FontSize.key()}
                        attribute={ArticleAttribute::FontSize}
                        selected={draft.font_size()}
                        onchange={on_change(ArticleAttribute::FontSize)}
                    />
                    {select_for(ArticleAttribute::FontColor)}
                    <Separator />
                    {select_for(ArticleAttribute::BackgroundColor)}
                    {select_for(ArticleAttribute::ContentWidth)}
                    <div class="bottom-container">
                        <Button title={bundle.text("panel.reset", "Reset")} kind={ButtonKind::Reset} />
                        <Button title={bundle.text("panel.apply", "Apply")} kind={ButtonKind::Submit} />
                    </div>
                </form>
            </aside>
        </div>
    }
}
