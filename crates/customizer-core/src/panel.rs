//! Settings panel state machine.
//!
//! # Design
//! - The panel owns its open flag and a draft copy of the applied state.
//! - [`PanelState::reduce`] never mutates in place; it returns the next state
//!   plus the state to hand to the parent's apply callback, if any.
//! - The draft is re-synced from the applied state each time the panel opens,
//!   so abandoned edits never leak into the next session.
//! - External changes to the applied state reach the draft only while the
//!   panel is closed; an open form keeps the user's edits.

use tracing::{debug, info, warn};

use crate::error::OptionResult;
use crate::options::{ArticleAttribute, ArticleOption};
use crate::state::{ArticleState, DEFAULT_ARTICLE_STATE};

/// User intent dispatched from the panel's controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Arrow toggle clicked.
    Toggle,
    /// Pointer pressed outside the panel bounds.
    OutsideClick,
    /// A form control changed.
    Change {
        /// Attribute edited by the control.
        attribute: ArticleAttribute,
        /// Newly selected option.
        option: ArticleOption,
    },
    /// Form submitted.
    Apply,
    /// Form reset.
    Reset,
    /// Parent replaced the applied state; refreshes the draft while closed.
    Sync(ArticleState),
}

/// Open flag plus draft selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    draft: ArticleState,
}

/// Result of reducing one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelTransition {
    /// Panel state after the action.
    pub state: PanelState,
    /// State to pass to the apply callback; `None` when the parent is untouched.
    pub applied: Option<ArticleState>,
}

impl PanelTransition {
    const fn quiet(state: PanelState) -> Self {
        Self {
            state,
            applied: None,
        }
    }
}

impl PanelState {
    /// Closed panel whose draft mirrors `applied`.
    #[must_use]
    pub const fn new(applied: ArticleState) -> Self {
        Self {
            open: false,
            draft: applied,
        }
    }

    /// Whether the form is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Pending selection shown by the form controls.
    #[must_use]
    pub const fn draft(&self) -> ArticleState {
        self.draft
    }

    /// Compute the next panel state for `action`.
    ///
    /// `applied` is the parent's current state, used to seed the draft when
    /// the panel opens. [`PanelAction::Sync`] carries its own replacement state.
    ///
    /// # Errors
    /// Returns [`crate::OptionError::MismatchedOption`] when a change carries an
    /// option from another attribute's set; the caller keeps its current state.
    pub fn reduce(
        &self,
        applied: &ArticleState,
        action: PanelAction,
    ) -> OptionResult<PanelTransition> {
        let transition = match action {
            PanelAction::Toggle if self.open => {
                debug!("settings panel closed by toggle");
                PanelTransition::quiet(self.closed())
            }
            PanelAction::Toggle => {
                debug!("settings panel opened");
                PanelTransition::quiet(Self {
                    open: true,
                    draft: *applied,
                })
            }
            PanelAction::OutsideClick if self.open => {
                debug!("settings panel closed by outside click");
                PanelTransition::quiet(self.closed())
            }
            PanelAction::OutsideClick => PanelTransition::quiet(*self),
            PanelAction::Change { attribute, option } => {
                let draft = self.draft.with_option(attribute, option).inspect_err(|err| {
                    warn!(%attribute, value = option.value(), error = %err, "rejected draft change");
                })?;
                debug!(%attribute, value = option.value(), "draft updated");
                PanelTransition::quiet(Self { draft, ..*self })
            }
            PanelAction::Apply => {
                info!(style = %self.draft.inline_style(), "applying article settings");
                PanelTransition {
                    state: self.closed(),
                    applied: Some(self.draft),
                }
            }
            PanelAction::Reset => {
                info!("resetting article settings to defaults");
                PanelTransition {
                    state: Self {
                        open: false,
                        draft: DEFAULT_ARTICLE_STATE,
                    },
                    applied: Some(DEFAULT_ARTICLE_STATE),
                }
            }
            PanelAction::Sync(external) if !self.open => {
                debug!("draft synced from applied state");
                PanelTransition::quiet(Self {
                    open: false,
                    draft: external,
                })
            }
            PanelAction::Sync(_) => PanelTransition::quiet(*self),
        };
        Ok(transition)
    }

    const fn closed(&self) -> Self {
        Self {
            open: false,
            draft: self.draft,
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLE_STATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;
    use crate::options::{BACKGROUND_COLORS, FONT_COLORS};

    fn option(attribute: ArticleAttribute, value: &str) -> ArticleOption {
        attribute.find(value).expect("catalog option")
    }

    fn step(state: &PanelState, applied: &ArticleState, action: PanelAction) -> PanelTransition {
        state.reduce(applied, action).expect("valid action")
    }

    #[test]
    fn toggle_flips_open_flag() {
        let applied = ArticleState::default();
        let opened = step(&PanelState::new(applied), &applied, PanelAction::Toggle);
        assert!(opened.state.is_open());
        assert_eq!(opened.applied, None);
        let closed = step(&opened.state, &applied, PanelAction::Toggle);
        assert!(!closed.state.is_open());
        assert_eq!(closed.applied, None);
    }

    #[test]
    fn change_touches_only_one_draft_field() {
        let applied = ArticleState::default();
        let open = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        for attribute in ArticleAttribute::all() {
            let replacement = *attribute
                .options()
                .iter()
                .find(|candidate| **candidate != open.draft().get(attribute))
                .expect("set has alternatives");
            let next = step(
                &open,
                &applied,
                PanelAction::Change {
                    attribute,
                    option: replacement,
                },
            );
            assert_eq!(next.applied, None);
            assert!(next.state.is_open());
            assert_eq!(next.state.draft().get(attribute), replacement);
            for other in ArticleAttribute::all()
                .into_iter()
                .filter(|other| *other != attribute)
            {
                assert_eq!(next.state.draft().get(other), open.draft().get(other));
            }
        }
    }

    #[test]
    fn mismatched_change_is_rejected() {
        let applied = ArticleState::default();
        let open = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        let err = open
            .reduce(
                &applied,
                PanelAction::Change {
                    attribute: ArticleAttribute::BackgroundColor,
                    option: FONT_COLORS[3],
                },
            )
            .expect_err("font colour in background slot");
        assert!(matches!(err, OptionError::MismatchedOption { .. }));
    }

    #[test]
    fn apply_emits_draft_and_closes() {
        let applied = ArticleState::default();
        let mut state = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        state = step(
            &state,
            &applied,
            PanelAction::Change {
                attribute: ArticleAttribute::BackgroundColor,
                option: BACKGROUND_COLORS[7],
            },
        )
        .state;
        let applied_now = step(&state, &applied, PanelAction::Apply);
        assert!(!applied_now.state.is_open());
        let emitted = applied_now.applied.expect("apply emits");
        assert_eq!(emitted.background_color().value(), "#6FC1FD");
        assert_eq!(emitted.font_family(), applied.font_family());
    }

    #[test]
    fn reset_emits_defaults_regardless_of_edits() {
        let applied = ArticleState::default()
            .with_option(
                ArticleAttribute::FontSize,
                option(ArticleAttribute::FontSize, "38px"),
            )
            .expect("size");
        let mut state = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        state = step(
            &state,
            &applied,
            PanelAction::Change {
                attribute: ArticleAttribute::FontFamily,
                option: option(ArticleAttribute::FontFamily, "Days One"),
            },
        )
        .state;
        let reset = step(&state, &applied, PanelAction::Reset);
        assert_eq!(reset.applied, Some(DEFAULT_ARTICLE_STATE));
        assert_eq!(reset.state.draft(), DEFAULT_ARTICLE_STATE);
        assert!(!reset.state.is_open());
    }

    #[test]
    fn outside_click_closes_without_emitting() {
        let applied = ArticleState::default();
        let open = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        let closed = step(&open, &applied, PanelAction::OutsideClick);
        assert!(!closed.state.is_open());
        assert_eq!(closed.applied, None);
    }

    #[test]
    fn outside_click_while_closed_is_a_no_op() {
        let applied = ArticleState::default();
        let panel = PanelState::new(applied);
        let next = step(&panel, &applied, PanelAction::OutsideClick);
        assert_eq!(next.state, panel);
        assert_eq!(next.applied, None);
    }

    #[test]
    fn reopening_discards_abandoned_edits() {
        let applied = ArticleState::default();
        let mut state = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        state = step(
            &state,
            &applied,
            PanelAction::Change {
                attribute: ArticleAttribute::ContentWidth,
                option: option(ArticleAttribute::ContentWidth, "1394px"),
            },
        )
        .state;
        state = step(&state, &applied, PanelAction::OutsideClick).state;
        state = step(&state, &applied, PanelAction::Toggle).state;
        assert!(state.is_open());
        assert_eq!(state.draft(), applied);
    }

    #[test]
    fn sync_while_closed_refreshes_draft() {
        let applied = ArticleState::default();
        let panel = PanelState::new(applied);
        let external = applied
            .with_option(
                ArticleAttribute::FontColor,
                option(ArticleAttribute::FontColor, "#80D994"),
            )
            .expect("green");
        let next = step(&panel, &external, PanelAction::Sync(external));
        assert!(!next.state.is_open());
        assert_eq!(next.state.draft(), external);
        assert_eq!(next.applied, None);
    }

    #[test]
    fn sync_while_open_keeps_pending_edits() {
        let applied = ArticleState::default();
        let mut state = step(&PanelState::new(applied), &applied, PanelAction::Toggle).state;
        state = step(
            &state,
            &applied,
            PanelAction::Change {
                attribute: ArticleAttribute::FontSize,
                option: option(ArticleAttribute::FontSize, "25px"),
            },
        )
        .state;
        let edited = state.draft();
        let next = step(
            &state,
            &DEFAULT_ARTICLE_STATE,
            PanelAction::Sync(DEFAULT_ARTICLE_STATE),
        );
        assert!(next.state.is_open());
        assert_eq!(next.state.draft(), edited);
        assert_eq!(next.applied, None);
    }
}
