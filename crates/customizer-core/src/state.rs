//! Applied article styling state.

use serde::Serialize;

use crate::error::{OptionError, OptionResult};
use crate::options::{
    ArticleAttribute, ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// Default selection restored by the panel's reset action.
pub const DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTHS[2],
};

/// One selected option per styled attribute.
///
/// Fields are private so every value is placed through [`ArticleState::with_option`],
/// which keeps each field inside its own option set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleState {
    font_family: ArticleOption,
    font_size: ArticleOption,
    font_color: ArticleOption,
    background_color: ArticleOption,
    content_width: ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        DEFAULT_ARTICLE_STATE
    }
}

impl ArticleState {
    /// Selected typeface.
    #[must_use]
    pub const fn font_family(&self) -> ArticleOption {
        self.font_family
    }

    /// Selected font size.
    #[must_use]
    pub const fn font_size(&self) -> ArticleOption {
        self.font_size
    }

    /// Selected text colour.
    #[must_use]
    pub const fn font_color(&self) -> ArticleOption {
        self.font_color
    }

    /// Selected background colour.
    #[must_use]
    pub const fn background_color(&self) -> ArticleOption {
        self.background_color
    }

    /// Selected container width.
    #[must_use]
    pub const fn content_width(&self) -> ArticleOption {
        self.content_width
    }

    /// Option currently held for `attribute`.
    #[must_use]
    pub const fn get(&self, attribute: ArticleAttribute) -> ArticleOption {
        match attribute {
            ArticleAttribute::FontFamily => self.font_family,
            ArticleAttribute::FontSize => self.font_size,
            ArticleAttribute::FontColor => self.font_color,
            ArticleAttribute::BackgroundColor => self.background_color,
            ArticleAttribute::ContentWidth => self.content_width,
        }
    }

    /// Copy of this state with one attribute replaced.
    ///
    /// # Errors
    /// Returns [`OptionError::MismatchedOption`] when `option` is not in the
    /// attribute's set.
    pub fn with_option(
        &self,
        attribute: ArticleAttribute,
        option: ArticleOption,
    ) -> OptionResult<Self> {
        if !attribute.contains(&option) {
            return Err(OptionError::MismatchedOption {
                attribute,
                value: option.value(),
            });
        }
        let mut next = *self;
        match attribute {
            ArticleAttribute::FontFamily => next.font_family = option,
            ArticleAttribute::FontSize => next.font_size = option,
            ArticleAttribute::FontColor => next.font_color = option,
            ArticleAttribute::BackgroundColor => next.background_color = option,
            ArticleAttribute::ContentWidth => next.content_width = option,
        }
        Ok(next)
    }

    /// CSS custom properties for the article container, in attribute order.
    #[must_use]
    pub fn style_vars(&self) -> [(&'static str, &'static str); 5] {
        ArticleAttribute::all().map(|attribute| (attribute.css_var(), self.get(attribute).value()))
    }

    /// Inline `style` attribute value built from [`Self::style_vars`].
    #[must_use]
    pub fn inline_style(&self) -> String {
        self.style_vars()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
