//! Compile-time option catalog for every styled article attribute.
//!
//! # Design
//! - Options can only be obtained from the catalog, so any value held by
//!   [`crate::ArticleState`] is guaranteed to be a member of its set.
//! - String values coming from form controls are mapped back through
//!   [`ArticleAttribute::find`].

use std::fmt;

use serde::Serialize;

use crate::error::{OptionError, OptionResult};

/// One labelled value from a fixed choice set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleOption {
    title: &'static str,
    value: &'static str,
    class_name: &'static str,
    option_class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    const fn with_hint(
        title: &'static str,
        value: &'static str,
        class_name: &'static str,
        option_class_name: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: Some(option_class_name),
        }
    }

    /// Label shown in form controls.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// CSS value applied to the article.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        self.value
    }

    /// Class used to style the option itself (e.g. a font preview).
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Optional display hint class for list entries (colour swatches).
    #[must_use]
    pub const fn option_class_name(&self) -> Option<&'static str> {
        self.option_class_name
    }
}

impl fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}

/// Font families offered by the panel.
pub const FONT_FAMILY_OPTIONS: [ArticleOption; 5] = [
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

/// Font sizes offered by the radio group.
pub const FONT_SIZE_OPTIONS: [ArticleOption; 3] = [
    ArticleOption::new("18px", "18px", "font-size-18"),
    ArticleOption::new("25px", "25px", "font-size-25"),
    ArticleOption::new("38px", "38px", "font-size-38"),
];

/// Text colours.
pub const FONT_COLORS: [ArticleOption; 9] = [
    ArticleOption::with_hint("Черный", "#000000", "font-black", "option-black"),
    ArticleOption::with_hint("Белый", "#FFFFFF", "font-white", "option-white"),
    ArticleOption::with_hint("Серый", "#C4C4C4", "font-gray", "option-gray"),
    ArticleOption::with_hint("Розовый", "#FEAFE8", "font-pink", "option-pink"),
    ArticleOption::with_hint("Ярко-розовый", "#FD24AF", "font-fuchsia", "option-fuchsia"),
    ArticleOption::with_hint("Жёлтый", "#FFC802", "font-yellow", "option-yellow"),
    ArticleOption::with_hint("Зелёный", "#80D994", "font-green", "option-green"),
    ArticleOption::with_hint("Голубой", "#6FC1FD", "font-blue", "option-blue"),
    ArticleOption::with_hint("Фиолетовый", "#5F00FF", "font-purple", "option-purple"),
];

/// Page background colours.
pub const BACKGROUND_COLORS: [ArticleOption; 9] = [
    ArticleOption::with_hint("Белый", "#FFFFFF", "bg-white", "option-white"),
    ArticleOption::with_hint("Черный", "#000000", "bg-black", "option-black"),
    ArticleOption::with_hint("Серый", "#C4C4C4", "bg-gray", "option-gray"),
    ArticleOption::with_hint("Розовый", "#FEAFE8", "bg-pink", "option-pink"),
    ArticleOption::with_hint("Ярко-розовый", "#FD24AF", "bg-fuchsia", "option-fuchsia"),
    ArticleOption::with_hint("Жёлтый", "#FFC802", "bg-yellow", "option-yellow"),
    ArticleOption::with_hint("Зелёный", "#80D994", "bg-green", "option-green"),
    ArticleOption::with_hint("Голубой", "#6FC1FD", "bg-blue", "option-blue"),
    ArticleOption::with_hint("Фиолетовый", "#5F00FF", "bg-purple", "option-purple"),
];

/// Article container widths.
pub const CONTENT_WIDTHS: [ArticleOption; 3] = [
    ArticleOption::with_hint("Широкий", "1394px", "width-wide", "option-wide"),
    ArticleOption::with_hint("Средний", "1200px", "width-medium", "option-medium"),
    ArticleOption::with_hint("Узкий", "800px", "width-narrow", "option-narrow"),
];

/// Article attributes the panel can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleAttribute {
    /// Typeface for the article text.
    FontFamily,
    /// Base font size.
    FontSize,
    /// Text colour.
    FontColor,
    /// Page background colour.
    BackgroundColor,
    /// Maximum width of the article container.
    ContentWidth,
}

impl ArticleAttribute {
    /// All attributes in form order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
        ]
    }

    /// Stable key used for form control names and translation lookups.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    /// CSS custom property driven by this attribute.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }

    /// The enumerated option set for this attribute.
    #[must_use]
    pub const fn options(self) -> &'static [ArticleOption] {
        match self {
            Self::FontFamily => &FONT_FAMILY_OPTIONS,
            Self::FontSize => &FONT_SIZE_OPTIONS,
            Self::FontColor => &FONT_COLORS,
            Self::BackgroundColor => &BACKGROUND_COLORS,
            Self::ContentWidth => &CONTENT_WIDTHS,
        }
    }

    /// Whether `option` is a member of this attribute's set.
    #[must_use]
    pub fn contains(self, option: &ArticleOption) -> bool {
        self.options().contains(option)
    }

    /// Map a control value back to its catalog option.
    ///
    /// # Errors
    /// Returns [`OptionError::UnknownOption`] when no option in the set carries `value`.
    pub fn find(self, value: &str) -> OptionResult<ArticleOption> {
        self.options()
            .iter()
            .copied()
            .find(|option| option.value == value)
            .ok_or_else(|| OptionError::UnknownOption {
                attribute: self,
                value: value.to_string(),
            })
    }

    /// Parse a form key into an attribute.
    ///
    /// # Errors
    /// Returns [`OptionError::UnknownAttribute`] for keys outside [`Self::all`].
    pub fn from_key(key: &str) -> OptionResult<Self> {
        Self::all()
            .into_iter()
            .find(|attribute| attribute.key() == key)
            .ok_or_else(|| OptionError::UnknownAttribute {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for ArticleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_maps_values_to_catalog_entries() {
        let option = ArticleAttribute::ContentWidth
            .find("1200px")
            .expect("medium width");
        assert_eq!(option.title(), "Средний");
        assert_eq!(option.class_name(), "width-medium");
    }

    #[test]
    fn find_rejects_values_from_other_sets() {
        let err = ArticleAttribute::FontSize
            .find("1394px")
            .expect_err("width is not a font size");
        assert_eq!(
            err,
            OptionError::UnknownOption {
                attribute: ArticleAttribute::FontSize,
                value: "1394px".to_string(),
            }
        );
    }

    #[test]
    fn shared_colour_values_stay_attribute_specific() {
        let font_white = ArticleAttribute::FontColor.find("#FFFFFF").expect("font white");
        let bg_white = ArticleAttribute::BackgroundColor
            .find("#FFFFFF")
            .expect("bg white");
        assert_ne!(font_white, bg_white);
        assert!(!ArticleAttribute::BackgroundColor.contains(&font_white));
        assert!(ArticleAttribute::BackgroundColor.contains(&bg_white));
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for attribute in ArticleAttribute::all() {
            assert_eq!(ArticleAttribute::from_key(attribute.key()), Ok(attribute));
        }
        assert!(matches!(
            ArticleAttribute::from_key("line_height"),
            Err(OptionError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn option_values_are_unique_within_each_set() {
        for attribute in ArticleAttribute::all() {
            let options = attribute.options();
            for (idx, option) in options.iter().enumerate() {
                assert!(
                    options[idx + 1..]
                        .iter()
                        .all(|other| other.value() != option.value()),
                    "duplicate value {} in {attribute}",
                    option.value()
                );
            }
        }
    }

    #[test]
    fn colour_options_carry_swatch_hints() {
        assert!(FONT_COLORS.iter().all(|o| o.option_class_name().is_some()));
        assert!(FONT_FAMILY_OPTIONS.iter().all(|o| o.option_class_name().is_none()));
    }

    #[test]
    fn every_option_value_maps_back_to_itself() {
        for attribute in ArticleAttribute::all() {
            for option in attribute.options() {
                assert_eq!(attribute.find(option.value()).as_ref(), Ok(option));
            }
        }
    }
}
