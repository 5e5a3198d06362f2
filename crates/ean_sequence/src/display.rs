//! Textual rendering of sequences.
//!
//! The default form is `Sequence[e1, e2, ..., en]`, and `Sequence[]` when
//! empty. [`DisplayConfig`] changes the label, brackets, separator, or
//! truncates long sequences.

use std::borrow::Cow;
use std::fmt;

use crate::Sequence;

/// Rendering options for [`Sequence`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Text written before the opening bracket.
    pub label: Cow<'static, str>,

    /// Opening bracket.
    pub open: Cow<'static, str>,

    /// Closing bracket.
    pub close: Cow<'static, str>,

    /// Written between consecutive elements.
    pub separator: Cow<'static, str>,

    /// Maximum number of elements written before eliding the rest as `...`
    /// (`None` = unlimited).
    pub max_items: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("Sequence"),
            open: Cow::Borrowed("["),
            close: Cow::Borrowed("]"),
            separator: Cow::Borrowed(", "),
            max_items: None,
        }
    }
}

impl DisplayConfig {
    /// Creates a configuration that writes only the bracketed elements,
    /// like `[1, 2, 3]`.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            label: Cow::Borrowed(""),
            ..Self::default()
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder method to set both brackets.
    #[must_use]
    pub fn with_brackets(
        mut self,
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Builder method to set the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method to limit how many elements are written.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// A [`Sequence`] paired with a [`DisplayConfig`], ready to format.
///
/// Created by [`Sequence::display_with`].
pub struct DisplayWith<'a, T: Clone> {
    sequence: &'a Sequence<T>,
    config: &'a DisplayConfig,
}

impl<T: Clone> Sequence<T> {
    /// Returns a value that formats this sequence using `config`.
    #[must_use]
    pub fn display_with<'a>(&'a self, config: &'a DisplayConfig) -> DisplayWith<'a, T> {
        DisplayWith {
            sequence: self,
            config,
        }
    }
}

impl<T: Clone + fmt::Display> fmt::Display for DisplayWith<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        write!(f, "{}{}", config.label, config.open)?;
        for (i, item) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str(&config.separator)?;
            }
            if config.max_items == Some(i) {
                f.write_str("...")?;
                break;
            }
            write!(f, "{item}")?;
        }
        f.write_str(&config.close)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&DisplayConfig::default()), f)
    }
}
