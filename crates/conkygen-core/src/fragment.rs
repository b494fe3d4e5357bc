//! Structured macro fragments.
//!
//! Every formatter primitive returns a [`Fragment`]: the rendered macro text
//! plus what the fragment does to the color and font channels. Line assembly
//! runs a small state machine over these effects instead of re-parsing
//! rendered macro syntax, which is how it knows whether a style was left open
//! at the end of a line.

use std::fmt;

/// What a fragment does to one style channel (color or font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleEffect {
    /// The channel is untouched
    #[default]
    None,
    /// The fragment's last change on this channel sets a non-default style
    Opens,
    /// The fragment's last change on this channel restores the default
    Closes,
}

/// A piece of rendered macro text with its style effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    color_effect: StyleEffect,
    font_effect: StyleEffect,
}

impl Fragment {
    /// A fragment with explicit effects on both channels.
    #[must_use]
    pub const fn new(text: String, color_effect: StyleEffect, font_effect: StyleEffect) -> Self {
        Self {
            text,
            color_effect,
            font_effect,
        }
    }

    /// A neutral fragment: any value rendered verbatim, no style change.
    #[must_use]
    pub fn text(value: impl fmt::Display) -> Self {
        Self::new(value.to_string(), StyleEffect::None, StyleEffect::None)
    }

    /// A fragment that opens a color.
    #[must_use]
    pub const fn color_open(text: String) -> Self {
        Self::new(text, StyleEffect::Opens, StyleEffect::None)
    }

    /// A fragment that closes the color channel.
    #[must_use]
    pub const fn color_close(text: String) -> Self {
        Self::new(text, StyleEffect::Closes, StyleEffect::None)
    }

    /// A fragment that opens a font.
    #[must_use]
    pub const fn font_open(text: String) -> Self {
        Self::new(text, StyleEffect::None, StyleEffect::Opens)
    }

    /// A fragment that closes the font channel.
    #[must_use]
    pub const fn font_close(text: String) -> Self {
        Self::new(text, StyleEffect::None, StyleEffect::Closes)
    }

    /// Rendered macro text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Effect on the color channel.
    #[must_use]
    pub const fn color_effect(&self) -> StyleEffect {
        self.color_effect
    }

    /// Effect on the font channel.
    #[must_use]
    pub const fn font_effect(&self) -> StyleEffect {
        self.font_effect
    }

    /// Append another fragment. The later fragment's non-neutral effects win,
    /// matching left-to-right evaluation of the combined text.
    #[must_use]
    pub fn join(mut self, other: Self) -> Self {
        self.text.push_str(&other.text);
        if other.color_effect != StyleEffect::None {
            self.color_effect = other.color_effect;
        }
        if other.font_effect != StyleEffect::None {
            self.font_effect = other.font_effect;
        }
        self
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
