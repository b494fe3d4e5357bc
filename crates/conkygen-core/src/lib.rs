//! Core types for the conkygen configuration generator.
//!
//! This crate provides the pieces a design composes into a Conky configuration:
//! - Parameter access: [`ParamTree`]
//! - Style resolution: [`StyleParams`], [`StyleOverrides`], [`Theme`]
//! - Macro construction: [`Fragment`], [`Formatter`]
//!
//! The formatter owns the mapping from abstract display primitives (colors,
//! fonts, bars, meters, alignment, external-command polling) to exact Conky
//! macro text, including the line-level invariant that every color or font
//! change opened mid-line is closed before the line ends.

mod document;
mod formatter;
mod fragment;
mod params;
mod style;
mod theme;

pub use formatter::{BarOptions, Formatter, MeterOptions, CLOSE_COLOR, CLOSE_FONT};
pub use fragment::{Fragment, StyleEffect};
pub use params::ParamTree;
pub use style::{
    StyleOverrides, StyleParams, DEFAULT_COLOR, DEFAULT_COLOR_OUTLINE, DEFAULT_EXEC_INTERVAL,
    DEFAULT_FONT,
};
pub use theme::Theme;
