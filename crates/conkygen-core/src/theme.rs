//! Named color and font roles.
//!
//! A theme maps short role keys (e.g. `"cpu"`, `"heading"`) to concrete color
//! or font specifications, so design code can reference roles instead of
//! literal values. A key with no theme entry resolves to itself: unknown specs
//! are treated as literal values, never as errors.

use crate::params::ParamTree;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role-to-specification mappings for colors and fonts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Role key to bare-hex color spec
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Role key to font spec
    #[serde(default)]
    pub fonts: HashMap<String, String>,
}

impl Theme {
    /// Build a theme from the `theme.colors` / `theme.fonts` sections of a
    /// configuration tree. Absent sections yield an empty theme.
    #[must_use]
    pub fn from_params(params: &ParamTree) -> Self {
        let collect = |node: &ParamTree| {
            node.entries()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.to_string(), v.to_string())))
                .collect()
        };
        Self {
            colors: collect(params.path("theme.colors")),
            fonts: collect(params.path("theme.fonts")),
        }
    }

    /// Add or replace color roles.
    pub fn extend_colors<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.colors.extend(entries);
    }

    /// Add or replace font roles.
    pub fn extend_fonts<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.fonts.extend(entries);
    }

    /// Resolve a color spec through the theme, falling back to the literal.
    #[must_use]
    pub fn resolve_color<'a>(&'a self, spec: &'a str) -> &'a str {
        self.colors.get(spec).map_or(spec, String::as_str)
    }

    /// Resolve a font spec through the theme, falling back to the literal.
    #[must_use]
    pub fn resolve_font<'a>(&'a self, spec: &'a str) -> &'a str {
        self.fonts.get(spec).map_or(spec, String::as_str)
    }
}
