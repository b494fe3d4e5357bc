//! Final document assembly.
//!
//! Produces the two sections of a Conky configuration: `conky.config = {...}`
//! (fixed base options merged with the live style and geometry parameters)
//! and `conky.text = [[...]]` wrapping the accumulated line buffer. Line text
//! is emitted as-is; keeping `]]` out of it is the design's responsibility.

use crate::formatter::Formatter;
use crate::style::StyleParams;
use std::fmt;

/// A settings value rendered Lua-style: strings single-quoted, booleans
/// lowercased, numbers bare.
#[derive(Debug, Clone, PartialEq)]
enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for SettingValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Fixed base options, emitted ahead of the live parameters in a fixed order
/// so output is deterministic for a given input.
fn base_settings() -> Vec<(&'static str, SettingValue)> {
    vec![
        ("background", true.into()),
        ("use_xft", true.into()),
        ("xftalpha", 1i64.into()),
        ("total_run_times", 0i64.into()),
        ("own_window", true.into()),
        ("own_window_type", "normal".into()),
        (
            "own_window_hints",
            "undecorated,below,sticky,skip_taskbar,skip_pager".into(),
        ),
        ("own_window_argb_visual", true.into()),
        ("own_window_argb_value", 127i64.into()),
        ("own_window_transparent", false.into()),
        ("double_buffer", true.into()),
        ("draw_shades", false.into()),
        ("draw_outline", false.into()),
        ("draw_borders", false.into()),
        ("draw_graph_borders", true.into()),
        ("no_buffers", true.into()),
        ("uppercase", false.into()),
        ("cpu_avg_samples", 2i64.into()),
        ("override_utf8_locale", false.into()),
        ("short_units", true.into()),
        ("default_shade_color", "black".into()),
    ]
}

fn settings(params: &StyleParams) -> Vec<(&'static str, SettingValue)> {
    let mut entries = base_settings();
    entries.extend([
        ("alignment", params.placement.as_str().into()),
        ("border_outer_margin", params.window_outer_margin.into()),
        ("default_color", params.color_default.as_str().into()),
        (
            "default_outline_color",
            params.color_outline.as_str().into(),
        ),
        ("font", params.font_default.as_str().into()),
        ("gap_x", params.window_gap.into()),
        ("gap_y", params.window_gap.into()),
        ("update_interval", params.refresh_interval.into()),
        ("minimum_width", params.window_width_min.into()),
        ("minimum_height", params.window_height_min.into()),
    ]);
    entries
}

fn render_settings(params: &StyleParams) -> String {
    let body = settings(params)
        .iter()
        .map(|(name, value)| format!("    {name} = {value}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("conky.config = {{\n{body}\n}}")
}

fn render_text(lines: &[String]) -> String {
    format!("conky.text = [[\n{}\n]]", lines.join("\n"))
}

impl Formatter {
    /// Assemble the complete configuration document: the settings section and
    /// the text section, joined by a blank line.
    #[must_use]
    pub fn generate(&self) -> String {
        format!(
            "{}\n\n{}",
            render_settings(self.params()),
            render_text(self.lines())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleOverrides;

    #[test]
    fn test_setting_value_rendering() {
        assert_eq!(SettingValue::from(true).to_string(), "true");
        assert_eq!(SettingValue::from(false).to_string(), "false");
        assert_eq!(SettingValue::from(42i64).to_string(), "42");
        assert_eq!(SettingValue::from("normal").to_string(), "'normal'");
    }

    #[test]
    fn test_settings_include_live_parameters() {
        let params = StyleParams::default();
        let section = render_settings(&params);
        assert!(section.starts_with("conky.config = {\n"));
        assert!(section.ends_with('}'));
        assert!(section.contains("    alignment = 'top_left',"));
        assert!(section.contains("    default_color = 'ffffff',"));
        assert!(section.contains("    font = 'FreeSans:size=12',"));
        assert!(section.contains("    update_interval = 1,"));
        assert!(section.contains("    minimum_width = 200,"));
        // Last entry has no trailing comma.
        assert!(section.contains("    minimum_height = 500\n}"));
    }

    #[test]
    fn test_settings_reflect_overrides() {
        let mut params = StyleParams::default();
        params.apply(&StyleOverrides {
            placement: Some("bottom_right".to_string()),
            window_gap: Some(24),
            ..StyleOverrides::default()
        });
        let section = render_settings(&params);
        assert!(section.contains("    alignment = 'bottom_right',"));
        assert!(section.contains("    gap_x = 24,"));
        assert!(section.contains("    gap_y = 24,"));
    }

    #[test]
    fn test_base_settings_order_is_fixed() {
        let names: Vec<&str> = base_settings().iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "background");
        assert_eq!(names[names.len() - 1], "default_shade_color");
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn test_text_section_wraps_lines() {
        let lines = vec!["one".to_string(), String::new(), "two".to_string()];
        assert_eq!(render_text(&lines), "conky.text = [[\none\n\ntwo\n]]");
    }

    #[test]
    fn test_generate_joins_sections() {
        let mut f = Formatter::new();
        f.line(vec![f.host_name()]);
        let document = f.generate();
        let sections: Vec<&str> = document.split("\n\n").collect();
        assert!(sections[0].starts_with("conky.config = {"));
        assert!(document.contains("conky.text = [[\n${nodename}\n]]"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut f = Formatter::new();
        f.block(vec![vec![f.kernel()]], Some("SYSTEM"), None);
        assert_eq!(f.generate(), f.generate());
    }
}
