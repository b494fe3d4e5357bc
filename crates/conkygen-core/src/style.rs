//! Style and geometry parameters with default-merge resolution.
//!
//! [`StyleParams`] holds the live values consulted by the formatter; every
//! field has a baked-in default. [`StyleOverrides`] is the partial record a
//! caller supplies: only fields that are `Some` replace the live value, so
//! successive merges are last-wins per field and nothing resets to default.

use crate::params::ParamTree;
use serde::Deserialize;

/// Default foreground color (bare hex, no `#`).
pub const DEFAULT_COLOR: &str = "ffffff";
/// Default outline color.
pub const DEFAULT_COLOR_OUTLINE: &str = "808080";
/// Default font specification.
pub const DEFAULT_FONT: &str = "FreeSans:size=12";
/// Default throttle interval for external commands, in seconds.
pub const DEFAULT_EXEC_INTERVAL: u32 = 3600;

macro_rules! style_fields {
    ($(($field:ident, $ty:ty, $default:expr)),* $(,)?) => {
        /// Live style parameters consulted by the formatter.
        #[derive(Debug, Clone, PartialEq)]
        pub struct StyleParams {
            $(pub $field: $ty,)*
        }

        /// Partial style record; `None` fields leave the live value untouched.
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct StyleOverrides {
            $(pub $field: Option<$ty>,)*
        }

        impl Default for StyleParams {
            fn default() -> Self {
                Self { $($field: $default,)* }
            }
        }

        impl StyleParams {
            /// Merge a partial record into the live parameters.
            ///
            /// Only fields explicitly set in `overrides` are replaced.
            pub fn apply(&mut self, overrides: &StyleOverrides) {
                $(
                    if let Some(value) = &overrides.$field {
                        self.$field = value.clone();
                    }
                )*
            }
        }
    };
}

style_fields! {
    // Per-role colors, stored as bare hex digit strings.
    (color_default, String, DEFAULT_COLOR.to_string()),
    (color_outline, String, DEFAULT_COLOR_OUTLINE.to_string()),
    (color_graph_border, String, "606060".to_string()),
    (color_heading, String, "ffffff".to_string()),
    (color_label, String, "b0b0b0".to_string()),
    (color_data, String, "ffffff".to_string()),
    (color_time, String, "ffffff".to_string()),
    (color_date, String, "b0b0b0".to_string()),
    (color_cpu, String, "ffa000".to_string()),
    (color_memory, String, "00a0ff".to_string()),
    (color_filesystem, String, "00c060".to_string()),
    // Per-role fonts.
    (font_default, String, DEFAULT_FONT.to_string()),
    (font_heading, String, "FreeSans:bold:size=14".to_string()),
    (font_label, String, DEFAULT_FONT.to_string()),
    (font_data, String, DEFAULT_FONT.to_string()),
    (font_time, String, "FreeSans:size=24".to_string()),
    (font_date, String, DEFAULT_FONT.to_string()),
    // strftime-style formats for the time/date primitives.
    (time_format, String, "%H:%M".to_string()),
    (date_format, String, "%Y-%m-%d".to_string()),
    // Meter/bar geometry defaults.
    (meter_width, u32, 100),
    (meter_height, u32, 25),
    (bar_width, u32, 100),
    (bar_height, u32, 10),
    // Polling intervals, in seconds.
    (refresh_interval, u32, 1),
    (exec_interval, u32, DEFAULT_EXEC_INTERVAL),
    (network_check_interval, u32, 60),
    (temperature_check_interval, u32, 5),
    // Window geometry.
    (window_width_min, u32, 200),
    (window_height_min, u32, 500),
    (window_outer_margin, u32, 20),
    (window_gap, u32, 10),
    (placement, String, "top_left".to_string()),
    // Sensor output matching for cpu_temperature; `{n}` expands to the CPU
    // number. Driver naming conventions vary, so these stay configurable.
    (sensor_package_pattern, String, "Package id 0:".to_string()),
    (sensor_core_pattern, String, "Core {n}:".to_string()),
}

impl StyleOverrides {
    /// Extract overrides from the `style` and `geometry` sections of a
    /// configuration tree. Absent sections and absent keys contribute nothing.
    #[must_use]
    pub fn from_params(params: &ParamTree) -> Self {
        let style = params.get("style");
        let geometry = params.get("geometry");
        let text = |node: &ParamTree| node.as_str().map(str::to_string);

        Self {
            color_default: text(style.get("color_default")),
            color_outline: text(style.get("color_outline")),
            color_graph_border: text(style.get("color_graph_border")),
            color_heading: text(style.get("color_heading")),
            color_label: text(style.get("color_label")),
            color_data: text(style.get("color_data")),
            color_time: text(style.get("color_time")),
            color_date: text(style.get("color_date")),
            color_cpu: text(style.get("color_cpu")),
            color_memory: text(style.get("color_memory")),
            color_filesystem: text(style.get("color_filesystem")),
            font_default: text(style.get("font_default")),
            font_heading: text(style.get("font_heading")),
            font_label: text(style.get("font_label")),
            font_data: text(style.get("font_data")),
            font_time: text(style.get("font_time")),
            font_date: text(style.get("font_date")),
            time_format: text(style.get("time_format")),
            date_format: text(style.get("date_format")),
            meter_width: style.get("meter_width").as_u32(),
            meter_height: style.get("meter_height").as_u32(),
            bar_width: style.get("bar_width").as_u32(),
            bar_height: style.get("bar_height").as_u32(),
            refresh_interval: style.get("refresh_interval").as_u32(),
            exec_interval: style.get("exec_interval").as_u32(),
            network_check_interval: style.get("network_check_interval").as_u32(),
            temperature_check_interval: style.get("temperature_check_interval").as_u32(),
            window_width_min: geometry.get("width_min").as_u32(),
            window_height_min: geometry.get("height_min").as_u32(),
            window_outer_margin: geometry.get("outer_margin").as_u32(),
            window_gap: geometry.get("gap").as_u32(),
            placement: text(geometry.get("placement")),
            sensor_package_pattern: text(style.get("sensor_package_pattern")),
            sensor_core_pattern: text(style.get("sensor_core_pattern")),
        }
    }
}
