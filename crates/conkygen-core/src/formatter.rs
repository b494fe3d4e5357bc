//! Conky macro formatter.
//!
//! One operation per abstract display primitive; each returns a [`Fragment`]
//! of exact macro text. [`Formatter::line`] concatenates fragments and closes
//! any color or font change still open at the end of the line, so styling
//! never bleeds into the next line of output. [`Formatter::block`] groups
//! lines under an optional heading with blank-line separation between blocks.

use crate::fragment::{Fragment, StyleEffect};
use crate::style::{StyleOverrides, StyleParams};
use crate::theme::Theme;
use std::fmt;

/// Macro that restores the default color.
pub const CLOSE_COLOR: &str = "${color}";
/// Macro that restores the default font.
pub const CLOSE_FONT: &str = "${font}";

/// Optional inputs for [`Formatter::meter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeterOptions {
    /// Graph width; falls back to the configured meter width
    pub width: Option<u32>,
    /// Graph height; falls back to the configured meter height
    pub height: Option<u32>,
    /// Graph parameter (varies by graph type, e.g. `cpu0`)
    pub param: Option<String>,
    /// Gradient color #1, bare hex
    pub graph_color1: Option<String>,
    /// Gradient color #2, bare hex
    pub graph_color2: Option<String>,
    /// Border color, theme-resolved
    pub border_color: Option<String>,
}

/// Optional inputs for [`Formatter::bar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarOptions {
    /// Bar width; falls back to the configured bar width
    pub width: Option<u32>,
    /// Bar height; falls back to the configured bar height
    pub height: Option<u32>,
    /// Bar color, theme-resolved
    pub color: Option<String>,
    /// Bar parameter (varies by bar type, e.g. a mountpoint)
    pub param: Option<String>,
}

/// Conky macro generator with an append-only line buffer.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    params: StyleParams,
    theme: Theme,
    lines: Vec<String>,
}

impl Formatter {
    /// A formatter with default parameters and an empty theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter with the given theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Live style parameters.
    #[must_use]
    pub const fn params(&self) -> &StyleParams {
        &self.params
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Lines accumulated so far, in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Merge a partial parameter record into the live parameters.
    ///
    /// Applies immediately and affects all subsequently formatted primitives;
    /// already-buffered lines are not revisited.
    pub fn set_parameters(&mut self, overrides: &StyleOverrides) {
        self.params.apply(overrides);
    }

    /// Add or replace color theme roles.
    pub fn color_theme<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.theme.extend_colors(entries);
    }

    /// Add or replace font theme roles.
    pub fn font_theme<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.theme.extend_fonts(entries);
    }

    // ------------------------------------------------------------------
    // Style primitives
    // ------------------------------------------------------------------

    /// Any value rendered verbatim.
    pub fn text(&self, value: impl fmt::Display) -> Fragment {
        Fragment::text(value)
    }

    /// `${color #hex}` for a spec (theme-resolved), `${color}` for `None`.
    pub fn color(&self, spec: Option<&str>) -> Fragment {
        match spec {
            Some(spec) => {
                let hex = self.theme.resolve_color(spec);
                Fragment::color_open(format!("${{color #{hex}}}"))
            }
            None => self.color_clear(),
        }
    }

    /// `${colorN}` to set an indexed color.
    pub fn color_index(&self, index: u8) -> Fragment {
        Fragment::color_open(format!("${{color{index}}}"))
    }

    /// `${color}` to restore the default color.
    pub fn color_clear(&self) -> Fragment {
        Fragment::color_close(CLOSE_COLOR.to_string())
    }

    /// `${font spec}` for a spec (theme-resolved), `${font}` for `None`.
    pub fn font(&self, spec: Option<&str>) -> Fragment {
        match spec {
            Some(spec) => {
                let font = self.theme.resolve_font(spec);
                Fragment::font_open(format!("${{font {font}}}"))
            }
            None => self.font_clear(),
        }
    }

    /// `${font}` to restore the default font.
    pub fn font_clear(&self) -> Fragment {
        Fragment::font_close(CLOSE_FONT.to_string())
    }

    /// `${alignc}`: center subsequent items of the current line.
    pub fn center(&self) -> Fragment {
        Fragment::text("${alignc}")
    }

    /// `${alignr}`: right-justify subsequent items of the current line.
    pub fn right(&self) -> Fragment {
        Fragment::text("${alignr}")
    }

    /// `${time format}` with a strftime-style format string.
    pub fn time_date(&self, format: &str) -> Fragment {
        Fragment::text(format!("${{time {format}}}"))
    }

    /// `${hr}` horizontal rule.
    pub fn horizontal_rule(&self) -> Fragment {
        Fragment::text("${hr}")
    }

    /// `${offset x}` and/or `${voffset y}`; each only emitted when non-zero.
    pub fn offset(&self, x: i32, y: i32) -> Fragment {
        let mut text = String::new();
        if x != 0 {
            text.push_str(&format!("${{offset {x}}}"));
        }
        if y != 0 {
            text.push_str(&format!("${{voffset {y}}}"));
        }
        Fragment::text(text)
    }

    /// External command output.
    ///
    /// `Some(0)` runs on every refresh (`${exec ...}`); `None` throttles at
    /// the configured default interval; any other value throttles at that
    /// interval (`${execi ...}`).
    pub fn exec(&self, command: &str, interval: Option<u32>) -> Fragment {
        match interval {
            Some(0) => Fragment::text(format!("${{exec {command}}}")),
            Some(secs) => Fragment::text(format!("${{execi {secs} {command}}}")),
            None => {
                let secs = self.params.exec_interval;
                Fragment::text(format!("${{execi {secs} {command}}}"))
            }
        }
    }

    /// Graph meter: optional border color prefix plus
    /// `${type[ param] height,width[ color1[ color2]]}`.
    pub fn meter(&self, graph_type: &str, options: &MeterOptions) -> Fragment {
        let width = options.width.unwrap_or(self.params.meter_width);
        let height = options.height.unwrap_or(self.params.meter_height);
        let param = options
            .param
            .as_deref()
            .map(|p| format!(" {p}"))
            .unwrap_or_default();
        let colors = match (&options.graph_color1, &options.graph_color2) {
            (Some(c1), Some(c2)) => format!(" {c1} {c2}"),
            (Some(c), None) | (None, Some(c)) => format!(" {c}"),
            (None, None) => String::new(),
        };
        let graph = Fragment::text(format!("${{{graph_type}{param} {height},{width}{colors}}}"));
        match options.border_color.as_deref() {
            Some(border) => self.color(Some(border)).join(graph),
            None => graph,
        }
    }

    /// Horizontal bar meter: optional color prefix plus
    /// `${type height,width[ param]}`.
    pub fn bar(&self, bar_type: &str, options: &BarOptions) -> Fragment {
        let width = options.width.unwrap_or(self.params.bar_width);
        let height = options.height.unwrap_or(self.params.bar_height);
        let param = options
            .param
            .as_deref()
            .map(|p| format!(" {p}"))
            .unwrap_or_default();
        let bar = Fragment::text(format!("${{{bar_type} {height},{width}{param}}}"));
        match options.color.as_deref() {
            Some(color) => self.color(Some(color)).join(bar),
            None => bar,
        }
    }

    // ------------------------------------------------------------------
    // Named system metrics
    // ------------------------------------------------------------------

    /// `${nodename}` host name.
    pub fn host_name(&self) -> Fragment {
        Fragment::text("${nodename}")
    }

    /// `${kernel}` kernel name.
    pub fn kernel(&self) -> Fragment {
        Fragment::text("${kernel}")
    }

    /// `${uptime}` or `${uptime_short}`.
    pub fn uptime(&self, short: bool) -> Fragment {
        if short {
            Fragment::text("${uptime_short}")
        } else {
            Fragment::text("${uptime}")
        }
    }

    /// `${addr device}` IP address of a network device.
    pub fn ip_address(&self, device: &str) -> Fragment {
        Fragment::text(format!("${{addr {device}}}"))
    }

    /// MAC address of a network device, via `ip addr` at the network-check
    /// interval.
    pub fn mac_address(&self, device: &str, check_interval: Option<u32>) -> Fragment {
        let command =
            format!("ip addr show dev {device} | awk '/link\\/ether/{{print $2}}'");
        let interval = check_interval.unwrap_or(self.params.network_check_interval);
        self.exec(&command, Some(interval))
    }

    /// External IP address, via a shell pipeline with a 4-hour file cache.
    pub fn external_ip(&self, check_interval: Option<u32>) -> Fragment {
        // Refresh ~/.external_ip when it is older than 4 hours, otherwise
        // serve the cached value.
        let cache = "$HOME/.external_ip";
        let command = format!(
            "[ $(( $(date +%s) - $(test -f {cache} && date -r {cache} +%s || echo 0) )) -gt 14400 ] \
             && {{ curl -s https://ifconfig.me/ | tee {cache}; }} || cat {cache}"
        );
        let interval = check_interval.unwrap_or(self.params.network_check_interval);
        self.exec(&format!("bash -c \"{command}\""), Some(interval))
    }

    /// `${cpu cpu N}%` CPU usage percent.
    pub fn cpu_percent(&self, cpu_number: u32) -> Fragment {
        Fragment::text(format!("${{cpu cpu {cpu_number}}}%"))
    }

    /// CPU temperature in Celsius, parsed out of `sensors` output at the
    /// temperature-check interval.
    ///
    /// The matched label comes from the configured sensor patterns: the
    /// package pattern for CPU 0, the core pattern (with `{n}` expanded)
    /// otherwise.
    pub fn cpu_temperature(&self, cpu_number: u32, check_interval: Option<u32>) -> Fragment {
        let (label, field) = if cpu_number == 0 {
            (self.params.sensor_package_pattern.clone(), 4)
        } else {
            (
                self.params
                    .sensor_core_pattern
                    .replace("{n}", &cpu_number.to_string()),
                3,
            )
        };
        let command = format!("sensors | awk '/{label}/{{print int(${field})}}'");
        let interval = check_interval.unwrap_or(self.params.temperature_check_interval);
        self.exec(&command, Some(interval))
            .join(Fragment::text(" C"))
    }

    /// `${freq_g} GHz` CPU frequency.
    pub fn cpu_frequency(&self) -> Fragment {
        Fragment::text("${freq_g} GHz")
    }

    /// `${top name N}` name of the Nth top CPU consumer.
    pub fn cpu_top_name(&self, top_number: u32) -> Fragment {
        Fragment::text(format!("${{top name {top_number}}}"))
    }

    /// `${top cpu N}%` CPU percent of the Nth top CPU consumer.
    pub fn cpu_top_percent(&self, top_number: u32) -> Fragment {
        Fragment::text(format!("${{top cpu {top_number}}}%"))
    }

    /// CPU usage meter: `${cpugraph cpuN ...}` in the configured CPU color.
    pub fn cpu_meter(&self, cpu_number: u32, width: Option<u32>, height: Option<u32>) -> Fragment {
        self.meter(
            "cpugraph",
            &MeterOptions {
                width,
                height,
                param: Some(format!("cpu{cpu_number}")),
                graph_color1: Some(self.params.color_cpu.clone()),
                graph_color2: None,
                border_color: Some(self.params.color_graph_border.clone()),
            },
        )
    }

    /// `${mem}` memory used.
    pub fn memory_used(&self) -> Fragment {
        Fragment::text("${mem}")
    }

    /// `${memmax}` maximum memory available.
    pub fn memory_maximum(&self) -> Fragment {
        Fragment::text("${memmax}")
    }

    /// `${memperc}%` memory percent used.
    pub fn memory_percent(&self) -> Fragment {
        Fragment::text("${memperc}%")
    }

    /// Slash-separated memory used / maximum / percent.
    pub fn memory_usage_triplet(&self) -> Fragment {
        Fragment::text("${mem} / ${memmax} / ${memperc}%")
    }

    /// `${top_mem name N}` name of the Nth top memory consumer.
    pub fn memory_top_name(&self, top_number: u32) -> Fragment {
        Fragment::text(format!("${{top_mem name {top_number}}}"))
    }

    /// `${top_mem mem N}%` memory percent of the Nth top memory consumer.
    pub fn memory_top_percent(&self, top_number: u32) -> Fragment {
        Fragment::text(format!("${{top_mem mem {top_number}}}%"))
    }

    /// Memory usage bar: `${membar ...}` in the configured memory color.
    pub fn memory_bar(&self, width: Option<u32>, height: Option<u32>) -> Fragment {
        self.bar(
            "membar",
            &BarOptions {
                width,
                height,
                color: Some(self.params.color_memory.clone()),
                param: None,
            },
        )
    }

    /// `${swap}` swap space used.
    pub fn swap_used(&self) -> Fragment {
        Fragment::text("${swap}")
    }

    /// `${swapmax}` maximum swap space available.
    pub fn swap_maximum(&self) -> Fragment {
        Fragment::text("${swapmax}")
    }

    /// `${swapperc}%` swap percent used.
    pub fn swap_percent(&self) -> Fragment {
        Fragment::text("${swapperc}%")
    }

    /// Slash-separated swap used / maximum / percent.
    pub fn swap_usage_triplet(&self) -> Fragment {
        Fragment::text("${swap} / ${swapmax} / ${swapperc}%")
    }

    /// `${fs_used mountpoint}` filesystem space used.
    pub fn filesystem_used(&self, mountpoint: &str) -> Fragment {
        Fragment::text(format!("${{fs_used {mountpoint}}}"))
    }

    /// `${fs_size mountpoint}` filesystem capacity.
    pub fn filesystem_maximum(&self, mountpoint: &str) -> Fragment {
        Fragment::text(format!("${{fs_size {mountpoint}}}"))
    }

    /// `${fs_used_perc mountpoint}%` filesystem percent used.
    pub fn filesystem_percent(&self, mountpoint: &str) -> Fragment {
        Fragment::text(format!("${{fs_used_perc {mountpoint}}}%"))
    }

    /// Slash-separated filesystem used / capacity / percent.
    pub fn filesystem_usage_triplet(&self, mountpoint: &str) -> Fragment {
        Fragment::text(format!(
            "${{fs_used {mountpoint}}} / ${{fs_size {mountpoint}}} / ${{fs_used_perc {mountpoint}}}%"
        ))
    }

    /// `${diskio mountpoint}` filesystem I/O amount.
    pub fn filesystem_io(&self, mountpoint: &str) -> Fragment {
        Fragment::text(format!("${{diskio {mountpoint}}}"))
    }

    /// Filesystem usage bar: `${fs_bar ...}` in the configured filesystem
    /// color.
    pub fn filesystem_bar(
        &self,
        mountpoint: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Fragment {
        self.bar(
            "fs_bar",
            &BarOptions {
                width,
                height,
                color: Some(self.params.color_filesystem.clone()),
                param: Some(mountpoint.to_string()),
            },
        )
    }

    /// Filesystem I/O meter: `${diskiograph ...}` by device name, in the
    /// configured filesystem color.
    pub fn filesystem_io_meter(
        &self,
        device: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Fragment {
        self.meter(
            "diskiograph",
            &MeterOptions {
                width,
                height,
                param: Some(device.to_string()),
                graph_color1: Some(self.params.color_filesystem.clone()),
                graph_color2: None,
                border_color: Some(self.params.color_graph_border.clone()),
            },
        )
    }

    // ------------------------------------------------------------------
    // Line and block assembly
    // ------------------------------------------------------------------

    /// Append a complete line assembled from fragments.
    ///
    /// If the last color or font change in the line opened a non-default
    /// style, the matching close macro is appended, so every line's styling
    /// is self-contained.
    pub fn line<I>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        let text = Self::assemble(fragments);
        self.lines.push(text);
    }

    fn assemble<I>(fragments: I) -> String
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut text = String::new();
        let mut color = StyleEffect::None;
        let mut font = StyleEffect::None;
        for fragment in fragments {
            if fragment.color_effect() != StyleEffect::None {
                color = fragment.color_effect();
            }
            if fragment.font_effect() != StyleEffect::None {
                font = fragment.font_effect();
            }
            text.push_str(fragment.as_str());
        }
        if color == StyleEffect::Opens {
            text.push_str(CLOSE_COLOR);
        }
        if font == StyleEffect::Opens {
            text.push_str(CLOSE_FONT);
        }
        text
    }

    /// Append a block of lines with an optional heading.
    ///
    /// A blank separator line precedes the block when the buffer already has
    /// content. The heading renders in the heading color and font, followed
    /// by a horizontal rule. A vertical offset, if given, prefixes the first
    /// line of the block rather than occupying a line of its own.
    pub fn block(
        &mut self,
        lines: Vec<Vec<Fragment>>,
        heading: Option<&str>,
        vertical_offset: Option<i32>,
    ) {
        if heading.is_none() && lines.is_empty() {
            return;
        }
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let first = self.lines.len();
        if let Some(heading) = heading {
            let fragments = vec![
                self.color(Some(&self.params.color_heading)),
                self.font(Some(&self.params.font_heading)),
                Fragment::text(format!("{heading} ")),
                self.horizontal_rule(),
            ];
            self.line(fragments);
        }
        for fragments in lines {
            self.line(fragments);
        }
        if let Some(y) = vertical_offset {
            let prefix = self.offset(0, y);
            if !prefix.as_str().is_empty() && first < self.lines.len() {
                self.lines[first].insert_str(0, prefix.as_str());
            }
        }
    }
}
