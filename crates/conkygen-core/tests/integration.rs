//! Integration tests for conkygen-core.
//!
//! These tests verify the public API works correctly end-to-end: parameter
//! tree in, themed blocks assembled, full document out.

use conkygen_core::{Formatter, ParamTree, StyleOverrides, Theme};

// =============================================================================
// Parameter flow
// =============================================================================

const CONFIG_YAML: &str = r"
host:
  name: workstation
geometry:
  placement: top_right
  width_min: 260
  gap: 16
style:
  color_heading: 98c379
  refresh_interval: 2
theme:
  colors:
    accent: e06c75
  fonts:
    clock: FreeSans:size=28
";

#[test]
fn test_overrides_from_tree_to_settings() {
    let params = ParamTree::from_yaml(CONFIG_YAML).expect("valid yaml");
    let mut formatter = Formatter::with_theme(Theme::from_params(&params));
    formatter.set_parameters(&StyleOverrides::from_params(&params));

    let document = formatter.generate();
    assert!(document.contains("alignment = 'top_right'"));
    assert!(document.contains("minimum_width = 260"));
    assert!(document.contains("gap_x = 16"));
    assert!(document.contains("update_interval = 2"));
    // Untouched fields keep their defaults.
    assert!(document.contains("minimum_height = 500"));
}

#[test]
fn test_theme_roles_reach_macro_output() {
    let params = ParamTree::from_yaml(CONFIG_YAML).expect("valid yaml");
    let mut formatter = Formatter::with_theme(Theme::from_params(&params));

    let fragments = vec![
        formatter.color(Some("accent")),
        formatter.font(Some("clock")),
        formatter.time_date("%H:%M"),
    ];
    formatter.line(fragments);
    assert_eq!(
        formatter.lines(),
        ["${color #e06c75}${font FreeSans:size=28}${time %H:%M}${color}${font}"]
    );
}

// =============================================================================
// Block and document flow
// =============================================================================

#[test]
fn test_memory_block_scenario() {
    let mut formatter = Formatter::new();
    formatter.block(vec![vec![formatter.host_name()]], None, None);

    let lines = vec![
        vec![formatter.memory_usage_triplet()],
        vec![formatter.memory_bar(None, None)],
    ];
    formatter.block(lines, Some("MEMORY"), None);

    let buffer = formatter.lines();
    // Separator between the two blocks, none before the first.
    assert_eq!(buffer[0], "${nodename}");
    assert_eq!(buffer[1], "");
    // Heading: heading color/font, text, trailing space, rule, closes.
    assert!(buffer[2].contains("MEMORY ${hr}"));
    assert!(buffer[2].ends_with("${color}${font}"));
    // Content lines are independently close-terminated.
    assert_eq!(buffer[3], "${mem} / ${memmax} / ${memperc}%");
    assert!(buffer[4].ends_with("${membar 10,100}${color}"));
}

#[test]
fn test_full_document_shape() {
    let params = ParamTree::from_json(r#"{"geometry": {"gap": 8}}"#).expect("valid json");
    let mut formatter = Formatter::new();
    formatter.set_parameters(&StyleOverrides::from_params(&params));

    formatter.block(
        vec![
            vec![formatter.text("Host: "), formatter.host_name()],
            vec![formatter.text("Kernel: "), formatter.kernel()],
        ],
        Some("SYSTEM"),
        None,
    );
    formatter.block(vec![vec![formatter.cpu_meter(0, None, None)]], Some("CPU"), None);

    let document = formatter.generate();
    let mut sections = document.splitn(2, "\n\n");
    let config = sections.next().expect("config section");
    let text = sections.next().expect("text section");

    assert!(config.starts_with("conky.config = {"));
    assert!(config.contains("gap_x = 8"));
    assert!(text.starts_with("conky.text = [["));
    assert!(text.ends_with("]]"));
    assert!(text.contains("Host: ${nodename}"));
    assert!(text.contains("${cpugraph cpu0 25,100"));
}

#[test]
fn test_missing_config_sections_use_defaults() {
    let params = ParamTree::from_yaml("unrelated: 1").expect("valid yaml");
    let mut formatter = Formatter::with_theme(Theme::from_params(&params));
    formatter.set_parameters(&StyleOverrides::from_params(&params));

    let document = formatter.generate();
    assert!(document.contains("alignment = 'top_left'"));
    assert!(document.contains("default_color = 'ffffff'"));
}
