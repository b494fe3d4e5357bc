//! The standard dashboard design.
//!
//! Clock, system info, network, per-CPU panels, top-process tables, memory,
//! and per-filesystem panels, driven by the inventory sections of the
//! configuration tree (`host`, `network.devices`, `cpus`, `filesystems`,
//! `top`).

use crate::Design;
use conkygen_core::{Formatter, Fragment, ParamTree};

/// Full system dashboard.
pub struct Standard;

/// A label/value line: label role color/font, then data role color/font.
fn label_line(f: &Formatter, label: &str, value: Fragment) -> Vec<Fragment> {
    vec![
        f.color(Some(&f.params().color_label)),
        f.font(Some(&f.params().font_label)),
        f.text(format!("{label}: ")),
        f.color(Some(&f.params().color_data)),
        f.font(Some(&f.params().font_data)),
        value,
    ]
}

fn clock_block(f: &mut Formatter) {
    let time = vec![
        f.center(),
        f.color(Some(&f.params().color_time)),
        f.font(Some(&f.params().font_time)),
        f.time_date(&f.params().time_format),
    ];
    let date = vec![
        f.center(),
        f.color(Some(&f.params().color_date)),
        f.font(Some(&f.params().font_date)),
        f.time_date(&f.params().date_format),
    ];
    f.block(vec![time, date], None, None);
}

fn system_block(params: &ParamTree, f: &mut Formatter) {
    let host = params
        .path("host.name")
        .as_str()
        .map_or_else(|| f.host_name(), Fragment::text);
    let lines = vec![
        label_line(f, "Host", host),
        label_line(f, "Kernel", f.kernel()),
        label_line(f, "Uptime", f.uptime(true)),
    ];
    f.block(lines, Some("SYSTEM"), None);
}

fn network_block(params: &ParamTree, f: &mut Formatter) {
    let devices: Vec<&str> = params
        .path("network.devices")
        .iter()
        .filter_map(ParamTree::as_str)
        .collect();
    if devices.is_empty() {
        return;
    }
    let mut lines = Vec::new();
    for device in devices {
        lines.push(label_line(f, device, f.ip_address(device)));
        lines.push(label_line(f, "  mac", f.mac_address(device, None)));
    }
    if params.path("network.external_ip").as_bool() == Some(true) {
        lines.push(label_line(f, "External", f.external_ip(None)));
    }
    f.block(lines, Some("NETWORK"), None);
}

fn cpu_block(params: &ParamTree, f: &mut Formatter) {
    let count = params.get("cpus").as_u32().unwrap_or(1);
    let mut lines = vec![label_line(f, "Frequency", f.cpu_frequency())];
    for cpu in 0..count {
        lines.push(label_line(
            f,
            &format!("CPU {cpu}"),
            f.cpu_percent(cpu)
                .join(f.right())
                .join(f.cpu_temperature(cpu, None)),
        ));
        lines.push(vec![f.cpu_meter(cpu, None, None)]);
    }
    f.block(lines, Some("CPU"), None);
}

fn top_cpu_block(params: &ParamTree, f: &mut Formatter) {
    let count = params.path("top.cpu").as_u32().unwrap_or(3);
    let lines = (1..=count)
        .map(|n| {
            vec![
                f.cpu_top_name(n),
                f.right(),
                f.cpu_top_percent(n),
            ]
        })
        .collect();
    f.block(lines, Some("TOP CPU"), None);
}

fn memory_block(params: &ParamTree, f: &mut Formatter) {
    let mut lines = vec![
        label_line(f, "RAM", f.memory_usage_triplet()),
        vec![f.memory_bar(None, None)],
        label_line(f, "Swap", f.swap_usage_triplet()),
    ];
    let top = params.path("top.memory").as_u32().unwrap_or(3);
    for n in 1..=top {
        lines.push(vec![
            f.memory_top_name(n),
            f.right(),
            f.memory_top_percent(n),
        ]);
    }
    f.block(lines, Some("MEMORY"), None);
}

fn filesystem_blocks(params: &ParamTree, f: &mut Formatter) {
    let mounts: Vec<(String, Option<String>)> = params
        .get("filesystems")
        .iter()
        .filter_map(|fs| {
            fs.get("mountpoint")
                .as_str()
                .map(|m| (m.to_string(), fs.get("device").as_str().map(str::to_string)))
        })
        .collect();
    if mounts.is_empty() {
        return;
    }
    let mut lines = Vec::new();
    for (mountpoint, device) in mounts {
        lines.push(label_line(
            f,
            &mountpoint,
            f.filesystem_usage_triplet(&mountpoint),
        ));
        lines.push(vec![f.filesystem_bar(&mountpoint, None, None)]);
        if let Some(device) = device {
            lines.push(label_line(f, "  io", f.filesystem_io(&mountpoint)));
            lines.push(vec![f.filesystem_io_meter(&device, None, None)]);
        }
    }
    f.block(lines, Some("STORAGE"), None);
}

impl Design for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn description(&self) -> &'static str {
        "full dashboard: clock, system, network, CPU, memory, storage"
    }

    fn render(&self, params: &ParamTree, formatter: &mut Formatter) {
        clock_block(formatter);
        system_block(params, formatter);
        network_block(params, formatter);
        cpu_block(params, formatter);
        top_cpu_block(params, formatter);
        memory_block(params, formatter);
        filesystem_blocks(params, formatter);
    }
}
