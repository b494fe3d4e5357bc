//! A small clock-and-load design, second registry entry.

use crate::Design;
use conkygen_core::{Formatter, ParamTree};

/// Clock, CPU percent, and memory bar only.
pub struct Minimal;

impl Design for Minimal {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn description(&self) -> &'static str {
        "clock, CPU load, and memory bar"
    }

    fn render(&self, params: &ParamTree, formatter: &mut Formatter) {
        let time = vec![
            formatter.center(),
            formatter.font(Some(&formatter.params().font_time)),
            formatter.time_date(&formatter.params().time_format),
        ];
        let date = vec![
            formatter.center(),
            formatter.time_date(&formatter.params().date_format),
        ];
        formatter.block(vec![time, date], None, None);

        let cpus = params.get("cpus").as_u32().unwrap_or(1);
        let mut lines = Vec::new();
        for cpu in 0..cpus {
            lines.push(vec![
                formatter.text(format!("cpu{cpu} ")),
                formatter.cpu_percent(cpu),
                formatter.right(),
                formatter.cpu_frequency(),
            ]);
        }
        lines.push(vec![formatter.memory_bar(None, None)]);
        formatter.block(lines, None, None);
    }
}
