//! Built-in widget designs.
//!
//! A design is the collaborator that arranges informational blocks: it
//! receives the parameter tree and a live [`Formatter`] and calls formatter
//! operations in whatever order it likes. Designs are selected by name from
//! a static registry; there is no dynamic loading of user script files.

mod minimal;
mod standard;

use conkygen_core::{Formatter, ParamTree};

pub use minimal::Minimal;
pub use standard::Standard;

/// A design arranges output blocks for one widget layout.
pub trait Design {
    /// Registry name, as given to `--design`.
    fn name(&self) -> &'static str;

    /// One-line summary for `--list-designs`.
    fn description(&self) -> &'static str;

    /// Emit all blocks for this layout into the formatter's line buffer.
    fn render(&self, params: &ParamTree, formatter: &mut Formatter);
}

/// All built-in designs, in listing order.
#[must_use]
pub fn builtin() -> Vec<Box<dyn Design>> {
    vec![Box::new(Standard), Box::new(Minimal)]
}

/// Look up a built-in design by name.
#[must_use]
pub fn find(name: &str) -> Option<Box<dyn Design>> {
    builtin().into_iter().find(|design| design.name() == name)
}
