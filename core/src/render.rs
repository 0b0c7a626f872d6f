//! Presentation seam: renderers turn ranked entries into output lines.

use std::io::Write;

use crate::agenda::AgendaEntry;

/// Output renderer plugin (controls the output format).
pub trait AgendaRenderer: Send + Sync {
    fn name(&self) -> &str;
    fn format(&self) -> &str;
    /// Write `entries` in order, most urgent first.
    fn render(&self, entries: &[AgendaEntry], out: &mut dyn Write) -> std::io::Result<()>;
}
