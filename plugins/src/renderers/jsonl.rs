use std::io::Write;

use serde_json::{json, Value};
use todo_core::agenda::AgendaEntry;
use todo_core::render::AgendaRenderer;

/// One JSON object per task, most urgent first.
#[derive(Debug, Default)]
pub struct JsonlRendererPlugin;

impl JsonlRendererPlugin {
    pub fn new() -> Self {
        Self
    }

    fn entry_to_json(rank: usize, entry: &AgendaEntry) -> Value {
        json!({
            "v": 1,
            "rank": rank,
            "name": entry.name,
            "description": entry.description,
            "priority": entry.priority_label().to_string(),
            "due": entry.due_text(),
            "urgency": entry.urgency,
            "source": entry.source,
        })
    }
}

impl AgendaRenderer for JsonlRendererPlugin {
    fn name(&self) -> &str {
        "jsonl-renderer"
    }

    fn format(&self) -> &str {
        "jsonl"
    }

    fn render(&self, entries: &[AgendaEntry], out: &mut dyn Write) -> std::io::Result<()> {
        for (rank, entry) in entries.iter().enumerate() {
            let value = Self::entry_to_json(rank + 1, entry);
            let line = serde_json::to_string(&value).map_err(std::io::Error::other)?;
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
