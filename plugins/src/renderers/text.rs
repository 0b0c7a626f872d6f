use std::io::Write;

use todo_core::agenda::AgendaEntry;
use todo_core::render::AgendaRenderer;

/// One task per line.
///
/// Short form prints the description only; long form adds the priority letter in front
/// and the due date at the end. With several sources the description is prefixed with
/// the source it came from.
pub struct TextRendererPlugin {
    long: bool,
}

impl TextRendererPlugin {
    pub fn new(long: bool) -> Self {
        Self { long }
    }

    fn format_entry(&self, entry: &AgendaEntry) -> String {
        let mut line = String::new();
        if self.long {
            line.push_str(&format!("({}) ", entry.priority_label()));
        }
        if let Some(source) = &entry.source {
            line.push_str(&format!("{source}: "));
        }
        line.push_str(&entry.description);
        if self.long {
            if let Some(due) = entry.due_text() {
                line.push_str(&format!(" due:{due}"));
            }
        }
        line
    }
}

impl AgendaRenderer for TextRendererPlugin {
    fn name(&self) -> &str {
        "text-renderer"
    }

    fn format(&self) -> &str {
        "text"
    }

    fn render(&self, entries: &[AgendaEntry], out: &mut dyn Write) -> std::io::Result<()> {
        for entry in entries {
            writeln!(out, "{}", self.format_entry(entry))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use todo_core::agenda::Priority;

    fn entry(source: Option<&str>) -> AgendaEntry {
        AgendaEntry {
            name: "report".to_string(),
            description: "write report".to_string(),
            priority: Priority::High,
            due: NaiveDate::from_ymd_opt(2024, 3, 15),
            urgency: 1,
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn short_form_is_description_only() {
        let renderer = TextRendererPlugin::new(false);
        assert_eq!(renderer.format_entry(&entry(None)), "write report");
        assert_eq!(
            renderer.format_entry(&entry(Some("work.todo"))),
            "work.todo: write report"
        );
    }

    #[test]
    fn long_form_adds_priority_and_due() {
        let renderer = TextRendererPlugin::new(true);
        assert_eq!(
            renderer.format_entry(&entry(Some("work.todo"))),
            "(A) work.todo: write report due:2024-03-15"
        );

        let mut undated = entry(None);
        undated.due = None;
        undated.priority = Priority::Normal;
        assert_eq!(renderer.format_entry(&undated), "(B) write report");
    }

    #[test]
    fn render_writes_one_line_per_entry() {
        let renderer = TextRendererPlugin::new(false);
        let mut out = Vec::new();
        renderer
            .render(&[entry(None), entry(None)], &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "write report\nwrite report\n");
    }
}
