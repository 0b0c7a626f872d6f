use todo_core::config::OutputFormat;
use todo_core::render::AgendaRenderer;

use crate::renderers::{JsonlRendererPlugin, TextRendererPlugin};

pub fn build_renderer(format: OutputFormat, long: bool) -> Box<dyn AgendaRenderer> {
    tracing::debug!(format = format.as_str(), long, "building renderer");
    match format {
        OutputFormat::Jsonl => Box::new(JsonlRendererPlugin::new()),
        OutputFormat::Text => Box::new(TextRendererPlugin::new(long)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_renderer_by_format() {
        let jsonl = build_renderer(OutputFormat::Jsonl, true);
        assert_eq!(jsonl.format(), "jsonl");
        assert_eq!(jsonl.name(), "jsonl-renderer");

        let text = build_renderer(OutputFormat::Text, true);
        assert_eq!(text.format(), "text");
        assert_eq!(text.name(), "text-renderer");
    }
}
