mod jsonl;
mod text;

pub use jsonl::JsonlRendererPlugin;
pub use text::TextRendererPlugin;
