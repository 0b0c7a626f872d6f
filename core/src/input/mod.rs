//! Input collaborators of the agenda engine.
//!
//! ```text
//! paths / stdin ── read_sources() ──> Vec<Source>
//!   ↓
//! logical_lines()      comments, blank lines, `\` continuations
//!   ↓
//! parse_task_line()    TaskLine (borrowed slices of the line)
//!   ↓
//! load_sources()       TaskRegistry + LoadReport
//! ```

mod lines;
mod loader;
mod parser;
mod source;

pub use lines::logical_lines;
pub use loader::{load_source, load_sources, LoadReport};
pub use parser::{parse_date, parse_task_line, TaskLine, DONE_TAG, TODO_TAG};
pub use source::{read_sources, Source, STDIN_ID};
