//! Engine entry point: one run turns the input sources into a ranked agenda.
//!
//! load sources → registry → plan (sequence, urgency, ranking) → entries.

mod run;
mod types;

pub use run::{load_agenda, plan_agenda, run_agenda};
pub use types::AgendaRun;
