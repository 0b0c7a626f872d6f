use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use todo_core::config::OutputFormat;
use todo_core::input::parse_date;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Print the next tasks to do, most urgent first.
///
/// Tasks blocked by an unfinished dependency are not shown.
#[derive(Parser, Debug)]
#[command(name = "todo", version)]
pub struct Args {
    /// Consider tasks whose due date has passed as done.
    #[arg(short = 'd', long = "done-overdue")]
    pub done_overdue: bool,

    /// Long format: priority letter, source and due date.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Reference date used instead of today (YYYY-MM-DD).
    #[arg(short = 'T', long, value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Task files; `-` or no file reads standard input.
    pub files: Vec<PathBuf>,
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("improper argument date: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_short_flags() {
        let args = Args::try_parse_from(["todo", "-dl", "-T", "2024-03-01", "a.todo", "b.todo"])
            .unwrap();
        assert!(args.done_overdue);
        assert!(args.long);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.todo"), PathBuf::from("b.todo")]
        );
        assert_eq!(args.format, None);
    }

    #[test]
    fn rejects_bad_reference_date() {
        let err = Args::try_parse_from(["todo", "-T", "tomorrow"]).unwrap_err();
        assert!(err.to_string().contains("improper argument date"));
    }

    #[test]
    fn format_flag_maps_to_output_format() {
        let args = Args::try_parse_from(["todo", "--format", "jsonl"]).unwrap();
        assert_eq!(args.format.map(OutputFormat::from), Some(OutputFormat::Jsonl));
        assert!(args.files.is_empty());
    }
}
