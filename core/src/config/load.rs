use std::path::{Path, PathBuf};

use super::types::{AppConfig, OutputFormat};

/// Get the default todo data directory: ~/.todo
pub fn get_todo_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".todo"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.todo/config.toml
    let user_config = get_todo_data_dir().ok().map(|d| d.join("config.toml"));

    // Priority 2: ./todo.toml (current directory)
    let local_config = Path::new("todo.toml");

    let mut cfg = match user_config.filter(|p| p.exists()) {
        Some(path) => load_from_path(&path)?,
        None if local_config.exists() => load_from_path(local_config)?,
        None => AppConfig::default(),
    };

    // Environment variable overrides (Priority 0: highest)
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// Apply `TODO_*` overrides; blank or unparseable values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = var("TODO_AUTO_DONE_OVERDUE").as_deref().and_then(parse_bool) {
        cfg.agenda.auto_done_overdue = v;
    }
    if let Some(v) = var("TODO_LONG_FORMAT").as_deref().and_then(parse_bool) {
        cfg.agenda.long_format = v;
    }
    if let Some(v) = var("TODO_FORMAT").as_deref().and_then(OutputFormat::parse) {
        cfg.agenda.format = v;
    }
    if let Some(v) = var("TODO_LOG_LEVEL") {
        cfg.logging.level = v;
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(cfg.logging.enabled);
        assert!(cfg.logging.console);
        assert!(!cfg.logging.file);
        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.agenda.auto_done_overdue);
        assert_eq!(cfg.agenda.format, OutputFormat::Text);
    }

    #[test]
    fn reads_agenda_section_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[agenda]\nauto_done_overdue = true\nformat = \"jsonl\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let cfg = load_from_path(&path).unwrap();
        assert!(cfg.agenda.auto_done_overdue);
        assert!(!cfg.agenda.long_format);
        assert_eq!(cfg.agenda.format, OutputFormat::Jsonl);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn invalid_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[agenda]\nformat = \"xml\"\n").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn env_overrides_win_and_bad_values_are_ignored() {
        let env: HashMap<&str, &str> = [
            ("TODO_AUTO_DONE_OVERDUE", "yes"),
            ("TODO_LONG_FORMAT", "maybe"),
            ("TODO_FORMAT", "JSONL"),
            ("TODO_LOG_LEVEL", "  "),
        ]
        .into_iter()
        .collect();

        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |key| env.get(key).map(|v| v.to_string()));

        assert!(cfg.agenda.auto_done_overdue);
        assert!(!cfg.agenda.long_format);
        assert_eq!(cfg.agenda.format, OutputFormat::Jsonl);
        assert_eq!(cfg.logging.level, "warn");
    }
}
