use crate::app::models::Report;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Builds the default output file name from the folder's base name and a
/// local timestamp. Trailing separators on the folder path are ignored by
/// `Path::file_name`.
pub fn suggest_filename(folder: &Path, now: DateTime<Local>) -> String {
    let base = folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "folder".to_string());

    format!("{}_contents_{}.txt", base, now.format(TIMESTAMP_FORMAT))
}

/// Empty input accepts the suggestion verbatim; anything else gets a `.txt`
/// extension appended unless it already has one.
pub fn resolve_filename(input: &str, suggestion: &str) -> String {
    if input.is_empty() {
        suggestion.to_string()
    } else if input.ends_with(".txt") {
        input.to_string()
    } else {
        format!("{}.txt", input)
    }
}

/// Writes the report as UTF-8, overwriting any existing file.
pub fn save_report(path: &Path, report: &Report) -> Result<()> {
    fs::write(path, report.as_text())
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 9, 13, 8, 5, 0).unwrap()
    }

    #[test]
    fn suggestion_uses_base_name_and_timestamp() {
        let name = suggest_filename(Path::new("/data/photos"), fixed_time());
        assert_eq!(name, "photos_contents_2024-09-13_08-05-00.txt");
    }

    #[test]
    fn suggestion_ignores_trailing_separator() {
        let name = suggest_filename(Path::new("/data/photos/"), fixed_time());
        assert_eq!(name, "photos_contents_2024-09-13_08-05-00.txt");
    }

    #[test]
    fn empty_input_keeps_suggestion() {
        assert_eq!(resolve_filename("", "suggested.txt"), "suggested.txt");
    }

    #[test]
    fn extension_appended_when_missing() {
        assert_eq!(resolve_filename("report", "suggested.txt"), "report.txt");
    }

    #[test]
    fn extension_kept_when_present() {
        assert_eq!(resolve_filename("report.txt", "suggested.txt"), "report.txt");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();

        let report = Report {
            lines: vec!["\nTotal number of files: 0\n".to_string()],
            total_files: 0,
        };
        save_report(&path, &report).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\nTotal number of files: 0\n"
        );
    }
}
