use crate::{Error, Result};
use evalview_types::{ResultRecord, Status};
use std::path::Path;
use walkdir::WalkDir;

const RESULT_EXTENSION: &str = ".json";

/// Load every `*.json` file directly inside `dir`, sorted by filename.
///
/// A file that cannot be read or parsed becomes an error record; only a
/// missing or unreadable directory fails the whole load.
pub fn load_results(dir: &Path) -> Result<Vec<ResultRecord>> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let mut records = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the results directory itself
            Err(e) if e.depth() == 0 => return Err(Error::Walk(dir.to_path_buf(), e)),
            Err(e) => {
                if let Some(filename) = result_filename(e.path()) {
                    tracing::warn!(file = %filename, "{}", e);
                    records.push(ResultRecord::failed(
                        filename,
                        format!("Failed to read file: {}", e),
                    ));
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(filename) = result_filename(Some(entry.path())) else {
            continue;
        };

        tracing::debug!(file = %filename, "loading result");

        let record = match std::fs::read_to_string(entry.path()) {
            Ok(text) => ResultRecord::from_json(filename, &text),
            Err(e) => ResultRecord::failed(filename, format!("Failed to read file: {}", e)),
        };

        if let Some(message) = record.parse_error() {
            tracing::warn!(file = %record.filename(), "{}", message);
        }

        records.push(record);
    }

    tracing::info!(
        dir = %dir.display(),
        total = records.len(),
        errors = records.iter().filter(|r| r.status() == Status::Error).count(),
        "loaded results"
    );

    Ok(records)
}

fn result_filename(path: Option<&Path>) -> Option<String> {
    let filename = path?.file_name()?.to_string_lossy().into_owned();
    filename.ends_with(RESULT_EXTENSION).then_some(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = load_results(&missing).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.json");
        fs::write(&file, "{}").unwrap();

        assert!(matches!(load_results(&file), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_empty_directory_loads_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let records = load_results(temp_dir.path())?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_ignores_other_extensions_and_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "hi").unwrap();
        fs::write(temp_dir.path().join("b.json.bak"), "{}").unwrap();
        fs::create_dir(temp_dir.path().join("nested.json")).unwrap();
        fs::write(temp_dir.path().join("nested.json").join("c.json"), "{}").unwrap();

        let records = load_results(temp_dir.path()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.filename()).collect();
        assert_eq!(names, vec!["a.json"]);
    }
}
