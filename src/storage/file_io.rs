//! File I/O utilities with atomic writes
//!
//! Snapshot files are JSON or YAML, chosen by file extension.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::DraagkrachtError;

/// On-disk format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from the file extension; anything unknown is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a JSON or YAML file, returning an error if it doesn't exist
pub fn read_required<T, P>(path: P) -> Result<T, DraagkrachtError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(DraagkrachtError::Snapshot(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        DraagkrachtError::Snapshot(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            DraagkrachtError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            DraagkrachtError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a JSON or YAML file atomically (write to temp, then rename)
pub fn write_atomic<T, P>(path: P, data: &T) -> Result<(), DraagkrachtError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DraagkrachtError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| DraagkrachtError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::to_writer_pretty(&mut writer, data)?,
        FileFormat::Yaml => serde_yaml::to_writer(&mut writer, data)?,
    }

    writer
        .flush()
        .map_err(|e| DraagkrachtError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DraagkrachtError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DraagkrachtError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.YML")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a")), FileFormat::Json);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<TestData, _> = read_required(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(DraagkrachtError::Snapshot(_))));
    }

    #[test]
    fn test_json_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_atomic(&path, &sample()).unwrap();
        assert!(!temp_dir.path().join("test.json.tmp").exists());

        let loaded: TestData = read_required(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_yaml_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.yaml");

        write_atomic(&path, &sample()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("name: test"));

        let loaded: TestData = read_required(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_invalid_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();

        let result: Result<TestData, _> = read_required(&path);
        assert!(matches!(result, Err(DraagkrachtError::Snapshot(_))));
    }
}
