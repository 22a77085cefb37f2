//! JSON document import and export.

use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::ConfigError;

const INDENT: &[u8] = b"    ";

/// Writes `value` to `path` as a pretty-printed JSON document indented with
/// four spaces. Any existing file is replaced.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if `value` cannot be represented as
/// JSON and [`ConfigError::Io`] if the file cannot be written.
pub fn export_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), ConfigError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser).map_err(ConfigError::Serialize)?;

    let io_err = |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(&buf).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}

/// Reads a JSON document from `path` into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the content is not valid JSON for `T`.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn export_then_import_yields_equal_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let original = json!({
            "within_radius": {"lower_radius": 0, "upper_radius": 5, "base_zipcode": "92101"},
            "county": {"state": "ca", "county": "san-diego"},
            "rows": [{"Zip": "92101", "Zip_within_5_miles": "92102"}]
        });

        export_json(&original, &path).unwrap();
        let restored: Value = import_json(&path).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn export_indents_with_four_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        export_json(&json!({"a": {"b": 1}}), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(text, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn export_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");
        let result = export_json(&json!({}), &path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn import_malformed_document_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = import_json::<Value>(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
