//! Primer file loading.
//!
//! A primer file is a YAML document whose top level is a list of free-text
//! mechanism descriptions. Order is preserved and duplicate entries are
//! allowed. The three ways a file can be unusable (missing, unparseable,
//! wrong shape) map to distinct error variants so the CLI message names the
//! actual cause.

use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{BisociateError, Result};

/// Load the primer pool from `path`.
pub fn load_primer(path: &Path) -> Result<Vec<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            return Err(BisociateError::PrimerNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(BisociateError::PrimerRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value: Value =
        serde_yaml::from_str(&text).map_err(|source| BisociateError::PrimerParse {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = match value {
        Value::Sequence(entries) => entries,
        other => {
            return Err(schema_error(
                path,
                format!("expected a top-level list, found {}", describe(&other)),
            ));
        }
    };

    if entries.is_empty() {
        return Err(schema_error(path, "the list is empty".to_string()));
    }

    let mut pool = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Value::String(mechanism) = entry else {
            return Err(schema_error(
                path,
                format!("entry {} is {}, not a string", index + 1, describe(entry)),
            ));
        };
        pool.push(mechanism.clone());
    }

    tracing::debug!(count = pool.len(), "loaded primer pool");
    Ok(pool)
}

fn schema_error(path: &Path, detail: String) -> BisociateError {
    BisociateError::PrimerSchema {
        path: path.to_path_buf(),
        detail,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn primer_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_valid_list() {
        let file = primer_file(
            "- Sharkskin denticles reduce drag by disrupting turbulent vortices\n\
             - Termite mounds ventilate through stack-effect convection\n\
             - Termite mounds ventilate through stack-effect convection\n",
        );
        let pool = load_primer(file.path()).unwrap();
        assert_eq!(pool.len(), 3);
        assert!(pool[0].starts_with("Sharkskin"));
        // Order preserved, duplicates allowed
        assert_eq!(pool[1], pool[2]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_primer(Path::new("/nonexistent/primer.yaml")).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let file = primer_file("[unclosed");
        let err = load_primer(file.path()).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerParse { .. }));
    }

    #[test]
    fn test_top_level_mapping_is_schema_error() {
        let file = primer_file("mechanisms:\n  - one\n  - two\n");
        let err = load_primer(file.path()).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerSchema { .. }));
        assert!(err.to_string().contains("a mapping"));
    }

    #[test]
    fn test_non_string_entry_is_schema_error() {
        let file = primer_file("- first\n- 42\n- third\n");
        let err = load_primer(file.path()).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerSchema { .. }));
        assert!(err.to_string().contains("entry 2"));
    }

    #[test]
    fn test_empty_list_is_schema_error() {
        let file = primer_file("[]");
        let err = load_primer(file.path()).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerSchema { .. }));
    }
}
