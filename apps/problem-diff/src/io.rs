//! Reading and writing analysis documents as JSON files.

use crate::error::{Error, Result};
use crate::models::{AnalysisResult, Problem};
use std::fs;
use std::path::Path;

/// Read and parse `{ "problems": [...] }` from `path`.
pub fn read_analysis(path: &Path) -> Result<AnalysisResult> {
    let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::FileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `result` and write it to `path`, creating parent directories.
pub fn write_analysis(result: &AnalysisResult, path: &Path, pretty: bool) -> Result<()> {
    let write_err = |source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let body = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
    .map_err(|e| write_err(std::io::Error::other(e)))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, body).map_err(write_err)
}

/// Wrap `problems` in a document and write it.
pub fn write_problems(problems: &[Problem], path: &Path, pretty: bool) -> Result<()> {
    write_analysis(&AnalysisResult::new(problems.to_vec()), path, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_analysis_keeps_input_order() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("input1.json");
        fs::write(
            &p,
            r#"{"problems":[{"hash":"123abc","data":["a","b"]},{"hash":"456def","data":["c"]}]}"#,
        )
        .unwrap();
        let ar = read_analysis(&p).unwrap();
        assert_eq!(ar.problems.len(), 2);
        assert_eq!(ar.problems[0].hash, "123abc");
        assert_eq!(ar.problems[1].data, vec!["c".to_string()]);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let ar = AnalysisResult::new(vec![
            Problem::new("hash1", &["data1", "b", "a"]),
            Problem::new("hash1", &[]),
            Problem::new("hash2", &["x"]),
        ]);
        for pretty in [false, true] {
            let p = dir.path().join(format!("out-{}.json", pretty));
            write_analysis(&ar, &p, pretty).unwrap();
            assert_eq!(read_analysis(&p).unwrap(), ar);
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("nested/deeper/both.json");
        write_problems(&[Problem::new("h", &["d"])], &p, false).unwrap();
        let content = fs::read_to_string(&p).unwrap();
        assert_eq!(content, r#"{"problems":[{"hash":"h","data":["d"]}]}"#);
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = read_analysis(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_read_malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        fs::write(&p, "not-json").unwrap();
        let err = read_analysis(&p).unwrap_err();
        assert!(matches!(err, Error::FileParse { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let dir = tempdir().unwrap();
        let err = write_problems(&[], dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
