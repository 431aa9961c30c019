//! Test helpers for writing solve requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Waypoints around Hyderabad; the nearest-first route visits 0, 2, 1.
pub(super) const HYDERABAD_REQUEST: &str = r#"{
  "coordinates": [
    [17.528241, 78.387817],
    [17.385, 78.4867],
    [17.4065, 78.4772]
  ]
}"#;

/// Two points on opposite sides of the globe.
pub(super) const ANTIPODAL_REQUEST: &str = r#"{"coordinates": [[0.0, 0.0], [0.0, 180.0]]}"#;

/// A request with a latitude outside [-90, 90].
pub(super) const OUT_OF_RANGE_REQUEST: &str = r#"{"coordinates": [[0.0, 0.0], [91.0, 0.0]]}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory with a `request.json` path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}
