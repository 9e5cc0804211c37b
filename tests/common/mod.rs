use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd.env_remove("FOLIO_LOG");
    cmd
}

/// A temp directory with `folio init` already run in it
#[allow(dead_code)]
pub fn init_catalog() -> TempDir {
    let temp = TempDir::new().unwrap();
    folio_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[allow(dead_code)]
pub fn snapshot_path(root: &Path) -> std::path::PathBuf {
    root.join(".folio").join("data").join("websites.json")
}
