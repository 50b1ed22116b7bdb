// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_test_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// 7 files and 6 directories below the root.
///
/// ```text
/// notes.md
/// todo.txt
/// .gitignore
/// projects/alpha/main.rs
/// projects/alpha/lib.rs
/// projects/beta/README
/// archive/2023/old.md
/// .cache/
/// ```
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    println!("Created temp directory at: {:?}", temp_dir.path());

    create_test_file(temp_dir.path(), "notes.md", "# Notes")?;
    create_test_file(temp_dir.path(), "todo.txt", "buy milk")?;
    create_test_file(temp_dir.path(), ".gitignore", "target/")?;
    create_test_file(temp_dir.path(), "projects/alpha/main.rs", "fn main() {}")?;
    create_test_file(temp_dir.path(), "projects/alpha/lib.rs", "")?;
    create_test_file(temp_dir.path(), "projects/beta/README", "beta")?;
    create_test_file(temp_dir.path(), "archive/2023/old.md", "old")?;
    create_test_dir(&temp_dir.path().join(".cache"))?;

    Ok(temp_dir)
}
