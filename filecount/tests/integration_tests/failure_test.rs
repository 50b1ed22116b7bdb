// tests/integration_tests/failure_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use filecount::{FilesystemAccessError, Totals, walk, walk_with};
use tempfile::TempDir;

#[test]
fn test_missing_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nowhere");

    let err = walk(&missing).expect_err("Missing root should fail");

    assert!(
        matches!(&err, FilesystemAccessError::NotFound { path } if *path == missing),
        "Unexpected error: {err}"
    );
    Ok(())
}

#[test]
fn test_root_is_a_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "plain.txt", "not a folder")?;

    let err = walk(&temp_dir.path().join("plain.txt")).expect_err("File root should fail");

    assert!(matches!(err, FilesystemAccessError::NotADirectory { .. }));
    assert!(err.to_string().contains("plain.txt"));
    Ok(())
}

#[test]
fn test_removed_root_fails() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path().to_path_buf();
    temp_dir.close()?;

    let mut totals = Totals::new();
    let mut reported = 0_usize;
    let result = walk_with(&root, &mut totals, |_| reported += 1);

    assert!(matches!(result, Err(FilesystemAccessError::NotFound { .. })));
    assert_eq!(reported, 0, "Nothing is reported for a failed walk");
    Ok(())
}
