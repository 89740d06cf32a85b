/*!
 * Tests for file helpers
 */

use anglicize::file_utils::FileManager;
use std::path::PathBuf;
use crate::common;

#[test]
fn test_generateOutputPath_shouldInsertSuffixBeforeExtension() {
    let output = FileManager::generate_output_path("/docs/gettysburg.txt", "_anglicized");
    assert_eq!(output, PathBuf::from("/docs/gettysburg_anglicized.txt"));
}

#[test]
fn test_generateOutputPath_noExtension_shouldAppendSuffix() {
    let output = FileManager::generate_output_path("speech", "_anglicized");
    assert_eq!(output, PathBuf::from("speech_anglicized"));
}

#[test]
fn test_readDocument_shouldDropNonAscii() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "doc.txt", "café naïve\n")?;

    assert_eq!(FileManager::read_document(&path)?, "caf nave\n");
    Ok(())
}

#[test]
fn test_writeToFile_missingParent_shouldCreateIt() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("out.txt");

    FileManager::write_to_file(&path, "four score")?;

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, "four score");
    Ok(())
}

#[test]
fn test_fileExists_directory_shouldBeFalse() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::read_to_string(temp_dir.path().join("absent.txt")).is_err());
    Ok(())
}
