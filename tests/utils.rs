#![allow(dead_code)]

use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use treesynth::cli::{run, Args};
use walkdir::WalkDir;

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints the files only present on one side and the content of files
/// that differ between `actual` and `expected`.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in actual_files.difference(&expected_files) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read_to_string(actual.join(file)).unwrap();
        let expected_content = fs::read_to_string(expected.join(file)).unwrap();
        if actual_content != expected_content {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", actual_content);
            println!("  --- Expected content:\n{}", expected_content);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold the same files with the same content.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare {:?} with {:?}", actual, expected);
        }
    }
}

/// Runs the CLI on `blueprint` into a fresh temp dir and compares the result
/// with `expected_dir`.
pub fn run_and_assert(blueprint: &str, expected_dir: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let args = Args {
        blueprint: blueprint.to_string(),
        output_dir: Some(tmp_dir.path().to_path_buf()),
        verbose: 2,
        dry_run: false,
    };
    run(args).unwrap();
    assert_same_tree(tmp_dir.path(), Path::new(expected_dir));
}

/// Every file below `root` has no write bits left.
#[cfg(unix)]
pub fn assert_all_read_only(root: &Path) {
    use std::os::unix::fs::PermissionsExt;
    for file in relative_files(root) {
        let mode = fs::metadata(root.join(&file)).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o444, "{:?} is not read-only", file);
    }
}
