//! Kept in its own test binary: it changes the process working directory.

use std::fs;
use treesynth::{synth, SimpleFile};

#[test]
fn synth_without_root_uses_current_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let result = synth(None, |s| s.add(SimpleFile::new("here.txt", "here")).map(drop));

    std::env::set_current_dir(previous).unwrap();
    result.unwrap();
    assert_eq!(fs::read_to_string(tmp.path().join("here.txt")).unwrap(), "here\n");
}
