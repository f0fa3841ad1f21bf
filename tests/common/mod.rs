#![allow(dead_code)]

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one line (with trailing newline) to a file, creating it if needed.
pub fn append_line(path: &Path, line: &str) {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .expect("open file for append");
    writeln!(file, "{line}").expect("append line");
    file.flush().expect("flush appended line");
}

/// Append raw text without adding a newline.
pub fn append_raw(path: &Path, text: &str) {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .expect("open file for append");
    file.write_all(text.as_bytes()).expect("append raw text");
    file.flush().expect("flush appended text");
}

/// Create an empty file.
pub fn touch(path: &Path) {
    std::fs::File::create(path).expect("create file");
}
