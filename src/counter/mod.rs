mod classify;
mod file;
mod sloc;

pub use classify::{CommentTokens, LineKind, classify_line};
pub use file::{FileReader, FileScanResult, RealFileReader, scan_file, scan_file_with};
pub use sloc::{LineStats, LineTally, SlocCounter, feed_lines};

#[cfg(test)]
mod test_fixtures;
