use serde::Serialize;
use std::path::PathBuf;

/// Statistics about a single uncomment run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Candidate files read and classified
    pub files_scanned: usize,

    /// Files rewritten in place
    pub files_uncommented: usize,

    /// Lines whose content changed across all rewritten files
    pub lines_uncommented: usize,

    /// Rewritten paths, in walk order
    pub uncommented: Vec<PathBuf>,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scanned(&mut self) {
        self.files_scanned += 1;
    }

    pub fn add_uncommented(&mut self, path: PathBuf, lines: usize) {
        self.files_uncommented += 1;
        self.lines_uncommented += lines;
        self.uncommented.push(path);
    }
}
