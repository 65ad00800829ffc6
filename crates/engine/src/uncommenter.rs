use crate::classifier::{split_lines, LineProfile};
use crate::error::{Result, UncommentError};
use crate::rewriter;
use crate::scanner::FileScanner;
use crate::stats::RunStats;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for a single run
#[derive(Debug, Clone)]
pub struct UncommentOptions {
    /// Directory to walk
    pub root: PathBuf,
}

impl UncommentOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Outcome of processing one candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Not fully commented; left untouched
    Skipped(LineProfile),
    /// Rewritten in place; carries the number of changed lines
    Uncommented(usize),
}

/// Walks a tree and revives fully commented-out files
pub struct Uncommenter {
    root: PathBuf,
}

impl Uncommenter {
    /// Validate the root and build a runner for it.
    pub fn new(options: UncommentOptions) -> Result<Self> {
        let root = options.root;
        if !root.is_dir() {
            return Err(UncommentError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Run without reporting individual rewrites.
    pub fn run(&self) -> Result<RunStats> {
        self.run_with(|_| {})
    }

    /// Run over the whole tree.
    ///
    /// `on_uncomment` is called with each qualifying path before that file is
    /// written. The first error stops the run; files already rewritten stay
    /// rewritten.
    pub fn run_with(&self, mut on_uncomment: impl FnMut(&Path)) -> Result<RunStats> {
        let start = Instant::now();
        let mut stats = RunStats::new();

        for path in FileScanner::new(&self.root).files() {
            let path = path?;
            stats.add_scanned();
            match process_file(&path, &mut on_uncomment)? {
                FileOutcome::Uncommented(lines) => {
                    log::info!("Uncommented {} ({lines} lines)", path.display());
                    stats.add_uncommented(path, lines);
                }
                FileOutcome::Skipped(profile) => {
                    log::debug!(
                        "Skipping {} ({}/{} commented)",
                        path.display(),
                        profile.commented,
                        profile.non_empty
                    );
                }
            }
        }

        stats.time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Scanned {} files, uncommented {} in {} ms",
            stats.files_scanned,
            stats.files_uncommented,
            stats.time_ms
        );
        Ok(stats)
    }
}

/// Read, classify and (if it qualifies) rewrite one file.
pub fn process_file(path: &Path, on_uncomment: impl FnOnce(&Path)) -> Result<FileOutcome> {
    let contents = fs::read_to_string(path).map_err(|e| UncommentError::io(path, e))?;

    let profile = LineProfile::from_lines(split_lines(&contents));
    if !profile.is_fully_commented() {
        return Ok(FileOutcome::Skipped(profile));
    }

    on_uncomment(path);
    let lines = rewriter::rewrite_file(path, &contents)?;
    Ok(FileOutcome::Uncommented(lines))
}
