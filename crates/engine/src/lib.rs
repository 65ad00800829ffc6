//! # Uncomment Engine
//!
//! Revives source files that were disabled by commenting out every line.
//!
//! ## Pipeline
//!
//! ```text
//! Root directory
//!     │
//!     ├──> File Scanner (.ts / .tsx)
//!     │      └─> Candidate files
//!     │
//!     ├──> Classifier (> 95% of non-empty lines start with `//`)
//!     │      └─> Qualifying files
//!     │
//!     └──> Rewriter (strip first marker per line, overwrite)
//!            └─> RunStats
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use uncomment_engine::{UncommentOptions, Uncommenter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let uncommenter = Uncommenter::new(UncommentOptions::new("/path/to/src"))?;
//!     let stats = uncommenter.run_with(|path| println!("Uncommenting: {}", path.display()))?;
//!
//!     println!("Total files uncommented: {}", stats.files_uncommented);
//!     Ok(())
//! }
//! ```

mod classifier;
mod error;
mod rewriter;
mod scanner;
mod stats;
mod uncommenter;

pub use classifier::{
    is_fully_commented, split_lines, LineProfile, MARKER, QUALIFY_THRESHOLD,
};
pub use error::{Result, UncommentError};
pub use rewriter::{rewrite_file, uncomment_line, uncomment_text};
pub use scanner::{FileScanner, TARGET_SUFFIXES};
pub use stats::RunStats;
pub use uncommenter::{process_file, FileOutcome, UncommentOptions, Uncommenter};
