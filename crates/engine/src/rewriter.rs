use crate::classifier::{split_lines, MARKER};
use crate::error::{Result, UncommentError};
use std::fs;
use std::path::Path;

const MARKER_WITH_SPACE: &str = "// ";

/// Strip the comment marker from one line.
///
/// This is a first-occurrence substring removal, not an anchored prefix
/// strip: leading indentation survives, and an earlier `"// "` elsewhere in
/// the line is removed in place of the real marker.
pub fn uncomment_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with(MARKER_WITH_SPACE) {
        return line.replacen(MARKER_WITH_SPACE, "", 1);
    }
    if trimmed.starts_with(MARKER) {
        return line.replacen(MARKER, "", 1);
    }
    line.to_string()
}

/// Uncomment every line of `text`, keeping each line's terminator.
///
/// Returns the new text and the number of lines that changed.
pub fn uncomment_text(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut changed = 0;
    for line in split_lines(text) {
        let revived = uncomment_line(line);
        if revived != line {
            changed += 1;
        }
        out.push_str(&revived);
    }
    (out, changed)
}

/// Overwrite `path` with the uncommented form of `contents`.
pub fn rewrite_file(path: &Path, contents: &str) -> Result<usize> {
    let (revived, changed) = uncomment_text(contents);
    fs::write(path, revived).map_err(|e| UncommentError::io(path, e))?;
    Ok(changed)
}
