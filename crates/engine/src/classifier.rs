/// Line comment marker.
pub const MARKER: &str = "//";

/// A file is fully commented when strictly more than this share of its
/// non-empty lines start with [`MARKER`].
pub const QUALIFY_THRESHOLD: f64 = 0.95;

/// Split `text` into lines, each keeping its terminator.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(|c| c == '\r' || c == '\n') {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Counts of non-empty and commented lines in one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineProfile {
    pub non_empty: usize,
    pub commented: usize,
}

impl LineProfile {
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut profile = Self::default();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            profile.non_empty += 1;
            if trimmed.starts_with(MARKER) {
                profile.commented += 1;
            }
        }
        profile
    }

    /// Share of commented lines; `None` when there are no non-empty lines.
    pub fn ratio(&self) -> Option<f64> {
        if self.non_empty == 0 {
            return None;
        }
        Some(self.commented as f64 / self.non_empty as f64)
    }

    pub fn is_fully_commented(&self) -> bool {
        self.ratio().is_some_and(|ratio| ratio > QUALIFY_THRESHOLD)
    }
}

/// Whether `lines` look like a file disabled by commenting out every line.
pub fn is_fully_commented<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
    LineProfile::from_lines(lines).is_fully_commented()
}
