use crate::error::{Result, UncommentError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffixes of the typed and untyped TypeScript dialect.
pub const TARGET_SUFFIXES: &[&str] = &[".ts", ".tsx"];

/// Scanner for finding candidate files under a root directory
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Lazily walk the tree, yielding every candidate file.
    ///
    /// Entries are yielded as the walk reaches them, so rewriting a file's
    /// contents between two `next()` calls does not change what comes after.
    /// Directory read failures are yielded as errors, never skipped.
    ///
    /// Symlinked directories are not descended. A symlink with a target name
    /// is yielded when it resolves to a regular file; a dangling one is an error.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf>> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|result| match result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if !file_type.is_file() && !file_type.is_symlink() {
                        return None;
                    }
                    if !Self::is_target_file(entry.path()) {
                        log::trace!("Skipping non-target file {}", entry.path().display());
                        return None;
                    }
                    if entry.path_is_symlink() {
                        match fs::metadata(entry.path()) {
                            Ok(meta) if meta.is_file() => {}
                            Ok(_) => {
                                log::debug!(
                                    "Skipping symlink to non-file {}",
                                    entry.path().display()
                                );
                                return None;
                            }
                            Err(e) => return Some(Err(UncommentError::io(entry.path(), e))),
                        }
                    }
                    Some(Ok(entry.into_path()))
                }
                Err(e) => Some(Err(e.into())),
            })
    }

    /// Suffix match on the file name, so `index.d.ts` counts and `foo.TS` does not.
    pub fn is_target_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| {
            let name = name.as_encoded_bytes();
            TARGET_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix.as_bytes()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FileScanner;
    use crate::error::{Result, UncommentError};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn scan(root: &Path) -> Result<Vec<PathBuf>> {
        FileScanner::new(root).files().collect()
    }

    #[test]
    fn finds_ts_and_tsx_recursively() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("src").join("index.ts"), b"export {}").unwrap();
        fs::write(nested.join("Button.tsx"), b"export {}").unwrap();
        fs::write(nested.join("types.d.ts"), b"export {}").unwrap();

        let files = scan(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names.len(), 3);
        assert!(names.contains(&"index.ts".to_string()));
        assert!(names.contains(&"Button.tsx".to_string()));
        assert!(names.contains(&"types.d.ts".to_string()));
    }

    #[test]
    fn ignores_other_extensions() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("main.js"), b"// x").unwrap();
        fs::write(temp.path().join("lib.rs"), b"// x").unwrap();
        fs::write(temp.path().join("notes.tsv"), b"// x").unwrap();
        fs::write(temp.path().join("app.ts"), b"// x").unwrap();

        let files = scan(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.ts"));
    }

    #[test]
    fn directories_named_like_targets_are_not_files() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("weird.ts")).unwrap();

        let files = scan(temp.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn target_suffix_is_case_sensitive() {
        assert!(FileScanner::is_target_file(Path::new("a/b/c.ts")));
        assert!(FileScanner::is_target_file(Path::new("c.tsx")));
        assert!(!FileScanner::is_target_file(Path::new("c.TS")));
        assert!(!FileScanner::is_target_file(Path::new("c.tsx.bak")));
    }

    #[test]
    fn missing_root_surfaces_as_error() {
        let temp = tempdir().unwrap();
        assert!(scan(&temp.path().join("does-not-exist")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_target_files_are_yielded() {
        let outside = tempdir().unwrap();
        let real = outside.path().join("real.ts");
        fs::write(&real, b"// export {}").unwrap();

        let temp = tempdir().unwrap();
        let link = temp.path().join("link.ts");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let files = scan(temp.path()).unwrap();

        assert_eq!(files, vec![link]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_descended() {
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("inner.ts"), b"// export {}").unwrap();

        let temp = tempdir().unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked.ts")).unwrap();

        let files = scan(temp.path()).unwrap();

        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_an_error() {
        let temp = tempdir().unwrap();
        let link = temp.path().join("gone.ts");
        std::os::unix::fs::symlink(temp.path().join("missing.ts"), &link).unwrap();

        let err = scan(temp.path()).unwrap_err();

        assert!(matches!(err, UncommentError::IoError { ref path, .. } if *path == link));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_names_are_matched() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join(OsStr::from_bytes(b"bad\xff.ts"));
        fs::write(&path, b"// export {}").unwrap();

        assert!(FileScanner::is_target_file(&path));
        assert_eq!(scan(temp.path()).unwrap(), vec![path]);
    }
}
