//! Path helpers

use std::path::{Path, PathBuf};

/// True if `path` has one of `extensions`, compared case-insensitively.
/// Extensions may be given with or without a leading dot.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Join a URL prefix and a file name with exactly one slash between them
pub fn join_url(prefix: &str, file_name: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_case_insensitive() {
        let exts = vec!["mov".to_string()];
        assert!(has_extension(Path::new("a/CAT.MOV"), &exts));
        assert!(has_extension(Path::new("a/cat.mov"), &exts));
        assert!(has_extension(Path::new("a/cat.Mov"), &exts));
        assert!(!has_extension(Path::new("a/cat.mp4"), &exts));
        assert!(!has_extension(Path::new("a/mov"), &exts));

        let dotted = vec![".MOV".to_string()];
        assert!(has_extension(Path::new("x.mov"), &dotted));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve() {
        let root = Path::new("/project");
        assert_eq!(
            resolve(root, Path::new("public/signs/raw")),
            PathBuf::from("/project/public/signs/raw")
        );
        assert_eq!(resolve(root, Path::new("/abs/dir")), PathBuf::from("/abs/dir"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/signs/processed", "cat.mp4"), "/signs/processed/cat.mp4");
        assert_eq!(join_url("/signs/processed/", "cat.mp4"), "/signs/processed/cat.mp4");
    }
}
