/// Tolerant key visual lookup
///
/// Designers drop files like `KV1.png`, `kv1.JPG` or `KV1.WEBP` into the
/// image folder. The resolver probes every case variant in a fixed order
/// and returns the first regular file it finds.
use std::path::{Path, PathBuf};
use tracing::debug;

/// Allowed extensions, lowercase form (uppercase forms are probed after these)
pub const EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

/// All probe paths for `name` in priority order
///
/// Basenames are the outer loop (as given, lowercase, uppercase),
/// extensions the inner loop (lowercase set, then uppercase set).
/// Identical probes are only listed once.
pub fn candidate_paths(name: &str, directory: &Path) -> Vec<PathBuf> {
    let basenames = [name.to_string(), name.to_lowercase(), name.to_uppercase()];
    let extensions: Vec<String> = EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .chain(EXTENSIONS.iter().map(|ext| ext.to_uppercase()))
        .collect();

    let mut paths: Vec<PathBuf> = Vec::with_capacity(basenames.len() * extensions.len());
    for basename in &basenames {
        for ext in &extensions {
            let path = directory.join(format!("{basename}{ext}"));
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

/// Find the first existing file for a logical name
///
/// Returns `None` when nothing matches; that is an expected outcome,
/// not an error.
pub fn resolve(name: &str, directory: &Path) -> Option<PathBuf> {
    let found = candidate_paths(name, directory)
        .into_iter()
        .find(|path| path.is_file());

    match &found {
        Some(path) => debug!("🔍 Resolved {} -> {}", name, path.display()),
        None => debug!("🔍 No file for {} in {}", name, directory.display()),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "KV2.png");
        assert_eq!(resolve("KV1", dir.path()), None);
    }

    #[test]
    fn test_every_case_combination_resolves() {
        // Mixed-case name so the three basename variants are all distinct
        let basenames = ["Kv1", "kv1", "KV1"];
        let extensions: Vec<String> = EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .chain(EXTENSIONS.iter().map(|e| e.to_uppercase()))
            .collect();

        let mut checked = 0;
        for basename in basenames {
            for ext in &extensions {
                let dir = tempfile::tempdir().unwrap();
                let expected = touch(dir.path(), &format!("{basename}{ext}"));
                assert_eq!(resolve("Kv1", dir.path()), Some(expected));
                checked += 1;
            }
        }
        assert_eq!(checked, 24);
    }

    #[test]
    fn test_original_case_wins_over_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "kv1.PNG");
        let expected = touch(dir.path(), "KV1.png");
        assert_eq!(resolve("KV1", dir.path()), Some(expected));
    }

    #[test]
    fn test_basename_priority_beats_extension_priority() {
        let dir = tempfile::tempdir().unwrap();
        // Original-case basename with the last extension still beats
        // lowercase basename with the first extension.
        let expected = touch(dir.path(), "Kv1.WEBP");
        touch(dir.path(), "kv1.png");
        assert_eq!(resolve("Kv1", dir.path()), Some(expected));
    }

    #[test]
    fn test_lowercase_extensions_before_uppercase() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "KV3.JPG");
        let expected = touch(dir.path(), "KV3.webp");
        assert_eq!(resolve("KV3", dir.path()), Some(expected));
    }

    #[test]
    fn test_directories_are_not_matches() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("KV1.png")).unwrap();
        let expected = touch(dir.path(), "kv1.jpeg");
        assert_eq!(resolve("KV1", dir.path()), Some(expected));
    }

    #[test]
    fn test_candidate_paths_skip_duplicate_probes() {
        let paths = candidate_paths("KV1", Path::new("img"));
        // "KV1" and its uppercase form collapse into one basename
        assert_eq!(paths.len(), 16);
        assert_eq!(paths[0], Path::new("img").join("KV1.png"));
        assert_eq!(paths[4], Path::new("img").join("KV1.PNG"));
        assert_eq!(paths[8], Path::new("img").join("kv1.png"));
    }
}
