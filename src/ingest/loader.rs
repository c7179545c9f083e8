//! Candidate loading for dropped and picked paths.
//!
//! The window hands us paths, not file contents. This module reads them off
//! the UI thread and produces candidates for the selection store. Mime types
//! come from the extension table; the store does the actual image filtering,
//! so a directly-dropped unknown file still flows through as a candidate and
//! gets discarded there.

use std::path::{Path, PathBuf};

use tokio::task;
use walkdir::WalkDir;

use crate::state::staged::{self, StagedFile};

/// Load every path into a candidate. Directories are expanded recursively,
/// keeping only recognized image extensions. Never fails: unreadable files
/// are skipped with a warning.
pub async fn load_paths(paths: Vec<PathBuf>) -> Vec<StagedFile> {
    // Reading and walking are blocking; keep them off the UI executor
    match task::spawn_blocking(move || load_paths_blocking(&paths)).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("candidate loader task failed: {e}");
            Vec::new()
        }
    }
}

fn load_paths_blocking(paths: &[PathBuf]) -> Vec<StagedFile> {
    let mut candidates = Vec::new();

    for path in paths {
        if path.is_dir() {
            collect_dir(path, &mut candidates);
        } else if let Some(candidate) = read_candidate(path) {
            candidates.push(candidate);
        }
    }

    tracing::debug!(count = candidates.len(), "loaded candidates");
    candidates
}

/// Walk a dropped folder, collecting files with known image extensions.
fn collect_dir(dir: &Path, out: &mut Vec<StagedFile>) {
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Inside folders only recognized extensions are worth reading
        if staged::mime_for_path(path).is_none() {
            continue;
        }

        if let Some(candidate) = read_candidate(path) {
            out.push(candidate);
        }
    }
}

fn read_candidate(path: &Path) -> Option<StagedFile> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), "skipping unreadable file: {e}");
            return None;
        }
    };

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let mime_type = staged::mime_for_path(path).unwrap_or(staged::OCTET_STREAM);

    Some(StagedFile::new(name, mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "astro-vision-loader-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_nonexistent_path_yields_nothing() {
        let candidates = load_paths(vec![PathBuf::from("/nonexistent/m31.png")]).await;
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_loads_files_and_classifies_by_extension() {
        let dir = scratch_dir("files");
        let png = dir.join("andromeda.png");
        let txt = dir.join("notes.txt");
        fs::write(&png, [1, 2, 3]).unwrap();
        fs::write(&txt, "not an image").unwrap();

        let candidates = load_paths(vec![png, txt]).await;

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].mime_type, "image/png");
        // Unknown extensions become octet-stream and are left for the store
        assert_eq!(candidates[1].mime_type, staged::OCTET_STREAM);

        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_dropped_folder_keeps_only_image_extensions() {
        let dir = scratch_dir("folder");
        fs::write(dir.join("a.jpg"), [0xFF, 0xD8]).unwrap();
        fs::write(dir.join("b.fits"), [0u8; 16]).unwrap();
        fs::write(dir.join("skip.log"), "noise").unwrap();

        let mut candidates = load_paths(vec![dir.clone()]).await;
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.fits"]);

        fs::remove_dir_all(dir).unwrap();
    }
}
