//! Resolution-based sanitizing: walk a directory tree and delete images
//! whose dimensions fall below the given thresholds.

use std::fs;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
    Arc,
};

use tracing::{info, warn};

use crate::core::error::{ToolError, ToolResult};
use crate::core::scan::collect_files_recursive;

#[derive(Debug, Clone)]
pub struct SanitizeRequest {
    pub root: PathBuf,
    /// Delete images narrower than this, when set
    pub min_width: Option<u32>,
    /// Delete images shorter than this, when set
    pub min_height: Option<u32>,
}

/// What happened to one file during a sanitize pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeAction {
    Deleted { width: u32, height: u32 },
    Kept { width: u32, height: u32 },
    /// Not an image, or the header could not be read
    Unreadable(String),
    /// Flagged for deletion but the delete itself failed
    DeleteFailed(String),
}

#[derive(Debug, Clone)]
pub struct SanitizeLogEntry {
    pub path: PathBuf,
    pub action: SanitizeAction,
}

#[derive(Debug, Clone, Default)]
pub struct SanitizeReport {
    /// Files whose dimensions could be read
    pub checked: usize,
    pub deleted: usize,
    pub kept: usize,
    pub log: Vec<SanitizeLogEntry>,
}

/// Progress message types for background sanitizing
#[derive(Debug, Clone)]
pub enum SanitizeProgressMessage {
    Progress { current: usize, total: usize },
    Complete(SanitizeReport),
    Cancelled(SanitizeReport),
    Error(String),
}

/// Walk `root` recursively and delete undersized images.
///
/// Dimensions come from the image header only, so no pixel data is
/// decoded. Files that are not readable images are logged and left
/// alone. With both thresholds unset nothing is deleted.
pub fn sanitize_dataset_with_progress(
    req: &SanitizeRequest,
    progress_tx: Option<Sender<SanitizeProgressMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
) -> ToolResult<SanitizeReport> {
    if !req.root.is_dir() {
        return Err(ToolError::MissingPath(req.root.clone()));
    }

    let files = collect_files_recursive(&req.root)?;
    let total = files.len();
    info!("Sanitizing {} files under {:?}", total, req.root);

    let mut report = SanitizeReport::default();

    for (idx, path) in files.iter().enumerate() {
        if let Some(ref cancel) = cancel_flag {
            if cancel.load(Ordering::Relaxed) {
                warn!("Sanitize cancelled at file {}/{}", idx, total);
                if let Some(ref tx) = progress_tx {
                    let _ = tx.send(SanitizeProgressMessage::Cancelled(report.clone()));
                }
                return Ok(report);
            }
        }

        let action = match image::image_dimensions(path) {
            Ok((width, height)) => {
                report.checked += 1;
                let too_narrow = req.min_width.map_or(false, |min| width < min);
                let too_short = req.min_height.map_or(false, |min| height < min);

                if too_narrow || too_short {
                    match fs::remove_file(path) {
                        Ok(()) => {
                            report.deleted += 1;
                            SanitizeAction::Deleted { width, height }
                        }
                        Err(e) => SanitizeAction::DeleteFailed(e.to_string()),
                    }
                } else {
                    report.kept += 1;
                    SanitizeAction::Kept { width, height }
                }
            }
            Err(e) => SanitizeAction::Unreadable(e.to_string()),
        };

        report.log.push(SanitizeLogEntry {
            path: path.clone(),
            action,
        });

        if let Some(ref tx) = progress_tx {
            if (idx + 1) % 10 == 0 || idx + 1 == total {
                let _ = tx.send(SanitizeProgressMessage::Progress {
                    current: idx + 1,
                    total,
                });
            }
        }
    }

    info!(
        "Sanitize complete: checked={}, deleted={}, kept={}",
        report.checked, report.deleted, report.kept
    );
    if let Some(tx) = progress_tx {
        let _ = tx.send(SanitizeProgressMessage::Complete(report.clone()));
    }

    Ok(report)
}

/// Sanitize a directory tree (synchronous version)
pub fn sanitize_dataset(req: &SanitizeRequest) -> ToolResult<SanitizeReport> {
    sanitize_dataset_with_progress(req, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::path::Path;

    fn write_png(path: &Path, width: u32, height: u32) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let img = ImageBuffer::from_pixel(width, height, Rgb::<u8>([120, 120, 120]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_deletes_below_width_threshold() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("small.png"), 100, 500);
        write_png(&dir.path().join("big.png"), 640, 640);

        let report = sanitize_dataset(&SanitizeRequest {
            root: dir.path().to_path_buf(),
            min_width: Some(320),
            min_height: None,
        })
        .unwrap();

        assert_eq!(report.checked, 2);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.kept, 1);
        assert!(!dir.path().join("small.png").exists());
        assert!(dir.path().join("big.png").exists());
    }

    #[test]
    fn test_recurses_into_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a/tiny.png"), 10, 10);
        write_png(&dir.path().join("a/b/ok.png"), 800, 600);

        let report = sanitize_dataset(&SanitizeRequest {
            root: dir.path().to_path_buf(),
            min_width: Some(100),
            min_height: Some(100),
        })
        .unwrap();

        assert_eq!(report.deleted, 1);
        assert!(!dir.path().join("a/tiny.png").exists());
        assert!(dir.path().join("a/b/ok.png").exists());
    }

    #[test]
    fn test_no_thresholds_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("img.png"), 5, 5);

        let report = sanitize_dataset(&SanitizeRequest {
            root: dir.path().to_path_buf(),
            min_width: None,
            min_height: None,
        })
        .unwrap();

        assert_eq!(report.deleted, 0);
        assert_eq!(report.kept, 1);
        assert!(dir.path().join("img.png").exists());
    }

    #[test]
    fn test_unreadable_file_logged_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let report = sanitize_dataset(&SanitizeRequest {
            root: dir.path().to_path_buf(),
            min_width: Some(100),
            min_height: None,
        })
        .unwrap();

        assert_eq!(report.checked, 0);
        assert_eq!(report.deleted, 0);
        assert!(dir.path().join("notes.txt").exists());
        assert!(matches!(
            report.log[0].action,
            SanitizeAction::Unreadable(_)
        ));
    }
}
