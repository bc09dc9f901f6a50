//! Class balancing: cap the number of images per class by copying a
//! random subset of each class folder into a fresh output tree.

use std::fs;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
    Arc,
};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::core::error::{ToolError, ToolResult};
use crate::core::scan::{list_class_dirs, list_images};

#[derive(Debug, Clone)]
pub struct BalanceRequest {
    /// Directory containing one subfolder per class
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Maximum images copied per class
    pub max_per_class: usize,
    pub seed: Option<u64>,
}

/// Copy counts for one balancing run.
#[derive(Debug, Clone, Default)]
pub struct BalanceReport {
    /// (class name, images copied), in class-folder order
    pub classes: Vec<(String, usize)>,
    pub total_copied: usize,
}

/// Progress message types for background balancing
#[derive(Debug, Clone)]
pub enum BalanceProgressMessage {
    Progress {
        class_index: usize,
        class_total: usize,
        class_name: String,
        copied: usize,
    },
    Complete(BalanceReport),
    Cancelled(BalanceReport),
    Error(String),
}

/// Balance a classification dataset with optional progress reporting.
///
/// Each class folder is shuffled and at most `max_per_class` images are
/// copied into `{dest}/{class}/`. The source is never mutated. A
/// cancelled run reports the classes completed so far.
pub fn balance_dataset_with_progress(
    req: &BalanceRequest,
    progress_tx: Option<Sender<BalanceProgressMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
) -> ToolResult<BalanceReport> {
    if !req.source.is_dir() {
        return Err(ToolError::MissingPath(req.source.clone()));
    }

    let class_dirs = list_class_dirs(&req.source)?;
    let class_total = class_dirs.len();
    info!(
        "Balancing {} classes to at most {} images each",
        class_total, req.max_per_class
    );

    let mut rng = match req.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = BalanceReport::default();

    for (class_index, class_dir) in class_dirs.iter().enumerate() {
        if let Some(ref cancel) = cancel_flag {
            if cancel.load(Ordering::Relaxed) {
                warn!(
                    "Balancing cancelled at class {}/{}",
                    class_index, class_total
                );
                if let Some(ref tx) = progress_tx {
                    let _ = tx.send(BalanceProgressMessage::Cancelled(report.clone()));
                }
                return Ok(report);
            }
        }

        let class_name = match class_dir.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let mut images = list_images(class_dir)?;
        images.shuffle(&mut rng);
        images.truncate(req.max_per_class);

        let out_dir = req.dest.join(&class_name);
        fs::create_dir_all(&out_dir)?;

        let mut copied = 0;
        for image in &images {
            let name = image
                .file_name()
                .ok_or_else(|| ToolError::MissingPath(image.clone()))?;
            fs::copy(image, out_dir.join(name))?;
            copied += 1;
        }

        report.total_copied += copied;
        report.classes.push((class_name.clone(), copied));

        if let Some(ref tx) = progress_tx {
            let _ = tx.send(BalanceProgressMessage::Progress {
                class_index: class_index + 1,
                class_total,
                class_name,
                copied,
            });
        }
    }

    info!(
        "Balancing complete: {} images copied across {} classes",
        report.total_copied,
        report.classes.len()
    );
    if let Some(tx) = progress_tx {
        let _ = tx.send(BalanceProgressMessage::Complete(report.clone()));
    }

    Ok(report)
}

/// Balance a classification dataset (synchronous version)
pub fn balance_dataset(req: &BalanceRequest) -> ToolResult<BalanceReport> {
    balance_dataset_with_progress(req, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::Path;

    fn fixture(counts: &[(&str, usize)]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        for (class, n) in counts {
            let class_dir = source.join(class);
            fs::create_dir_all(&class_dir).unwrap();
            for i in 0..*n {
                File::create(class_dir.join(format!("{}.jpg", i))).unwrap();
            }
        }
        (dir, source)
    }

    fn count_files(dir: &Path) -> usize {
        fs::read_dir(dir).map(|e| e.count()).unwrap_or(0)
    }

    #[test]
    fn test_cap_applied_per_class() {
        let (dir, source) = fixture(&[("cat", 10), ("dog", 3)]);
        let dest = dir.path().join("out");
        let report = balance_dataset(&BalanceRequest {
            source,
            dest: dest.clone(),
            max_per_class: 5,
            seed: Some(42),
        })
        .unwrap();

        assert_eq!(report.total_copied, 8);
        assert_eq!(
            report.classes,
            vec![("cat".to_string(), 5), ("dog".to_string(), 3)]
        );
        assert_eq!(count_files(&dest.join("cat")), 5);
        assert_eq!(count_files(&dest.join("dog")), 3);
    }

    #[test]
    fn test_source_not_mutated() {
        let (dir, source) = fixture(&[("cat", 6)]);
        balance_dataset(&BalanceRequest {
            source: source.clone(),
            dest: dir.path().join("out"),
            max_per_class: 2,
            seed: Some(1),
        })
        .unwrap();
        assert_eq!(count_files(&source.join("cat")), 6);
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = balance_dataset(&BalanceRequest {
            source: dir.path().join("absent"),
            dest: dir.path().join("out"),
            max_per_class: 5,
            seed: None,
        })
        .unwrap_err();
        assert!(matches!(err, ToolError::MissingPath(_)));
    }

    #[test]
    fn test_cancel_before_first_class() {
        let (dir, source) = fixture(&[("cat", 4)]);
        let cancel = Arc::new(AtomicBool::new(true));
        let report = balance_dataset_with_progress(
            &BalanceRequest {
                source,
                dest: dir.path().join("out"),
                max_per_class: 5,
                seed: None,
            },
            None,
            Some(cancel),
        )
        .unwrap();
        assert_eq!(report.total_copied, 0);
    }
}
