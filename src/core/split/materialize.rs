use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::core::classes::ClassManifest;
use crate::core::error::{ToolError, ToolResult};
use crate::core::scan::{list_class_dirs, list_images};
use crate::core::split::{partition, write_manifest, SplitRatios};

/// Per-partition counts of primary artifacts actually copied.
///
/// Informational only: the filesystem copy is the source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitResult {
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

impl SplitResult {
    pub fn total(&self) -> usize {
        self.train + self.val + self.test
    }
}

/// Parameters for splitting a YOLO detection dataset.
#[derive(Debug, Clone)]
pub struct DetectionSplitRequest {
    /// Must contain `images/` and `labels/` subfolders
    pub source: PathBuf,
    pub dest: PathBuf,
    pub ratios: SplitRatios,
    /// Newline-separated class names, used for the emitted `data.yaml`
    pub classes_file: PathBuf,
    /// Fixed shuffle seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

/// Parameters for splitting a classification dataset (folder per class,
/// or a flat folder of images).
#[derive(Debug, Clone)]
pub struct ClassificationSplitRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub ratios: SplitRatios,
    pub seed: Option<u64>,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Copy each named image from `images_src` into `images_dst`, along with
/// its sibling `<stem>.txt` label when one exists. A missing label is a
/// skip, not an error. Returns the number of images copied.
fn copy_paired(
    names: &[String],
    images_src: &Path,
    labels_src: &Path,
    images_dst: &Path,
    labels_dst: &Path,
) -> ToolResult<usize> {
    for name in names {
        fs::copy(images_src.join(name), images_dst.join(name))?;

        if let Some(stem) = Path::new(name).file_stem() {
            let label_name = format!("{}.txt", stem.to_string_lossy());
            let label_src = labels_src.join(&label_name);
            if label_src.exists() {
                fs::copy(&label_src, labels_dst.join(&label_name))?;
            }
        }
    }
    Ok(names.len())
}

/// Copy a list of image paths flat into `dst`, keeping filenames.
fn copy_flat(images: &[PathBuf], dst: &Path) -> ToolResult<usize> {
    for src in images {
        let name = src
            .file_name()
            .ok_or_else(|| ToolError::MissingPath(src.clone()))?;
        fs::copy(src, dst.join(name))?;
    }
    Ok(images.len())
}

/// Split a YOLO detection dataset into `{dest}/{train,valid,test}/{images,labels}`
/// and emit a `data.yaml` manifest.
///
/// Validation (ratios, class file, source layout) happens before any
/// filesystem mutation. Copies never touch the source; an I/O failure
/// mid-run aborts immediately and leaves partial output in place.
pub fn split_detection_dataset(req: &DetectionSplitRequest) -> ToolResult<SplitResult> {
    req.ratios.validate()?;
    let classes = ClassManifest::load(&req.classes_file)?;

    let images_dir = req.source.join("images");
    let labels_dir = req.source.join("labels");
    if !images_dir.is_dir() {
        return Err(ToolError::MissingPath(images_dir));
    }

    let names: Vec<String> = list_images(&images_dir)?
        .into_iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    info!("Found {} images in {:?}", names.len(), images_dir);

    let mut rng = make_rng(req.seed);
    let split = partition(names, &req.ratios, &mut rng)?;

    // The detection layout uses "valid" for the validation split, the
    // folder name YOLO data.yaml files conventionally point at.
    let buckets: Vec<(&str, &Vec<String>)> = if req.ratios.has_test() {
        vec![
            ("train", &split.train),
            ("valid", &split.val),
            ("test", &split.test),
        ]
    } else {
        vec![("train", &split.train), ("valid", &split.val)]
    };

    for (dir, _) in &buckets {
        fs::create_dir_all(req.dest.join(dir).join("images"))?;
        fs::create_dir_all(req.dest.join(dir).join("labels"))?;
    }

    for (dir, names) in &buckets {
        copy_paired(
            names,
            &images_dir,
            &labels_dir,
            &req.dest.join(dir).join("images"),
            &req.dest.join(dir).join("labels"),
        )?;
    }

    write_manifest(&req.dest, &classes, req.ratios.has_test())?;

    let result = SplitResult {
        train: split.train.len(),
        val: split.val.len(),
        test: split.test.len(),
    };
    info!(
        "Detection split complete: train={}, val={}, test={}",
        result.train, result.val, result.test
    );
    Ok(result)
}

/// Split a classification dataset into `{dest}/{train,val,test}/`.
///
/// A flat source directory of images produces a flat output; a source of
/// class subfolders preserves the class folder name under each split,
/// partitioning each class independently so small classes are still
/// represented in every split.
pub fn split_classification_dataset(req: &ClassificationSplitRequest) -> ToolResult<SplitResult> {
    req.ratios.validate()?;
    if !req.source.is_dir() {
        return Err(ToolError::MissingPath(req.source.clone()));
    }

    let split_dirs: Vec<&str> = if req.ratios.has_test() {
        vec!["train", "val", "test"]
    } else {
        vec!["train", "val"]
    };
    for dir in &split_dirs {
        fs::create_dir_all(req.dest.join(dir))?;
    }

    let mut rng = make_rng(req.seed);
    let mut result = SplitResult::default();

    let flat_images = list_images(&req.source)?;
    if !flat_images.is_empty() {
        // Flat folder: single implicit class, flat output.
        let split = partition(flat_images, &req.ratios, &mut rng)?;
        result.train += copy_flat(&split.train, &req.dest.join("train"))?;
        result.val += copy_flat(&split.val, &req.dest.join("val"))?;
        if req.ratios.has_test() {
            result.test += copy_flat(&split.test, &req.dest.join("test"))?;
        }
    } else {
        for class_dir in list_class_dirs(&req.source)? {
            let class_name = match class_dir.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let images = list_images(&class_dir)?;
            if images.is_empty() {
                warn!("No images in class folder {:?}, skipping", class_dir);
                continue;
            }

            let split = partition(images, &req.ratios, &mut rng)?;
            let copy_class = |bucket: &[PathBuf], split_dir: &str| -> ToolResult<usize> {
                let dst = req.dest.join(split_dir).join(&class_name);
                fs::create_dir_all(&dst)?;
                copy_flat(bucket, &dst)
            };

            result.train += copy_class(&split.train, "train")?;
            result.val += copy_class(&split.val, "val")?;
            if req.ratios.has_test() {
                result.test += copy_class(&split.test, "test")?;
            }
        }
    }

    info!(
        "Classification split complete: train={}, val={}, test={}",
        result.train, result.val, result.test
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut f = File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    fn detection_fixture(n_images: usize, n_labels: usize) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("images")).unwrap();
        fs::create_dir_all(source.join("labels")).unwrap();
        for i in 0..n_images {
            write_file(&source.join("images").join(format!("img{:03}.jpg", i)), "x");
        }
        for i in 0..n_labels {
            write_file(
                &source.join("labels").join(format!("img{:03}.txt", i)),
                "0 0.5 0.5 0.1 0.1\n",
            );
        }
        let classes = dir.path().join("classes.names");
        write_file(&classes, "person\ncar\n");
        (dir, source)
    }

    fn count_files(dir: &Path) -> usize {
        fs::read_dir(dir).map(|e| e.count()).unwrap_or(0)
    }

    #[test]
    fn test_detection_split_counts_and_layout() {
        let (dir, source) = detection_fixture(10, 10);
        let dest = dir.path().join("out");
        let req = DetectionSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.7,
                val: 0.2,
                test: 0.1,
            },
            classes_file: dir.path().join("classes.names"),
            seed: Some(42),
        };

        let result = split_detection_dataset(&req).unwrap();
        assert_eq!(result.train, 7);
        assert_eq!(result.val, 2);
        assert_eq!(result.test, 1);

        assert_eq!(count_files(&dest.join("train/images")), 7);
        assert_eq!(count_files(&dest.join("train/labels")), 7);
        assert_eq!(count_files(&dest.join("valid/images")), 2);
        assert_eq!(count_files(&dest.join("test/images")), 1);
        assert!(dest.join("data.yaml").is_file());
    }

    #[test]
    fn test_detection_split_zero_test_creates_no_test_dir() {
        let (dir, source) = detection_fixture(10, 10);
        let dest = dir.path().join("out");
        let req = DetectionSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.7,
                val: 0.3,
                test: 0.0,
            },
            classes_file: dir.path().join("classes.names"),
            seed: Some(42),
        };

        let result = split_detection_dataset(&req).unwrap();
        assert_eq!(result.train, 7);
        assert_eq!(result.val, 3);
        assert_eq!(result.test, 0);
        assert!(!dest.join("test").exists());
    }

    #[test]
    fn test_detection_split_missing_label_is_skipped() {
        // 4 images but only 2 labels: every image is copied, labels only
        // where they exist, and no error is raised.
        let (dir, source) = detection_fixture(4, 2);
        let dest = dir.path().join("out");
        let req = DetectionSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 1.0,
                val: 0.0,
                test: 0.0,
            },
            classes_file: dir.path().join("classes.names"),
            seed: Some(1),
        };

        let result = split_detection_dataset(&req).unwrap();
        assert_eq!(result.train, 4);
        assert_eq!(count_files(&dest.join("train/images")), 4);
        assert_eq!(count_files(&dest.join("train/labels")), 2);
    }

    #[test]
    fn test_detection_split_source_left_intact() {
        let (dir, source) = detection_fixture(6, 6);
        let req = DetectionSplitRequest {
            source: source.clone(),
            dest: dir.path().join("out"),
            ratios: SplitRatios::default(),
            classes_file: dir.path().join("classes.names"),
            seed: Some(3),
        };
        split_detection_dataset(&req).unwrap();

        assert_eq!(count_files(&source.join("images")), 6);
        assert_eq!(count_files(&source.join("labels")), 6);
    }

    #[test]
    fn test_detection_split_empty_source() {
        let (dir, source) = detection_fixture(0, 0);
        let dest = dir.path().join("out");
        let req = DetectionSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios::default(),
            classes_file: dir.path().join("classes.names"),
            seed: None,
        };

        let result = split_detection_dataset(&req).unwrap();
        assert_eq!(result, SplitResult::default());
        // Split roots exist but are empty
        assert_eq!(count_files(&dest.join("train/images")), 0);
        assert_eq!(count_files(&dest.join("valid/images")), 0);
    }

    #[test]
    fn test_detection_split_rejects_bad_ratios_before_writing() {
        let (dir, source) = detection_fixture(4, 4);
        let dest = dir.path().join("out");
        let req = DetectionSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.5,
                val: 0.2,
                test: 0.1,
            },
            classes_file: dir.path().join("classes.names"),
            seed: None,
        };

        assert!(matches!(
            split_detection_dataset(&req),
            Err(ToolError::InvalidRatios(_))
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_detection_split_missing_images_dir() {
        let dir = tempfile::tempdir().unwrap();
        let classes = dir.path().join("classes.names");
        write_file(&classes, "a\n");
        let req = DetectionSplitRequest {
            source: dir.path().join("nope"),
            dest: dir.path().join("out"),
            ratios: SplitRatios::default(),
            classes_file: classes,
            seed: None,
        };
        assert!(matches!(
            split_detection_dataset(&req),
            Err(ToolError::MissingPath(_))
        ));
    }

    #[test]
    fn test_classification_split_preserves_class_folders() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("dataset");
        for class in ["cat", "dog"] {
            for i in 0..10 {
                write_file(&source.join(class).join(format!("{}{}.jpg", class, i)), "x");
            }
        }
        let dest = dir.path().join("out");
        let req = ClassificationSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.7,
                val: 0.3,
                test: 0.0,
            },
            seed: Some(9),
        };

        let result = split_classification_dataset(&req).unwrap();
        // Each class partitioned independently: 7 train + 3 val per class
        assert_eq!(result.train, 14);
        assert_eq!(result.val, 6);
        assert_eq!(count_files(&dest.join("train/cat")), 7);
        assert_eq!(count_files(&dest.join("train/dog")), 7);
        assert_eq!(count_files(&dest.join("val/cat")), 3);
        assert!(!dest.join("test").exists());
    }

    #[test]
    fn test_classification_split_drops_floor_remainder_per_class() {
        // 9 images at 0.7/0.3 floor to 6 train and 2 val; the leftover
        // image is dropped rather than absorbed into val, the same rule
        // the detection splitter applies.
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("dataset");
        for i in 0..9 {
            write_file(&source.join("cat").join(format!("cat{}.jpg", i)), "x");
        }
        let dest = dir.path().join("out");
        let req = ClassificationSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.7,
                val: 0.3,
                test: 0.0,
            },
            seed: Some(5),
        };

        let result = split_classification_dataset(&req).unwrap();
        assert_eq!(result.train, 6);
        assert_eq!(result.val, 2);
        assert_eq!(count_files(&dest.join("train/cat")), 6);
        assert_eq!(count_files(&dest.join("val/cat")), 2);
    }

    #[test]
    fn test_classification_split_flat_input_flat_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("flat");
        for i in 0..10 {
            write_file(&source.join(format!("img{}.png", i)), "x");
        }
        let dest = dir.path().join("out");
        let req = ClassificationSplitRequest {
            source,
            dest: dest.clone(),
            ratios: SplitRatios {
                train: 0.7,
                val: 0.3,
                test: 0.0,
            },
            seed: Some(11),
        };

        let result = split_classification_dataset(&req).unwrap();
        assert_eq!(result.train, 7);
        assert_eq!(result.val, 3);
        assert_eq!(count_files(&dest.join("train")), 7);
        assert_eq!(count_files(&dest.join("val")), 3);
    }

    #[test]
    fn test_classification_split_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let req = ClassificationSplitRequest {
            source: dir.path().join("absent"),
            dest: dir.path().join("out"),
            ratios: SplitRatios::default(),
            seed: None,
        };
        assert!(matches!(
            split_classification_dataset(&req),
            Err(ToolError::MissingPath(_))
        ));
    }
}
