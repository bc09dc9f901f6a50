//! Per-class image counting: attribute every image under a dataset root
//! to the class named by its parent directory.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::info;

use crate::core::classes::ClassManifest;
use crate::core::error::{ToolError, ToolResult};
use crate::core::scan::{collect_files_recursive, has_image_extension};

#[derive(Debug, Clone)]
pub struct CountRequest {
    pub dataset_dir: PathBuf,
    /// Newline-separated class names defining report order
    pub classes_file: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ClassCounts {
    /// Counts for every class in the manifest, in manifest order;
    /// classes with no images report 0
    pub listed: Vec<(String, usize)>,
    /// Folder names found in the tree but absent from the manifest
    pub unlisted: Vec<(String, usize)>,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.listed.iter().map(|(_, n)| n).sum::<usize>()
            + self.unlisted.iter().map(|(_, n)| n).sum::<usize>()
    }
}

/// Count images per class folder against an ordered class list.
pub fn count_classes(req: &CountRequest) -> ToolResult<ClassCounts> {
    let manifest = ClassManifest::load(&req.classes_file)?;
    if !req.dataset_dir.is_dir() {
        return Err(ToolError::MissingPath(req.dataset_dir.clone()));
    }

    let mut by_folder: HashMap<String, usize> = HashMap::new();
    for path in collect_files_recursive(&req.dataset_dir)? {
        if !has_image_extension(&path) {
            continue;
        }
        let class = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());
        if let Some(class) = class {
            *by_folder.entry(class).or_insert(0) += 1;
        }
    }

    let listed: Vec<(String, usize)> = manifest
        .names()
        .iter()
        .map(|name| (name.clone(), by_folder.remove(name).unwrap_or(0)))
        .collect();

    let mut unlisted: Vec<(String, usize)> = by_folder.into_iter().collect();
    unlisted.sort();

    info!(
        "Counted images for {} listed classes ({} unlisted folders)",
        listed.len(),
        unlisted.len()
    );
    Ok(ClassCounts { listed, unlisted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::fs::File;

    fn fixture(classes: &str, layout: &[(&str, usize)]) -> (tempfile::TempDir, CountRequest) {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("dataset");
        for (folder, n) in layout {
            let folder_dir = dataset.join(folder);
            fs::create_dir_all(&folder_dir).unwrap();
            for i in 0..*n {
                File::create(folder_dir.join(format!("{}.jpg", i))).unwrap();
            }
        }
        let classes_file = dir.path().join("classes.names");
        fs::write(&classes_file, classes).unwrap();
        let req = CountRequest {
            dataset_dir: dataset,
            classes_file,
        };
        (dir, req)
    }

    #[test]
    fn test_counts_in_manifest_order() {
        let (_dir, req) = fixture("cat\ndog\nfish\n", &[("dog", 3), ("cat", 5)]);
        let counts = count_classes(&req).unwrap();
        assert_eq!(
            counts.listed,
            vec![
                ("cat".to_string(), 5),
                ("dog".to_string(), 3),
                ("fish".to_string(), 0),
            ]
        );
        assert!(counts.unlisted.is_empty());
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn test_unlisted_folders_reported() {
        let (_dir, req) = fixture("cat\n", &[("cat", 2), ("mystery", 4)]);
        let counts = count_classes(&req).unwrap();
        assert_eq!(counts.listed, vec![("cat".to_string(), 2)]);
        assert_eq!(counts.unlisted, vec![("mystery".to_string(), 4)]);
    }

    #[test]
    fn test_nested_split_folders_counted() {
        // train/cat and val/cat both attribute to "cat"
        let (_dir, req) = fixture("cat\n", &[]);
        for split in ["train", "val"] {
            let d = req.dataset_dir.join(split).join("cat");
            fs::create_dir_all(&d).unwrap();
            File::create(d.join("img.png")).unwrap();
        }
        let counts = count_classes(&req).unwrap();
        assert_eq!(counts.listed, vec![("cat".to_string(), 2)]);
    }

    #[test]
    fn test_non_images_ignored() {
        let (_dir, req) = fixture("cat\n", &[("cat", 1)]);
        File::create(req.dataset_dir.join("cat").join("labels.txt")).unwrap();
        let counts = count_classes(&req).unwrap();
        assert_eq!(counts.listed, vec![("cat".to_string(), 1)]);
    }
}
