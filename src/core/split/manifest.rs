use std::fs;
use std::path::Path;

use crate::core::classes::ClassManifest;

/// Write the `data.yaml` manifest describing a detection split.
///
/// Keys follow the YOLO convention: absolute image-directory paths for
/// each enabled split, the class count `nc`,
/// and the ordered class-name list. The test entry appears only when the
/// test partition was enabled at split time.
pub fn write_manifest(
    dest: &Path,
    classes: &ClassManifest,
    include_test: bool,
) -> std::io::Result<()> {
    let mut contents = String::new();
    contents.push_str(&format!("train: {}/train/images\n", dest.display()));
    contents.push_str(&format!("val: {}/valid/images\n", dest.display()));
    if include_test {
        contents.push_str(&format!("test: {}/test/images\n", dest.display()));
    }
    contents.push('\n');
    contents.push_str(&format!("nc: {}\n", classes.len()));

    let names: Vec<String> = classes
        .names()
        .iter()
        .map(|name| format!("'{}'", name))
        .collect();
    contents.push_str(&format!("names: [{}]\n", names.join(", ")));

    fs::write(dest.join("data.yaml"), contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_with_test_split() {
        let dir = tempfile::tempdir().unwrap();
        let classes = ClassManifest::parse("person\ncar\n");
        write_manifest(dir.path(), &classes, true).unwrap();

        let content = fs::read_to_string(dir.path().join("data.yaml")).unwrap();
        assert!(content.contains(&format!("train: {}/train/images\n", dir.path().display())));
        assert!(content.contains(&format!("val: {}/valid/images\n", dir.path().display())));
        assert!(content.contains(&format!("test: {}/test/images\n", dir.path().display())));
        assert!(content.contains("nc: 2\n"));
        assert!(content.contains("names: ['person', 'car']\n"));
    }

    #[test]
    fn test_manifest_without_test_split() {
        let dir = tempfile::tempdir().unwrap();
        let classes = ClassManifest::parse("person\n");
        write_manifest(dir.path(), &classes, false).unwrap();

        let content = fs::read_to_string(dir.path().join("data.yaml")).unwrap();
        assert!(!content.contains("test:"));
        assert!(content.contains("nc: 1\n"));
        assert!(content.contains("names: ['person']\n"));
    }
}
