use std::fs;
use std::path::Path;

use crate::core::error::{ToolError, ToolResult};

/// Ordered list of class names, loaded from a newline-separated text file.
///
/// Order is significant: downstream consumers index classes positionally,
/// so the manifest preserves file order exactly. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassManifest {
    names: Vec<String>,
}

impl ClassManifest {
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        Self { names }
    }

    pub fn load(path: &Path) -> ToolResult<Self> {
        if !path.is_file() {
            return Err(ToolError::MissingPath(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let manifest = ClassManifest::parse("person\ncar\nbicycle\n");
        assert_eq!(manifest.names(), &["person", "car", "bicycle"]);
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let manifest = ClassManifest::parse("  person  \n\n\ncar\n   \n");
        assert_eq!(manifest.names(), &["person", "car"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClassManifest::load(Path::new("/nonexistent/classes.names")).unwrap_err();
        assert!(matches!(err, ToolError::MissingPath(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.names");
        fs::write(&path, "cat\ndog\n").unwrap();
        let manifest = ClassManifest::load(&path).unwrap();
        assert_eq!(manifest.names(), &["cat", "dog"]);
    }
}
