use std::path::PathBuf;

/// Result type for dataset tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Error types shared by the dataset tools
#[derive(Debug)]
pub enum ToolError {
    /// Split ratios do not sum to 1.0 (value is the offending sum)
    InvalidRatios(f32),
    /// A source path is absent or is not a directory/file of the expected kind
    MissingPath(PathBuf),
    IoError(std::io::Error),
    ImageError(image::ImageError),
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::InvalidRatios(sum) => write!(
                f,
                "Invalid split ratios: train + val + test = {:.2}, expected 1.00",
                sum
            ),
            ToolError::MissingPath(path) => write!(f, "Path not found: {:?}", path),
            ToolError::IoError(e) => write!(f, "I/O error: {}", e),
            ToolError::ImageError(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(error: std::io::Error) -> Self {
        ToolError::IoError(error)
    }
}

impl From<image::ImageError> for ToolError {
    fn from(error: image::ImageError) -> Self {
        ToolError::ImageError(error)
    }
}
