//! Single-image resizing to an exact target resolution.

use std::path::PathBuf;

use image::imageops::FilterType;
use tracing::info;

use crate::core::error::{ToolError, ToolResult};

#[derive(Debug, Clone)]
pub struct ResizeRequest {
    pub image_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Resize an image to exactly `width` x `height` (aspect ratio not
/// preserved, bilinear filter) and save it next to the original as
/// `{stem}_resized.{ext}`. Returns the output path.
pub fn resize_image(req: &ResizeRequest) -> ToolResult<PathBuf> {
    if !req.image_path.is_file() {
        return Err(ToolError::MissingPath(req.image_path.clone()));
    }

    let img = image::open(&req.image_path)?;
    let resized = img.resize_exact(req.width, req.height, FilterType::Triangle);

    let stem = req
        .image_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let output_name = match req.image_path.extension() {
        Some(ext) => format!("{}_resized.{}", stem, ext.to_string_lossy()),
        None => format!("{}_resized", stem),
    };
    let output_path = req.image_path.with_file_name(output_name);

    resized.save(&output_path)?;
    info!(
        "Resized {:?} to {}x{}, saved as {:?}",
        req.image_path, req.width, req.height, output_path
    );
    Ok(output_path)
}
