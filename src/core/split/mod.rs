//! Train/val/test dataset splitting.
//!
//! One randomized ratio partition algorithm, applied to two dataset
//! layouts: YOLO detection datasets (paired image + label files) and
//! classification datasets (one folder per class, or a flat folder).

mod manifest;
mod materialize;
mod partition;
mod ratios;

pub use manifest::write_manifest;
pub use materialize::{
    split_classification_dataset, split_detection_dataset, ClassificationSplitRequest,
    DetectionSplitRequest, SplitResult,
};
pub use partition::{partition, Partition};
pub use ratios::SplitRatios;
