mod balance;
mod classification_split;
mod count;
mod detection_split;
mod home;
mod resize;
mod sanitize;

pub use balance::{render_balance_page, BalancePageState};
pub use classification_split::{render_classification_split_page, ClassificationSplitState};
pub use count::{render_count_page, CountPageState};
pub use detection_split::{render_detection_split_page, DetectionSplitState};
pub use home::render_home_page;
pub use resize::{render_resize_page, ResizePageState};
pub use sanitize::{render_sanitize_page, SanitizePageState};
