pub mod balance;
pub mod classes;
pub mod count;
pub mod error;
pub mod resize;
pub mod sanitize;
pub mod scan;
pub mod split;
