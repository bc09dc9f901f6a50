pub mod pages;
pub mod widgets;
