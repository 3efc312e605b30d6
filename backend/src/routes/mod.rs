pub mod charts;
pub mod overview;
