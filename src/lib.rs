pub mod datasets;
pub mod plots;
pub mod records;
