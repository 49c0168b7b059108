//! Data module - labeled samples fed to the chart

mod sample;

pub use sample::{FieldValue, Sample};
