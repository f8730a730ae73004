pub mod aggregate;
pub mod classification;
pub mod classifier;
pub mod confidence;
pub mod error;
pub mod history;
