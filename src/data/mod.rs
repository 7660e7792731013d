// mod.rs - Data structures module

pub mod dataset;
pub mod loaders;
pub mod sequence;

// Re-export main types for convenience
pub use dataset::Dataset;
pub use sequence::SequenceTable;
