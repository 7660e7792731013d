// mod.rs - Dataset file loaders

pub mod csv;
pub mod tsv;
