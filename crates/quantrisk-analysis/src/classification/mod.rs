//! Classification Table: risk index to criticality band, label, and color.

pub mod band;
pub mod table;

pub use band::{Classification, ClassificationBand};
pub use table::ClassificationTable;
