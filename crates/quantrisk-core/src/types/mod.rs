//! Shared domain enums used by configuration and the analysis crate.

pub mod criticality;
pub mod impact;
pub mod language;
pub mod sampling;

pub use criticality::CriticalityLevel;
pub use impact::ImpactCategory;
pub use language::Language;
pub use sampling::CorrelationSampling;
