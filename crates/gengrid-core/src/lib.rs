//! gengrid core - grid description emitter
//!
//! This crate provides:
//! - [`GridSpec`], the immutable description of one grid
//! - Dimension parsing with lenient (`atoi`-like) and strict policies
//! - [`GridXmlEmitter`], which streams the XML document to any writer
//! - The structured error facility and the tracing-based logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parse;
pub mod render;

// Used by the exported logging macros
#[doc(hidden)]
pub use gengrid_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GenGridError, Result};
pub use model::GridSpec;
pub use parse::DimensionPolicy;
pub use render::{CellTextMode, EmitStats, GridXmlEmitter};
