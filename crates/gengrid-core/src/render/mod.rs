pub mod grid_xml;

pub use grid_xml::{CellTextMode, EmitStats, GridXmlEmitter};
