pub mod grid_spec;

pub use grid_spec::{GridSpec, GRID_TYPE, NEIGHBORS, WRAPPING};
