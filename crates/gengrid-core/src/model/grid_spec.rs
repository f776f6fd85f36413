use std::time::Instant;

use crate::errors::{GenGridError, Result};
use crate::log_op_error;
use crate::parse::DimensionPolicy;
use gengrid_core_types::schema::OP_BUILD_GRID_SPEC;

/// Grid shape advertised in the `type` attribute
pub const GRID_TYPE: &str = "rectangular";

/// Neighbourhood size advertised in the `neighbors` attribute
pub const NEIGHBORS: u8 = 8;

/// Edge behaviour advertised in the `wrapping` attribute
pub const WRAPPING: bool = false;

/// Dimensions and cell label of the grid to emit
///
/// Built once from the invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    width: u32,
    height: u32,
    cell_type: String,
}

impl GridSpec {
    pub fn new(width: u32, height: u32, cell_type: impl Into<String>) -> Self {
        Self {
            width,
            height,
            cell_type: cell_type.into(),
        }
    }

    /// Build a spec from the three positional values
    ///
    /// All three must be present before either dimension is parsed, so a
    /// missing argument is reported ahead of any numeric problem.
    ///
    /// # Errors
    /// * `MissingArgument` - first absent value, in `width`, `height`, `cellType` order
    /// * `InvalidNumericArgument` - a dimension rejected by a strict policy
    pub fn from_args(
        width: Option<&str>,
        height: Option<&str>,
        cell_type: Option<&str>,
        policy: DimensionPolicy,
    ) -> Result<Self> {
        let started = Instant::now();
        let built = Self::resolve_args(width, height, cell_type, policy);
        if let Err(err) = &built {
            log_op_error!(
                OP_BUILD_GRID_SPEC,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
        }
        built
    }

    fn resolve_args(
        width: Option<&str>,
        height: Option<&str>,
        cell_type: Option<&str>,
        policy: DimensionPolicy,
    ) -> Result<Self> {
        let width = width.ok_or_else(|| missing("width"))?;
        let height = height.ok_or_else(|| missing("height"))?;
        let cell_type = cell_type.ok_or_else(|| missing("cellType"))?;

        Ok(Self::new(
            policy.resolve("width", width)?,
            policy.resolve("height", height)?,
            cell_type,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_type(&self) -> &str {
        &self.cell_type
    }

    /// Total number of `gridcell` elements the spec describes
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn missing(name: &str) -> GenGridError {
    GenGridError::MissingArgument {
        name: name.to_string(),
    }
}
