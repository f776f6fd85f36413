//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Grid dimensions
pub const FIELD_WIDTH: &str = "width";
pub const FIELD_HEIGHT: &str = "height";
pub const FIELD_CELL_COUNT: &str = "cell_count";

// Emission counters
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_CELLS: &str = "cells";
pub const FIELD_BYTES: &str = "bytes";

// Dimension parsing
pub const FIELD_ARGUMENT: &str = "argument";
pub const FIELD_RAW_VALUE: &str = "raw_value";
pub const FIELD_RESOLVED: &str = "resolved";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_MESSAGE: &str = "err_message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_EMIT_GRID: &str = "emit_grid";
pub const OP_RESOLVE_DIMENSION: &str = "resolve_dimension";
pub const OP_BUILD_GRID_SPEC: &str = "build_grid_spec";
