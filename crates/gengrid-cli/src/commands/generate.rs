//! Generate command
//!
//! Usage: gengrid [--strict] [--escape] <WIDTH> <HEIGHT> <CELL_TYPE>

use clap::Args;
use gengrid_core::{CellTextMode, DimensionPolicy, GridSpec, GridXmlEmitter, Result};
use std::io::{self, BufWriter};

// Positionals are optional so an absent one reaches MissingArgument instead
// of clap's usage error. They accept leading hyphens: `-x` is a width the
// lenient policy reads as 0 and `-dead` is a valid cell type. Options are
// only recognised before the first positional; after it, anything
// hyphenated is a value.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of cells per row
    #[arg(allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Number of rows
    #[arg(allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Label written into every cell
    #[arg(allow_hyphen_values = true)]
    pub cell_type: Option<String>,

    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Reject width/height values that are not plain non-negative integers
    #[arg(long)]
    pub strict: bool,

    /// XML-escape the cell type instead of writing it verbatim
    #[arg(long)]
    pub escape: bool,
}

impl GenerateArgs {
    fn policy(&self) -> DimensionPolicy {
        if self.strict {
            DimensionPolicy::Strict
        } else {
            DimensionPolicy::Lenient
        }
    }

    fn text_mode(&self) -> CellTextMode {
        if self.escape {
            CellTextMode::Escaped
        } else {
            CellTextMode::Verbatim
        }
    }
}

/// Execute generate command
///
/// The spec is fully resolved before stdout is touched, so a bad invocation
/// never leaves a partial document behind.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let spec = GridSpec::from_args(
        args.width.as_deref(),
        args.height.as_deref(),
        args.cell_type.as_deref(),
        args.policy(),
    )?;

    if !args.extra.is_empty() {
        tracing::warn!(extra = ?args.extra, "ignoring extra arguments");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = GridXmlEmitter::new(args.text_mode()).emit(&spec, &mut out)?;
    tracing::debug!(bytes = stats.bytes, "grid written to stdout");

    Ok(())
}
