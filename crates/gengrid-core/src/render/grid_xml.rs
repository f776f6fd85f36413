use std::borrow::Cow;
use std::io::{self, Write};
use std::time::Instant;

use quick_xml::escape::partial_escape;

use crate::errors::{GenGridError, Result};
use crate::model::{GridSpec, GRID_TYPE, NEIGHBORS, WRAPPING};
use crate::{log_op_end, log_op_error, log_op_start};
use gengrid_core_types::schema::{
    FIELD_BYTES, FIELD_CELLS, FIELD_CELL_COUNT, FIELD_HEIGHT, FIELD_ROWS, FIELD_WIDTH, OP_EMIT_GRID,
};

/// How the cell-type label is placed inside `gridcell` content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellTextMode {
    /// Label written exactly as given. A label holding `<` or `&` yields a
    /// malformed document, which is what the legacy tool produced.
    #[default]
    Verbatim,
    /// `&`, `<` and `>` replaced by entity references
    Escaped,
}

impl CellTextMode {
    fn apply<'a>(&self, label: &'a str) -> Cow<'a, str> {
        match self {
            CellTextMode::Verbatim => Cow::Borrowed(label),
            CellTextMode::Escaped => partial_escape(label),
        }
    }
}

/// Counters for one emission pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitStats {
    pub rows: u64,
    pub cells: u64,
    pub bytes: u64,
}

/// Streams a grid document, one element per line, no indentation
#[derive(Debug, Clone, Copy, Default)]
pub struct GridXmlEmitter {
    mode: CellTextMode,
}

impl GridXmlEmitter {
    pub fn new(mode: CellTextMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CellTextMode {
        self.mode
    }

    /// Write the document for `spec` to `out`
    ///
    /// Rows are written top to bottom and cells left to right. Nothing is
    /// buffered beyond what `out` itself does.
    ///
    /// # Errors
    /// * `Io` - if `out` rejects a write
    pub fn emit<W: Write>(&self, spec: &GridSpec, out: &mut W) -> Result<EmitStats> {
        let started = Instant::now();
        log_op_start!(
            OP_EMIT_GRID,
            { FIELD_WIDTH } = spec.width(),
            { FIELD_HEIGHT } = spec.height(),
            { FIELD_CELL_COUNT } = spec.cell_count()
        );

        let mut counting = CountingWriter::new(out);
        match self.write_document(spec, &mut counting) {
            Ok(mut stats) => {
                stats.bytes = counting.written;
                log_op_end!(
                    OP_EMIT_GRID,
                    duration_ms = started.elapsed().as_millis() as u64,
                    { FIELD_ROWS } = stats.rows,
                    { FIELD_CELLS } = stats.cells,
                    { FIELD_BYTES } = stats.bytes
                );
                Ok(stats)
            }
            Err(io_err) => {
                let err: GenGridError = io_err.into();
                log_op_error!(
                    OP_EMIT_GRID,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// Emit into a fresh string
    ///
    /// # Errors
    /// * `Io` - never expected for an in-memory buffer
    pub fn render_to_string(&self, spec: &GridSpec) -> Result<String> {
        let mut buf = Vec::new();
        self.emit(spec, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_document<W: Write>(&self, spec: &GridSpec, out: &mut W) -> io::Result<EmitStats> {
        let label = self.mode.apply(spec.cell_type());
        let mut stats = EmitStats::default();

        writeln!(
            out,
            "<grid type=\"{}\" width=\"{}\" height=\"{}\" neighbors=\"{}\" wrapping=\"{}\">",
            GRID_TYPE,
            spec.width(),
            spec.height(),
            NEIGHBORS,
            WRAPPING
        )?;
        for _ in 0..spec.height() {
            writeln!(out, "<gridrow>")?;
            for _ in 0..spec.width() {
                writeln!(out, "<gridcell>{}</gridcell>", label)?;
                stats.cells += 1;
            }
            writeln!(out, "</gridrow>")?;
            stats.rows += 1;
        }
        writeln!(out, "</grid>")?;
        out.flush()?;

        Ok(stats)
    }
}

struct CountingWriter<'a, W: Write> {
    inner: &'a mut W,
    written: u64,
}

impl<'a, W: Write> CountingWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
