//! Serialising a populated sheet into a downloadable document.
//!
//! [`ExportSink`] is the seam between the engine and a file format;
//! [`XlsxSink`] writes Office Open XML workbooks with `rust_xlsxwriter`.
//! [`export_month`] is the request-level entry point that ties the
//! repository, the holiday cache, the sheet populator and a sink together.

mod pipeline;
mod sink;
mod xlsx;

pub use pipeline::{build_sheet, export_month, merged_view};
pub use sink::{ExportArtifact, ExportSink, XLSX_CONTENT_TYPE, export_filename};
pub use xlsx::XlsxSink;
