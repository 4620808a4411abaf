//! IDE features — completion and signature help over the scanned table.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: queries take data in and return data out
//! 2. **No editor types**: results use our own records, converted at the
//!    editor boundary
//! 3. **Owned state**: all mutation goes through [`AnalysisHost`]

mod analysis;
mod completion;
mod signature_help;

pub use analysis::AnalysisHost;
pub use completion::{CompletionItem, completions};
pub use signature_help::{SignatureHelp, active_parameter, find_call_context};
