//! # zscript-base
//!
//! Core library for ZScript signature extraction, completion, and
//! signature help.
//!
//! Built-in scripts are scanned out of a game archive (and, in project
//! mode, out of a directory of sources connected by `#include`); the
//! resulting signature table answers editor queries: which functions
//! complete a prefix, and which parameter is active under the cursor of
//! an open argument list.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → AnalysisHost, completion, signature help
//!   ↓
//! project   → archive scanning, include traversal, settings
//!   ↓
//! symbols   → FunctionSignature, ParameterDescriptor, SignatureTable
//!   ↓
//! parser    → comment stripping, line scanner, declaration grammar
//!   ↓
//! base      → primitives (SourceUnit, name folding, language id)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → symbols → project → ide)
// ============================================================================

/// Foundation types: SourceUnit, name folding, language id
pub mod base;

/// Error types shared by every fallible entry point
pub mod error;

/// Scanner: comment stripping, brace-depth line scanning, declaration
/// grammar, parameter decomposition
pub mod parser;

/// Signature records and the case-insensitive signature table
pub mod symbols;

/// Project management: archive scanning, include traversal, settings
pub mod project;

/// IDE features: completion and signature help
pub mod ide;

// Re-export commonly needed items
pub use base::{LANGUAGE_ID, SourceUnit, fold_name, is_supported_language};
pub use error::Error;
pub use ide::AnalysisHost;
pub use symbols::{FunctionSignature, ParameterDescriptor, SignatureTable};
