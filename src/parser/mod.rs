//! Line-oriented scanning: comment stripping, structural scanning,
//! the declaration grammar, and parameter decomposition.
//!
//! Text flows one way through this module:
//!
//! ```text
//! raw text → strip_comments → scan_unit ─ depth==1 ─→ match_declaration
//!                                                        ↓
//!                                                 decompose_params
//! ```

pub mod comments;
pub mod grammar;
pub mod params;
pub mod scanner;

pub use comments::strip_comments;
pub use grammar::{DeclMatch, TypeKind, VOID_TYPE, match_declaration, match_type_declaration};
pub use params::decompose_params;
pub use scanner::{EnclosingType, scan_unit};
