//! The structural scanner: brace-depth tracking, logical-line assembly, and
//! enclosing-type context.
//!
//! Depth 1 is the member level of this dialect: functions are declared
//! directly inside a `class`/`struct` body. Deeper nesting (method bodies,
//! nested blocks) is brace-counted but never handed to the grammar.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::SourceUnit;
use crate::parser::comments::strip_comments;
use crate::parser::grammar::{self, TypeKind};
use crate::parser::params::decompose_params;
use crate::symbols::{FunctionSignature, SignatureTable};

/// The class or struct whose body the scanner is currently inside.
///
/// Exactly one context is current at any scan position; it is not a stack.
/// Nested type declarations are not modeled, matching the single-level
/// depth assumption of the whole scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnclosingType {
    pub kind: TypeKind,
    pub name: SmolStr,
}

impl EnclosingType {
    fn documentation(&self) -> String {
        format!("defined in {} {}", self.kind.as_str(), self.name)
    }
}

/// `else if` chains at member depth would match the declaration grammar.
static ELSE_IF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\belse\s+if\b").unwrap());

/// Scans one source unit, storing every extracted signature in `table`.
/// Returns the number of functions found.
pub fn scan_unit(unit: &SourceUnit, table: &mut SignatureTable) -> usize {
    let text = strip_comments(&unit.text);
    let mut depth: u32 = 0;
    let mut pending = String::new();
    let mut enclosing: Option<EnclosingType> = None;
    let mut found = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Join multi-line declarations into one logical line: inside a type
        // body, keep accumulating until a terminator or a closing brace.
        if depth >= 1 && !line.ends_with(';') && !line.ends_with('{') && !line.starts_with('}') {
            pending.push(' ');
            pending.push_str(line);
            continue;
        }
        let logical: Cow<'_, str> = if pending.is_empty() {
            Cow::Borrowed(line)
        } else {
            let mut joined = std::mem::take(&mut pending);
            joined.push(' ');
            joined.push_str(line);
            Cow::Owned(joined.trim().to_string())
        };

        // Type headers only open a context at top level.
        if depth == 0 {
            if let Some((kind, name)) = grammar::match_type_declaration(&logical) {
                trace!(unit = %unit.name, kind = kind.as_str(), name, "entering type body");
                enclosing = Some(EnclosingType {
                    kind,
                    name: SmolStr::new(name),
                });
            }
        }

        if depth == 1 && !ELSE_IF_RE.is_match(&logical) {
            if let Some(decl) = grammar::match_declaration(&logical) {
                let documentation = enclosing
                    .as_ref()
                    .map_or_else(|| FunctionSignature::BUILTIN_DOC.to_string(), EnclosingType::documentation);
                let signature = FunctionSignature::new(
                    decl.name,
                    decl.return_type,
                    decl.params,
                    decompose_params(decl.params),
                    documentation,
                );
                trace!(unit = %unit.name, label = %signature.label, "extracted signature");
                table.insert(signature);
                found += 1;
            }
        }

        // Brace counting runs over the whole logical line, after matching,
        // so a `{ ... }` body on the same line does not hide the match.
        for ch in logical.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    // Floored at zero: unbalanced input must not corrupt
                    // the parse of whatever follows.
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        enclosing = None;
                    }
                }
                _ => {}
            }
        }
    }

    debug!(unit = %unit.name, functions = found, "scanned source unit");
    found
}
