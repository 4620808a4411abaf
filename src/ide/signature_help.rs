//! Signature help: call-context detection and active-parameter resolution.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::base::fold_name;
use crate::symbols::FunctionSignature;

/// Result of a signature-help query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    pub signature: FunctionSignature,
    /// 0-based index of the parameter to highlight.
    pub active_parameter: usize,
}

/// Identifier directly before the unmatched `(`, whitespace allowed.
static TRAILING_IDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)\s*$").unwrap());

/// Finds the function name immediately before the innermost unmatched `(`
/// to the left of the cursor, plus the raw argument text between that
/// paren and the cursor.
pub fn find_call_context(line_to_cursor: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut open = None;
    for (i, c) in line_to_cursor.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => {
                open = Some(i);
                break;
            }
            '(' => depth -= 1,
            _ => {}
        }
    }
    let open = open?;
    let name = TRAILING_IDENT_RE
        .captures(&line_to_cursor[..open])?
        .get(1)?
        .as_str();
    Some((name, &line_to_cursor[open + 1..]))
}

/// Determines the active parameter for in-progress argument text.
///
/// Supplied named arguments (`name: value`) consume their parameter and
/// move the positional cursor just past it; supplied positional arguments
/// consume the next index not already taken by name. The slot being typed
/// resolves by name when it looks like an identifier, positionally
/// otherwise. Name matching is case-insensitive and treats the written
/// name as a prefix of the declared parameter name, never the reverse.
/// Malformed text never errors; the worst case is index 0.
pub fn active_parameter(signature: &FunctionSignature, args_text: &str) -> usize {
    let slots: Vec<&str> = args_text.split(',').collect();
    let Some((current, supplied)) = slots.split_last() else {
        return 0;
    };

    let mut consumed = vec![false; signature.parameters.len()];
    let mut cursor = 0usize;

    for slot in supplied {
        match slot.split_once(':') {
            Some((name, _)) => {
                if let Some(index) = match_param(signature, name.trim()) {
                    consumed[index] = true;
                    cursor = index + 1;
                }
            }
            None => {
                while cursor < consumed.len() && consumed[cursor] {
                    cursor += 1;
                }
                if cursor < consumed.len() {
                    consumed[cursor] = true;
                }
                cursor += 1;
            }
        }
    }

    let candidate = match current.split_once(':') {
        Some((name, _)) => name.trim(),
        None => current.trim(),
    };

    if starts_like_identifier(candidate) {
        if let Some(index) = match_param(signature, candidate) {
            trace!(candidate, index, "active parameter resolved by name");
            return index;
        }
    }

    while cursor < consumed.len() && consumed[cursor] {
        cursor += 1;
    }
    trace!(candidate, cursor, "active parameter resolved positionally");
    cursor
}

/// First parameter, in declaration order, whose case-folded name starts
/// with the case-folded candidate. Equality is the trivial prefix.
fn match_param(signature: &FunctionSignature, candidate: &str) -> Option<usize> {
    if candidate.is_empty() {
        return None;
    }
    let folded = fold_name(candidate);
    signature
        .parameters
        .iter()
        .position(|param| fold_name(&param.name).starts_with(folded.as_str()))
}

fn starts_like_identifier(candidate: &str) -> bool {
    candidate
        .chars()
        .next()
        .is_some_and(|c| unicode_ident::is_xid_start(c) || c == '_')
}
