//! Parameter-list decomposition.

use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use crate::symbols::ParameterDescriptor;

static PARAM_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+").unwrap());

/// Splits a raw parameter list into individual descriptors.
///
/// The split is a naive top-level split on `,`. The grammar's parameter
/// capture cannot contain parentheses, and angle-bracket generic types in
/// this dialect take a single argument, so the naive split holds for the
/// sources the scanner targets.
pub fn decompose_params(raw: &str) -> Vec<ParameterDescriptor> {
    raw.split(',')
        .map(str::trim)
        .filter(|slot| !slot.is_empty())
        .enumerate()
        .map(|(position, slot)| split_param(slot, position))
        .collect()
}

/// Splits one `type name = default` slot into a descriptor.
fn split_param(slot: &str, position: usize) -> ParameterDescriptor {
    let mut parts = slot.split_whitespace();
    let mut param_type = parts.next().unwrap_or("").to_string();
    let mut name_and_default = parts.collect::<Vec<_>>().join(" ");

    // `class<Actor> a` splits on whitespace only when the generic argument
    // itself contains none; re-extract the type through the closing `>` so
    // it stays a single token either way.
    if param_type.starts_with("class<") {
        if let Some(close) = slot.find('>') {
            param_type = slot[..=close].trim().to_string();
            name_and_default = slot[close + 1..].trim().to_string();
        }
    }

    // The name is the leading word run; any `= default` tail is dropped
    // from the stored name but stays visible in the raw label.
    let name = match PARAM_NAME_RE.find(&name_and_default) {
        Some(m) => m.as_str(),
        None if !name_and_default.is_empty() => name_and_default.as_str(),
        None => "param",
    };

    ParameterDescriptor {
        name: SmolStr::new(name),
        param_type: SmolStr::new(&param_type),
        position,
    }
}
