//! The signature table.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::fold_name;

use super::FunctionSignature;

/// Case-insensitive mapping from function name to its most recently seen
/// signature.
///
/// At most one signature per case-folded name: a later parse of a
/// same-named function overwrites the earlier one. There are no overload
/// sets and no per-key removal, only overwrite and full clear. Insertion
/// order is preserved so completion output is deterministic.
#[derive(Clone, Debug, Default)]
pub struct SignatureTable {
    entries: IndexMap<SmolStr, FunctionSignature>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry. Invoked before any bulk re-scan.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts under the case-folded name, replacing any previous entry.
    pub fn insert(&mut self, signature: FunctionSignature) {
        self.entries.insert(signature.key(), signature);
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.entries.get(fold_name(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All signatures, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.entries.values()
    }
}
