//! Completion over the signature table.

use smol_str::SmolStr;

use crate::base::fold_name;
use crate::symbols::SignatureTable;

/// A completion suggestion for a scanned function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// Case-preserved function name, the text to insert.
    pub name: SmolStr,
    /// Full signature label, shown as detail.
    pub label: String,
    /// Documentation popup text.
    pub documentation: String,
}

/// Returns an item for every table entry whose case-folded name starts
/// with the case-folded prefix. An empty prefix matches everything.
pub fn completions(table: &SignatureTable, prefix: &str) -> Vec<CompletionItem> {
    let folded = fold_name(prefix);
    table
        .iter()
        .filter(|sig| sig.key().starts_with(folded.as_str()))
        .map(|sig| CompletionItem {
            name: sig.name.clone(),
            label: sig.label.clone(),
            documentation: sig.documentation.clone(),
        })
        .collect()
}
