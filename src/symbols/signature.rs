//! Signature records produced by the scanner.

use smol_str::SmolStr;

use crate::base::fold_name;

/// One formal parameter of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Identifier, with any `= default` suffix removed.
    pub name: SmolStr,
    /// Raw declared type token, e.g. `int` or `class<Actor>`.
    pub param_type: SmolStr,
    /// 0-based index within the signature, used for positional fallback.
    pub position: usize,
}

/// A parsed function declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Case-preserved name as written in the source.
    pub name: SmolStr,
    /// Return type; [`crate::parser::grammar::VOID_TYPE`] when omitted.
    pub return_type: SmolStr,
    /// Human-readable `"<returnType> <name>(<rawParams>)"` label,
    /// reconstructed from the raw captures without re-normalizing.
    pub label: String,
    /// Ordered formal parameters.
    pub parameters: Vec<ParameterDescriptor>,
    /// Where the declaration was found, shown in completion popups.
    pub documentation: String,
}

impl FunctionSignature {
    /// Documentation note for declarations outside any type body.
    pub const BUILTIN_DOC: &'static str = "built-in function";

    pub fn new(
        name: &str,
        return_type: &str,
        raw_params: &str,
        parameters: Vec<ParameterDescriptor>,
        documentation: String,
    ) -> Self {
        Self {
            name: SmolStr::new(name),
            return_type: SmolStr::new(return_type),
            label: format!("{return_type} {name}({raw_params})"),
            parameters,
            documentation,
        }
    }

    /// Case-folded key under which this signature is stored.
    pub fn key(&self) -> SmolStr {
        fold_name(&self.name)
    }
}
