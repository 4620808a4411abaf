//! The declaration grammar.
//!
//! There is deliberately no tokenizer. Declaration-shaped logical lines are
//! recognized with a single regular expression; callers only ever see the
//! named captures through [`match_declaration`], so the pattern can be
//! swapped for a real grammar later without touching the scanner.

use std::sync::LazyLock;

use regex::Regex;

/// Return type recorded when a declaration omits one.
pub const VOID_TYPE: &str = "void";

/// Identifiers that can never name a function.
///
/// `else if` chains and loop headers at member depth would otherwise match
/// the declaration shape.
const RESERVED_NAMES: [&str; 7] = ["if", "else", "while", "for", "return", "struct", "class"];

/// Declaration shape: qualifiers, optional return type(s), name, parameter
/// body up to the first `)`, optional trailing `const`, then `;` or `{`.
///
/// The qualifier set is closed: visibility/storage/scope keywords plus the
/// two parameterized forms `deprecated("...")` (one or two strings) and
/// `version("...")`.
static DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        (?: \b(?: native|static|virtual|protected|private|clearscope|action|ui|play
                | const|override|vararg|out|in|readonly
                | deprecated\("[^"]*"(?:,\s*"[^"]*")?\)
                | version\("[^"]*"\)
            )\s+ )*
        (?P<ret> (?: \w+(?:\s+\w+)* (?:\s*,\s*\w+(?:\s+\w+)*)* )? )
        \s+
        (?P<name>\w+)
        \s*\(\s*
        (?P<params> [^)]*? (?:\s*,\s*\.\.\.)? )
        \s*\)\s*
        (?:const)?
        \s*[;{]
        "#,
    )
    .unwrap()
});

/// Type-declaration header that opens an enclosing-type context.
static TYPE_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?P<kind>class|struct)\s+(?P<name>\w+)").unwrap());

/// Kind of type declaration whose body the scanner can be inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
        }
    }
}

/// One successful match of the declaration grammar against a logical line.
///
/// All fields borrow from the matched line, except that a missing return
/// type is reported as [`VOID_TYPE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclMatch<'a> {
    pub return_type: &'a str,
    pub name: &'a str,
    /// Raw parameter list exactly as written, outer whitespace trimmed.
    pub params: &'a str,
}

/// Matches one logical line against the declaration grammar.
///
/// Returns `None` for non-declaration lines and for declarations whose name
/// is a reserved word. Call-shaped statements (`identifier identifier(`)
/// that fail the full grammar are a normal non-match, not an error.
pub fn match_declaration(line: &str) -> Option<DeclMatch<'_>> {
    let caps = DECL_RE.captures(line)?;
    let name = caps.name("name")?.as_str();
    if RESERVED_NAMES.contains(&name) {
        return None;
    }
    let ret = caps.name("ret").map_or("", |m| m.as_str());
    Some(DeclMatch {
        return_type: if ret.is_empty() { VOID_TYPE } else { ret },
        name,
        params: caps.name("params").map_or("", |m| m.as_str().trim()),
    })
}

/// Matches a `class Name` / `struct Name` header.
pub fn match_type_declaration(line: &str) -> Option<(TypeKind, &str)> {
    let caps = TYPE_DECL_RE.captures(line)?;
    let kind = match caps.name("kind")?.as_str() {
        "class" => TypeKind::Class,
        _ => TypeKind::Struct,
    };
    Some((kind, caps.name("name")?.as_str()))
}
