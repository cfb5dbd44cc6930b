//! Operator vocabulary.
//!
//! This module defines the canonical operator sets of the language along with the token each one is written as
//! when a tree is turned back into program text.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and only covers binary operators; unary spellings overlap with
//!   binary ones (`~`) and are resolved by position, not by this table.
//! - [`BinaryOp::token`] is the spelling padded with one space on each side. Nothing else is ever added.
//!
//! ## Examples
//! ```rust
//! use mtail_core::lang::operators::{self, BinaryOp, UnaryOp};
//!
//! assert_eq!(operators::from_str("+="), Some(BinaryOp::AddAssign));
//! assert_eq!(BinaryOp::Pow.token(), " ** ");
//! assert_eq!(UnaryOp::Increment.spelling(), "++");
//! ```

use serde::{Deserialize, Serialize};

/// Family a binary operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorGroup {
    Comparison,
    Shift,
    Bitwise,
    Arithmetic,
    Assignment,
}

/// Stable identifier for every binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Comparison
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,

    // Shift
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,

    // Bitwise
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "~")]
    BitNot,

    // Arithmetic
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "**")]
    Pow,

    // Assignment
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
}

/// Metadata for a binary operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: BinaryOp,
    /// Bare spelling, e.g. `"<="`.
    pub spelling: &'static str,
    /// Spelling as written between two operands, e.g. `" <= "`.
    pub token: &'static str,
    pub group: OperatorGroup,
}

/// Registry of all binary operators.
pub const BINARY_OPERATORS: &[OperatorInfo] = &[
    // Comparison
    op(BinaryOp::Lt, "<", " < ", OperatorGroup::Comparison),
    op(BinaryOp::Gt, ">", " > ", OperatorGroup::Comparison),
    op(BinaryOp::Le, "<=", " <= ", OperatorGroup::Comparison),
    op(BinaryOp::Ge, ">=", " >= ", OperatorGroup::Comparison),
    op(BinaryOp::Eq, "==", " == ", OperatorGroup::Comparison),
    op(BinaryOp::Ne, "!=", " != ", OperatorGroup::Comparison),
    // Shift
    op(BinaryOp::Shl, "<<", " << ", OperatorGroup::Shift),
    op(BinaryOp::Shr, ">>", " >> ", OperatorGroup::Shift),
    // Bitwise
    op(BinaryOp::BitAnd, "&", " & ", OperatorGroup::Bitwise),
    op(BinaryOp::BitOr, "|", " | ", OperatorGroup::Bitwise),
    op(BinaryOp::BitXor, "^", " ^ ", OperatorGroup::Bitwise),
    op(BinaryOp::BitNot, "~", " ~ ", OperatorGroup::Bitwise),
    // Arithmetic
    op(BinaryOp::Plus, "+", " + ", OperatorGroup::Arithmetic),
    op(BinaryOp::Minus, "-", " - ", OperatorGroup::Arithmetic),
    op(BinaryOp::Mul, "*", " * ", OperatorGroup::Arithmetic),
    op(BinaryOp::Div, "/", " / ", OperatorGroup::Arithmetic),
    op(BinaryOp::Pow, "**", " ** ", OperatorGroup::Arithmetic),
    // Assignment
    op(BinaryOp::Assign, "=", " = ", OperatorGroup::Assignment),
    op(BinaryOp::AddAssign, "+=", " += ", OperatorGroup::Assignment),
];

/// Return the full metadata entry for an operator.
///
/// ## Parameters
/// - `id`: Operator identifier.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`BINARY_OPERATORS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BinaryOp) -> &'static OperatorInfo {
    BINARY_OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("operator info missing")
}

/// Resolve a binary operator spelling to its identifier.
///
/// ## Returns
/// - `Some(BinaryOp)` if the spelling exists in [`BINARY_OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<BinaryOp> {
    BINARY_OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

impl BinaryOp {
    pub fn spelling(self) -> &'static str {
        info_for(self).spelling
    }

    pub fn token(self) -> &'static str {
        info_for(self).token
    }

    pub fn group(self) -> OperatorGroup {
        info_for(self).group
    }
}

/// Stable identifier for the unary operators.
///
/// `Increment` is postfix (`x++`), `BitNot` is prefix (`~x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "~")]
    BitNot,
}

impl UnaryOp {
    pub fn spelling(self) -> &'static str {
        match self {
            UnaryOp::Increment => "++",
            UnaryOp::BitNot => "~",
        }
    }
}

// --- helpers -----------------------------------------------------------------

const fn op(id: BinaryOp, spelling: &'static str, token: &'static str, group: OperatorGroup) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        token,
        group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_spelling_padded_with_single_spaces() {
        for info in BINARY_OPERATORS {
            assert_eq!(info.token, format!(" {} ", info.spelling), "bad token for {:?}", info.id);
        }
    }

    #[test]
    fn test_from_str_resolves_every_spelling() {
        for info in BINARY_OPERATORS {
            assert_eq!(from_str(info.spelling), Some(info.id));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(from_str("%"), None);
        assert_eq!(from_str("and"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_arithmetic_tokens() {
        assert_eq!(BinaryOp::Plus.token(), " + ");
        assert_eq!(BinaryOp::Minus.token(), " - ");
        assert_eq!(BinaryOp::Mul.token(), " * ");
        assert_eq!(BinaryOp::Div.token(), " / ");
        assert_eq!(BinaryOp::Pow.token(), " ** ");
    }

    #[test]
    fn test_binary_bitnot_keeps_both_spaces() {
        assert_eq!(BinaryOp::BitNot.token(), " ~ ");
    }

    #[test]
    fn test_groups() {
        assert_eq!(BinaryOp::Le.group(), OperatorGroup::Comparison);
        assert_eq!(BinaryOp::Shr.group(), OperatorGroup::Shift);
        assert_eq!(BinaryOp::AddAssign.group(), OperatorGroup::Assignment);
    }

    #[test]
    fn test_unary_spellings() {
        assert_eq!(UnaryOp::Increment.spelling(), "++");
        assert_eq!(UnaryOp::BitNot.spelling(), "~");
    }
}
