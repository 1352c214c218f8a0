//! Pratt expression parser for operator precedence.
//!
//! Binding powers follow MySQL 8 precedence, loosest first: `OR`, `XOR`,
//! `AND`, prefix `NOT`, comparisons and `IS`, the predicates (`IN`,
//! `BETWEEN`, `LIKE`, `REGEXP`, `MEMBER OF`), `|`, `&`, shifts, `+ -`,
//! `* / DIV % MOD`, `^`, unary minus and `~`, then `!` and `BINARY`, and
//! finally `COLLATE`.

use crate::ast::BinaryOp;
use crate::lexer::{Keyword, TokenKind};

/// Right binding power of the word `NOT`.
pub const NOT_BP: u8 = 9;

/// Left binding power of the predicates.
pub const PREDICATE_BP: u8 = 13;

/// Minimum binding power of a bit expression, the operand of a predicate.
pub const BIT_EXPR_BP: u8 = 15;

/// Right binding power of binary `+` and `-`.
pub const ADDITIVE_BP: u8 = 22;

/// `||` under `PIPES_AS_CONCAT`.
pub const CONCAT_BP: (u8, u8) = (25, 26);

/// Right binding power of unary minus, unary plus and `~`.
pub const UNARY_BP: u8 = 27;

/// Right binding power of `!`, `BINARY` and `NOT` under `HIGH_NOT_PRECEDENCE`.
pub const HIGH_NOT_BP: u8 = 29;

/// Minimum binding power that admits no infix operator; column defaults
/// and similar slots take a single operand.
pub const NO_INFIX_BP: u8 = 32;

/// Right binding power of `:=`.
pub const ASSIGN_BP: u8 = 1;

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
///
/// `NOT` is listed at predicate level: in infix position it can only start
/// `NOT IN`, `NOT BETWEEN`, `NOT LIKE` or `NOT REGEXP`.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR (lowest precedence)
        TokenKind::Keyword(Keyword::Or) | TokenKind::LogicOr => Some((3, 4)),

        TokenKind::Keyword(Keyword::Xor) => Some((5, 6)),

        // Logical AND
        TokenKind::Keyword(Keyword::And) | TokenKind::LogicAnd => Some((7, 8)),

        // Comparison operators and IS
        TokenKind::Eq
        | TokenKind::NullSafeEq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(Keyword::Is) => Some((11, 12)),

        // IN, BETWEEN, LIKE, REGEXP
        TokenKind::Keyword(
            Keyword::In
            | Keyword::Between
            | Keyword::Like
            | Keyword::Ilike
            | Keyword::Regexp
            | Keyword::Rlike
            | Keyword::Not,
        ) => Some((PREDICATE_BP, PREDICATE_BP + 1)),

        // Bitwise OR
        TokenKind::BitOr => Some((15, 16)),

        // Bitwise AND
        TokenKind::BitAnd => Some((17, 18)),

        // Shifts
        TokenKind::LeftShift | TokenKind::RightShift => Some((19, 20)),

        // Addition, subtraction
        TokenKind::Plus | TokenKind::Minus => Some((21, 22)),

        // Multiplication, division, modulo
        TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Keyword(Keyword::Div | Keyword::Mod) => Some((23, 24)),

        // Bitwise XOR
        TokenKind::BitXor => Some((25, 26)),

        TokenKind::Keyword(Keyword::Collate) => Some((31, 32)),

        _ => None,
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Keyword(Keyword::Or) | TokenKind::LogicOr => Some(BinaryOp::LogicOr),
        TokenKind::Keyword(Keyword::Xor) => Some(BinaryOp::LogicXor),
        TokenKind::Keyword(Keyword::And) | TokenKind::LogicAnd => Some(BinaryOp::LogicAnd),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NullSafeEq => Some(BinaryOp::NullEq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::BitOr => Some(BinaryOp::BitOr),
        TokenKind::BitAnd => Some(BinaryOp::BitAnd),
        TokenKind::BitXor => Some(BinaryOp::BitXor),
        TokenKind::LeftShift => Some(BinaryOp::LeftShift),
        TokenKind::RightShift => Some(BinaryOp::RightShift),
        TokenKind::Plus => Some(BinaryOp::Plus),
        TokenKind::Minus => Some(BinaryOp::Minus),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent | TokenKind::Keyword(Keyword::Mod) => Some(BinaryOp::Mod),
        TokenKind::Keyword(Keyword::Div) => Some(BinaryOp::IntDiv),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let or = infix_binding_power(&TokenKind::Keyword(Keyword::Or)).unwrap();
        let and = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        let eq = infix_binding_power(&TokenKind::Eq).unwrap();
        let like = infix_binding_power(&TokenKind::Keyword(Keyword::Like)).unwrap();
        let plus = infix_binding_power(&TokenKind::Plus).unwrap();
        let mul = infix_binding_power(&TokenKind::Star).unwrap();
        assert!(or.0 < and.0);
        assert!(and.0 < NOT_BP);
        assert!(NOT_BP < eq.0);
        assert!(eq.0 < like.0);
        assert!(like.0 < BIT_EXPR_BP);
        assert!(plus.0 < mul.0);
        assert!(mul.0 < UNARY_BP);
        assert!(UNARY_BP < HIGH_NOT_BP);
    }

    #[test]
    fn test_left_associative() {
        for kind in [TokenKind::Minus, TokenKind::Slash, TokenKind::BitXor] {
            let (l, r) = infix_binding_power(&kind).unwrap();
            assert!(l < r);
        }
    }

    #[test]
    fn test_operator_mapping() {
        assert_eq!(token_to_binary_op(&TokenKind::LogicAnd), Some(BinaryOp::LogicAnd));
        assert_eq!(
            token_to_binary_op(&TokenKind::Keyword(Keyword::Div)),
            Some(BinaryOp::IntDiv)
        );
        assert_eq!(token_to_binary_op(&TokenKind::Comma), None);
    }
}
