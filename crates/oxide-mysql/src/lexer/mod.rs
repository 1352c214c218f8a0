//! MySQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for MySQL-dialect SQL that
//! produces a stream of tokens, including executable comments and hint blocks.

mod charset;
mod span;
mod token;
mod tokenizer;

pub use charset::{is_known_charset, Charset, CharsetRegistry};
pub use span::Span;
pub use token::{Keyword, LexError, Token, TokenKind};
pub use tokenizer::Lexer;
