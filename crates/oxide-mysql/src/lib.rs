//! # oxide-mysql
//!
//! A lexer, parser and SQL restorer for the MySQL dialect, including the
//! TiDB extensions (placement policies, resource groups, bindings, backup
//! and restore, region splitting).
//!
//! This crate provides:
//! - A hand-written lexer with executable comments, optimizer hint blocks
//!   and SQL-mode aware quoting
//! - A recursive descent parser with Pratt expression parsing
//! - An owned AST whose equality ignores source positions
//! - A restorer that writes any AST back as SQL under configurable flags
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_mysql::{Parser, Statement};
//!
//! let parser = Parser::new();
//! let (stmts, warnings) = parser.parse("select 1; select 2", "", "").unwrap();
//! assert_eq!(stmts.len(), 2);
//! assert!(warnings.is_empty());
//! assert!(matches!(stmts[0].stmt, Statement::Select(_)));
//! ```
//!
//! ## Restoring
//!
//! Restored SQL parses back to an equal tree:
//!
//! ```rust
//! use oxide_mysql::{restore, Parser, RestoreFlags};
//!
//! let parser = Parser::new();
//! let stmt = parser.parse_one_stmt("select * from t where a = 'x'", "", "").unwrap();
//! let sql = restore(&stmt.stmt, RestoreFlags::DEFAULT).unwrap();
//! assert_eq!(sql, "SELECT * FROM `t` WHERE `a`=_UTF8MB4'x'");
//! assert_eq!(parser.parse_one_stmt(&sql, "", "").unwrap().stmt, stmt.stmt);
//! ```
//!
//! ## SQL mode
//!
//! ```rust
//! use oxide_mysql::{Parser, SqlMode};
//!
//! let mut parser = Parser::new();
//! parser.set_sql_mode("ANSI_QUOTES".parse::<SqlMode>().unwrap());
//! assert!(parser.parse_one_stmt(r#"select "a" from t"#, "", "").is_ok());
//! ```

pub mod ast;
pub mod config;
pub mod lexer;
pub mod mode;
pub mod parser;
pub mod restore;

pub use ast::{Expr, Statement, StmtNode};
pub use config::ParserConfig;
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use mode::{SqlMode, UnknownSqlMode};
pub use parser::{ErrorCode, ParseError, Parser, Warning};
pub use restore::{
    restore, restore_with_default_db, Restore, RestoreCtx, RestoreError, RestoreFlags,
    RestoreResult,
};
