//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! The public [`Parser`] owns the per-instance state (SQL mode, window
//! function switch, charset registry); each grammar area lives in its own
//! module as an `impl` block on the shared token cursor.

mod admin;
mod cluster;
mod column;
mod ddl;
mod dml;
mod error;
mod expr;
mod hint;
#[allow(clippy::module_inception)]
mod parser;
mod partition;
mod pratt;
mod query;
mod security;
mod session;
mod types;

pub use error::{ErrorCode, ParseError, Warning};
pub use parser::Parser;
