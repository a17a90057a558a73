//! The operator query language: tokens, tokenizer, vocabulary, executor.
//!
//! A query string like `lord -[good shepherd] *bless` is lexed into an
//! ordered token list by [`QueryTokenizer`], then replayed once by a
//! [`QueryExecutor`]: each operator pulls its operand from the shared
//! cursor and mutates a verse-set accumulator. Tokenizer and trigger
//! table are stateless and shared across queries; an executor is created
//! per query and consumed by execution.

pub mod command;
pub mod executor;
pub mod token;
pub mod tokenizer;

pub use executor::QueryExecutor;
pub use token::{CommandKind, Token, TriggerTable};
pub use tokenizer::QueryTokenizer;
