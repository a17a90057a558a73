//! Single-use query execution over a token list.

use std::vec::IntoIter;

use crate::analysis::Stemmer;
use crate::error::{CanticleError, Result};
use crate::index::Index;
use crate::passage::VerseSet;
use crate::query::token::{CommandKind, Token};
use crate::query::tokenizer::QueryTokenizer;

/// Replays a lexed query against the index, folding the result into a
/// verse-set accumulator.
///
/// The executor owns the token cursor and the accumulator, so one
/// executor serves exactly one query: [`execute`](Self::execute) consumes
/// it. The index, stemmer, and tokenizer it borrows are all stateless and
/// shared freely across queries.
pub struct QueryExecutor<'a> {
    index: &'a dyn Index,
    stemmer: &'a Stemmer,
    tokenizer: &'a QueryTokenizer,
    cursor: IntoIter<Token>,
}

impl<'a> QueryExecutor<'a> {
    /// Create an executor over a lexed token list.
    pub fn new(
        index: &'a dyn Index,
        stemmer: &'a Stemmer,
        tokenizer: &'a QueryTokenizer,
        tokens: Vec<Token>,
    ) -> Self {
        QueryExecutor {
            index,
            stemmer,
            tokenizer,
            cursor: tokens.into_iter(),
        }
    }

    /// Replay the whole token list and return the final accumulator.
    ///
    /// A parameter at statement position is an implicit add, so plain
    /// juxtaposed words union: `lord shepherd` matches either word.
    pub fn execute(mut self) -> Result<VerseSet> {
        let mut accumulator = VerseSet::new();

        while let Some(token) = self.advance() {
            match token {
                Token::Command(kind) => kind.mutate(&mut self, &mut accumulator)?,
                Token::Param(word) => {
                    let matches = self.index.find_word(&word);
                    accumulator.union_with(&matches);
                }
            }
        }

        Ok(accumulator)
    }

    fn advance(&mut self) -> Option<Token> {
        self.cursor.next()
    }

    /// Pull the next operand set for `command`: a word resolved through
    /// the index, or a bracketed sub-expression evaluated against a fresh
    /// accumulator.
    pub(crate) fn next_operand(&mut self, command: CommandKind) -> Result<VerseSet> {
        match self.advance() {
            Some(Token::Param(word)) => Ok(self.index.find_word(&word)),
            Some(Token::Command(CommandKind::GroupOpen)) => self.finish_group(),
            Some(Token::Command(kind)) => Err(CanticleError::syntax(format!(
                "the {command} operator expected a search term, found operator {kind}"
            ))),
            None => Err(CanticleError::syntax(format!(
                "the {command} operator is missing its operand"
            ))),
        }
    }

    /// Pull the next operand word for `command`, without resolving it.
    pub(crate) fn next_word(&mut self, command: CommandKind) -> Result<String> {
        match self.advance() {
            Some(Token::Param(word)) => Ok(word),
            Some(Token::Command(kind)) => Err(CanticleError::syntax(format!(
                "the {command} operator expected a search term, found operator {kind}"
            ))),
            None => Err(CanticleError::syntax(format!(
                "the {command} operator is missing its operand"
            ))),
        }
    }

    /// Consume a group body and its closing bracket (the opening bracket
    /// has already been consumed), evaluating the body as a sub-query
    /// with a fresh accumulator.
    pub(crate) fn finish_group(&mut self) -> Result<VerseSet> {
        let body = match self.advance() {
            Some(Token::Param(body)) => body,
            _ => return Err(CanticleError::syntax("unmatched brackets")),
        };

        match self.advance() {
            Some(Token::Command(CommandKind::GroupClose)) => {}
            _ => return Err(CanticleError::syntax("unmatched brackets")),
        }

        let tokens = self.tokenizer.tokenize(&body)?;
        let sub = QueryExecutor::new(self.index, self.stemmer, self.tokenizer, tokens);
        sub.execute()
    }

    /// Union the sets of every indexed word starting with `prefix`.
    pub(crate) fn expand_prefix(&self, prefix: &str) -> VerseSet {
        let mut union = VerseSet::new();
        for word in self.index.find_prefix(prefix) {
            union.union_with(&self.index.find_word(&word));
        }
        union
    }

    /// Stem a word to its approximate root.
    pub(crate) fn stem(&self, word: &str) -> String {
        self.stemmer.root(word)
    }
}
