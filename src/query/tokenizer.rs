//! The query-string lexer.

use crate::error::{CanticleError, Result};
use crate::query::token::{CommandKind, Token, TriggerTable};

/// Characters that separate tokens and are never emitted.
const SEPARATORS: &[char] = &[' ', ',', ':', ';', '.', '?', '!'];

/// Splits a query string into an ordered token list.
///
/// Three rules partition the input: separators end the current token and
/// vanish; a registered trigger always starts a new token, even with no
/// separator next to it, so operators and operands can be juxtaposed
/// (`-good`, `lord+good`); and `[` opens a literal escape whose content
/// is carried verbatim in a single parameter between the bracket tokens.
/// Everything else accumulates into parameters.
///
/// The tokenizer is stateless and shared across queries.
#[derive(Debug, Clone, Default)]
pub struct QueryTokenizer {
    triggers: TriggerTable,
}

impl QueryTokenizer {
    /// Create a tokenizer over a trigger table.
    pub fn new(triggers: TriggerTable) -> Self {
        QueryTokenizer { triggers }
    }

    /// The trigger table this tokenizer lexes with.
    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    /// Lex a query string into tokens.
    ///
    /// Fails only on an unmatched `[`; every other input lexes.
    pub fn tokenize(&self, query: &str) -> Result<Vec<Token>> {
        let chars: Vec<char> = query.chars().collect();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '[' {
                // Literal escape: the whole bracket body becomes one
                // parameter, nested brackets included. A leading '[' needs
                // no separator before it.
                flush(&mut tokens, &mut current);

                let close = match_close(&chars, i + 1)
                    .ok_or_else(|| CanticleError::syntax("unmatched brackets"))?;

                tokens.push(Token::Command(CommandKind::GroupOpen));
                tokens.push(Token::Param(chars[i + 1..close].iter().collect()));
                tokens.push(Token::Command(CommandKind::GroupClose));

                i = close + 1;
                continue;
            }

            if SEPARATORS.contains(&c) {
                flush(&mut tokens, &mut current);
            } else if let Some(kind) = self.triggers.get(c) {
                flush(&mut tokens, &mut current);
                tokens.push(Token::Command(kind));
            } else {
                current.push(c);
            }

            i += 1;
        }

        flush(&mut tokens, &mut current);
        Ok(tokens)
    }
}

fn flush(tokens: &mut Vec<Token>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(Token::Param(std::mem::take(current)));
    }
}

/// Index of the `]` matching the `[` just before `start`, honoring
/// nesting.
fn match_close(chars: &[char], start: usize) -> Option<usize> {
    let mut depth = 1usize;

    for (i, &c) in chars.iter().enumerate().skip(start) {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
