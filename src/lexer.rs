//! Tokenizer of cron expressions.
use crate::{
    pattern::PatternValueType,
    utils::{self, DAYS_OF_WEEK, MONTHS},
    CronError, Result,
};

/// Single terminal of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TokenKind {
    Number(PatternValueType),
    /// 1-based position in the months table.
    Month(PatternValueType),
    /// 1-based position in the days of week table (Monday is 1).
    Week(PatternValueType),
    /// One of `, - * ? / L W #`.
    Symbol(char),
    /// Run of whitespace separating fields.
    Space,
}

/// Token with its location (byte offsets) in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

const SYMBOLS: [char; 8] = [',', '-', '*', '?', '/', 'L', 'W', '#'];
const NAME_LEN: usize = 3;

/// Splits `input` into tokens.
///
/// Whitespace at the very beginning or end of the input doesn't produce tokens.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let ch = bytes[pos];

        let kind = if ch.is_ascii_whitespace() {
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            TokenKind::Space
        } else if ch.is_ascii_digit() {
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let value = input[start..pos]
                .parse::<PatternValueType>()
                .map_err(|_| CronError::syntax(start, "number not greater than 4294967295"))?;
            TokenKind::Number(value)
        } else if let Some(kind) = input.get(pos..pos + NAME_LEN).and_then(name_kind) {
            pos += NAME_LEN;
            kind
        } else if SYMBOLS.contains(&char::from(ch)) {
            pos += 1;
            TokenKind::Symbol(char::from(ch))
        } else {
            return Err(CronError::syntax(
                start,
                "number, month or day of week name, whitespace or one of `, - * ? / L W #`",
            ));
        };

        tokens.push(Token { kind, start, end: pos });
    }

    if tokens.first().is_some_and(|t| t.kind == TokenKind::Space) {
        tokens.remove(0);
    }
    if tokens.last().is_some_and(|t| t.kind == TokenKind::Space) {
        tokens.pop();
    }

    Ok(tokens)
}

fn name_kind(input: &str) -> Option<TokenKind> {
    if let Some(month) = utils::parse_string_value(input, &MONTHS) {
        Some(TokenKind::Month(month))
    } else {
        utils::parse_string_value(input, &DAYS_OF_WEEK).map(TokenKind::Week)
    }
}
