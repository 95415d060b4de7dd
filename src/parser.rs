//! Recursive descent parser turning tokens into per-field patterns.

use crate::{
    field::Field,
    lexer::{self, Token, TokenKind},
    pattern::{Common, DayOfMonth, DayOfWeek, Increment, Month, Name, Pattern, PatternValueType},
    CronError, Result,
};

/// Parsed, but not yet assembled, fields of the expression in the source order.
pub(crate) struct Fields {
    pub(crate) minutes: Field<Common>,
    pub(crate) hours: Field<Common>,
    pub(crate) days_of_month: Field<DayOfMonth>,
    pub(crate) months: Field<Month>,
    pub(crate) days_of_week: Field<DayOfWeek>,
    pub(crate) years: Field<Common>,
}

pub(crate) fn parse(input: &str) -> Result<Fields> {
    let tokens = lexer::tokenize(input)?;
    let mut parser = Parser {
        input,
        tokens: &tokens,
        pos: 0,
    };

    let minutes = parser.field(Parser::common)?;
    parser.separator()?;
    let hours = parser.field(Parser::common)?;
    parser.separator()?;
    let days_of_month = parser.field(Parser::day_of_month)?;
    parser.separator()?;
    let months = parser.field(Parser::month)?;
    parser.separator()?;
    let days_of_week = parser.field(Parser::day_of_week)?;
    parser.separator()?;
    let years = parser.field(Parser::common)?;

    if let Some(token) = parser.peek() {
        return Err(CronError::syntax(token.start, "end of expression"));
    }

    Ok(Fields {
        minutes,
        hours,
        days_of_month,
        months,
        days_of_week,
        years,
    })
}

struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn lookahead_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos + 1).map(|t| t.kind)
    }

    /// Position of the current token, or the end of the input.
    fn position(&self) -> usize {
        self.peek().map_or(self.input.trim_end().len(), |t| t.start)
    }

    fn error(&self, expected: &str) -> CronError {
        CronError::syntax(self.position(), expected)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_symbol(&mut self, symbol: char) -> bool {
        if self.peek_kind() == Some(TokenKind::Symbol(symbol)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self) -> Result<PatternValueType> {
        match self.peek_kind() {
            Some(TokenKind::Number(value)) => {
                self.pos += 1;
                Ok(value)
            }
            _ => Err(self.error("number")),
        }
    }

    fn separator(&mut self) -> Result<()> {
        match self.peek_kind() {
            Some(TokenKind::Space) => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(self.error("`,` or whitespace")),
            None => Err(self.error("next field")),
        }
    }

    /// `pattern ("," pattern)*`
    fn field<P: Pattern>(&mut self, pattern: fn(&mut Self) -> Result<P>) -> Result<Field<P>> {
        let mut patterns = vec![pattern(self)?];
        while self.eat_symbol(',') {
            patterns.push(pattern(self)?);
        }
        Ok(Field::new(patterns))
    }

    /// `*/step | */ | number/step | number-number | number`
    fn common(&mut self) -> Result<Common> {
        match self.peek_kind() {
            Some(TokenKind::Symbol('*')) => {
                self.pos += 1;
                if self.eat_symbol('/') {
                    Ok(Common::Increment(Increment {
                        wildcard: true,
                        top: 0,
                        step: self.number()?,
                    }))
                } else {
                    Ok(Common::All)
                }
            }
            Some(TokenKind::Number(value)) => {
                self.pos += 1;
                if self.eat_symbol('/') {
                    Ok(Common::Increment(Increment {
                        wildcard: false,
                        top: value,
                        step: self.number()?,
                    }))
                } else if self.eat_symbol('-') {
                    Ok(Common::Range(value, self.number()?))
                } else {
                    Ok(Common::Number(value))
                }
            }
            _ => Err(self.error("number or `*`")),
        }
    }

    fn day_of_month(&mut self) -> Result<DayOfMonth> {
        match (self.peek_kind(), self.lookahead_kind()) {
            (Some(TokenKind::Number(day)), Some(TokenKind::Symbol('W'))) => {
                self.pos += 2;
                Ok(DayOfMonth::Weekday(day))
            }
            (Some(TokenKind::Symbol('?')), _) => {
                self.pos += 1;
                Ok(DayOfMonth::Any)
            }
            (Some(TokenKind::Symbol('L')), _) => {
                self.pos += 1;
                Ok(DayOfMonth::Last)
            }
            (Some(TokenKind::Number(_) | TokenKind::Symbol('*')), _) => self.common().map(DayOfMonth::Common),
            _ => Err(self.error("number, `*`, `?` or `L`")),
        }
    }

    fn month(&mut self) -> Result<Month> {
        match self.peek_kind() {
            Some(TokenKind::Month(_)) => {
                let from = self.name()?;
                if self.eat_symbol('-') {
                    if !matches!(self.peek_kind(), Some(TokenKind::Month(_))) {
                        return Err(self.error("month name"));
                    }
                    Ok(Month::NameRange(from, self.name()?))
                } else {
                    Ok(Month::Name(from))
                }
            }
            Some(TokenKind::Number(_) | TokenKind::Symbol('*')) => self.common().map(Month::Common),
            _ => Err(self.error("number, `*` or month name")),
        }
    }

    fn day_of_week(&mut self) -> Result<DayOfWeek> {
        match (self.peek_kind(), self.lookahead_kind()) {
            (Some(TokenKind::Number(dow)), Some(TokenKind::Symbol('#'))) => {
                self.pos += 2;
                Ok(DayOfWeek::Instance(dow, self.number()?))
            }
            (Some(TokenKind::Week(_)), _) => {
                let from = self.name()?;
                if self.eat_symbol('-') {
                    if !matches!(self.peek_kind(), Some(TokenKind::Week(_))) {
                        return Err(self.error("day of week name"));
                    }
                    Ok(DayOfWeek::NameRange(from, self.name()?))
                } else {
                    Ok(DayOfWeek::Name(from))
                }
            }
            (Some(TokenKind::Symbol('?')), _) => {
                self.pos += 1;
                Ok(DayOfWeek::Any)
            }
            (Some(TokenKind::Symbol('L')), _) => {
                self.pos += 1;
                Ok(DayOfWeek::Last)
            }
            (Some(TokenKind::Number(_) | TokenKind::Symbol('*')), _) => self.common().map(DayOfWeek::Common),
            _ => Err(self.error("number, `*`, `?`, `L` or day of week name")),
        }
    }

    /// Consumes month or day of week name token, keeping its source spelling.
    fn name(&mut self) -> Result<Name> {
        let input = self.input;
        match self.advance() {
            Some(Token {
                kind: TokenKind::Month(number) | TokenKind::Week(number),
                start,
                end,
            }) => Ok(Name::new(&input[*start..*end], *number)),
            _ => Err(self.error("month or day of week name")),
        }
    }
}
