use crate::{utils, CronError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt::{self, Display};

/// Numeric value of a single pattern element.
pub type PatternValueType = u32;

/// Single element of the field list: something that can be tested against the field's calendar quantity.
pub trait Pattern: Display {
    /// Calendar quantity this pattern is tested against.
    type Input: Copy;

    /// Returns `true` if `input` satisfies the pattern.
    ///
    /// Returns [`CronError::Domain`] if the pattern can't be evaluated, i.e. has zero step.
    fn matches(&self, input: Self::Input) -> Result<bool>;

    /// Returns `true` for the "no specific value" (`?`) marker.
    fn is_any(&self) -> bool {
        false
    }
}

/// Repeating pattern: `top/step` or `*/step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Increment {
    /// `true` for `*/step` form, which starts from zero.
    pub wildcard: bool,
    /// The first value of the series, zero for the wildcard form.
    pub top: PatternValueType,
    /// Distance between values.
    pub step: PatternValueType,
}

impl Increment {
    fn matches(&self, x: PatternValueType) -> Result<bool> {
        if self.step == 0 {
            return Err(CronError::Domain(format!("zero step in repeating pattern `{self}`")));
        }

        let (start, base) = if self.wildcard {
            (0, 0)
        } else {
            (self.top, self.top % self.step)
        };

        Ok(x >= start && x % self.step == base)
    }
}

impl Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            write!(f, "*/{}", self.step)
        } else {
            write!(f, "{}/{}", self.top, self.step)
        }
    }
}

/// Patterns allowed in every field: minutes, hours and years use these only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Common {
    /// `*`
    All,
    /// Exact value.
    Number(PatternValueType),
    /// Inclusive range `from-to`, never wraps around.
    Range(PatternValueType, PatternValueType),
    /// `top/step` or `*/step`.
    Increment(Increment),
}

impl Pattern for Common {
    type Input = PatternValueType;

    fn matches(&self, x: PatternValueType) -> Result<bool> {
        match self {
            Self::All => Ok(true),
            Self::Number(value) => Ok(x == *value),
            Self::Range(from, to) => Ok(*from <= x && x <= *to),
            Self::Increment(increment) => increment.matches(x),
        }
    }
}

impl Display for Common {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "*"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Range(from, to) => write!(f, "{from}-{to}"),
            Self::Increment(increment) => write!(f, "{increment}"),
        }
    }
}

/// Month or day of week mnemonic, keeps the spelling used in the source text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    text: String,
    number: PatternValueType,
}

impl Name {
    pub(crate) fn new(text: impl Into<String>, number: PatternValueType) -> Self {
        Self {
            text: text.into(),
            number,
        }
    }

    /// Name as it was written in the expression.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolved number: 1 is January for months, 1 is Monday (7 is Sunday) for days of week.
    pub fn number(&self) -> PatternValueType {
        self.number
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Day of month field patterns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfMonth {
    /// Numeric patterns matched against day of the month.
    Common(Common),
    /// `?`
    Any,
    /// `L`: last day of the month.
    Last,
    /// `nW`: business day nearest to the n-th day of the month.
    Weekday(PatternValueType),
}

impl Pattern for DayOfMonth {
    type Input = NaiveDate;

    fn matches(&self, date: NaiveDate) -> Result<bool> {
        match self {
            Self::Common(common) => common.matches(date.day()),
            Self::Any => Ok(true),
            Self::Last => Ok(utils::is_last_day_of_month(date)),
            Self::Weekday(day) => Ok(utils::nearest_weekday(date, *day) == Some(date)),
        }
    }

    fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common(common) => write!(f, "{common}"),
            Self::Any => write!(f, "?"),
            Self::Last => write!(f, "L"),
            Self::Weekday(day) => write!(f, "{day}W"),
        }
    }
}

/// Month field patterns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    /// Numeric patterns matched against month number, 1 is January.
    Common(Common),
    /// Single month by name.
    Name(Name),
    /// Inclusive range of months by names.
    NameRange(Name, Name),
}

impl Pattern for Month {
    type Input = PatternValueType;

    fn matches(&self, month: PatternValueType) -> Result<bool> {
        match self {
            Self::Common(common) => common.matches(month),
            Self::Name(name) => Ok(name.number() == month),
            Self::NameRange(from, to) => Ok(from.number() <= month && month <= to.number()),
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common(common) => write!(f, "{common}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::NameRange(from, to) => write!(f, "{from}-{to}"),
        }
    }
}

/// Day of week field patterns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    /// Numeric patterns matched against ISO day of week: 1 is Monday, 7 is Sunday.
    Common(Common),
    /// `?`
    Any,
    /// `L`: the last day of the week, Saturday.
    Last,
    /// Single day by name.
    Name(Name),
    /// Inclusive range of days by names, the week starts on Monday unless the range starts on Sunday.
    NameRange(Name, Name),
    /// `d#n`: n-th day of week `d` in the month, `d` is taken modulo 7 with 0 as Sunday.
    Instance(PatternValueType, PatternValueType),
}

impl Pattern for DayOfWeek {
    type Input = NaiveDate;

    fn matches(&self, date: NaiveDate) -> Result<bool> {
        let weekday = date.weekday();

        match self {
            Self::Common(common) => common.matches(weekday.number_from_monday()),
            Self::Any => Ok(true),
            Self::Last => Ok(weekday == Weekday::Sat),
            Self::Name(name) => Ok(name.number() == weekday.number_from_monday()),
            Self::NameRange(from, to) => {
                let from = from.number() % 7;
                let day = if from == 0 && weekday == Weekday::Sun {
                    0
                } else {
                    weekday.number_from_monday()
                };
                Ok(from <= day && day <= to.number())
            }
            Self::Instance(dow, nth) => {
                Ok(utils::nth_dow(date.year(), date.month(), *dow, *nth) == Some(date.day()))
            }
        }
    }

    fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common(common) => write!(f, "{common}"),
            Self::Any => write!(f, "?"),
            Self::Last => write!(f, "L"),
            Self::Name(name) => write!(f, "{name}"),
            Self::NameRange(from, to) => write!(f, "{from}-{to}"),
            Self::Instance(dow, nth) => write!(f, "{dow}#{nth}"),
        }
    }
}
