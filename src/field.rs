use crate::{pattern::Pattern, Result};
use std::fmt::{self, Display};

/// Non-empty list of patterns of a single cron field, matches if any of its patterns matches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field<P> {
    patterns: Vec<P>,
}

impl<P: Pattern> Field<P> {
    pub(crate) fn new(patterns: Vec<P>) -> Self {
        debug_assert!(!patterns.is_empty(), "field should have at least one pattern");
        Self { patterns }
    }

    /// Patterns in the order of appearance in the expression.
    pub fn variants(&self) -> &[P] {
        &self.patterns
    }

    /// Returns `true` if at least one pattern matches `input`.
    ///
    /// Every pattern is evaluated, so a pattern with zero step is reported
    /// even if some other pattern of the list matches.
    pub fn matches(&self, input: P::Input) -> Result<bool> {
        self.patterns
            .iter()
            .try_fold(false, |matched, pattern| Ok(pattern.matches(input)? || matched))
    }

    /// Returns `true` if the field contains "no specific value" (`?`) marker.
    pub fn has_any(&self) -> bool {
        self.patterns.iter().any(Pattern::is_any)
    }
}

impl<P: Display> Display for Field<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}
