use crate::{
    field::Field,
    parser,
    pattern::{Common, DayOfMonth, DayOfWeek, Month, Pattern, PatternValueType},
    CronError, Result,
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use std::{fmt::Display, str::FromStr};
use tracing::{debug, trace};

/// The last year occurrences are searched in.
pub const MAX_YEAR: i32 = 2199;

/// Parsed six-field cron expression: minutes, hours, day of month, month, day of week and year.
///
/// For expression format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Expression {
    minutes: Field<Common>,
    hours: Field<Common>,
    days_of_month: Field<DayOfMonth>,
    months: Field<Month>,
    days_of_week: Field<DayOfWeek>,
    years: Field<Common>,
}

/// Which day field drives the occurrences search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DaySelector {
    DayOfMonth,
    DayOfWeek,
}

impl Expression {
    /// Parses provided `expression` into [`Expression`] instance.
    ///
    /// Alternative way to construct [`Expression`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError::Syntax`] with position of the offending character if the expression is malformed.
    /// Values aren't validated at this stage: reversed ranges, out of range numbers or zero steps are accepted.
    pub fn parse(expression: &str) -> Result<Self> {
        let fields = parser::parse(expression)?;
        let expression = Self {
            minutes: fields.minutes,
            hours: fields.hours,
            days_of_month: fields.days_of_month,
            months: fields.months,
            days_of_week: fields.days_of_week,
            years: fields.years,
        };

        trace!(%expression, "cron expression parsed");
        Ok(expression)
    }

    /// Minutes field.
    pub fn minutes(&self) -> &Field<Common> {
        &self.minutes
    }

    /// Hours field.
    pub fn hours(&self) -> &Field<Common> {
        &self.hours
    }

    /// Day of month field.
    pub fn days_of_month(&self) -> &Field<DayOfMonth> {
        &self.days_of_month
    }

    /// Month field.
    pub fn months(&self) -> &Field<Month> {
        &self.months
    }

    /// Day of week field.
    pub fn days_of_week(&self) -> &Field<DayOfWeek> {
        &self.days_of_week
    }

    /// Year field.
    pub fn years(&self) -> &Field<Common> {
        &self.years
    }

    /// Returns `true` if every field matches the local wall clock time of `instant`.
    ///
    /// Unlike occurrences search, both day fields are simply required to match,
    /// `?` in either of them matches any day.
    /// Seconds of `instant` are ignored.
    ///
    /// Returns [`CronError::Domain`] if the expression contains a zero step.
    pub fn matches<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Result<bool> {
        let local = instant.naive_local();
        let date = local.date();

        let minute = self.minutes.matches(local.minute())?;
        let hour = self.hours.matches(local.hour())?;
        let day_of_month = self.days_of_month.matches(date)?;
        let month = self.months.matches(local.month())?;
        let day_of_week = self.days_of_week.matches(date)?;
        let year = self.year_matches(local.year())?;

        Ok(minute && hour && day_of_month && month && day_of_week && year)
    }

    /// Returns the first occurrence at or after `from` (truncated to the minute).
    ///
    /// Returns `None` if there is no occurrence until the end of [`MAX_YEAR`].
    pub fn next<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        Ok(self.next_n(from, 1)?.into_iter().next())
    }

    /// Returns up to `n` occurrences at or after `from` (truncated to the minute) in ascending order.
    ///
    /// Exactly one of the day fields must contain `?`: the other one selects the days.
    /// If both or none of them contain `?`, the result is empty.
    ///
    /// Occurrences are calculated in the timezone of `from`:
    /// local times skipped by a DST transition are omitted, repeated ones resolve to the earliest instant.
    ///
    /// Returns [`CronError::Domain`] if the expression contains a zero step.
    pub fn next_n<Tz: TimeZone>(&self, from: &DateTime<Tz>, n: usize) -> Result<Vec<DateTime<Tz>>> {
        self.validate()?;

        let mut occurrences = Vec::new();
        if n > 0 {
            self.search(from, |occurrence| {
                occurrences.push(occurrence);
                occurrences.len() < n
            })?;
        }

        Ok(occurrences)
    }

    /// Returns iterator of occurrences starting from `from` (inclusively).
    ///
    /// Returns [`CronError::Domain`] if the expression contains a zero step.
    pub fn iter<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Result<Occurrences<'_, Tz>> {
        Ok(Occurrences {
            expression: self,
            next: self.next(from)?,
        })
    }

    /// Checks every field for values which can't be evaluated.
    fn validate(&self) -> Result<()> {
        let date = NaiveDate::MIN;

        self.minutes.matches(0)?;
        self.hours.matches(0)?;
        self.days_of_month.matches(date)?;
        self.months.matches(1)?;
        self.days_of_week.matches(date)?;
        self.years.matches(0)?;

        Ok(())
    }

    fn year_matches(&self, year: i32) -> Result<bool> {
        match PatternValueType::try_from(year) {
            Ok(year) => self.years.matches(year),
            // There are no negative values in the expression.
            Err(_) => self.years.matches(0).map(|_| false),
        }
    }

    fn day_selector(&self) -> Option<DaySelector> {
        match (self.days_of_month.has_any(), self.days_of_week.has_any()) {
            (true, false) => Some(DaySelector::DayOfWeek),
            (false, true) => Some(DaySelector::DayOfMonth),
            _ => None,
        }
    }

    fn day_matches(&self, selector: DaySelector, date: NaiveDate) -> Result<bool> {
        match selector {
            DaySelector::DayOfMonth => self.days_of_month.matches(date),
            DaySelector::DayOfWeek => self.days_of_week.matches(date),
        }
    }

    /// Feeds occurrences at or after `from` to `emit` in ascending order while it returns `true`.
    fn search<Tz: TimeZone>(&self, from: &DateTime<Tz>, mut emit: impl FnMut(DateTime<Tz>) -> bool) -> Result<()> {
        let Some(start) = truncate_to_minute(from) else {
            debug!("start time is out of range");
            return Ok(());
        };
        let Some(selector) = self.day_selector() else {
            debug!(expression = %self, "exactly one of day fields should be `?`, no occurrences");
            return Ok(());
        };

        let timezone = start.timezone();
        let local_start = start.naive_local();

        let mut years = Vec::new();
        for year in local_start.year()..=MAX_YEAR {
            if self.year_matches(year)? {
                years.push(year);
            }
        }
        let months = candidates(&self.months, 1..=12)?;
        let hours = candidates(&self.hours, 0..=23)?;
        let minutes = candidates(&self.minutes, 0..=59)?;

        if years.is_empty() || months.is_empty() || hours.is_empty() || minutes.is_empty() {
            debug!(expression = %self, "no candidate values until {MAX_YEAR}");
            return Ok(());
        }

        for &year in &years {
            for &month in &months {
                for day in 1..=31 {
                    // Days are ascending, so the first nonexistent one ends the month.
                    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                        break;
                    };
                    if date < local_start.date() || !self.day_matches(selector, date)? {
                        continue;
                    }

                    for &hour in &hours {
                        for &minute in &minutes {
                            let Some(local) = date.and_hms_opt(hour, minute, 0) else {
                                continue;
                            };
                            if local < local_start {
                                continue;
                            }

                            match to_timezone(&timezone, &local) {
                                Some(occurrence) if occurrence >= start => {
                                    if !emit(occurrence) {
                                        return Ok(());
                                    }
                                }
                                _ => {}
                            }
                        }
                    }
                }
            }
        }

        debug!(expression = %self, "occurrences search reached the end of {MAX_YEAR}");
        Ok(())
    }
}

/// Values of `range` matched by `field`.
fn candidates<P>(field: &Field<P>, range: impl Iterator<Item = PatternValueType>) -> Result<Vec<PatternValueType>>
where
    P: Pattern<Input = PatternValueType>,
{
    range
        .filter_map(|value| field.matches(value).map(|matched| matched.then_some(value)).transpose())
        .collect()
}

/// Drops seconds and fractions of a second.
fn truncate_to_minute<Tz: TimeZone>(time: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let extra = TimeDelta::seconds(i64::from(time.second())) + TimeDelta::nanoseconds(i64::from(time.nanosecond()));
    time.clone().checked_sub_signed(extra)
}

/// Resolves local wall clock time, `None` if it doesn't exist in the `timezone`.
fn to_timezone<Tz: TimeZone>(timezone: &Tz, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
    timezone.from_local_datetime(local).earliest()
}

/// Iterator over occurrences of the [`Expression`], see [`Expression::iter`].
#[derive(Debug, Clone)]
pub struct Occurrences<'a, Tz: TimeZone> {
    expression: &'a Expression,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for Occurrences<'_, Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        // The expression has been validated when the iterator was created.
        self.next = current
            .clone()
            .checked_add_signed(TimeDelta::minutes(1))
            .and_then(|from| self.expression.next(&from).ok().flatten());
        Some(current)
    }
}

impl From<Expression> for String {
    fn from(value: Expression) -> Self {
        value.to_string()
    }
}

impl From<&Expression> for String {
    fn from(value: &Expression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Expression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for Expression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Expression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl FromStr for Expression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.minutes, self.hours, self.days_of_month, self.months, self.days_of_week, self.years
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_reuse::{apply, template};
    use std::time::Duration;

    fn instant(s: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[rstest]
    #[case("0 10 * * ? *", "2022-11-03T09:00:00Z", &["2022-11-03T10:00:00+00:00", "2022-11-04T10:00:00+00:00", "2022-11-05T10:00:00+00:00"])]
    #[case("0 18 ? * MON-FRI *", "2022-11-05T00:00:00Z", &["2022-11-07T18:00:00+00:00", "2022-11-08T18:00:00+00:00"])]
    #[case("15 10 ? * 6#3 *", "2022-11-01T00:00:00Z", &["2022-11-19T10:15:00+00:00", "2022-12-17T10:15:00+00:00"])]
    #[case("0 0 L * ? *", "2024-01-15T00:00:00Z", &["2024-01-31T00:00:00+00:00", "2024-02-29T00:00:00+00:00", "2024-03-31T00:00:00+00:00"])]
    #[case("0 12 15W * ? *", "2024-06-01T00:00:00Z", &["2024-06-14T12:00:00+00:00", "2024-07-15T12:00:00+00:00"])]
    #[case("*/20 * * * ? *", "2022-11-03T09:05:30Z", &["2022-11-03T09:20:00+00:00", "2022-11-03T09:40:00+00:00", "2022-11-03T10:00:00+00:00"])]
    #[case("30 9 * * ? *", "2022-11-03T09:30:45Z", &["2022-11-03T09:30:00+00:00"])]
    #[case("0 0 1 JAN-MAR ? *", "2024-02-10T00:00:00+02:00", &["2024-03-01T00:00:00+02:00", "2025-01-01T00:00:00+02:00"])]
    #[case("0 9 ? * L *", "2023-09-01T00:00:00Z", &["2023-09-02T09:00:00+00:00", "2023-09-09T09:00:00+00:00"])]
    #[case("0 0 ? * SUN-SAT *", "2022-11-06T00:00:00Z", &["2022-11-06T00:00:00+00:00", "2022-11-07T00:00:00+00:00"])]
    #[case("0 0 1 * ? 2023/2", "2023-12-15T00:00:00Z", &["2025-01-01T00:00:00+00:00", "2025-02-01T00:00:00+00:00"])]
    #[case("0 0 1 1 ? 2199", "2198-12-31T00:00:00Z", &["2199-01-01T00:00:00+00:00"])]
    #[case("0 0 29 2 ? *", "2024-03-01T00:00:00Z", &["2028-02-29T00:00:00+00:00"])]
    #[case("0 0 31 * ? *", "2024-04-01T00:00:00Z", &["2024-05-31T00:00:00+00:00", "2024-07-31T00:00:00+00:00"])]
    #[case("0 0 29 2 ? 2023", "2023-01-01T00:00:00Z", &[])]
    #[case("0 0 1 1 ? 2199", "2199-06-01T00:00:00Z", &[])]
    #[case("* * * * ? 2200", "2022-01-01T00:00:00Z", &[])]
    #[case("0 10 * * * *", "2022-11-03T09:00:00Z", &[])]
    #[case("0 10 ? * ? *", "2022-11-03T09:00:00Z", &[])]
    #[case("0 24 * * ? *", "2022-11-03T09:00:00Z", &[])]
    #[timeout(Duration::from_secs(1))]
    fn test_expression_next_n(#[case] pattern: &str, #[case] from: &str, #[case] expected: &[&str]) {
        let expression = Expression::parse(pattern).unwrap();
        let from = instant(from);
        let occurrences: Vec<String> = expression
            .next_n(&from, expected.len().max(1))
            .unwrap()
            .iter()
            .map(DateTime::to_rfc3339)
            .collect();

        assert_eq!(occurrences, expected, "pattern = {pattern}, from = {from}");
    }

    #[rstest]
    #[case("0 10 * * ? *", "2022-11-03T10:01:00Z", Some("2022-11-04T10:00:00+00:00"))]
    #[case("0 10 * * ? *", "2022-11-03T10:00:59.999Z", Some("2022-11-03T10:00:00+00:00"))]
    #[case("0 0 30 2 ? *", "2022-11-03T10:01:00Z", None)]
    #[timeout(Duration::from_secs(1))]
    fn test_expression_next(#[case] pattern: &str, #[case] from: &str, #[case] expected: Option<&str>) {
        let expression = Expression::parse(pattern).unwrap();
        let from = instant(from);
        let next = expression.next(&from).unwrap();

        assert_eq!(
            next.map(|t| t.to_rfc3339()).as_deref(),
            expected,
            "pattern = {pattern}, from = {from}"
        );
    }

    #[test]
    fn test_next_n_zero() {
        let expression = Expression::parse("* * * * ? *").unwrap();
        assert!(expression.next_n(&instant("2022-11-03T10:00:00Z"), 0).unwrap().is_empty());
    }

    #[rstest]
    #[case("0 18 ? * MON-FRI *", "2022-11-07T18:00:00Z", true)]
    #[case("0 18 ? * MON-FRI *", "2022-11-06T18:00:00Z", false)]
    #[case("15 10 ? * 6#3 *", "2022-11-19T10:15:00Z", true)]
    #[case("15 10 ? * 6#3 *", "2022-11-12T10:15:00Z", false)]
    #[case("15 10 ? * 6#3 *", "2022-11-19T10:16:00Z", false)]
    #[case("* * L * ? *", "2024-02-29T23:59:00Z", true)]
    #[case("* * L * ? *", "2023-02-28T00:00:00Z", true)]
    #[case("* * L * ? *", "2024-02-28T00:00:00Z", false)]
    #[case("* * * * ? 2022", "2022-11-03T10:00:00Z", true)]
    #[case("* * * * ? 2022", "2023-11-03T10:00:00Z", false)]
    #[case("*/5 * * * ? *", "2022-11-03T10:05:00Z", true)]
    #[case("*/5 * * * ? *", "2022-11-03T10:06:00Z", false)]
    #[case("0 10 * JUN-AUG ? *", "2022-07-03T10:00:00+03:00", true)]
    #[case("0 10 * JUN-AUG ? *", "2022-07-03T10:00:00Z", true)]
    #[case("0 10 * JUN-AUG ? *", "2022-09-03T10:00:00Z", false)]
    #[case("0 10 * * * *", "2022-11-03T10:00:00Z", true)]
    #[case("0 10 ? * ? *", "2022-11-03T10:00:00Z", true)]
    #[case("0 10 3 * MON *", "2022-11-03T10:00:00Z", false)]
    fn test_expression_matches(#[case] pattern: &str, #[case] time: &str, #[case] expected: bool) {
        let expression = Expression::parse(pattern).unwrap();
        let time = instant(time);

        assert_eq!(
            expression.matches(&time).unwrap(),
            expected,
            "pattern = {pattern}, time = {time}"
        );
    }

    #[rstest]
    #[case("0/0 * * * ? *")]
    #[case("* */0 * * ? *")]
    #[case("* * 1/0 * ? *")]
    #[case("* * ? 1/0 * *")]
    #[case("* * ? * */0 *")]
    #[case("* * * * ? *,0/0")]
    fn test_zero_step(#[case] pattern: &str) {
        let expression = Expression::parse(pattern).unwrap();
        let from = instant("2022-11-03T10:00:00Z");

        assert!(matches!(expression.matches(&from), Err(CronError::Domain(_))), "pattern = {pattern}");
        assert!(matches!(expression.next(&from), Err(CronError::Domain(_))), "pattern = {pattern}");
        assert!(matches!(expression.next_n(&from, 5), Err(CronError::Domain(_))), "pattern = {pattern}");
        assert!(matches!(expression.iter(&from), Err(CronError::Domain(_))), "pattern = {pattern}");
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_expression_iter() {
        let expression = Expression::parse("0 12 ? * MON 2024").unwrap();
        let mut iter = expression.iter(&instant("2024-12-01T00:00:00+00:00")).unwrap();

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-12-02T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-12-09T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-12-16T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-12-23T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-12-30T12:00:00+00:00");
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_expression_iter_every_minute() {
        let expression = Expression::parse("* * * * ? *").unwrap();
        let mut iter = expression.iter(&instant("2024-01-01T23:58:01+00:00")).unwrap();

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T23:58:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T23:59:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-02T00:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-02T00:01:00+00:00");
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_iter_agrees_with_next_n() {
        let expression = Expression::parse("5/20 8-10 ? * 2#1,L *").unwrap();
        let from = instant("2024-01-01T00:00:00Z");

        let collected: Vec<_> = expression.iter(&from).unwrap().take(20).collect();
        assert_eq!(collected, expression.next_n(&from, 20).unwrap());
    }

    #[template]
    #[rstest]
    #[case("0 10 * * ? *", "0 10 * * ? *")]
    #[case("  0   10 *  * ? *  ", "0 10 * * ? *")]
    #[case("0\t10 * *\n? *", "0 10 * * ? *")]
    #[case("0/15 * * * ? *", "0/15 * * * ? *")]
    #[case("*/5 */2 * * ? *", "*/5 */2 * * ? *")]
    #[case("0 18 ? * mon-Fri *", "0 18 ? * mon-Fri *")]
    #[case("15 10 ? * 6#3 *", "15 10 ? * 6#3 *")]
    #[case("0 12 15W,L jan,MAR-may ? 2020-2030,2040", "0 12 15W,L jan,MAR-may ? 2020-2030,2040")]
    #[case("007 01 * * ? *", "7 1 * * ? *")]
    #[case("59-1 * * 12 L 1999", "59-1 * * 12 L 1999")]
    fn valid_expressions_to_test(#[case] input: &str, #[case] expected: &str) {}

    #[apply(valid_expressions_to_test)]
    fn test_expression_display_and_parse(#[case] input: &str, #[case] expected: &str) {
        let expression = Expression::parse(input).unwrap();
        assert_eq!(expression.to_string(), expected);
        assert_eq!(String::from(&expression), expected);
        assert_eq!(Expression::parse(expected).unwrap(), expression);
    }

    #[apply(valid_expressions_to_test)]
    fn test_try_from_string(#[case] input: &str, #[case] _expected: &str) {
        // &str
        let expression1 = Expression::parse(input).unwrap();
        let expression2 = Expression::try_from(input).unwrap();
        assert_eq!(expression1, expression2);

        // &String
        let tst_string = String::from(input);
        let expression2 = Expression::try_from(&tst_string).unwrap();
        assert_eq!(expression1, expression2);

        // String
        let expression2 = Expression::try_from(tst_string).unwrap();
        assert_eq!(expression1, expression2);

        // from_str
        let expression2 = Expression::from_str(input).unwrap();
        assert_eq!(expression1, expression2);
    }

    #[template]
    #[rstest]
    #[case("")]
    #[case("0 10 * * ?")]
    #[case("0 10 * * ? * *")]
    #[case("0 10 * ? ? *")]
    #[case("@hourly")]
    #[case("0 10 * * ? 99999999999")]
    #[case("0 10 * * MON#2 *")]
    #[case("0 10 1-L * ? *")]
    #[case("0,,1 10 * * ? *")]
    #[case("0 10 * * ? *,")]
    fn invalid_expressions_to_test(#[case] input: &str) {}

    #[apply(invalid_expressions_to_test)]
    fn test_invalid_expression_parse(#[case] input: &str) {
        assert!(
            matches!(Expression::parse(input), Err(CronError::Syntax { .. })),
            "input = {input}"
        );
    }

    #[apply(invalid_expressions_to_test)]
    fn test_try_from_invalid_string(#[case] input: &str) {
        assert!(Expression::try_from(input).is_err(), "input = {input}");
        assert!(Expression::from_str(input).is_err(), "input = {input}");
    }

    #[test]
    fn test_accessors() {
        let expression = Expression::parse("0 18 ? * MON-FRI 2022,2023").unwrap();

        assert_eq!(expression.minutes().variants(), &[Common::Number(0)]);
        assert_eq!(expression.hours().to_string(), "18");
        assert!(expression.days_of_month().has_any());
        assert_eq!(expression.months().variants(), &[Month::Common(Common::All)]);
        assert!(!expression.days_of_week().has_any());
        assert_eq!(expression.years().variants().len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let expression = Expression::parse("0 18 ? * MON-FRI *").unwrap();
        let json = serde_json::to_string(&expression).unwrap();
        assert_eq!(json, "\"0 18 ? * MON-FRI *\"");

        let restored: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, expression);

        assert!(serde_json::from_str::<Expression>("\"0 18 ? *\"").is_err());
    }
}
