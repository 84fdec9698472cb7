use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;
use crate::models::{Detail, Invocation, Query, SearchRequest};

/// Keyword that switches to listing mode
pub const LIST_KEYWORD: &str = "ls";

/// Number of rows listed when `ls` has no usable count
pub const DEFAULT_LIST_COUNT: usize = 1000;

/// Reasons an argument could not be turned into a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("That isn't a correct date format.")]
    InvalidDate,
    #[error("Invalid format. Give amount in cents, date in [yyyy-]mm-dd format, or a merchant name")]
    InvalidFormat,
    #[error("Amount {0} is out of range")]
    InvalidAmount(String),
}

/// Interpret the positional query and its optional modifier
pub fn parse_args(
    query: Option<&str>,
    modifier: Option<&str>,
    today: NaiveDate,
) -> Result<Invocation, QueryError> {
    let token = match query.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(Invocation::Help),
    };

    let query = match classify(token, today)? {
        Query::ListRecent(_) => Query::ListRecent(parse_list_count(modifier)),
        q => q,
    };

    let detail = match query {
        Query::ListRecent(_) => Detail::Brief,
        _ => parse_detail(modifier),
    };

    debug!("Classified {:?} as {:?} ({:?})", token, query, detail);
    Ok(Invocation::Run(SearchRequest { query, detail }))
}

/// Classify a single token; the first matching rule wins
pub fn classify(token: &str, today: NaiveDate) -> Result<Query, QueryError> {
    if is_signed_integer(token) {
        return token
            .parse::<i64>()
            .map(Query::ExactAmount)
            .map_err(|_| QueryError::InvalidAmount(token.to_string()));
    }

    if token.contains('-') && !token.starts_with('-') {
        return resolve_date(token, today).map(Query::ExactDate);
    }

    if token == LIST_KEYWORD {
        return Ok(Query::ListRecent(DEFAULT_LIST_COUNT));
    }

    if token.chars().all(char::is_alphabetic) {
        return Ok(Query::Merchant(token.to_lowercase()));
    }

    Err(QueryError::InvalidFormat)
}

/// Digits only, with at most one leading minus sign
fn is_signed_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve `m-d` or `y-m-d` into a calendar date.
///
/// A `m-d` date that would land after `today` is taken to mean the same
/// day in an earlier year.
pub fn resolve_date(token: &str, today: NaiveDate) -> Result<NaiveDate, QueryError> {
    let parts: Vec<&str> = token.split('-').collect();

    match parts.as_slice() {
        [month, day] => {
            let date = build_date(today.year(), month, day).ok_or(QueryError::InvalidDate)?;
            if date > today {
                return roll_back(date, today).ok_or(QueryError::InvalidDate);
            }
            Ok(date)
        }
        [year, month, day] => {
            let year = parse_component(year).ok_or(QueryError::InvalidDate)?;
            let year = i32::try_from(year).map_err(|_| QueryError::InvalidDate)?;
            build_date(year, month, day).ok_or(QueryError::InvalidDate)
        }
        _ => Err(QueryError::InvalidFormat),
    }
}

fn build_date(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    let month = parse_component(month)?;
    let day = parse_component(day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Most recent past occurrence of `date`'s month and day. Feb 29 walks back
/// to the previous leap year.
fn roll_back(date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    (1..=8)
        .filter_map(|back| date.with_year(date.year() - back))
        .find(|d| *d <= today)
}

/// Count argument for `ls`: absent or non-numeric means the default,
/// negative means nothing.
pub fn parse_list_count(arg: Option<&str>) -> usize {
    let Some(arg) = arg.map(str::trim) else {
        return DEFAULT_LIST_COUNT;
    };
    if !is_signed_integer(arg) {
        return DEFAULT_LIST_COUNT;
    }
    if arg.starts_with('-') {
        return 0;
    }
    arg.parse::<usize>().unwrap_or(usize::MAX)
}

/// `more` or `m`, any case, asks for extended output
pub fn parse_detail(arg: Option<&str>) -> Detail {
    match arg.map(|a| a.trim().to_lowercase()).as_deref() {
        Some("more") | Some("m") => Detail::More,
        _ => Detail::Brief,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(list: &[&str]) -> Result<Invocation, QueryError> {
        parse_args(list.first().copied(), list.get(1).copied(), today())
    }

    fn today() -> NaiveDate {
        date(2024, 1, 10)
    }

    #[test]
    fn test_amounts_are_signed_and_exact() {
        assert_eq!(classify("1050", today()), Ok(Query::ExactAmount(1050)));
        assert_eq!(classify("-50", today()), Ok(Query::ExactAmount(-50)));
        assert_eq!(classify("0", today()), Ok(Query::ExactAmount(0)));
        assert_eq!(classify("007", today()), Ok(Query::ExactAmount(7)));
    }

    #[test]
    fn test_amount_overflow() {
        assert!(matches!(
            classify("99999999999999999999", today()),
            Err(QueryError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_bare_or_double_minus_is_invalid() {
        assert_eq!(classify("-", today()), Err(QueryError::InvalidFormat));
        assert_eq!(classify("--5", today()), Err(QueryError::InvalidFormat));
        assert_eq!(classify("-3-15", today()), Err(QueryError::InvalidFormat));
    }

    #[test]
    fn test_month_day_in_future_rolls_back() {
        assert_eq!(classify("3-15", today()), Ok(Query::ExactDate(date(2023, 3, 15))));
    }

    #[test]
    fn test_month_day_in_past_keeps_year() {
        assert_eq!(classify("1-5", today()), Ok(Query::ExactDate(date(2024, 1, 5))));
        assert_eq!(classify("01-10", today()), Ok(Query::ExactDate(date(2024, 1, 10))));
    }

    #[test]
    fn test_leap_day_rolls_back_to_leap_year() {
        assert_eq!(
            resolve_date("2-29", today()),
            Ok(date(2020, 2, 29))
        );
        assert_eq!(
            resolve_date("2-29", date(2025, 1, 1)),
            Err(QueryError::InvalidDate)
        );
    }

    #[test]
    fn test_full_date_taken_literally() {
        assert_eq!(classify("2024-03-15", today()), Ok(Query::ExactDate(date(2024, 3, 15))));
        assert_eq!(classify("2024-3-5", today()), Ok(Query::ExactDate(date(2024, 3, 5))));
        // future full dates are not rolled back
        assert_eq!(classify("2030-12-31", today()), Ok(Query::ExactDate(date(2030, 12, 31))));
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(classify("55-43", today()), Err(QueryError::InvalidDate));
        assert_eq!(classify("2024-13-01", today()), Err(QueryError::InvalidDate));
        assert_eq!(classify("2023-02-29", today()), Err(QueryError::InvalidDate));
        assert_eq!(classify("3-", today()), Err(QueryError::InvalidDate));
        assert_eq!(classify("ab-cd", today()), Err(QueryError::InvalidDate));
        assert_eq!(classify("2024-+3-5", today()), Err(QueryError::InvalidDate));
    }

    #[test]
    fn test_too_many_hyphens() {
        assert_eq!(classify("55-43-1612-1", today()), Err(QueryError::InvalidFormat));
        assert_eq!(classify("2024-01-01-", today()), Err(QueryError::InvalidFormat));
    }

    #[test]
    fn test_three_part_garbage_is_date_error() {
        assert_eq!(classify("55-43-1612", today()), Err(QueryError::InvalidDate));
    }

    #[test]
    fn test_merchant() {
        assert_eq!(classify("Coffee", today()), Ok(Query::Merchant("coffee".to_string())));
        assert_eq!(classify("café", today()), Ok(Query::Merchant("café".to_string())));
        assert_eq!(classify("ls", today()), Ok(Query::ListRecent(DEFAULT_LIST_COUNT)));
        // only the exact keyword lists
        assert_eq!(classify("LS", today()), Ok(Query::Merchant("ls".to_string())));
        assert_eq!(classify("amazon.com", today()), Err(QueryError::InvalidFormat));
        assert_eq!(classify("a1", today()), Err(QueryError::InvalidFormat));
    }

    #[test]
    fn test_parse_args_help() {
        assert_eq!(parse(&[]), Ok(Invocation::Help));
        assert_eq!(parse(&[""]), Ok(Invocation::Help));
        assert_eq!(parse(&["  "]), Ok(Invocation::Help));
    }

    #[test]
    fn test_parse_args_detail_modifier() {
        let run = parse(&["1050", "MORE"]).unwrap();
        assert_eq!(
            run,
            Invocation::Run(SearchRequest {
                query: Query::ExactAmount(1050),
                detail: Detail::More,
            })
        );

        let run = parse(&["shop", "m"]).unwrap();
        assert!(matches!(run, Invocation::Run(SearchRequest { detail: Detail::More, .. })));

        let run = parse(&["shop", "x"]).unwrap();
        assert!(matches!(run, Invocation::Run(SearchRequest { detail: Detail::Brief, .. })));
    }

    #[test]
    fn test_parse_args_list() {
        let list = |a: &[&str]| match parse(a).unwrap() {
            Invocation::Run(SearchRequest { query: Query::ListRecent(n), detail }) => {
                assert_eq!(detail, Detail::Brief);
                n
            }
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(list(&["ls"]), 1000);
        assert_eq!(list(&["ls", "5"]), 5);
        assert_eq!(list(&["ls", "more"]), 1000);
        assert_eq!(list(&["ls", "0"]), 0);
        assert_eq!(list(&["ls", "-3"]), 0);
    }

    #[test]
    fn test_parse_args_propagates_errors() {
        assert_eq!(
            parse(&["55-43-1612"]),
            Err(QueryError::InvalidDate)
        );
        assert_eq!(
            parse(&["$10"]),
            Err(QueryError::InvalidFormat)
        );
    }
}
