//! Parser for the Russian date strings shown on listing pages.
//!
//! Known shapes (commas, `г.` and the `в` connector optional, case-insensitive):
//! `HH:MM`, `сегодня HH:MM`, `вчера HH:MM`, `D <month> [YYYY] [HH:MM]`,
//! `DD.MM.YYYY [HH:MM]`, `YYYY-MM-DD [HH:MM]` and `YYYY-MM-DDTHH:MM[:SS]`.
//! A month is its genitive or nominative name, or an abbreviation of at least
//! three letters (`дек`, `сент.`). Relative forms resolve against the `now` passed in.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateParseError;

/// Genitive and nominative name of each month.
const MONTHS: [(&str, &str); 12] = [
    ("января", "январь"),
    ("февраля", "февраль"),
    ("марта", "март"),
    ("апреля", "апрель"),
    ("мая", "май"),
    ("июня", "июнь"),
    ("июля", "июль"),
    ("августа", "август"),
    ("сентября", "сентябрь"),
    ("октября", "октябрь"),
    ("ноября", "ноябрь"),
    ("декабря", "декабрь"),
];

const SKIPPED_TOKENS: [&str; 3] = ["г.", "г", "в"];

/// Parses `text` into a local timestamp. Missing time means midnight; missing year means `now`'s year.
pub fn parse_site_date(text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, DateParseError> {
    let normalized = text.to_lowercase().replace(',', " ");
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| !SKIPPED_TOKENS.contains(t))
        .collect();
    let today = now.date();

    let parsed = match tokens.as_slice() {
        [time] if time.contains(':') && !time.contains('t') => {
            parse_time(time).map(|t| today.and_time(t))
        }
        ["сегодня", rest @ ..] => with_time(Some(today), rest),
        ["вчера", rest @ ..] => with_time(today.pred_opt(), rest),
        [day, month, rest @ ..] if month_number(month).is_some() => {
            day_month(day, month, rest, today.year())
        }
        [date, rest @ ..] => parse_numeric(date, rest),
        [] => None,
    };

    parsed.ok_or_else(|| DateParseError(text.trim().to_string()))
}

fn month_number(token: &str) -> Option<u32> {
    let token = token.strip_suffix('.').unwrap_or(token);
    if token.chars().count() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|(genitive, nominative)| {
            genitive.starts_with(token) || nominative.starts_with(token)
        })
        .map(|i| i as u32 + 1)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(token, "%H:%M:%S"))
        .ok()
}

fn with_time(date: Option<NaiveDate>, rest: &[&str]) -> Option<NaiveDateTime> {
    let date = date?;
    match rest {
        [] => Some(date.and_time(NaiveTime::MIN)),
        [time] => parse_time(time).map(|t| date.and_time(t)),
        _ => None,
    }
}

fn day_month(day: &str, month: &str, rest: &[&str], default_year: i32) -> Option<NaiveDateTime> {
    let day: u32 = day.parse().ok()?;
    let month = month_number(month)?;
    let (year, rest) = match rest {
        [year, tail @ ..] if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) => {
            (year.parse().ok()?, tail)
        }
        _ => (default_year, rest),
    };
    with_time(NaiveDate::from_ymd_opt(year, month, day), rest)
}

fn parse_numeric(date: &str, rest: &[&str]) -> Option<NaiveDateTime> {
    if rest.is_empty() {
        for format in ["%Y-%m-%dt%H:%M:%S", "%Y-%m-%dt%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
                return Some(dt);
            }
        }
    }
    let date = NaiveDate::parse_from_str(date, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok();
    with_time(date, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_time_only_is_today() {
        assert_eq!(parse_site_date("14:05", now()), Ok(at(2024, 12, 15, 14, 5)));
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(
            parse_site_date("Сегодня, 09:30", now()),
            Ok(at(2024, 12, 15, 9, 30))
        );
        assert_eq!(
            parse_site_date("вчера 23:10", now()),
            Ok(at(2024, 12, 14, 23, 10))
        );
        assert_eq!(
            parse_site_date("вчера в 10:15", now()),
            Ok(at(2024, 12, 14, 10, 15))
        );
        assert_eq!(
            parse_site_date("Сегодня в 08:05", now()),
            Ok(at(2024, 12, 15, 8, 5))
        );
    }

    #[test]
    fn test_yesterday_crosses_year_boundary() {
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(
            parse_site_date("вчера, 18:00", new_year),
            Ok(at(2024, 12, 31, 18, 0))
        );
    }

    #[test]
    fn test_day_and_month_name() {
        assert_eq!(
            parse_site_date("3 декабря 2024, 17:45", now()),
            Ok(at(2024, 12, 3, 17, 45))
        );
        assert_eq!(
            parse_site_date("28 ноября, 08:00", now()),
            Ok(at(2024, 11, 28, 8, 0))
        );
        assert_eq!(
            parse_site_date("1 марта 2023 г.", now()),
            Ok(at(2023, 3, 1, 0, 0))
        );
        assert_eq!(
            parse_site_date("3 декабря 2024 в 17:45", now()),
            Ok(at(2024, 12, 3, 17, 45))
        );
    }

    #[test]
    fn test_abbreviated_and_nominative_months() {
        assert_eq!(parse_site_date("3 дек 2024", now()), Ok(at(2024, 12, 3, 0, 0)));
        assert_eq!(
            parse_site_date("12 янв. 2024, 10:00", now()),
            Ok(at(2024, 1, 12, 10, 0))
        );
        assert_eq!(
            parse_site_date("7 Фев 2024 в 09:40", now()),
            Ok(at(2024, 2, 7, 9, 40))
        );
        assert_eq!(parse_site_date("30 сент. 2024", now()), Ok(at(2024, 9, 30, 0, 0)));
        assert_eq!(parse_site_date("1 май 2024", now()), Ok(at(2024, 5, 1, 0, 0)));
        assert_eq!(parse_site_date("5 март", now()), Ok(at(2024, 3, 5, 0, 0)));
    }

    #[test]
    fn test_short_month_fragment_is_rejected() {
        assert_eq!(month_number("ма"), None);
        assert_eq!(month_number("мар"), Some(3));
        assert_eq!(month_number("июл."), Some(7));
        assert_eq!(month_number("декабрьский"), None);
    }

    #[test]
    fn test_numeric_dates() {
        assert_eq!(
            parse_site_date("05.12.2024, 11:20", now()),
            Ok(at(2024, 12, 5, 11, 20))
        );
        assert_eq!(parse_site_date("05.12.2024", now()), Ok(at(2024, 12, 5, 0, 0)));
        assert_eq!(
            parse_site_date("2024-12-05 11:20", now()),
            Ok(at(2024, 12, 5, 11, 20))
        );
        assert_eq!(
            parse_site_date("2024-12-05T11:20:00", now()),
            Ok(at(2024, 12, 5, 11, 20))
        );
    }

    #[test]
    fn test_garbage_is_an_error() {
        for input in ["", "когда-то давно", "31 февраля 2024", "25:99", "3 декабря 2024 17:45 лишнее"] {
            assert_eq!(
                parse_site_date(input, now()),
                Err(DateParseError(input.trim().to_string())),
                "input: {:?}",
                input
            );
        }
    }
}
