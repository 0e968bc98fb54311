//! Years-of-experience derivation from "Month YYYY" date ranges in an experience section.
//!
//! Used only when the upstream extractor did not report a number. Takes the span between the
//! earliest and latest date mentioned; employment gaps are not subtracted.

use chrono::NaiveDate;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Words that close an open-ended range ("Mar 2021 - Present").
const OPEN_RANGE_END: &[&str] = &["present", "current", "now", "today"];

/// Returns total years between the earliest and latest dates found, rounded to two decimals.
/// `None` when the text contains no month-year date.
pub fn years_from_date_ranges(text: &str, today: NaiveDate) -> Option<f64> {
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();

    let mut dates = Vec::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        match (parse_month(&tokens[i]), parse_year(&tokens[i + 1])) {
            (Some(month), Some(year)) => {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                    dates.push(date);
                }
                if tokens
                    .get(i + 2)
                    .is_some_and(|t| OPEN_RANGE_END.contains(&t.as_str()))
                {
                    dates.push(today);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    let earliest = dates.iter().min()?;
    let latest = dates.iter().max()?;
    let days = (*latest - *earliest).num_days();
    let years = days as f64 / 365.0;
    Some((years * 100.0).round() / 100.0)
}

/// Accepts abbreviations ("Sep", "Sept") and full names.
fn parse_month(token: &str) -> Option<u32> {
    if token.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(token))
        .map(|idx| idx as u32 + 1)
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !(token.starts_with("19") || token.starts_with("20")) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_closed_ranges_span_earliest_to_latest() {
        let text = "Data Engineer, Acme  Jan 2018 – Dec 2019\nAnalyst, Beta  Feb 2020 - Jan 2022";
        let years = years_from_date_ranges(text, today()).unwrap();
        // 2018-01-01 .. 2022-01-01 = 1461 days
        assert!((years - 4.0).abs() < 0.01, "got {years}");
    }

    #[test]
    fn test_present_extends_to_today() {
        let text = "Engineer  March 2022 - Present";
        let years = years_from_date_ranges(text, today()).unwrap();
        assert!((years - 2.84).abs() < 0.01, "got {years}");
    }

    #[test]
    fn test_present_without_date_is_ignored() {
        assert_eq!(years_from_date_ranges("present in current team", today()), None);
    }

    #[test]
    fn test_full_and_short_month_names() {
        assert_eq!(parse_month("sept"), Some(9));
        assert_eq!(parse_month("september"), Some(9));
        assert_eq!(parse_month("may"), Some(5));
        assert_eq!(parse_month("ma"), None);
        assert_eq!(parse_month("mayday"), None);
    }

    #[test]
    fn test_no_dates_returns_none() {
        assert_eq!(years_from_date_ranges("Built pipelines in Rust", today()), None);
    }

    #[test]
    fn test_single_date_is_zero_years() {
        assert_eq!(years_from_date_ranges("Intern Jun 2024", today()), Some(0.0));
    }
}
