use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde_json::Value;

use crate::{
    error::{TpError, TpResult},
    ticker::Ticker,
    utils::datetime,
};

/// Upper bound of the forward scan when a period's target date has no close
pub const MAX_FORWARD_SEARCH_DAYS: u32 = 20;

/// Close prices keyed by trading day, holidays and weekends absent
#[derive(Clone, Debug)]
pub struct DailyCloses(BTreeMap<NaiveDate, f64>);

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display, strum::EnumIter, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Period {
    #[strum(serialize = "1D")]
    Day,
    #[strum(serialize = "1W")]
    Week,
    #[strum(serialize = "1M")]
    Month,
    #[strum(serialize = "3M")]
    Month3,
    #[strum(serialize = "6M")]
    Month6,
    #[strum(serialize = "YTD")]
    YearToDate,
    #[strum(serialize = "1Y")]
    Year,
    #[strum(serialize = "5Y")]
    Year5,
    #[strum(serialize = "10Y")]
    Year10,
}

impl DailyCloses {
    pub fn from_json(
        json: &Value,
        series_field_name: &str,
        close_field_name: &str,
    ) -> TpResult<Self> {
        let series = json[series_field_name]
            .as_object()
            .ok_or_else(|| TpError::Invalid {
                code: "INVALID_RESPONSE",
                message: format!("Missing '{series_field_name}' field"),
            })?;

        let mut closes: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (date_str, fields) in series {
            let date = datetime::date_from_str(date_str)?;

            let close = match &fields[close_field_name] {
                Value::Number(number) => number.as_f64(),
                Value::String(s) => s.parse::<f64>().ok(),
                _ => None,
            };

            match close {
                Some(close) if close > 0.0 => {
                    closes.insert(date, close);
                }
                _ => {
                    return Err(TpError::Invalid {
                        code: "INVALID_RESPONSE",
                        message: format!("No valid '{close_field_name}' of {date_str}"),
                    });
                }
            }
        }

        Ok(Self(closes))
    }

    pub fn close_on(&self, date: &NaiveDate) -> Option<f64> {
        self.0.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, f64)> for DailyCloses {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Period {
    pub fn target_date(&self, today: &NaiveDate) -> NaiveDate {
        match self {
            Self::Day => *today - Duration::days(1),
            Self::Week => *today - Duration::days(7),
            Self::Month => *today - Months::new(1),
            Self::Month3 => *today - Months::new(3),
            Self::Month6 => *today - Months::new(6),
            Self::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(*today),
            Self::Year => *today - Months::new(12),
            Self::Year5 => *today - Months::new(60),
            Self::Year10 => *today - Months::new(120),
        }
    }
}

pub fn calc_percent_change(start_value: f64, end_value: f64) -> Option<f64> {
    if start_value > 0.0 && start_value.is_finite() && end_value.is_finite() {
        let pct = (end_value - start_value) / start_value * 100.0;

        return Some((pct * 100.0).round() / 100.0);
    }

    None
}

pub fn calc_performance(
    ticker: &Ticker,
    closes: &DailyCloses,
    date: &NaiveDate,
    periods: &[Period],
) -> TpResult<Vec<(Period, String)>> {
    let reference_close = closes.close_on(date).ok_or_else(|| TpError::NoData {
        code: "NO_REFERENCE_CLOSE",
        message: format!("No {ticker} close on {}", datetime::date_to_str(date)),
    })?;

    let mut performance: Vec<(Period, String)> = Vec::with_capacity(periods.len());

    for period in periods {
        let target_date = period.target_date(date);
        let period_close = resolve_close(closes, ticker, period, &target_date)?;

        let percent_change =
            calc_percent_change(period_close, reference_close).ok_or_else(|| TpError::Invalid {
                code: "INVALID_CLOSE",
                message: format!(
                    "Unusable {ticker} closes {period_close}/{reference_close} for period {period}"
                ),
            })?;

        performance.push((*period, format!("{percent_change:.2}%")));
    }

    Ok(performance)
}

/// Close on the target date, or on the nearest later date within the search bound
pub fn resolve_close(
    closes: &DailyCloses,
    ticker: &Ticker,
    period: &Period,
    target_date: &NaiveDate,
) -> TpResult<f64> {
    let mut date = *target_date;

    for _step in 0..=MAX_FORWARD_SEARCH_DAYS {
        if let Some(close) = closes.close_on(&date) {
            return Ok(close);
        }

        date += Duration::days(1);
    }

    Err(TpError::NoData {
        code: "PERIOD_UNRESOLVABLE",
        message: format!(
            "No {ticker} close within {MAX_FORWARD_SEARCH_DAYS} days after {} for period {period}",
            datetime::date_to_str(target_date)
        ),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn ticker() -> Ticker {
        Ticker {
            symbol: "TEST".to_string(),
        }
    }

    #[test]
    fn test_calc_percent_change() {
        assert_eq!(calc_percent_change(100.0, 100.0), Some(0.0));
        assert_eq!(calc_percent_change(100.0, 150.0), Some(50.0));
        assert_eq!(calc_percent_change(100.0, 50.0), Some(-50.0));
        assert_eq!(calc_percent_change(180.0, 200.0), Some(11.11));
        assert_eq!(calc_percent_change(200.0, 180.0), Some(-10.0));

        // Halfway values round away from zero
        assert_eq!(calc_percent_change(100.0, 100.125), Some(0.13));
        assert_eq!(calc_percent_change(100.0, 99.875), Some(-0.13));

        assert_eq!(calc_percent_change(0.0, 100.0), None);
        assert_eq!(calc_percent_change(-100.0, 100.0), None);
        assert_eq!(calc_percent_change(f64::NAN, 100.0), None);
        assert_eq!(calc_percent_change(100.0, f64::NAN), None);
    }

    #[test]
    fn test_period_labels() {
        let labels: Vec<String> = Period::iter().map(|p| p.to_string()).collect();

        assert_eq!(
            labels,
            ["1D", "1W", "1M", "3M", "6M", "YTD", "1Y", "5Y", "10Y"]
        );

        assert_eq!(Period::from_str("ytd").unwrap(), Period::YearToDate);
        assert_eq!(Period::from_str("1w").unwrap(), Period::Week);
        assert!(Period::from_str("2W").is_err());
    }

    #[test]
    fn test_period_target_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        assert_eq!(
            Period::Day.target_date(&today),
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()
        );
        assert_eq!(
            Period::Week.target_date(&today),
            NaiveDate::from_ymd_opt(2024, 3, 24).unwrap()
        );
        assert_eq!(
            Period::Month.target_date(&today),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap() // clamped to month end
        );
        assert_eq!(
            Period::Month3.target_date(&today),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert_eq!(
            Period::Month6.target_date(&today),
            NaiveDate::from_ymd_opt(2023, 9, 30).unwrap()
        );
        assert_eq!(
            Period::YearToDate.target_date(&today),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            Period::Year.target_date(&today),
            NaiveDate::from_ymd_opt(2023, 3, 31).unwrap()
        );
        assert_eq!(
            Period::Year5.target_date(&today),
            NaiveDate::from_ymd_opt(2019, 3, 31).unwrap()
        );
        assert_eq!(
            Period::Year10.target_date(&today),
            NaiveDate::from_ymd_opt(2014, 3, 31).unwrap()
        );

        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            Period::Year.target_date(&leap_day),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );

        let may_end = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        assert_eq!(
            Period::Month3.target_date(&may_end),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_resolve_close() {
        let closes: DailyCloses = [
            (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 100.0),
            (NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), 110.0),
        ]
        .into_iter()
        .collect();

        // Exact hit
        assert_eq!(
            resolve_close(
                &closes,
                &ticker(),
                &Period::Week,
                &NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
            )
            .unwrap(),
            100.0
        );

        // Saturday target resolves forward to Monday
        assert_eq!(
            resolve_close(
                &closes,
                &ticker(),
                &Period::Week,
                &NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
            )
            .unwrap(),
            110.0
        );
    }

    #[test]
    fn test_resolve_close_bound() {
        let target_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let at_bound: DailyCloses = [(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(), 100.0)]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_close(&at_bound, &ticker(), &Period::Month, &target_date).unwrap(),
            100.0
        );

        let past_bound: DailyCloses = [(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(), 100.0)]
            .into_iter()
            .collect();
        let result = resolve_close(&past_bound, &ticker(), &Period::Month, &target_date);
        assert!(matches!(
            result,
            Err(TpError::NoData {
                code: "PERIOD_UNRESOLVABLE",
                ..
            })
        ));
    }

    #[test]
    fn test_calc_performance() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let closes: DailyCloses = [
            (NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 200.0),
            (NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(), 180.0),
        ]
        .into_iter()
        .collect();

        let performance = calc_performance(&ticker(), &closes, &date, &[Period::Week]).unwrap();

        assert_eq!(performance, vec![(Period::Week, "11.11%".to_string())]);
    }

    #[test]
    fn test_calc_performance_all_periods() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        let start = NaiveDate::from_ymd_opt(2014, 6, 1).unwrap();
        let closes: DailyCloses = start
            .iter_days()
            .take_while(|d| *d <= date)
            .map(|d| (d, 100.0))
            .collect();

        let periods: Vec<Period> = Period::iter().collect();
        let performance = calc_performance(&ticker(), &closes, &date, &periods).unwrap();

        let labels: Vec<String> = performance.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(
            labels,
            ["1D", "1W", "1M", "3M", "6M", "YTD", "1Y", "5Y", "10Y"]
        );
        assert!(performance.iter().all(|(_, pct)| pct == "0.00%"));
    }

    #[test]
    fn test_calc_performance_missing_reference_close() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let closes: DailyCloses = [(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 200.0)]
            .into_iter()
            .collect();

        let result = calc_performance(&ticker(), &closes, &date, &[Period::Week]);

        assert!(matches!(
            result,
            Err(TpError::NoData {
                code: "NO_REFERENCE_CLOSE",
                ..
            })
        ));
    }

    #[test]
    fn test_daily_closes_from_json() {
        let json = serde_json::json!({
            "Meta Data": {},
            "Time Series (Daily)": {
                "2024-03-15": { "4. close": "200.5000" },
                "2024-03-14": { "4. close": 198.25 }
            }
        });

        let closes = DailyCloses::from_json(&json, "Time Series (Daily)", "4. close").unwrap();

        assert_eq!(closes.len(), 2);
        assert_eq!(
            closes.close_on(&NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
            Some(200.5)
        );
        assert_eq!(
            closes.close_on(&NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()),
            Some(198.25)
        );
        assert_eq!(
            closes.close_on(&NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()),
            None
        );
    }

    #[test]
    fn test_daily_closes_from_json_invalid() {
        let missing_series = serde_json::json!({ "Meta Data": {} });
        assert!(matches!(
            DailyCloses::from_json(&missing_series, "Time Series (Daily)", "4. close"),
            Err(TpError::Invalid {
                code: "INVALID_RESPONSE",
                ..
            })
        ));

        let missing_close = serde_json::json!({
            "Time Series (Daily)": {
                "2024-03-15": { "1. open": "199.0000" }
            }
        });
        assert!(
            DailyCloses::from_json(&missing_close, "Time Series (Daily)", "4. close").is_err()
        );

        let zero_close = serde_json::json!({
            "Time Series (Daily)": {
                "2024-03-15": { "4. close": "0.0000" }
            }
        });
        assert!(DailyCloses::from_json(&zero_close, "Time Series (Daily)", "4. close").is_err());
    }
}
