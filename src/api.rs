use chrono::NaiveDate;
use log::debug;
use strum::IntoEnumIterator;

use crate::{
    CONFIG,
    config::Config,
    ds::alphavantage,
    error::{TpError, TpResult},
    performance::{self, Period},
    ticker::Ticker,
};

pub async fn check() -> TpResult<Vec<(String, Option<TpError>)>> {
    let status: Vec<(String, Option<TpError>)> = vec![(
        "alphavantage".to_string(),
        alphavantage::check_api().await.err(),
    )];

    Ok(status)
}

pub async fn get_config() -> TpResult<Config> {
    let config = CONFIG.read()?;

    Ok(config.clone())
}

pub async fn performance(
    ticker: &Ticker,
    date: &NaiveDate,
    periods: &[Period],
) -> TpResult<Vec<(Period, String)>> {
    debug!("{ticker} {date} {periods:?}");

    let periods: Vec<Period> = if periods.is_empty() {
        Period::iter().collect()
    } else {
        periods.to_vec()
    };

    let closes = alphavantage::fetch_daily_closes(ticker).await?;

    performance::calc_performance(ticker, &closes, date, &periods)
}

pub async fn set_config(key: &str, value: &str) -> TpResult<()> {
    let config = {
        let mut config = CONFIG.write()?;

        match key.to_lowercase().as_str() {
            "alpha_api" => {
                config.alpha_api = value.to_string();
            }
            "alpha_api_key" => {
                config.alpha_api_key = value.to_string();
            }
            _ => {
                return Err(TpError::Invalid {
                    code: "UNSUPPORTED_CONFIG_KEY",
                    message: format!("Unsupported config key '{key}'"),
                });
            }
        }

        config.clone()
    };

    config.store()
}
