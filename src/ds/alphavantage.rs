use std::collections::HashMap;

use fake_user_agent::get_rua;
use serde_json::Value;

use crate::{
    CONFIG,
    error::{TpError, TpResult},
    performance::DailyCloses,
    ticker::Ticker,
    utils::net::http_get,
};

static FUNCTION: &str = "TIME_SERIES_DAILY";
static SERIES_FIELD_NAME: &str = "Time Series (Daily)";
static CLOSE_FIELD_NAME: &str = "4. close";
static OUTPUT_SIZE: &str = "full";

// Bad symbols and exhausted quotas are reported in a 200 body
static ERROR_FIELD_NAMES: &[&str] = &["Error Message", "Note", "Information"];

pub async fn fetch_daily_closes(ticker: &Ticker) -> TpResult<DailyCloses> {
    let json = call_api(ticker).await?;

    DailyCloses::from_json(&json, SERIES_FIELD_NAME, CLOSE_FIELD_NAME)
}

pub async fn check_api() -> TpResult<()> {
    let ticker = Ticker {
        symbol: "IBM".to_string(),
    };

    let json = call_api(&ticker).await?;

    if let Some(series) = json[SERIES_FIELD_NAME].as_object() {
        if !series.is_empty() {
            return Ok(());
        }
    }

    Err(TpError::Invalid {
        code: "INVALID_RESPONSE",
        message: "Invalid response".to_string(),
    })
}

async fn call_api(ticker: &Ticker) -> TpResult<Value> {
    let (alpha_api, alpha_api_key) = {
        let config = CONFIG.read()?;

        (config.alpha_api.clone(), config.alpha_api_key.clone())
    };

    let mut query: HashMap<String, String> = HashMap::new();
    query.insert("function".to_string(), FUNCTION.to_string());
    query.insert("symbol".to_string(), ticker.symbol.clone());
    query.insert("outputsize".to_string(), OUTPUT_SIZE.to_string());
    query.insert("apikey".to_string(), alpha_api_key);

    let mut headers: HashMap<String, String> = HashMap::new();
    headers.insert(
        reqwest::header::USER_AGENT.to_string(),
        get_rua().to_string(),
    );

    let bytes = http_get(&alpha_api, Some("/query"), &query, &headers, 30, 3).await?;
    let json: Value = serde_json::from_slice(&bytes)?;

    check_response(&json)?;

    Ok(json)
}

fn check_response(json: &Value) -> TpResult<()> {
    for field_name in ERROR_FIELD_NAMES {
        if let Some(message) = json[*field_name].as_str() {
            return Err(TpError::Invalid {
                code: "ERROR_RESPONSE",
                message: message.to_string(),
            });
        }
    }

    Ok(())
}
