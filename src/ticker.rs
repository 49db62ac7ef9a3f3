use std::{fmt::Display, str::FromStr};

use crate::error::TpError;

/// Friendly index names and the ticker symbols the data provider knows them by
pub static INDEX_ALIASES: &[(&str, &str)] = &[
    ("sp500", "^GSPC"),
    ("nasdaq", "NDAQ"),
    ("dowjones", "^DJI"),
];

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ticker {
    pub symbol: String,
}

impl FromStr for Ticker {
    type Err = TpError;
    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(TpError::Invalid {
                code: "INVALID_SYMBOL",
                message: "Symbol is empty".to_string(),
            });
        }

        let symbol = match INDEX_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
        {
            Some((_, symbol)) => symbol.to_string(),
            None => s.to_uppercase(),
        };

        Ok(Self { symbol })
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
