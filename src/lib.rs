//! # tickerperf lib

use std::{
    env,
    sync::{LazyLock, RwLock},
};

use crate::config::Config;

pub mod api;
pub mod config;
pub mod error;
pub mod performance;
pub mod ticker;
pub mod utils;

pub fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();

    match Config::load() {
        Ok(config) => {
            if let Ok(mut c) = CONFIG.write() {
                *c = config;
            }
        }
        Err(err) => panic!("Load config error: {err}"),
    }
}

mod ds;

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));
