use std::str::FromStr;

use chrono::{Local, NaiveDate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::{
    Alignment, Color,
    object::{Columns, Object, Rows},
};
use tickerperf::{api, performance::Period, ticker::Ticker, utils};
use tokio::time::Duration;

#[derive(clap::Args)]
pub struct PerfCommand {
    #[arg(help = "Ticker symbol, or one of the index aliases sp500/nasdaq/dowjones")]
    symbol: String,

    #[arg(
        short = 'd',
        long = "date",
        value_parser = utils::datetime::date_from_str,
        help = "Reference date, the default value is today, e.g. -d 2025-08-08"
    )]
    date: Option<NaiveDate>,

    #[arg(
        short = 'p',
        long = "period",
        value_parser = Period::from_str,
        help = "Period to compute, the default is all periods, e.g. -p 1W -p 1Y"
    )]
    periods: Vec<Period>,
}

impl PerfCommand {
    pub async fn exec(&self) {
        let ticker = match Ticker::from_str(&self.symbol) {
            Ok(ticker) => ticker,
            Err(err) => {
                println!("[!] {}", err.to_string().red());
                return;
            }
        };

        let date = self.date.unwrap_or(Local::now().date_naive());

        println!(
            "[Ticker] {} \t [Date] {}",
            ticker,
            utils::datetime::date_to_str(&date)
        );

        let spinner = ProgressBar::new_spinner();
        spinner
            .set_style(ProgressStyle::with_template("[{elapsed}] {msg} {spinner:.cyan}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(100));

        match api::performance(&ticker, &date, &self.periods).await {
            Ok(performance) => {
                spinner.finish_with_message(format!("{}", "✔".to_string().green()));

                let mut table_data: Vec<Vec<String>> = vec![];
                let mut loss_rows: Vec<usize> = vec![];
                for (i, (period, percent_change)) in performance.iter().enumerate() {
                    table_data.push(vec![period.to_string(), percent_change.to_string()]);

                    if percent_change.starts_with('-') {
                        loss_rows.push(i);
                    }
                }

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Columns::first(), Color::FG_CYAN);
                for i in 0..table_data.len() {
                    if loss_rows.contains(&i) {
                        table.modify(Rows::new(i..i + 1).not(Columns::first()), Color::FG_RED);
                    } else {
                        table.modify(Rows::new(i..i + 1).not(Columns::first()), Color::FG_GREEN);
                    }
                }
                table.modify(Columns::new(1..), Alignment::right());
                println!("{table}");
            }
            Err(err) => {
                spinner.finish_with_message(format!("{}", err.to_string().red()));
            }
        }
    }
}
