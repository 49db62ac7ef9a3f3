use colored::Colorize;
use tabled::settings::{Color, object::Columns};
use tickerperf::api;

#[derive(clap::Args)]
pub struct ConfigSetCommand {
    #[arg(help = "Config key, alpha_api or alpha_api_key")]
    key: String,

    #[arg(help = "Config value")]
    value: String,
}

impl ConfigSetCommand {
    pub async fn exec(&self) {
        match api::set_config(&self.key, &self.value).await {
            Ok(_) => {
                let table_data: Vec<Vec<String>> =
                    vec![vec![self.key.to_lowercase(), self.value.clone()]];

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Columns::first(), Color::FG_CYAN);
                println!("{table}");
            }
            Err(err) => {
                println!("[!] {}", err.to_string().red());
            }
        }
    }
}
