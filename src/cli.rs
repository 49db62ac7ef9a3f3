use clap::Subcommand;

mod check;
mod config;
mod perf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check the data provider connectivity")]
    Check(Box<check::CheckCommand>),

    #[command(subcommand, about = "Set or show configurations")]
    Config(config::ConfigCommand),

    #[command(about = "Show ticker performance over standard lookback periods")]
    #[clap(visible_aliases = &["performance"])]
    Perf(Box<perf::PerfCommand>),
}
