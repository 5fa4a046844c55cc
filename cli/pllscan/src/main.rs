//! pllscan — print every legal PLL / CPU / RAM clock configuration, ranked and annotated.

use std::io::{self, Write};
use std::process;

use clap::Parser;

use pllscan_core::{enumerate_with, Limits};
use pllscan_report::ClockTable;

#[derive(Parser)]
#[command(
    name = "pllscan",
    version,
    about = "Enumerate legal PLL, CPU and RAM clock configurations"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let text = render(&Limits::DEFAULT)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn render(limits: &Limits) -> anyhow::Result<String> {
    let configs = enumerate_with(limits)?;
    log::info!("{} clock configurations", configs.len());
    Ok(ClockTable::new(&configs, limits).render().text)
}
