use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use relic_hunt::core::config::{load_config, resolve};
use relic_hunt::core::flow;
use relic_hunt::core::state::App;
use relic_hunt::tui;

#[derive(Parser)]
#[command(name = "relic-hunt", about = "AR scavenger hunt prototype — screen flow demo")]
struct Args {
    /// Screen to open at launch (debugging aid)
    #[arg(short, long)]
    screen: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to relic-hunt.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("relic-hunt.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Config load failed, using defaults: {e}");
            Default::default()
        }
    };
    let resolved = resolve(&config, args.screen.as_deref());
    log::info!("Relic Hunt starting on screen '{}'", resolved.start_screen);

    let mut nav = flow::build_navigator()?;
    nav.go_to(&resolved.start_screen)?;

    tui::run(App::new(nav), &resolved)?;
    Ok(())
}
