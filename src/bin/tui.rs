use anyhow::Result;
use celebra::cli::{self, Command};
use celebra::config::Config;
use celebra::context::{AppContext, StandardContext};
use celebra::model::ViewState;
use chrono::Local;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().map(String::as_str).unwrap_or("celebra");
    let invocation = cli::parse_args(args.get(1..).unwrap_or_default())?;

    if invocation.command == Command::Help {
        cli::print_help(binary_name);
        return Ok(());
    }

    let ctx = StandardContext::new(invocation.root.clone());

    if invocation.command == Command::Init {
        if ctx.get_config_file_path()?.exists() {
            println!("Config already exists: {}", Config::get_path_string(&ctx)?);
        } else {
            Config::default().save(&ctx)?;
            println!("Configuration saved to: {}", Config::get_path_string(&ctx)?);
        }
        return Ok(());
    }

    let cfg = Config::load_or_default(&ctx)?;
    let log_path = celebra::logging::init(&ctx, cfg.log_level_filter())?;
    log::info!("Celebra v{} starting", env!("CARGO_PKG_VERSION"));

    let today = Local::now().date_naive();
    match invocation.command {
        Command::Tui => {
            let result = celebra::tui::run(cfg).await;
            if result.is_err() {
                eprintln!("See log: {}", log_path.display());
            }
            result
        }
        Command::Month(view) => {
            let store = cli::load_store(&cfg).await?;
            let view = view.unwrap_or_else(|| ViewState::starting_at(today));
            print!("{}", cli::render_month(&store, &view, today)?);
            Ok(())
        }
        Command::Day(date) => {
            let store = cli::load_store(&cfg).await?;
            print!("{}", cli::render_day(&store, date));
            Ok(())
        }
        Command::Export => {
            let store = cli::load_store(&cfg).await?;
            println!("{}", cli::export_json(&store)?);
            Ok(())
        }
        Command::Help | Command::Init => Ok(()),
    }
}
