use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stronghold_rings::cli::args;
use stronghold_rings::io::TerminalIO;
use stronghold_rings::services::session::{calculate_once, Session};
use stronghold_rings::ui::presenters::StrongholdPresenter;

fn main() -> ExitCode {
    let args = args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match args.found() {
        Some((x, z)) => calculate_once(
            x,
            z,
            args.ring_choice(),
            args.on_out_of_range,
            args.dimension(),
        )
        .map(|(calc, set)| StrongholdPresenter::show_calculation(&calc, &set, &mut TerminalIO)),
        None => Session::new(TerminalIO, TerminalIO, args.on_out_of_range, args.dimension()).run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
