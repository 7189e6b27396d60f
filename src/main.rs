//! Ricochet entry point
//!
//! Loads settings and the calibrated border, simulates one shot and prints
//! the bounce points as a JSON array of `[x, y]` pixel pairs.
//!
//! Usage: `ricochet <x> <y> <angle-degrees> [settings.json]`

use std::env;
use std::error::Error;
use std::process::ExitCode;

use glam::DVec2;
use ricochet::{Settings, persistence, simulate_with};

const USAGE: &str = "usage: ricochet <x> <y> <angle-degrees> [settings.json]";
const SETTINGS_FILE: &str = "settings.json";

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        return Err(USAGE.into());
    }

    let x = parse_number(&args[0], "x")?;
    let y = parse_number(&args[1], "y")?;
    let angle = parse_number(&args[2], "angle")?;
    let settings_path = args.get(3).map(String::as_str).unwrap_or(SETTINGS_FILE);

    let settings = Settings::load(settings_path)?;
    let border = persistence::load_border(&settings.border_file)?;

    let now = std::time::Instant::now();
    let trajectory = simulate_with(DVec2::new(x, y), angle, &border, &settings.sim_params())?;
    log::info!("Simulated in {:?}", now.elapsed());

    println!("{}", serde_json::to_string(&trajectory.pixels())?);
    Ok(())
}

fn parse_number(arg: &str, name: &str) -> Result<f64, String> {
    arg.parse()
        .map_err(|e| format!("{name}: cannot parse {arg:?} as a number: {e}\n{USAGE}"))
}
