//! Print a client's nutrition plan as JSON
//!
//! Usage: plan_preview <gender> <weight> <height> <age> <activity> <goal> [meals]

use tracing_subscriber::EnvFilter;

use macroplan::config::CalculatorConfig;
use macroplan::tools::plans::{calculate_plan, ProfileInput};

const USAGE: &str = "usage: plan_preview <gender> <weight> <height> <age> <activity> <goal> [meals]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macroplan=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 6 || args.len() > 7 {
        return Err(USAGE.into());
    }

    let input = ProfileInput {
        gender: &args[0],
        weight: args[1].parse()?,
        height: args[2].parse()?,
        age: args[3].parse()?,
        activity_level: &args[4],
        goal: &args[5],
    };
    let meals = args.get(6).map(|m| m.parse::<u32>()).transpose()?;

    let config = CalculatorConfig::from_env()?;
    let response = calculate_plan(&config, &input, meals)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
