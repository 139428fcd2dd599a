//! Macroplan
//!
//! An MCP server for calculating client nutrition plans.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use macroplan::build_info;
use macroplan::config::CalculatorConfig;
use macroplan::mcp::MacroplanService;
use macroplan::nutrition::validate_tables;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macroplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = CalculatorConfig::from_env()?;
    validate_tables()?;
    info!(
        "Calorie policy: {}, meal count policy: {}",
        config.calorie_policy, config.meal_count_policy
    );

    let service = MacroplanService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
