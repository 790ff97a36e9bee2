//! CLI command implementations.

use anyhow::Result;
use shipit_config::parse_stack;
use tracing::info;

pub fn validate(path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let config = match parse_stack(&content) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    match shipit_synth::synthesize(&config) {
        Ok(graph) => {
            println!(
                "Configuration is valid ({} resources under prefix '{}')",
                graph.resources.len(),
                graph.prefix
            );
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn synth(path: &str, output: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_stack(&content)?;
    let graph = shipit_synth::synthesize(&config)?;
    let json = graph.to_json()?;

    match output {
        Some(file) => {
            std::fs::write(file, &json)?;
            info!(file = %file, "wrote resource graph");
        }
        None => println!("{}", json),
    }
    Ok(())
}
