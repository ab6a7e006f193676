use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_schema::{EndpointAssembler, EndpointRecord, SchemaConfig};
use std::path::PathBuf;

pub fn execute(config: SchemaConfig, input: Option<PathBuf>) -> Result<()> {
    let controllers = super::load_descriptors(&config, input)?;

    let methods: usize = controllers.iter().map(|c| c.methods.len()).sum();
    let endpoints = EndpointAssembler::from_config(&config.compile)
        .assemble(&controllers)
        .context("Failed to compile endpoint schema")?;

    println!("{}", "Endpoint schema".green().bold());
    println!();

    for endpoint in &endpoints {
        println!("{}", summary_line(endpoint));
    }

    println!();
    println!(
        "{} endpoints from {} controllers ({} methods not compiled)",
        endpoints.len().to_string().cyan(),
        controllers.len(),
        methods - endpoints.len()
    );

    Ok(())
}

/// `GET|HEAD  /users/{id}  users.detail  app::UsersController::detail`
fn summary_line(endpoint: &EndpointRecord) -> String {
    let verbs = if endpoint.http_methods.is_empty() {
        "*".to_string()
    } else {
        endpoint
            .http_methods
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("|")
    };

    format!(
        "  {:<12} {:<40} {:<24} {}::{}",
        verbs.yellow(),
        endpoint.mask.cyan(),
        endpoint.id.as_deref().unwrap_or("-"),
        endpoint.handler.class,
        endpoint.handler.method
    )
}
