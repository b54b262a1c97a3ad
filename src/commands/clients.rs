use anyhow::Result;
use owo_colors::OwoColorize;

use crate::backend::Backend;
use crate::config::Config;

pub async fn run(config: Config) -> Result<()> {
    let backend = Backend::new(
        &config.backend_url,
        &config.backend_token,
        config.per_page,
        config.page_cap,
    );

    let clients = backend.list_clients().await?;
    if !clients.complete {
        println!(
            "{}",
            format!("Warning: client list truncated after {} pages", config.page_cap).yellow()
        );
    }

    let active: Vec<_> = clients.records.iter().filter(|c| !c.is_archived()).collect();

    if active.is_empty() {
        println!("{}", "No active clients".dimmed());
        return Ok(());
    }

    for client in active {
        println!("{}  {}", client.id, client.name);
    }

    Ok(())
}
