use anyhow::Result;
use owo_colors::OwoColorize;

use caltask_core::dedup::TaskIndex;
use caltask_core::lookback::LookbackWindow;
use caltask_core::reconcile::{self, Decision, PlanOptions};

use crate::backend::Backend;
use crate::config::Config;
use crate::feed::Feed;

pub async fn run(config: Config, dry_run: bool) -> Result<()> {
    let window = LookbackWindow::last_days(config.lookback_days);
    let feed = Feed::new(&config.feed_url);
    let backend = Backend::new(
        &config.backend_url,
        &config.backend_token,
        config.per_page,
        config.page_cap,
    );

    println!("Fetching events...");
    let events = feed.events(&window).await?;

    println!("Fetching tasks...");
    let tasks = backend.list_tasks().await?;
    if !tasks.complete {
        warn_incomplete("task", config.page_cap);
    }

    println!("Fetching clients...");
    let clients = backend.list_clients().await?;
    if !clients.complete {
        warn_incomplete("client", config.page_cap);
    }

    println!("Matching events and tasks...");

    let index = TaskIndex::build(&config.marker_prefix, &tasks.records);
    let opts = PlanOptions {
        marker_prefix: config.marker_prefix.clone(),
        separator: config.separator.clone(),
        status_id: config.status_id.clone(),
    };

    let mut created = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for event in &events {
        let label = format!("{} {}", event.start.format("%Y-%m-%d %H:%M"), event.summary);

        let decision = match reconcile::plan(event, &index, &clients.records, &opts) {
            Ok(decision) => decision,
            Err(e) => {
                failed += 1;
                println!("{} {}", label, format!("planning failed: {e}").red());
                continue;
            }
        };

        match decision {
            Decision::AlreadySynced => {
                skipped += 1;
                println!("{} {}", label, "already synced".dimmed());
            }
            Decision::NoClientMatch => {
                skipped += 1;
                println!("{} {}", label, "no client match, skipping".yellow());
            }
            Decision::Create { task, client } => {
                if dry_run {
                    created += 1;
                    println!(
                        "{} {}",
                        label,
                        format!("would create for {}", client.name).green()
                    );
                    continue;
                }

                match backend.create_task(&task).await {
                    Ok(_) => {
                        created += 1;
                        println!("{} {}", label, format!("created for {}", client.name).green());
                    }
                    Err(e) => {
                        failed += 1;
                        println!("{} {}", label, format!("create failed: {e}").red());
                    }
                }
            }
        }
    }

    println!(
        "\n{} created, {} skipped, {} failed{}",
        created,
        skipped,
        failed,
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(())
}

fn warn_incomplete(what: &str, page_cap: u32) {
    println!(
        "{}",
        format!(
            "Warning: {what} list truncated after {page_cap} pages; reconciliation may be incomplete"
        )
        .yellow()
    );
}
