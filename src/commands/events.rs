use anyhow::Result;
use owo_colors::OwoColorize;

use caltask_core::lookback::LookbackWindow;

use crate::config::Config;
use crate::feed::Feed;

pub async fn run(config: Config) -> Result<()> {
    let window = LookbackWindow::last_days(config.lookback_days);
    let feed = Feed::new(&config.feed_url);

    let events = feed.events(&window).await?;

    if events.is_empty() {
        println!("{}", "No events in window".dimmed());
        return Ok(());
    }

    for event in &events {
        println!(
            "{} - {}  {}  {}",
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%H:%M"),
            event.summary,
            format!("uid:{}", event.uid).dimmed()
        );
    }

    Ok(())
}
