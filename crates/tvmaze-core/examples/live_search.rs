use tvmaze_core::TvMazeCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = TvMazeCatalog::new()?;

    println!("🔍 Searching for 'Doctor Who'...\n");

    let shows = catalog.search_shows("Doctor Who").await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - ID: {}", i + 1, show.name, show.id);
    }

    if let Some(show) = shows.first() {
        println!("\n📺 Loading episodes for: {} (ID: {})\n", show.name, show.id);

        let episodes = catalog.get_episodes(show.id).await?;

        println!("{} episodes:", episodes.len());
        for episode in episodes.iter().take(10) {
            println!(
                "  • S{:02}E{:02} {}",
                episode.season, episode.number, episode.name
            );
        }
        if episodes.len() > 10 {
            println!("  ... and {} more", episodes.len() - 10);
        }
    }

    Ok(())
}
