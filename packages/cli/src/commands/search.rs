use super::open_document;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use formdeck_editor::Mutation;
use formdeck_media::{FeedUpdate, SearchFeed, UnsplashClient};
use formdeck_model::SlidePatch;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search terms (defaults to "nature")
    #[arg(default_value = "")]
    pub query: String,

    /// Number of pages to load
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Use the picked image as this slide's background and save
    #[arg(short, long)]
    pub background: Option<String>,

    /// Index of the image to pick
    #[arg(long, default_value_t = 0)]
    pub pick: usize,
}

pub async fn search(args: SearchArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let client = UnsplashClient::from_key(config.access_key().as_deref())?;

    let mut feed = SearchFeed::new();
    if feed.refresh(&client, &args.query).await == FeedUpdate::Failed {
        return Err(anyhow!("Image search failed, see the log for details"));
    }
    for _ in 1..args.pages {
        let Some(ticket) = feed.load_more() else {
            break;
        };
        let response = ticket.fetch(&client).await;
        feed.complete(&ticket, response);
    }

    println!(
        "🖼  {} results for '{}'",
        feed.images().len().to_string().bold(),
        feed.query()
    );
    for (index, image) in feed.images().iter().enumerate() {
        println!(
            "  {:>3} {} {} {}",
            index,
            image.url(),
            "by".dimmed(),
            image.user.name
        );
    }
    if feed.is_exhausted() {
        println!("  {}", "No more images".dimmed());
    }

    let Some(slide_id) = args.background else {
        return Ok(());
    };
    let image = feed
        .images()
        .get(args.pick)
        .ok_or_else(|| anyhow!("No image at index {}", args.pick))?;

    let mut document = open_document(&config, cwd)?;
    let current = document
        .form()
        .find_slide(&slide_id)
        .ok_or_else(|| anyhow!("Slide not found: {}", slide_id))?
        .background
        .clone();
    document.apply(Mutation::UpdateSlide {
        id: slide_id.clone(),
        patch: SlidePatch::background(image.as_background(&current)),
    })?;
    document.save()?;

    println!("{} Background of {} set to {}", "✅".green(), slide_id, image.id);
    Ok(())
}
