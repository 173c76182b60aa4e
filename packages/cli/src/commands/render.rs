use super::open_document;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use formdeck_editor::Selection;
use formdeck_render::{to_html, HtmlOptions, Projector};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Render only this slide
    #[arg(short, long)]
    pub slide: Option<String>,

    /// Include hidden slides
    #[arg(short, long)]
    pub all: bool,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Minified HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = open_document(&config, cwd)?;
    let form = document.form();

    let slides: Vec<&str> = match &args.slide {
        Some(id) => {
            form.find_slide(id)
                .ok_or_else(|| anyhow!("Slide not found: {}", id))?;
            vec![id.as_str()]
        }
        None => form
            .slides
            .iter()
            .filter(|slide| args.all || slide.visible)
            .map(|slide| slide.id.as_str())
            .collect(),
    };

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    if !args.stdout {
        println!("{}", "🔨 Rendering slides...".bright_blue().bold());
        fs::create_dir_all(&out_dir)?;
    }

    let projector = Projector::new();
    let options = HtmlOptions {
        pretty: !args.compact,
        ..HtmlOptions::default()
    };

    for id in &slides {
        // Hidden slides cannot be selected, so focus them directly
        let selection = Selection {
            selected_slide_id: Some(id.to_string()),
            ..Selection::empty()
        };
        debug!(slide = *id, "Projecting");
        let html = to_html(&projector.render(form, &selection), options.clone());

        if args.stdout {
            println!("{}", html);
            continue;
        }
        let output_path = out_dir.join(format!("{}.html", id));
        fs::write(&output_path, html)?;
        println!("  {} {} → {}", "✓".green(), id, output_path.display());
    }

    if !args.stdout {
        println!();
        println!("{} Rendered {} slides", "✅".green(), slides.len());
    }
    Ok(())
}
