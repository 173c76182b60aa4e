use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formdeck_model::Form;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Form name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Form document path
    #[arg(short, long, default_value = "form.json")]
    pub form_path: String,

    /// Force overwrite existing files
    #[arg(short = 'F', long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing formdeck project...".bright_blue().bold());

    let config = Config {
        form_path: args.form_path.clone(),
        ..Config::default()
    };

    let form_path = config.get_form_path(cwd);
    if !form_path.exists() || args.force {
        if let Some(parent) = form_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut form = Form::default();
        if let Some(name) = &args.name {
            form.name = name.clone();
        }
        fs::write(&form_path, form.to_json()?)?;
        println!("  {} Created {}", "✓".green(), args.form_path);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: formdeck validate");
    println!("  2. Run: formdeck render");
    println!("  3. Open the slides in {}/", config.out_dir);

    Ok(())
}
