use super::open_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use formdeck_editor::{audit_form, Mutation};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON mutation script
    pub script: PathBuf,

    /// Apply and report without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// A bare list of mutations, or a described batch
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Script {
    Batch {
        description: String,
        mutations: Vec<Mutation>,
    },
    List(Vec<Mutation>),
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn into_parts(self) -> (String, Vec<Mutation>) {
        match self {
            Script::Batch {
                description,
                mutations,
            } => (description, mutations),
            Script::List(mutations) => ("Apply script".to_string(), mutations),
        }
    }
}

/// Apply a script as one all-or-nothing batch, then save
pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut document = open_document(&config, cwd)?;

    let script_path = PathBuf::from(cwd).join(&args.script);
    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let (description, mutations) = Script::parse(&source)?.into_parts();

    println!(
        "{} {} ({} mutations)",
        "⚙️".bright_blue(),
        description.bold(),
        mutations.len()
    );
    for mutation in &mutations {
        println!("  {} {}", "•".dimmed(), mutation.name());
    }

    let result = document
        .apply_batch(&description, mutations)
        .context("Script rejected, form left unchanged")?;
    info!(version = result.version, "Script applied");

    let errors = audit_form(document.form())
        .into_iter()
        .filter(|d| d.is_error())
        .count();
    if errors > 0 {
        println!(
            "  {} Form has {} audit errors, run `formdeck validate`",
            "⚠️".yellow(),
            errors
        );
    }

    if args.dry_run {
        println!("{} Dry run, nothing saved", "✓".green());
        return Ok(());
    }

    document.save()?;
    println!(
        "{} Saved {}",
        "✅".green(),
        document.path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let script = Script::parse(r#"[{"op":"set_form_name","name":"Signup"}]"#).unwrap();
        let (description, mutations) = script.into_parts();
        assert_eq!(description, "Apply script");
        assert_eq!(
            mutations,
            vec![Mutation::SetFormName {
                name: "Signup".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_batch() {
        let script = Script::parse(
            r#"{"description":"Hide result","mutations":[
                {"op":"toggle_slide_visibility","id":"result"}
            ]}"#,
        )
        .unwrap();
        let (description, mutations) = script.into_parts();
        assert_eq!(description, "Hide result");
        assert_eq!(mutations.len(), 1);
    }

    #[test]
    fn test_apply_saves_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();
        fs::write(
            config.get_form_path(&cwd),
            formdeck_model::Form::default().to_json().unwrap(),
        )
        .unwrap();

        fs::write(
            dir.path().join("bad.json"),
            r#"[{"op":"set_form_name","name":"X"},{"op":"delete_slide","id":"missing"}]"#,
        )
        .unwrap();
        let bad = ApplyArgs {
            script: PathBuf::from("bad.json"),
            dry_run: false,
        };
        assert!(apply(bad, &cwd).is_err());
        assert_eq!(open_document(&config, &cwd).unwrap().form().name, "Untitled Form");

        fs::write(
            dir.path().join("good.json"),
            r#"[{"op":"set_form_name","name":"Signup"}]"#,
        )
        .unwrap();
        let good = ApplyArgs {
            script: PathBuf::from("good.json"),
            dry_run: false,
        };
        apply(good, &cwd).unwrap();
        assert_eq!(open_document(&config, &cwd).unwrap().form().name, "Signup");
    }
}
