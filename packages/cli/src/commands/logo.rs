use super::open_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formdeck_editor::Mutation;
use formdeck_media::read_brand_logo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LogoArgs {
    /// PNG file, at most 1 MB; omit to restore the default logo
    pub file: Option<PathBuf>,
}

pub async fn logo(args: LogoArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut document = open_document(&config, cwd)?;

    let logo = match &args.file {
        Some(file) => read_brand_logo(PathBuf::from(cwd).join(file)).await?,
        None => String::new(),
    };
    document.apply(Mutation::SetBrandLogo { logo })?;
    document.save()?;

    match &args.file {
        Some(file) => println!("{} Brand logo set from {}", "✅".green(), file.display()),
        None => println!("{} Default logo restored", "✅".green()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::Form;
    use std::fs;

    #[tokio::test]
    async fn test_logo_rules_apply() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();
        fs::write(config.get_form_path(&cwd), Form::default().to_json().unwrap()).unwrap();

        fs::write(dir.path().join("logo.jpg"), [0u8; 8]).unwrap();
        let err = logo(
            LogoArgs {
                file: Some(PathBuf::from("logo.jpg")),
            },
            &cwd,
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Please select a PNG image file.");

        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
        logo(
            LogoArgs {
                file: Some(PathBuf::from("logo.png")),
            },
            &cwd,
        )
        .await
        .unwrap();

        let document = open_document(&config, &cwd).unwrap();
        assert!(document
            .form()
            .settings
            .general
            .brand_logo
            .starts_with("data:image/png;base64,"));
    }
}
