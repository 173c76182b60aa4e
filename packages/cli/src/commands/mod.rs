pub mod apply;
pub mod init;
pub mod logo;
pub mod render;
pub mod search;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use logo::{logo, LogoArgs};
pub use render::{render, RenderArgs};
pub use search::{search, SearchArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use formdeck_editor::Document;

/// Open the configured form, file-backed
pub fn open_document(config: &Config, cwd: &str) -> Result<Document> {
    let path = config.get_form_path(cwd);
    if !path.exists() {
        return Err(anyhow!(
            "Form not found: {} (run `formdeck init` first)",
            path.display()
        ));
    }
    let document = Document::load(path.clone())
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(document.with_undo_levels(config.undo_levels))
}
