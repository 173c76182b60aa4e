//! # formdeck model
//!
//! Document types for multi-slide forms.
//!
//! ```text
//! Form
//!  ├── settings (navigation, branding, font, nav menus)
//!  └── slides[]            (ordered, authoritative render order)
//!       ├── background
//!       └── content[]      (text | media | question | button)
//!            └── *_design  (fields for that kind only)
//!
//! Selection            (editing focus, never persisted)
//! ```
//!
//! A content item's design lives inside its [`ContentBody`] variant, so an
//! item can never carry fields belonging to another kind. Designs are edited
//! through closed per-kind patch enums ([`TextDesignPatch`] and friends).

pub mod content;
pub mod defaults;
pub mod design;
pub mod error;
pub mod form;
pub mod id_generator;
pub mod selection;
pub mod slide;

pub use content::{ContentBody, ContentItem, ContentKind};
pub use design::*;
pub use defaults::default_question;
pub use error::ModelError;
pub use form::{
    Form, FormSettings, GeneralSettings, NavItem, NavMenu, NavigationLayout, NavigationSettings,
};
pub use id_generator::{
    duplicate_description, duplicate_name, form_document_id, next_content_id, next_question_id,
};
pub use selection::{RightPanel, Selection};
pub use slide::{Background, BackgroundKind, Layout, Slide, SlideKind, SlidePatch};
