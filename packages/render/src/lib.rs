//! # formdeck render
//!
//! Pure projection of a [`Form`](formdeck_model::Form) and its
//! [`Selection`](formdeck_model::Selection) onto a virtual canvas.
//!
//! ```text
//! Form + Selection
//!   → Projector::render   (background, layout plan, per-item styles)
//!   → VirtualCanvas       (VNode tree + font stylesheets)
//!   → to_html             (standalone page)
//! ```
//!
//! Rendering never mutates its inputs and is deterministic: style maps are
//! ordered, so the same state always yields the same tree and markup.

pub mod background;
pub mod color;
pub mod error;
pub mod fonts;
pub mod html;
pub mod layout;
pub mod projector;
pub mod styles;
pub mod vdom;

pub use background::resolve_background;
pub use color::Rgba;
pub use error::{RenderError, RenderResult};
pub use fonts::{stylesheet_url, FontCollector, FontLoader, GOOGLE_FONTS};
pub use html::{to_html, HtmlOptions};
pub use layout::{lookup, plan_for, variants_for, Container, ContentOrdering, LayoutPlan, LayoutVariant};
pub use projector::{Projector, ProjectorOptions, NO_SLIDE_SELECTED};
pub use vdom::{StyleMap, VNode, VirtualCanvas};
