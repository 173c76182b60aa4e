//! # Form Mutations
//!
//! Named, single-purpose operations on a [`Form`].
//!
//! ## Semantics
//!
//! 1. **Validated first**: every mutation checks its targets before writing,
//!    so a rejected mutation leaves the form exactly as it was
//! 2. **Explicit failures**: a missing slide, content item or menu entry is
//!    `MutationError::NotFound`, a content item of the wrong kind is
//!    `MutationError::TypeMismatch`
//! 3. **Order is authoritative**: reordering replaces the whole slide list and
//!    must be a permutation of the current ids
//!
//! ### AddSlide
//! - Inserted right after `insert_after_id` when that slide exists
//! - Otherwise after the last question slide, otherwise appended
//! - Id uniqueness is the caller's responsibility
//!
//! ### Content updates
//! - slide → content item → kind gate → write
//! - Design updates carry a typed patch for exactly one field

use formdeck_model::{
    ButtonDesignPatch, ContentItem, ContentKind, Form, MediaDesignPatch, MediaType, NavItem,
    NavMenu, NavigationLayout, QuestionDesignPatch, Slide, SlidePatch, TextDesignPatch,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Operations accepted by the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Insert a new slide
    AddSlide {
        slide: Slide,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        insert_after_id: Option<String>,
    },

    /// Shallow merge into an existing slide
    UpdateSlide { id: String, patch: SlidePatch },

    DeleteSlide { id: String },

    ToggleSlideVisibility { id: String },

    /// Replace the slide sequence with a reordering of the same slides
    UpdateSlideOrder { slides: Vec<Slide> },

    UpdateTextContent {
        slide_id: String,
        content_id: String,
        text: String,
    },

    UpdateMediaContent {
        slide_id: String,
        content_id: String,
        media: String,
        media_type: MediaType,
    },

    UpdateButtonContent {
        slide_id: String,
        content_id: String,
        text: String,
    },

    UpdateQuestionContent {
        slide_id: String,
        content_id: String,
        text: String,
    },

    UpdateTextDesign {
        slide_id: String,
        content_id: String,
        patch: TextDesignPatch,
    },

    UpdateMediaDesign {
        slide_id: String,
        content_id: String,
        patch: MediaDesignPatch,
    },

    UpdateButtonDesign {
        slide_id: String,
        content_id: String,
        patch: ButtonDesignPatch,
    },

    UpdateQuestionDesign {
        slide_id: String,
        content_id: String,
        patch: QuestionDesignPatch,
    },

    SetFormName { name: String },

    SetNavigationLayout { layout: NavigationLayout },

    /// Logo URL or data URL; empty restores the default logo
    SetBrandLogo { logo: String },

    SetShowBranding { show: bool },

    SetFontFamily { family: String },

    SetNavMenuEnabled { menu: NavMenu, enabled: bool },

    AddNavItem { menu: NavMenu, item: NavItem },

    RemoveNavItem { menu: NavMenu, id: String },

    UpdateNavItem {
        menu: NavMenu,
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },

    SetNavItems { menu: NavMenu, items: Vec<NavItem> },
}

/// What a mutation failed to find
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Slide(String),
    Content { slide_id: String, content_id: String },
    NavItem { menu: NavMenu, id: String },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Slide(id) => write!(f, "Slide {}", id),
            Target::Content {
                slide_id,
                content_id,
            } => write!(f, "Content {} on slide {}", content_id, slide_id),
            Target::NavItem { menu, id } => write!(f, "Item {} in the {} menu", id, menu),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("{0} not found")]
    NotFound(Target),

    #[error("Content {content_id} is {found}, expected {expected}")]
    TypeMismatch {
        content_id: String,
        expected: ContentKind,
        found: ContentKind,
    },

    #[error("New slide order is not a permutation of the current slides")]
    NotAPermutation,
}

impl MutationError {
    pub(crate) fn slide(id: &str) -> Self {
        MutationError::NotFound(Target::Slide(id.to_string()))
    }

    pub(crate) fn content(slide_id: &str, content_id: &str) -> Self {
        MutationError::NotFound(Target::Content {
            slide_id: slide_id.to_string(),
            content_id: content_id.to_string(),
        })
    }

    pub(crate) fn nav_item(menu: NavMenu, id: &str) -> Self {
        MutationError::NotFound(Target::NavItem {
            menu,
            id: id.to_string(),
        })
    }
}

/// Outcome of a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Whether the selection had to be repaired afterwards
    pub selection_changed: bool,
}

impl Mutation {
    /// Apply mutation to the form with validation
    pub fn apply(&self, form: &mut Form) -> Result<(), MutationError> {
        self.validate(form)?;

        match self {
            Mutation::AddSlide {
                slide,
                insert_after_id,
            } => {
                Self::apply_add_slide(form, slide, insert_after_id.as_deref());
                Ok(())
            }

            Mutation::UpdateSlide { id, patch } => {
                let slide = slide_mut(form, id)?;
                patch.apply_to(slide);
                Ok(())
            }

            Mutation::DeleteSlide { id } => {
                form.slides.retain(|slide| slide.id != *id);
                Ok(())
            }

            Mutation::ToggleSlideVisibility { id } => {
                let slide = slide_mut(form, id)?;
                slide.visible = !slide.visible;
                Ok(())
            }

            Mutation::UpdateSlideOrder { slides } => {
                form.slides = slides.clone();
                Ok(())
            }

            Mutation::UpdateTextContent {
                slide_id,
                content_id,
                text,
            } => {
                let design = design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Text,
                    ContentItem::text_design_mut,
                )?;
                design.text = Some(text.clone());
                Ok(())
            }

            Mutation::UpdateMediaContent {
                slide_id,
                content_id,
                media,
                media_type,
            } => {
                let design = design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Media,
                    ContentItem::media_design_mut,
                )?;
                design.media = Some(media.clone());
                design.media_type = Some(*media_type);
                Ok(())
            }

            Mutation::UpdateButtonContent {
                slide_id,
                content_id,
                text,
            } => {
                let design = design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Button,
                    ContentItem::button_design_mut,
                )?;
                design.button_text = Some(text.clone());
                Ok(())
            }

            Mutation::UpdateQuestionContent {
                slide_id,
                content_id,
                text,
            } => {
                let design = design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Question,
                    ContentItem::question_design_mut,
                )?;
                design.question_text = Some(text.clone());
                Ok(())
            }

            Mutation::UpdateTextDesign {
                slide_id,
                content_id,
                patch,
            } => {
                design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Text,
                    ContentItem::text_design_mut,
                )?
                .apply(patch.clone());
                Ok(())
            }

            Mutation::UpdateMediaDesign {
                slide_id,
                content_id,
                patch,
            } => {
                design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Media,
                    ContentItem::media_design_mut,
                )?
                .apply(patch.clone());
                Ok(())
            }

            Mutation::UpdateButtonDesign {
                slide_id,
                content_id,
                patch,
            } => {
                design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Button,
                    ContentItem::button_design_mut,
                )?
                .apply(patch.clone());
                Ok(())
            }

            Mutation::UpdateQuestionDesign {
                slide_id,
                content_id,
                patch,
            } => {
                design_mut(
                    form,
                    slide_id,
                    content_id,
                    ContentKind::Question,
                    ContentItem::question_design_mut,
                )?
                .apply(patch.clone());
                Ok(())
            }

            Mutation::SetFormName { name } => {
                form.name = name.clone();
                Ok(())
            }

            Mutation::SetNavigationLayout { layout } => {
                form.settings.navigation.navigation_layout = *layout;
                Ok(())
            }

            Mutation::SetBrandLogo { logo } => {
                form.settings.general.brand_logo = logo.clone();
                Ok(())
            }

            Mutation::SetShowBranding { show } => {
                form.settings.general.show_branding = *show;
                Ok(())
            }

            Mutation::SetFontFamily { family } => {
                form.settings.general.font_family = family.clone();
                Ok(())
            }

            Mutation::SetNavMenuEnabled { menu, enabled } => {
                *form.settings.general.menu_enabled_mut(*menu) = *enabled;
                Ok(())
            }

            Mutation::AddNavItem { menu, item } => {
                form.settings.general.menu_items_mut(*menu).push(item.clone());
                Ok(())
            }

            Mutation::RemoveNavItem { menu, id } => {
                form.settings
                    .general
                    .menu_items_mut(*menu)
                    .retain(|item| item.id != *id);
                Ok(())
            }

            Mutation::UpdateNavItem {
                menu,
                id,
                name,
                url,
            } => {
                let item = form
                    .settings
                    .general
                    .menu_items_mut(*menu)
                    .iter_mut()
                    .find(|item| item.id == *id)
                    .ok_or_else(|| MutationError::nav_item(*menu, id))?;
                if let Some(name) = name {
                    item.name = name.clone();
                }
                if let Some(url) = url {
                    item.url = url.clone();
                }
                Ok(())
            }

            Mutation::SetNavItems { menu, items } => {
                *form.settings.general.menu_items_mut(*menu) = items.clone();
                Ok(())
            }
        }
    }

    /// Check every target exists without touching the form
    pub fn validate(&self, form: &Form) -> Result<(), MutationError> {
        match self {
            Mutation::UpdateSlide { id, .. }
            | Mutation::DeleteSlide { id }
            | Mutation::ToggleSlideVisibility { id } => {
                form.find_slide(id).ok_or_else(|| MutationError::slide(id))?;
                Ok(())
            }

            Mutation::UpdateSlideOrder { slides } => {
                let mut current = form.slide_ids();
                let mut proposed: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
                current.sort_unstable();
                proposed.sort_unstable();
                if current != proposed {
                    return Err(MutationError::NotAPermutation);
                }
                Ok(())
            }

            Mutation::UpdateTextContent {
                slide_id,
                content_id,
                ..
            }
            | Mutation::UpdateTextDesign {
                slide_id,
                content_id,
                ..
            } => check_content(form, slide_id, content_id, ContentKind::Text),

            Mutation::UpdateMediaContent {
                slide_id,
                content_id,
                ..
            }
            | Mutation::UpdateMediaDesign {
                slide_id,
                content_id,
                ..
            } => check_content(form, slide_id, content_id, ContentKind::Media),

            Mutation::UpdateButtonContent {
                slide_id,
                content_id,
                ..
            }
            | Mutation::UpdateButtonDesign {
                slide_id,
                content_id,
                ..
            } => check_content(form, slide_id, content_id, ContentKind::Button),

            Mutation::UpdateQuestionContent {
                slide_id,
                content_id,
                ..
            }
            | Mutation::UpdateQuestionDesign {
                slide_id,
                content_id,
                ..
            } => check_content(form, slide_id, content_id, ContentKind::Question),

            Mutation::RemoveNavItem { menu, id } | Mutation::UpdateNavItem { menu, id, .. } => {
                let exists = form
                    .settings
                    .general
                    .menu_items(*menu)
                    .iter()
                    .any(|item| item.id == *id);
                if !exists {
                    return Err(MutationError::nav_item(*menu, id));
                }
                Ok(())
            }

            Mutation::AddSlide { .. }
            | Mutation::SetFormName { .. }
            | Mutation::SetNavigationLayout { .. }
            | Mutation::SetBrandLogo { .. }
            | Mutation::SetShowBranding { .. }
            | Mutation::SetFontFamily { .. }
            | Mutation::SetNavMenuEnabled { .. }
            | Mutation::AddNavItem { .. }
            | Mutation::SetNavItems { .. } => Ok(()),
        }
    }

    /// Operation name, as it appears in JSON scripts
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddSlide { .. } => "add_slide",
            Mutation::UpdateSlide { .. } => "update_slide",
            Mutation::DeleteSlide { .. } => "delete_slide",
            Mutation::ToggleSlideVisibility { .. } => "toggle_slide_visibility",
            Mutation::UpdateSlideOrder { .. } => "update_slide_order",
            Mutation::UpdateTextContent { .. } => "update_text_content",
            Mutation::UpdateMediaContent { .. } => "update_media_content",
            Mutation::UpdateButtonContent { .. } => "update_button_content",
            Mutation::UpdateQuestionContent { .. } => "update_question_content",
            Mutation::UpdateTextDesign { .. } => "update_text_design",
            Mutation::UpdateMediaDesign { .. } => "update_media_design",
            Mutation::UpdateButtonDesign { .. } => "update_button_design",
            Mutation::UpdateQuestionDesign { .. } => "update_question_design",
            Mutation::SetFormName { .. } => "set_form_name",
            Mutation::SetNavigationLayout { .. } => "set_navigation_layout",
            Mutation::SetBrandLogo { .. } => "set_brand_logo",
            Mutation::SetShowBranding { .. } => "set_show_branding",
            Mutation::SetFontFamily { .. } => "set_font_family",
            Mutation::SetNavMenuEnabled { .. } => "set_nav_menu_enabled",
            Mutation::AddNavItem { .. } => "add_nav_item",
            Mutation::RemoveNavItem { .. } => "remove_nav_item",
            Mutation::UpdateNavItem { .. } => "update_nav_item",
            Mutation::SetNavItems { .. } => "set_nav_items",
        }
    }

    fn apply_add_slide(form: &mut Form, slide: &Slide, insert_after_id: Option<&str>) {
        let anchor = insert_after_id
            .and_then(|id| form.slide_index(id))
            .or_else(|| form.last_question_index());

        match anchor {
            Some(index) => form.slides.insert(index + 1, slide.clone()),
            None => form.slides.push(slide.clone()),
        }
    }
}

fn slide_mut<'a>(form: &'a mut Form, id: &str) -> Result<&'a mut Slide, MutationError> {
    form.find_slide_mut(id).ok_or_else(|| MutationError::slide(id))
}

fn check_content(
    form: &Form,
    slide_id: &str,
    content_id: &str,
    expected: ContentKind,
) -> Result<(), MutationError> {
    let slide = form
        .find_slide(slide_id)
        .ok_or_else(|| MutationError::slide(slide_id))?;
    let item = slide
        .find_content(content_id)
        .ok_or_else(|| MutationError::content(slide_id, content_id))?;

    if item.kind() != expected {
        return Err(MutationError::TypeMismatch {
            content_id: content_id.to_string(),
            expected,
            found: item.kind(),
        });
    }
    Ok(())
}

fn design_mut<'a, D>(
    form: &'a mut Form,
    slide_id: &str,
    content_id: &str,
    expected: ContentKind,
    pick: fn(&mut ContentItem) -> Option<&mut D>,
) -> Result<&'a mut D, MutationError> {
    let slide = slide_mut(form, slide_id)?;
    let item = slide
        .find_content_mut(content_id)
        .ok_or_else(|| MutationError::content(slide_id, content_id))?;
    let found = item.kind();

    pick(item).ok_or_else(|| MutationError::TypeMismatch {
        content_id: content_id.to_string(),
        expected,
        found,
    })
}
