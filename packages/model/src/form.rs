use crate::error::ModelError;
use crate::slide::{Slide, SlideKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root aggregate: one editable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    pub settings: FormSettings,
    /// Ordered; this is the render order
    pub slides: Vec<Slide>,
}

impl Form {
    /// Empty form with default settings and no slides
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: FormSettings::default(),
            slides: Vec::new(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn find_slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    pub fn find_slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|slide| slide.id == id)
    }

    pub fn slide_index(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    /// Index of the last slide of kind `question`
    pub fn last_question_index(&self) -> Option<usize> {
        self.slides
            .iter()
            .rposition(|slide| slide.kind == SlideKind::Question)
    }

    pub fn question_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|slide| slide.kind == SlideKind::Question)
            .count()
    }

    pub fn slide_ids(&self) -> Vec<&str> {
        self.slides.iter().map(|slide| slide.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationLayout {
    #[default]
    Bottom,
    Floating,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSettings {
    pub navigation_layout: NavigationLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Which navigation menu an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavMenu {
    Header,
    Footer,
}

impl NavMenu {
    /// Entry cap enforced by the settings editor
    pub fn max_items(self) -> usize {
        match self {
            NavMenu::Header => 5,
            NavMenu::Footer => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavMenu::Header => "header",
            NavMenu::Footer => "footer",
        }
    }
}

impl fmt::Display for NavMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    /// Logo URL or data URL; empty means the default logo
    #[serde(default)]
    pub brand_logo: String,
    #[serde(default = "default_true")]
    pub show_branding: bool,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub header_nav_menu: bool,
    #[serde(default)]
    pub header_nav_menu_items: Vec<NavItem>,
    #[serde(default)]
    pub footer_nav_menu: bool,
    #[serde(default)]
    pub footer_nav_menu_items: Vec<NavItem>,
}

fn default_true() -> bool {
    true
}

fn default_font_family() -> String {
    "Nunito".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            brand_logo: String::new(),
            show_branding: true,
            font_family: default_font_family(),
            header_nav_menu: false,
            header_nav_menu_items: Vec::new(),
            footer_nav_menu: false,
            footer_nav_menu_items: Vec::new(),
        }
    }
}

impl GeneralSettings {
    pub fn menu_enabled(&self, menu: NavMenu) -> bool {
        match menu {
            NavMenu::Header => self.header_nav_menu,
            NavMenu::Footer => self.footer_nav_menu,
        }
    }

    pub fn menu_enabled_mut(&mut self, menu: NavMenu) -> &mut bool {
        match menu {
            NavMenu::Header => &mut self.header_nav_menu,
            NavMenu::Footer => &mut self.footer_nav_menu,
        }
    }

    pub fn menu_items(&self, menu: NavMenu) -> &[NavItem] {
        match menu {
            NavMenu::Header => &self.header_nav_menu_items,
            NavMenu::Footer => &self.footer_nav_menu_items,
        }
    }

    pub fn menu_items_mut(&mut self, menu: NavMenu) -> &mut Vec<NavItem> {
        match menu {
            NavMenu::Header => &mut self.header_nav_menu_items,
            NavMenu::Footer => &mut self.footer_nav_menu_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub general: GeneralSettings,
}
