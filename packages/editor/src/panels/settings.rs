//! Form-wide settings: name, navigation, font, logo, branding and menus

use super::PanelEditor;
use crate::{Document, EditorError, Mutation};
use formdeck_model::{FormSettings, NavItem, NavMenu};

/// Staged copy of the form's name and settings
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub name: String,
    pub settings: FormSettings,
}

impl SettingsDraft {
    /// Append a menu entry, refusing once the menu is full
    pub fn add_nav_item(&mut self, menu: NavMenu, item: NavItem) -> Result<(), EditorError> {
        let max = menu.max_items();
        let items = self.settings.general.menu_items_mut(menu);
        if items.len() >= max {
            return Err(EditorError::NavMenuFull { menu, max });
        }
        items.push(item);
        Ok(())
    }

    /// Remove a menu entry; false when it was not there
    pub fn remove_nav_item(&mut self, menu: NavMenu, id: &str) -> bool {
        let items = self.settings.general.menu_items_mut(menu);
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() != before
    }

    pub fn set_menu_enabled(&mut self, menu: NavMenu, enabled: bool) {
        *self.settings.general.menu_enabled_mut(menu) = enabled;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSettingsEditor;

impl PanelEditor for FormSettingsEditor {
    type Staged = SettingsDraft;

    fn description(&self) -> &'static str {
        "Update form settings"
    }

    fn stage(&self, doc: &Document) -> Result<SettingsDraft, EditorError> {
        let form = doc.form();
        Ok(SettingsDraft {
            name: form.name.clone(),
            settings: form.settings.clone(),
        })
    }

    fn mutations(
        &self,
        staged: &SettingsDraft,
        committed: &SettingsDraft,
    ) -> Result<Vec<Mutation>, EditorError> {
        let mut mutations = Vec::new();
        let (next, prev) = (&staged.settings, &committed.settings);

        if staged.name != committed.name {
            mutations.push(Mutation::SetFormName {
                name: staged.name.clone(),
            });
        }
        if next.navigation.navigation_layout != prev.navigation.navigation_layout {
            mutations.push(Mutation::SetNavigationLayout {
                layout: next.navigation.navigation_layout,
            });
        }
        if next.general.font_family != prev.general.font_family {
            mutations.push(Mutation::SetFontFamily {
                family: next.general.font_family.clone(),
            });
        }
        if next.general.brand_logo != prev.general.brand_logo {
            mutations.push(Mutation::SetBrandLogo {
                logo: next.general.brand_logo.clone(),
            });
        }
        if next.general.show_branding != prev.general.show_branding {
            mutations.push(Mutation::SetShowBranding {
                show: next.general.show_branding,
            });
        }

        for menu in [NavMenu::Header, NavMenu::Footer] {
            let enabled = next.general.menu_enabled(menu);
            if enabled != prev.general.menu_enabled(menu) {
                mutations.push(Mutation::SetNavMenuEnabled { menu, enabled });
            }

            let items = next.general.menu_items(menu);
            if items.len() > menu.max_items() {
                return Err(EditorError::NavMenuFull {
                    menu,
                    max: menu.max_items(),
                });
            }
            if items != prev.general.menu_items(menu) {
                mutations.push(Mutation::SetNavItems {
                    menu,
                    items: items.to_vec(),
                });
            }
        }

        Ok(mutations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Panel;
    use formdeck_model::NavigationLayout;

    #[test]
    fn test_settings_apply() {
        let mut doc = Document::default();
        let mut panel = Panel::open(FormSettingsEditor, &doc).unwrap();

        let draft = panel.stage_mut().unwrap();
        draft.name = "Signup".to_string();
        draft.settings.navigation.navigation_layout = NavigationLayout::Floating;
        draft.set_menu_enabled(NavMenu::Footer, true);
        draft
            .add_nav_item(NavMenu::Footer, NavItem::new("terms", "Terms", "/terms"))
            .unwrap();

        assert_eq!(panel.apply(&mut doc).unwrap(), 4);
        let form = doc.form();
        assert_eq!(form.name, "Signup");
        assert_eq!(form.settings.navigation.navigation_layout, NavigationLayout::Floating);
        assert_eq!(form.settings.general.footer_nav_menu_items.len(), 1);
    }

    #[test]
    fn test_menu_caps() {
        let doc = Document::default();
        let mut panel = Panel::open(FormSettingsEditor, &doc).unwrap();
        let draft = panel.stage_mut().unwrap();

        for i in 0..3 {
            draft
                .add_nav_item(NavMenu::Footer, NavItem::new(format!("f{}", i), "Link", "/"))
                .unwrap();
        }
        let err = draft
            .add_nav_item(NavMenu::Footer, NavItem::new("f3", "Link", "/"))
            .unwrap_err();
        assert_eq!(err.to_string(), "The footer menu holds at most 3 items");

        for i in 0..5 {
            draft
                .add_nav_item(NavMenu::Header, NavItem::new(format!("h{}", i), "Link", "/"))
                .unwrap();
        }
        assert!(draft
            .add_nav_item(NavMenu::Header, NavItem::new("h5", "Link", "/"))
            .is_err());
        assert!(draft.remove_nav_item(NavMenu::Header, "h0"));
        assert!(!draft.remove_nav_item(NavMenu::Header, "h0"));
    }
}
