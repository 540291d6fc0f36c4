use serde::{Deserialize, Serialize};

/// Application settings, persisted alongside the link collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: ThemeMode,
    /// `"auto"` for wallpaper-derived colors, or an explicit color value.
    pub theme_color: String,
    pub share_action: ShareAction,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            theme_color: "auto".to_string(),
            share_action: ShareAction::Open,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

/// What happens after a share-intent arrival is saved: navigate into the app,
/// or raise a device notification and stay out of the way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareAction {
    Open,
    Notification,
}

/// Shallow patch for `AppSettings`; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub theme: Option<ThemeMode>,
    pub theme_color: Option<String>,
    pub share_action: Option<ShareAction>,
}

impl SettingsPatch {
    pub fn apply(&self, settings: &mut AppSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(color) = &self.theme_color {
            settings.theme_color = color.clone();
        }
        if let Some(action) = self.share_action {
            settings.share_action = action;
        }
    }
}
