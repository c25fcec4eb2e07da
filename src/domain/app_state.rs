use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::catalog::seed_cart;

/// Theme preference chosen by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// `system_prefers_dark` is `None` when the platform did not answer; dark wins then.
    pub fn resolve(&self, system_prefers_dark: Option<bool>) -> ResolvedTheme {
        match self {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => match system_prefers_dark {
                Some(false) => ResolvedTheme::Light,
                Some(true) | None => ResolvedTheme::Dark,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "☀️",
            ThemeMode::Dark => "🌙",
            ThemeMode::System => "💻",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Thème clair",
            ThemeMode::Dark => "Thème sombre",
            ThemeMode::System => "Thème du système",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Projects,
    Agents,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Projects,
        DashboardTab::Agents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Vue d'ensemble",
            DashboardTab::Projects => "Projets",
            DashboardTab::Agents => "Agents IA",
        }
    }
}

/// Session state shared by every page. Nothing here outlives the session
/// except the theme, which travels through [`PersistedState`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub cart: Cart,
    pub dashboard_tab: DashboardTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cart: seed_cart(),
            dashboard_tab: DashboardTab::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_platform() {
        assert_eq!(ThemeMode::Light.resolve(Some(true)), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(Some(false)), ResolvedTheme::Dark);
    }

    #[test]
    fn system_mode_follows_platform_and_defaults_dark() {
        assert_eq!(ThemeMode::System.resolve(Some(false)), ResolvedTheme::Light);
        assert_eq!(ThemeMode::System.resolve(Some(true)), ResolvedTheme::Dark);
        assert_eq!(ThemeMode::System.resolve(None), ResolvedTheme::Dark);
    }

    #[test]
    fn persisted_state_tolerates_missing_theme() {
        let state: PersistedState = serde_json::from_str("{}").expect("empty object");
        assert_eq!(state.theme, ThemeMode::System);

        let state: PersistedState =
            serde_json::from_str(r#"{"theme":"light"}"#).expect("light theme");
        assert_eq!(state.theme, ThemeMode::Light);
    }
}
