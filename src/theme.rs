//! Light/Dark Theme
//!
//! The preference lives in `localStorage` under `theme`. Dark is the
//! default; light adds a class on `<body>`.

use crate::config::{LIGHT_THEME_CLASS, MOON_ICON, SUN_ICON, THEME_STORAGE_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only an explicit `"light"` selects the light theme
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Icon for the toggle button. It advertises the switch, so light shows the moon.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => MOON_ICON,
            Theme::Dark => SUN_ICON,
        }
    }

    pub fn toggle_icon_alt(self) -> &'static str {
        match self {
            Theme::Light => "Moon icon",
            Theme::Dark => "Sun icon",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

/// Durable key-value storage for the preference
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`, best-effort
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[THEME] localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.storage.as_ref().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }
}

/// Current theme plus where it is persisted
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored preference once
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip and persist, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.theme.as_str()) {
            log::warn!("[THEME] Could not save preference: {}", err);
        }
        log::info!("[THEME] Switched to {}", self.theme.as_str());
        self.theme
    }
}

/// Put or remove the light marker on `<body>`
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(err) = body
        .class_list()
        .toggle_with_force(LIGHT_THEME_CLASS, theme.is_light())
    {
        log::warn!("[THEME] Could not update body class: {:?}", err);
    }
}
