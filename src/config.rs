//! Fixed Paths and Keys
//!
//! Everything the page expects to find next to the bundle.

/// Item collection, fetched once at startup
pub const DATA_URL: &str = "./data.json";

/// localStorage key holding `"light"` or `"dark"`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class put on `<body>` while the light theme is active
pub const LIGHT_THEME_CLASS: &str = "light-theme";

pub const TOGGLE_ON_ICON: &str = "./assets/images/toggle-on.svg";
pub const TOGGLE_OFF_ICON: &str = "./assets/images/toggle-off.svg";
pub const SUN_ICON: &str = "./assets/images/sun-regular-full.svg";
pub const MOON_ICON: &str = "./assets/images/moon-regular-full.svg";

/// Shown in place of the cards when the data could not be loaded
pub const LOAD_ERROR_NOTICE: &str = "Error loading data";
