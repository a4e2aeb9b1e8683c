//! Light/dark colour scheme.
//!
//! The preference is read from `localStorage`, falling back on the system
//! `prefers-color-scheme`. The active theme is applied as a `dark` class on
//! the `<html>` element, which is what the `dark:` tailwind variant keys on.
//! Off the client every function here is a no-op and the theme is `Light`.
use std::fmt;
use std::str::FromStr;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

/// Inlined in the document `<head>` so that the `dark` class is set before
/// first paint, without waiting on the wasm bundle. Same rules as
/// [`read_preference`].
pub const PRELOAD_SCRIPT: &str = r#"(function () {
  try {
    var theme = localStorage.getItem("theme");
    theme = theme && theme.trim().toLowerCase();
    if (theme === "dark" || (theme !== "light" && window.matchMedia("(prefers-color-scheme: dark)").matches)) {
      document.documentElement.classList.add("dark");
    }
  } catch (e) {}
})();"#;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown theme `{0}'")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
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

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::Unknown(String::from(s))),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// Read the persisted theme, or the system preference if nothing
        /// (valid) was persisted.
        pub fn read_preference() -> Theme {
            let Some(window) = web_sys::window() else {
                return Theme::default();
            };

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                    match value.parse() {
                        Ok(theme) => return theme,
                        Err(error) => log::warn!("Ignoring persisted theme: {}", error),
                    }
                }
            }

            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|query| query.matches());
            if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }

        /// Set or clear the `dark` class on `<html>`.
        pub fn apply(theme: Theme) {
            let Some(root) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let result = match theme {
                Theme::Dark => classes.add_1(DARK_CLASS),
                Theme::Light => classes.remove_1(DARK_CLASS),
            };
            if let Err(error) = result {
                log::warn!("Could not apply the {} theme: {:?}", theme, error);
            }
        }

        fn persist(theme: Theme) {
            let Some(Ok(Some(storage))) = web_sys::window().map(|window| window.local_storage()) else {
                return;
            };
            if let Err(error) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                log::warn!("Could not persist the {} theme: {:?}", theme, error);
            }
        }
    } else {
        pub fn read_preference() -> Theme {
            Theme::default()
        }

        pub fn apply(_theme: Theme) {}

        fn persist(_theme: Theme) {}
    }
}

/// Switch to the other theme, apply it and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    log::debug!("theme switched from {} to {}", current, next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Ok(Theme::Dark), "dark".parse());
        assert_eq!(Ok(Theme::Light), " Light\n".parse());
        assert_eq!(
            Err(Error::Unknown(String::from("sepia"))),
            "sepia".parse::<Theme>()
        );
    }

    #[test]
    fn toggled_flips_back_and_forth() {
        assert_eq!(Theme::Dark, Theme::Light.toggled());
        assert_eq!(Theme::Light, Theme::Light.toggled().toggled());
    }

    #[test]
    fn display_matches_storage_value() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Ok(theme), theme.to_string().parse());
        }
    }

    #[test]
    fn preload_script_uses_the_same_key_and_class() {
        assert!(PRELOAD_SCRIPT.contains(&format!("localStorage.getItem(\"{}\")", STORAGE_KEY)));
        assert!(PRELOAD_SCRIPT.contains(&format!("classList.add(\"{}\")", DARK_CLASS)));
        assert!(PRELOAD_SCRIPT.contains("(prefers-color-scheme: dark)"));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn off_the_client() {
        assert_eq!(Theme::Light, read_preference());
        assert_eq!(Theme::Light, toggle(Theme::Dark));
    }
}
