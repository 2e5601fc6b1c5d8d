// Theme system for Dioxus Desktop
//
// Uses a wrapper div with data-theme attribute instead of web_sys
// since this is a desktop application.

use dioxus::prelude::*;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Darkly,
    Slate,
    Cerulean,
    Light,
}

impl Theme {
    /// CSS data-theme attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Darkly => "darkly",
            Theme::Slate => "slate",
            Theme::Cerulean => "cerulean",
            Theme::Light => "light",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Darkly => "Darkly",
            Theme::Slate => "Slate",
            Theme::Cerulean => "Cerulean",
            Theme::Light => "Light",
        }
    }

    /// All available themes
    pub fn all() -> &'static [Theme] {
        &[Theme::Darkly, Theme::Slate, Theme::Cerulean, Theme::Light]
    }
}

/// Global theme signal - use this throughout your app
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Theme switcher component - renders a dropdown for theme selection
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            label { class: "theme-label", "Theme" }
            select {
                class: "theme-select",
                value: current_theme.as_str(),
                onchange: move |e| {
                    let value = e.value();
                    let new_theme = match value.as_str() {
                        "darkly" => Theme::Darkly,
                        "slate" => Theme::Slate,
                        "cerulean" => Theme::Cerulean,
                        "light" => Theme::Light,
                        _ => Theme::default(),
                    };
                    *CURRENT_THEME.write() = new_theme;
                },
                for theme in Theme::all() {
                    option {
                        value: theme.as_str(),
                        selected: *theme == current_theme,
                        "{theme.display_name()}"
                    }
                }
            }
        }
    }
}

/// Themed wrapper component - wraps children with data-theme attribute
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            "data-theme": theme.as_str(),
            style: "min-height: 100vh; width: 100%;",
            {children}
        }
    }
}
