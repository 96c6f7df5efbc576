//! Light/dark theme flag shared with the presentation layer.
//!
//! The flag lives in a Yew reducer owned by the app root and is handed to
//! components through a `ContextProvider`; every toggle re-renders the
//! components that read it.

use std::rc::Rc;
use yew::prelude::*;

/// Colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub card_class: &'static str,
    pub ring_track: &'static str,
    pub ring_fill: &'static str,
    pub digits: &'static str,
}

const LIGHT: Palette = Palette {
    page_background: "linear-gradient(to bottom right, #e0e7ff, #f8fafc)",
    card_class: "card card-light",
    ring_track: "#E0E7FF",
    ring_fill: "#6366F1",
    digits: "#4F46E5",
};

const DARK: Palette = Palette {
    page_background: "linear-gradient(to bottom right, #0f172a, #1e293b)",
    card_class: "card card-dark",
    ring_track: "#1F2937",
    ring_fill: "#4F46E5",
    digits: "#818CF8",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    dark_mode: bool,
}

pub enum ThemeAction {
    Toggle,
}

impl ThemeState {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Label for the button that switches to the other mode.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn palette(&self) -> Palette {
        if self.dark_mode {
            DARK
        } else {
            LIGHT
        }
    }

    /// Class applied to the document body.
    pub fn body_class(&self) -> &'static str {
        if self.dark_mode {
            "theme-dark"
        } else {
            "theme-light"
        }
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ThemeAction::Toggle => {
                let dark = next.toggle();
                log::debug!("Theme switched to {}", if dark { "dark" } else { "light" });
            }
        }
        Rc::new(next)
    }
}

/// Context handle for reading and toggling the theme.
pub type ThemeContext = UseReducerHandle<ThemeState>;
