//! Fixed dark palette for the desktop shell.

/// Color palette used by all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
}

impl Palette {
    pub const DARK: Self = Self {
        bg_primary: "#1a1a1f",
        bg_secondary: "#22222a",
        bg_tertiary: "#2c2c36",
        border: "#3a3a46",
        text_primary: "#e8e8ee",
        text_secondary: "#b0b0bc",
        text_muted: "#74747e",
        accent: "#f9cb28",
        danger: "#e5534b",
    };
}
