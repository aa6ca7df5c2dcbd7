//! Theme for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_page: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_on_accent: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}

/// The single palette used by the app
pub const PALETTE: ColorPalette = ColorPalette {
    bg_page: "#f3f4f6",
    bg_card: "#ffffff",
    text_primary: "#1f2937",
    text_secondary: "#4b5563",
    text_on_accent: "#ffffff",
    border: "#d1d5db",
    accent: "#3b82f6",
    edit: "#eab308",
    delete: "#ef4444",
};

/// The palette components render with
#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}
