//! Colors used by inline component styles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_overlay: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub danger: &'static str,
}

pub const PALETTE: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f6f8",
    bg_overlay: "rgba(15, 23, 42, 0.45)",
    text_primary: "#1f2933",
    text_secondary: "#52606d",
    text_muted: "#9aa5b1",
    border: "#d9e2ec",
    accent: "#0d6efd",
    accent_text: "#ffffff",
    danger: "#dc3545",
};
