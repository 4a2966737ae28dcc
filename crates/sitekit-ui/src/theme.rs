//! Theme configuration for `Sitekit`.
//!
//! Utility classes come from the Tailwind build; this module only carries
//! the custom background and header rules the layout relies on.

/// Color palette for the application.
pub mod colors {
    /// Gradient stops of the page background.
    pub mod gradient {
        /// Light mode top stop.
        pub const LIGHT_START: &str = "rgba(56, 189, 248, 0.12)";
        /// Light mode bottom stop.
        pub const LIGHT_END: &str = "rgba(248, 250, 252, 0)";
        /// Dark mode top stop.
        pub const DARK_START: &str = "rgba(56, 189, 248, 0.08)";
        /// Dark mode bottom stop.
        pub const DARK_END: &str = "rgba(15, 23, 42, 0)";
    }

    /// Header surface colors.
    pub mod header {
        /// Light mode header background.
        pub const LIGHT_BG: &str = "rgba(248, 250, 252, 0.75)";
        /// Dark mode header background.
        pub const DARK_BG: &str = "rgba(15, 23, 42, 0.75)";
        /// Header bottom border.
        pub const BORDER: &str = "rgba(148, 163, 184, 0.2)";
    }
}

/// Layout dimensions.
pub mod sizes {
    /// Height of the site header.
    pub const HEADER_HEIGHT: &str = "4rem";
    /// Height of the gradient band on regular pages.
    pub const BACKGROUND_BAND: &str = "24rem";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --bg-gradient-start: {light_start};
  --bg-gradient-end: {light_end};
  --header-bg: {header_light};
  --header-border: {header_border};
  --header-height: {header_height};
  --background-band: {band};
}}

.dark {{
  --bg-gradient-start: {dark_start};
  --bg-gradient-end: {dark_end};
  --header-bg: {header_dark};
}}
",
        light_start = colors::gradient::LIGHT_START,
        light_end = colors::gradient::LIGHT_END,
        dark_start = colors::gradient::DARK_START,
        dark_end = colors::gradient::DARK_END,
        header_light = colors::header::LIGHT_BG,
        header_dark = colors::header::DARK_BG,
        header_border = colors::header::BORDER,
        header_height = sizes::HEADER_HEIGHT,
        band = sizes::BACKGROUND_BAND,
    )
}

/// Generate the background modifier rules keyed by the layout classes.
pub fn generate_background_css(background_class: &str, full_background_class: &str) -> String {
    format!(
        r".{background_class} {{
  background-image: linear-gradient(180deg, var(--bg-gradient-start) 0%, var(--bg-gradient-end) var(--background-band));
  background-repeat: no-repeat;
}}

.{background_class}.{full_background_class} {{
  min-height: 100vh;
  background-image: linear-gradient(180deg, var(--bg-gradient-start) 0%, var(--bg-gradient-end) 100%);
  background-attachment: fixed;
}}
"
    )
}
