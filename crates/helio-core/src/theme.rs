/// Visual theme for the whole visualization.
///
/// The serialized names double as the CSS class names the host page applies
/// to `<body>`, and as the value stored under [`Theme::STORAGE_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Key the host persists the theme under.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Serialized form: `"light-theme"` or `"dark-theme"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Parse a persisted theme name. Unknown strings yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light-theme" => Some(Theme::Light),
            "dark-theme" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Renderer clear color.
    pub fn background(self) -> [f32; 3] {
        match self {
            Theme::Light => [1.0, 1.0, 1.0],
            Theme::Dark => [0.0, 0.0, 0.0],
        }
    }

    /// Color for stars and tooltip text — inverted against the background
    /// so both stay readable.
    pub fn foreground(self) -> [f32; 3] {
        match self {
            Theme::Light => [0.0, 0.0, 0.0],
            Theme::Dark => [1.0, 1.0, 1.0],
        }
    }
}
