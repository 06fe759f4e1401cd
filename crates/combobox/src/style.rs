//! Styles for the terminal rendering of the combobox.
//!
//! Colors are given as strings in configuration: ANSI numbers (`"212"`),
//! hex (`"#0077cc"`) or basic names (`"blue"`). With the `terminal` feature
//! styles render through crossterm; without it they render plain text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// An ANSI 256-color palette entry.
    Ansi(u8),
    /// A 24-bit color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
}

impl Color {
    /// Parses a color string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for anything that is not an ANSI
    /// number, a `#rrggbb` hex value or a basic color name.
    ///
    /// ```rust
    /// use combobox::style::Color;
    ///
    /// assert_eq!(Color::parse("212").unwrap(), Color::Ansi(212));
    /// assert_eq!(Color::parse("#0077cc").unwrap(), Color::Rgb { r: 0, g: 0x77, b: 0xcc });
    /// assert_eq!(Color::parse("blue").unwrap(), Color::Ansi(4));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                    return Ok(Self::Rgb { r, g, b });
                }
            }
            return Err(Error::InvalidColor(s.to_string()));
        }
        if let Ok(n) = s.parse::<u8>() {
            return Ok(Self::Ansi(n));
        }
        let ansi = match s.to_ascii_lowercase().as_str() {
            "black" => 0,
            "red" => 1,
            "green" => 2,
            "yellow" => 3,
            "blue" => 4,
            "magenta" => 5,
            "cyan" => 6,
            "white" => 7,
            "grey" | "gray" => 8,
            "bright-red" => 9,
            "bright-green" => 10,
            "bright-yellow" => 11,
            "bright-blue" => 12,
            "bright-magenta" => 13,
            "bright-cyan" => 14,
            "bright-white" => 15,
            _ => return Err(Error::InvalidColor(s.to_string())),
        };
        Ok(Self::Ansi(ansi))
    }

    #[cfg(feature = "terminal")]
    fn to_crossterm(self) -> crossterm::style::Color {
        match self {
            Self::Ansi(n) => crossterm::style::Color::AnsiValue(n),
            Self::Rgb { r, g, b } => crossterm::style::Color::Rgb { r, g, b },
        }
    }
}

/// Visual attributes for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color.
    pub foreground: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Bold text.
    pub bold: bool,
    /// Dimmed text.
    pub faint: bool,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            bold: false,
            faint: false,
        }
    }

    /// Sets the foreground color.
    #[must_use]
    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Makes the text bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Dims the text.
    #[must_use]
    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Whether the style changes nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::new()
    }

    /// Renders text with this style.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        self.render_styled(text)
    }

    #[cfg(feature = "terminal")]
    fn render_styled(&self, text: &str) -> String {
        use crossterm::style::{Attribute, ContentStyle};

        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground.map(Color::to_crossterm);
        style.background_color = self.background.map(Color::to_crossterm);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.faint {
            style.attributes.set(Attribute::Dim);
        }
        style.apply(text).to_string()
    }

    #[cfg(not(feature = "terminal"))]
    fn render_styled(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Styles of every part of the combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// The prompt before the text value.
    pub prompt: Style,
    /// The text value.
    pub text: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: Style,
    /// An unselected option row.
    pub option: Style,
    /// The selected option row.
    pub selected: Style,
    /// Hint line shown when no option matches.
    pub empty: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: Style::new().foreground(Color::Ansi(4)).bold(),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::Ansi(240)),
            option: Style::new(),
            selected: Style::new()
                .foreground(Color::Ansi(15))
                .background(Color::Rgb {
                    r: 0x00,
                    g: 0x77,
                    b: 0xcc,
                }),
            empty: Style::new().foreground(Color::Ansi(240)).faint(),
        }
    }
}

impl Styles {
    /// Styles that emit no escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            prompt: Style::new(),
            text: Style::new(),
            placeholder: Style::new(),
            option: Style::new(),
            selected: Style::new(),
            empty: Style::new(),
        }
    }

    /// Builds styles from configured colors, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for an unparseable color.
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        let mut styles = Self::default();
        if let Some(c) = &config.prompt {
            styles.prompt.foreground = Some(Color::parse(c)?);
        }
        if let Some(c) = &config.placeholder {
            styles.placeholder.foreground = Some(Color::parse(c)?);
        }
        if let Some(c) = &config.selected_foreground {
            styles.selected.foreground = Some(Color::parse(c)?);
        }
        if let Some(c) = &config.selected_background {
            styles.selected.background = Some(Color::parse(c)?);
        }
        Ok(styles)
    }
}

/// Color overrides from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleConfig {
    /// Prompt color.
    pub prompt: Option<String>,
    /// Placeholder color.
    pub placeholder: Option<String>,
    /// Selected row text color.
    pub selected_foreground: Option<String>,
    /// Selected row background color.
    pub selected_background: Option<String>,
}
