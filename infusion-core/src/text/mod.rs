use colored::Colorize;

use color::{Color, NamedColor, RGBColor};

pub mod color;

/// The character the client reads formatting codes after.
pub const SECTION_SIGN: char = '§';

/// Marker used in configuration files in place of [`SECTION_SIGN`].
pub const ALT_COLOR_CHAR: char = '&';

const ALL_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replaces `marker` followed by a valid formatting code with [`SECTION_SIGN`]
/// and the lowercase code. Any other use of `marker` is left alone.
pub fn translate_alternate_color_codes(marker: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == marker && ALL_CODES.contains(chars[i + 1]) {
            chars[i] = SECTION_SIGN;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Removes every `§` code, leaving the plain text.
pub fn strip_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == SECTION_SIGN {
            if let Some(&code) = chars.peek() {
                if ALL_CODES.contains(code) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Style accumulated while reading legacy formatted text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyStyle {
    pub color: Option<Color>,
    pub obfuscated: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underlined: bool,
    pub italic: bool,
}

impl LegacyStyle {
    /// Applies a single code. Colors reset the formatting flags like the client does.
    fn apply(&mut self, code: char) {
        if let Some(color) = NamedColor::from_code(code) {
            *self = Self {
                color: Some(Color::Named(color)),
                ..Self::default()
            };
            return;
        }
        match code.to_ascii_lowercase() {
            'k' => self.obfuscated = true,
            'l' => self.bold = true,
            'm' => self.strikethrough = true,
            'n' => self.underlined = true,
            'o' => self.italic = true,
            'r' => *self = Self::default(),
            _ => {}
        }
    }
}

/// A run of text sharing one style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacySegment {
    pub text: String,
    pub style: LegacyStyle,
}

/// Splits `§` formatted text into styled runs. Unknown codes are kept as text.
pub fn parse_legacy(text: &str) -> Vec<LegacySegment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut style = LegacyStyle::default();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let code = chars.get(i + 1).copied();
        match code {
            Some(code) if ch == SECTION_SIGN && ALL_CODES.contains(code) => {
                if !current.is_empty() {
                    segments.push(LegacySegment {
                        text: std::mem::take(&mut current),
                        style,
                    });
                }
                if code.eq_ignore_ascii_case(&'x') {
                    // §x§R§R§G§G§B§B
                    let digits: Option<String> = (0..6)
                        .map(|n| {
                            let at = i + 2 + n * 2;
                            match (chars.get(at), chars.get(at + 1)) {
                                (Some(&SECTION_SIGN), Some(&digit)) => Some(digit),
                                _ => None,
                            }
                        })
                        .collect();
                    if let Some(rgb) = digits.as_deref().and_then(RGBColor::from_hex) {
                        style = LegacyStyle {
                            color: Some(Color::Rgb(rgb)),
                            ..LegacyStyle::default()
                        };
                        i += 14;
                        continue;
                    }
                } else {
                    style.apply(code);
                }
                i += 2;
            }
            _ => {
                current.push(ch);
                i += 1;
            }
        }
    }
    if !current.is_empty() {
        segments.push(LegacySegment {
            text: current,
            style,
        });
    }
    segments
}

/// Renders `§` formatted text with ANSI escapes for the server console.
pub fn to_pretty_console(text: &str) -> String {
    let mut out = String::new();
    for segment in parse_legacy(text) {
        let style = segment.style;
        let mut text = segment.text;
        if let Some(color) = style.color {
            text = color.console_color(&text).to_string();
        }
        if style.bold {
            text = text.bold().to_string();
        }
        if style.italic {
            text = text.italic().to_string();
        }
        if style.underlined {
            text = text.underline().to_string();
        }
        if style.strikethrough {
            text = text.strikethrough().to_string();
        }
        out += &text;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        parse_legacy, strip_formatting, translate_alternate_color_codes, LegacyStyle,
        ALT_COLOR_CHAR,
    };
    use crate::text::color::{Color, NamedColor, RGBColor};

    #[test]
    fn translate_codes() {
        let values = [
            ("&aSpeedy", "§aSpeedy"),
            ("&LBold &rplain", "§lBold §rplain"),
            ("&6&lGolden", "§6§lGolden"),
            ("no codes", "no codes"),
            ("&zunknown", "&zunknown"),
            ("trailing &", "trailing &"),
            ("&&a", "&§a"),
            ("Fish & Chips", "Fish & Chips"),
            ("&", "&"),
            ("", ""),
            ("ä&bü", "ä§bü"),
        ];

        for (input, expected) in values {
            assert_eq!(
                translate_alternate_color_codes(ALT_COLOR_CHAR, input),
                expected,
                "{input:?}"
            );
        }
    }

    #[test]
    fn strip() {
        assert_eq!(strip_formatting("§6§lGolden §rApple"), "Golden Apple");
        assert_eq!(strip_formatting("§zkept"), "§zkept");
        assert_eq!(strip_formatting("end§"), "end§");
    }

    #[test]
    fn segments() {
        let segments = parse_legacy("§aGreen §lBold§cRed");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "Green ");
        assert_eq!(
            segments[0].style.color,
            Some(Color::Named(NamedColor::Green))
        );
        assert!(!segments[0].style.bold);
        assert_eq!(segments[1].text, "Bold");
        assert!(segments[1].style.bold);
        assert_eq!(segments[2].text, "Red");
        // colors reset formatting
        assert!(!segments[2].style.bold);
    }

    #[test]
    fn hex_segments() {
        let segments = parse_legacy("§x§f§f§8§0§0§0Orange§rplain");
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].style.color,
            Some(Color::Rgb(RGBColor::new(255, 128, 0)))
        );
        assert_eq!(segments[1].style, LegacyStyle::default());
    }
}
