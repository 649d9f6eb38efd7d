//! Console reporting
//!
//! All user-facing status lines go through [`Reporter`]. How each kind of
//! message looks is decided by a [`StyleTable`] chosen once at startup.

use std::io::{self, Write};

use colored::{Color, Colorize};

/// Width of section banners
const BANNER_WIDTH: usize = 80;

/// Kinds of console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Header,
    Success,
    Error,
    Info,
    Warning,
    Emphasis,
}

/// Presentation of one message kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub label: Option<&'static str>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    const fn new(label: Option<&'static str>, color: Option<Color>, bold: bool) -> Self {
        Self { label, color, bold }
    }
}

/// Message kind to style lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTable {
    header: Style,
    success: Style,
    error: Style,
    info: Style,
    warning: Style,
    emphasis: Style,
}

impl StyleTable {
    /// ANSI colored output
    pub const fn colored() -> Self {
        Self {
            header: Style::new(None, Some(Color::BrightMagenta), true),
            success: Style::new(Some("[OK]"), Some(Color::BrightGreen), false),
            error: Style::new(Some("[ERROR]"), Some(Color::BrightRed), false),
            info: Style::new(Some("[INFO]"), Some(Color::BrightCyan), false),
            warning: Style::new(Some("[WARN]"), Some(Color::BrightYellow), false),
            emphasis: Style::new(None, None, true),
        }
    }

    /// Same labels, no escape codes
    pub const fn plain() -> Self {
        Self {
            header: Style::new(None, None, false),
            success: Style::new(Some("[OK]"), None, false),
            error: Style::new(Some("[ERROR]"), None, false),
            info: Style::new(Some("[INFO]"), None, false),
            warning: Style::new(Some("[WARN]"), None, false),
            emphasis: Style::new(None, None, false),
        }
    }

    pub fn style(&self, kind: MessageKind) -> Style {
        match kind {
            MessageKind::Header => self.header,
            MessageKind::Success => self.success,
            MessageKind::Error => self.error,
            MessageKind::Info => self.info,
            MessageKind::Warning => self.warning,
            MessageKind::Emphasis => self.emphasis,
        }
    }

    /// Apply the style for `kind` to `message`
    pub fn render(&self, kind: MessageKind, message: &str) -> String {
        let style = self.style(kind);
        let text = match style.label {
            Some(label) => format!("{} {}", label, message),
            None => message.to_string(),
        };

        if style.color.is_none() && !style.bold {
            return text;
        }

        let mut painted = text.as_str().normal();
        if let Some(color) = style.color {
            painted = painted.color(color);
        }
        if style.bold {
            painted = painted.bold();
        }
        painted.to_string()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::colored()
    }
}

/// Writes styled progress and summary lines.
///
/// Console write errors are ignored.
pub struct Reporter<W: Write = io::Stdout> {
    out: W,
    styles: StyleTable,
}

impl Reporter<io::Stdout> {
    pub fn stdout(styles: StyleTable) -> Self {
        Self::new(io::stdout(), styles)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, styles: StyleTable) -> Self {
        Self { out, styles }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner with the message centered between two rules
    pub fn header(&mut self, message: &str) {
        let rule = "=".repeat(BANNER_WIDTH);
        let centered = format!("{:^width$}", message, width = BANNER_WIDTH);
        let rule = self.styles.render(MessageKind::Header, &rule);
        let centered = self.styles.render(MessageKind::Header, &centered);
        let _ = writeln!(self.out, "\n{}\n{}\n{}\n", rule, centered, rule);
    }

    pub fn success(&mut self, message: &str) {
        self.emit(MessageKind::Success, message);
    }

    pub fn error(&mut self, message: &str) {
        self.emit(MessageKind::Error, message);
    }

    pub fn info(&mut self, message: &str) {
        self.emit(MessageKind::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.emit(MessageKind::Warning, message);
    }

    pub fn emphasis(&mut self, message: &str) {
        self.emit(MessageKind::Emphasis, message);
    }

    /// Unstyled line
    pub fn line(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        let rendered = self.styles.render(kind, message);
        let _ = writeln!(self.out, "{}", rendered);
    }
}
