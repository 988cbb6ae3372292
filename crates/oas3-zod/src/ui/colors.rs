use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, AnsiColor, Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// One color per role in the CLI output.
#[derive(Debug, Clone, Copy)]
struct Palette {
  timestamp: Color,
  primary: Color,
  accent: Color,
  info: Color,
  success: Color,
  label: Color,
  value: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const DARK: Palette = Palette {
  timestamp: rgb(118, 166, 166),
  primary: rgb(191, 126, 4),
  accent: rgb(166, 84, 55),
  info: rgb(118, 166, 166),
  success: rgb(118, 166, 166),
  label: rgb(217, 164, 4),
  value: rgb(242, 211, 56),
};

const LIGHT: Palette = Palette {
  timestamp: rgb(92, 62, 38),
  primary: rgb(70, 42, 25),
  accent: rgb(211, 99, 70),
  info: rgb(40, 111, 170),
  success: rgb(34, 142, 90),
  label: rgb(176, 103, 66),
  value: rgb(199, 146, 76),
};

const NO_COLOR: Palette = Palette {
  timestamp: Color::Reset,
  primary: Color::Reset,
  accent: Color::Reset,
  info: Color::Reset,
  success: Color::Reset,
  label: Color::Reset,
  value: Color::Reset,
};

pub struct Colors {
  palette: Palette,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    let palette = match (enabled, theme) {
      (false, _) => NO_COLOR,
      (true, Theme::Dark) => DARK,
      (true, Theme::Light) => LIGHT,
    };
    Self { palette }
  }

  pub const fn timestamp(&self) -> Color {
    self.palette.timestamp
  }

  pub const fn primary(&self) -> Color {
    self.palette.primary
  }

  pub const fn accent(&self) -> Color {
    self.palette.accent
  }

  pub const fn info(&self) -> Color {
    self.palette.info
  }

  pub const fn success(&self) -> Color {
    self.palette.success
  }

  pub const fn label(&self) -> Color {
    self.palette.label
  }

  pub const fn value(&self) -> Color {
    self.palette.value
  }

  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(to_clap(colors.label())))
      .literal(Style::new().fg_color(to_clap(colors.success())))
      .placeholder(Style::new().fg_color(to_clap(colors.info())))
      .error(Style::new().bold().fg_color(to_clap(colors.accent())))
      .valid(Style::new().fg_color(to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(to_clap(colors.accent())))
  }
}

const fn to_clap(color: Color) -> Option<ClapColor> {
  match color {
    Color::Black => Some(ClapColor::Ansi(AnsiColor::Black)),
    Color::Blue | Color::DarkBlue => Some(ClapColor::Ansi(AnsiColor::Blue)),
    Color::Cyan | Color::DarkCyan => Some(ClapColor::Ansi(AnsiColor::Cyan)),
    Color::DarkGreen | Color::Green => Some(ClapColor::Ansi(AnsiColor::Green)),
    Color::DarkGrey | Color::Grey => Some(ClapColor::Ansi(AnsiColor::BrightBlack)),
    Color::DarkMagenta | Color::Magenta => Some(ClapColor::Ansi(AnsiColor::Magenta)),
    Color::DarkRed | Color::Red => Some(ClapColor::Ansi(AnsiColor::Red)),
    Color::DarkYellow | Color::Yellow => Some(ClapColor::Ansi(AnsiColor::Yellow)),
    Color::White => Some(ClapColor::Ansi(AnsiColor::White)),
    Color::AnsiValue(val) => Some(ClapColor::Ansi256(Ansi256Color(val))),
    Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
    Color::Reset => None,
  }
}

/// Table cells take comfy-table's own color type.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Reset => ComfyColor::Reset,
    Color::Black => ComfyColor::Black,
    Color::DarkGrey => ComfyColor::DarkGrey,
    Color::Red => ComfyColor::Red,
    Color::DarkRed => ComfyColor::DarkRed,
    Color::Green => ComfyColor::Green,
    Color::DarkGreen => ComfyColor::DarkGreen,
    Color::Yellow => ComfyColor::Yellow,
    Color::DarkYellow => ComfyColor::DarkYellow,
    Color::Blue => ComfyColor::Blue,
    Color::DarkBlue => ComfyColor::DarkBlue,
    Color::Magenta => ComfyColor::Magenta,
    Color::DarkMagenta => ComfyColor::DarkMagenta,
    Color::Cyan => ComfyColor::Cyan,
    Color::DarkCyan => ComfyColor::DarkCyan,
    Color::White => ComfyColor::White,
    Color::Grey => ComfyColor::Grey,
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` is `fg;bg`; a background index of 8 or more is a light terminal.
fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  if let Ok(profile) = std::env::var("ITERM_PROFILE")
    && profile.to_lowercase().contains("light")
  {
    return Theme::Light;
  }

  Theme::Dark
}
