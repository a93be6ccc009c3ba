//! Terminal renderer using crossterm
//!
//! Draws the terminal window: a chrome bar with the prompt title, the
//! scrollback, the input row with ghost-text completion, and the contact
//! form overlay with the owner's direct contact details when it is open.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::layout::{self, RowKind, PROMPT};
use crate::config::{Color, ColorScheme};
use crate::contact::{ContactForm, Field, FormStatus};
use crate::content::Profile;
use crate::core::Session;

const KEY_HINTS: &str = "Tab complete  ↑↓ history  Esc skip  F2 contact  ^C quit";
const FORM_TITLE: &str = "contact-form.sh";
const FORM_HINTS: &str = "Tab next field  Enter send  Esc close";
const FORM_MAX_WIDTH: u16 = 64;

/// Rows taken by the chrome bar and the input row
pub const CHROME_ROWS: u16 = 2;

/// Everything the renderer needs for one frame
pub struct View<'a> {
    pub session: &'a Session,
    /// Contact details listed beside the form
    pub profile: &'a Profile,
    pub form: &'a ContactForm,
    pub scheme: &'a ColorScheme,
    pub prompt: &'a str,
    /// Rows scrolled up from the tail
    pub scroll: usize,
}

/// Terminal renderer
pub struct Renderer {
    /// Whether the terminal has been initialized
    initialized: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { initialized: false }
    }

    /// Current terminal size (cols, rows)
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.initialized = true;
        debug!("Renderer initialized");
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, SetAttribute(Attribute::Reset));
        let _ = execute!(stdout, Show, EnableLineWrap, LeaveAlternateScreen);
        let _ = stdout.flush();
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Set the terminal window title
    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(io::stdout(), SetTitle(title))
    }

    /// Draw one frame
    pub fn render(&mut self, view: &View) -> io::Result<()> {
        let (cols, rows) = Self::size()?;
        let stdout = io::stdout();
        let mut out = io::BufWriter::with_capacity(65536, stdout.lock());

        // Begin synchronized update (reduces flicker)
        write!(out, "\x1b[?2026h")?;
        queue!(out, Hide)?;

        Self::draw_chrome(&mut out, view, cols)?;
        Self::draw_scrollback(&mut out, view, cols, rows)?;
        let mut cursor = Self::draw_input(&mut out, view, cols, rows)?;
        if view.form.visible {
            cursor = Self::draw_form(&mut out, view, cols, rows)?;
        }

        queue!(out, ResetColor, MoveTo(cursor.0, cursor.1), Show)?;
        write!(out, "\x1b[?2026l")?;
        out.flush()
    }

    fn fill_row<W: Write>(out: &mut W, row: u16, bg: Color) -> io::Result<()> {
        queue!(
            out,
            MoveTo(0, row),
            SetBackgroundColor(bg.to_crossterm()),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn draw_chrome<W: Write>(out: &mut W, view: &View, cols: u16) -> io::Result<()> {
        let scheme = view.scheme;
        let width = cols as usize;
        Self::fill_row(out, 0, scheme.chrome_bg)?;
        queue!(out, MoveTo(1, 0))?;
        for dot in scheme.dots {
            queue!(out, SetForegroundColor(dot.to_crossterm()), Print("● "))?;
        }

        let title = format!(" {}", view.prompt);
        let used = 7 + title.width();
        queue!(
            out,
            SetForegroundColor(scheme.chrome_fg.to_crossterm()),
            Print(layout::clip(&title, width.saturating_sub(7)))
        )?;

        let hints_width = KEY_HINTS.width();
        if used + hints_width + 2 <= width {
            let col = (width - hints_width - 1) as u16;
            queue!(out, MoveTo(col, 0), Print(KEY_HINTS))?;
        }
        Ok(())
    }

    fn draw_scrollback<W: Write>(out: &mut W, view: &View, cols: u16, rows: u16) -> io::Result<()> {
        let scheme = view.scheme;
        let height = rows.saturating_sub(CHROME_ROWS) as usize;
        let all = layout::scrollback_rows(view.session.lines(), cols as usize);
        let visible = layout::window(&all, height, view.scroll);

        for i in 0..height {
            let y = (i + 1) as u16;
            Self::fill_row(out, y, scheme.background)?;
            let Some(row) = visible.get(i) else {
                continue;
            };
            match row.kind {
                RowKind::Input => queue!(
                    out,
                    SetForegroundColor(scheme.prompt.to_crossterm()),
                    Print(PROMPT),
                    SetForegroundColor(scheme.input.to_crossterm()),
                    Print(&row.text)
                )?,
                RowKind::Output => queue!(
                    out,
                    SetForegroundColor(scheme.output.to_crossterm()),
                    Print(&row.text)
                )?,
            }
        }

        if view.scroll > 0 && height > 0 {
            let indicator = format!("[↑ {} lines]", view.scroll.min(layout::max_scroll(all.len(), height)));
            let col = (cols as usize).saturating_sub(indicator.width() + 1) as u16;
            queue!(
                out,
                MoveTo(col, 1),
                SetForegroundColor(scheme.chrome_fg.to_crossterm()),
                Print(indicator)
            )?;
        }
        Ok(())
    }

    /// Returns the cursor position at the end of the typed text
    fn draw_input<W: Write>(out: &mut W, view: &View, cols: u16, rows: u16) -> io::Result<(u16, u16)> {
        let scheme = view.scheme;
        let y = rows.saturating_sub(1);
        let width = cols as usize;
        let session = view.session;
        Self::fill_row(out, y, scheme.background)?;

        let avail = width.saturating_sub(PROMPT.width());
        // Keep the tail of long input in view
        let input = &session.input;
        let mut shown = input.as_str();
        while shown.width() >= avail && !shown.is_empty() {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }

        let prompt_color = if session.is_revealing() {
            scheme.suggestion
        } else {
            scheme.prompt
        };
        queue!(
            out,
            SetForegroundColor(prompt_color.to_crossterm()),
            Print(PROMPT),
            SetForegroundColor(scheme.input.to_crossterm()),
            Print(shown)
        )?;
        let cursor_col = (PROMPT.width() + shown.width()).min(width.saturating_sub(1)) as u16;

        if let Some(suggestion) = session.suggestion() {
            let typed = input.trim().chars().count();
            let ghost: String = suggestion.chars().skip(typed).collect();
            let room = avail.saturating_sub(shown.width() + 1);
            queue!(
                out,
                SetForegroundColor(scheme.suggestion.to_crossterm()),
                Print(layout::clip(&ghost, room))
            )?;
        }
        Ok((cursor_col, y))
    }

    /// Returns the cursor position inside the focused field
    fn draw_form<W: Write>(out: &mut W, view: &View, cols: u16, rows: u16) -> io::Result<(u16, u16)> {
        let scheme = view.scheme;
        let form = view.form;
        let width = FORM_MAX_WIDTH.min(cols.saturating_sub(4)).max(20);
        let inner = (width - 4) as usize;

        let mut lines: Vec<(Color, String)> = Vec::with_capacity(18);
        lines.push((scheme.chrome_fg, format!("● ● ●  {}", FORM_TITLE)));
        lines.push((scheme.form_fg, String::new()));
        // (column, line) of the cursor inside the box
        let mut cursor = (0u16, 2u16);
        for field in Field::ALL {
            let marker = if form.focus == field { "▸" } else { " " };
            lines.push((scheme.form_label, format!("{} const {} =", marker, field.label())));
            let value = form.value(field);
            let mut shown = value;
            while shown.width() > inner.saturating_sub(4) && !shown.is_empty() {
                let mut chars = shown.chars();
                chars.next();
                shown = chars.as_str();
            }
            let color = if form.focus == field {
                cursor = (2 + shown.width() as u16, lines.len() as u16);
                scheme.form_focus
            } else {
                scheme.form_fg
            };
            lines.push((color, format!("  {}", shown)));
        }
        lines.push((scheme.form_fg, String::new()));
        let status_color = match form.status {
            FormStatus::Idle => scheme.form_focus,
            FormStatus::Sent { .. } => scheme.status_ok,
            FormStatus::Failed(_) => scheme.status_err,
        };
        lines.push((status_color, form.status.label().to_string()));
        if let FormStatus::Failed(reason) = &form.status {
            lines.push((scheme.status_err, reason.clone()));
        } else {
            lines.push((scheme.form_fg, String::new()));
        }
        for detail in contact_details(view.profile) {
            lines.push((scheme.form_label, detail));
        }
        lines.push((scheme.form_fg, String::new()));
        lines.push((scheme.chrome_fg, FORM_HINTS.to_string()));

        let height = (lines.len() as u16 + 2).min(rows.max(3));
        let left = cols.saturating_sub(width) / 2;
        let top = rows.saturating_sub(height) / 2;
        let cursor = (left + 2 + cursor.0, top + 1 + cursor.1);

        let border = scheme.form_border.to_crossterm();
        let bg = scheme.form_bg.to_crossterm();
        let horizontal = "─".repeat((width - 2) as usize);
        queue!(
            out,
            SetBackgroundColor(bg),
            SetForegroundColor(border),
            MoveTo(left, top),
            Print(format!("┌{}┐", horizontal))
        )?;
        for i in 0..height.saturating_sub(2) {
            let (color, text) = lines
                .get(i as usize)
                .map(|(c, t)| (*c, t.as_str()))
                .unwrap_or((scheme.form_fg, ""));
            let text = layout::clip(text, inner);
            let pad = inner - text.width();
            queue!(
                out,
                MoveTo(left, top + 1 + i),
                SetForegroundColor(border),
                Print("│ "),
                SetForegroundColor(color.to_crossterm()),
                Print(text),
                Print(" ".repeat(pad)),
                SetForegroundColor(border),
                Print(" │")
            )?;
        }
        queue!(
            out,
            MoveTo(left, top + height - 1),
            Print(format!("└{}┘", horizontal))
        )?;
        Ok(cursor)
    }
}

/// Direct contact lines shown under the form
fn contact_details(profile: &Profile) -> [String; 3] {
    [
        format!("📧 {}", profile.email),
        format!("📞 {}", profile.phone),
        format!("🔗 {}", profile.linkedin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_contact_details_from_profile() {
        let profile = ContentStore::builtin().profile;
        let details = contact_details(&profile);
        assert_eq!(details[0], "📧 amulyakumar662@gmail.com");
        assert_eq!(details[1], "📞 +91-7438850195");
        assert!(details[2].ends_with("linkedin.com/in/amulya-kumar-senapati-a64243225"));
    }
}
