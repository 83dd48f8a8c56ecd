//! TUI rendering
//!
//! Lays the calculator out as a display strip over the keypad with a
//! key-binding hint line at the bottom. Rendering reads the app state
//! only; nothing here mutates the engine.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the UI for the current app state, with the most recent
    /// key highlighted on the keypad.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        let mut keypad = Keypad::new();
        if let Some(key) = app.last_key() {
            keypad.highlight_key(key);
        }
        Self { app, keypad }
    }

    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Min(12),   // Keypad
                Constraint::Length(3), // Help
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let pending = self
            .app
            .pending_symbol()
            .map_or(String::new(), |symbol| format!(" {symbol} "));

        let line = Line::from(vec![
            Span::styled(pending, Style::default().fg(Color::Yellow)),
            Span::styled(
                self.app.display_formatted(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let help = Line::from(vec![
            Span::styled("0-9 . + - * / = ", Style::default().fg(Color::White)),
            Span::raw("keys  "),
            Span::styled("%", Style::default().fg(Color::Cyan)),
            Span::raw(" percent  "),
            Span::styled("~", Style::default().fg(Color::Cyan)),
            Span::raw(" sign  "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" clear  "),
            Span::styled("Ctrl+Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(help)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Self::create_layout(area);
        if chunks.len() < 3 {
            return;
        }

        self.render_display(chunks[0], buf);
        KeypadWidget::new(&self.keypad)
            .clear_label(self.app.clear_label())
            .render(chunks[1], buf);
        Self::render_help(chunks[2], buf);
    }
}
