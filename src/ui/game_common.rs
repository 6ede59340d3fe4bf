//! Shared UI components: framed layout, status bar, centered labels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Smallest outer area the game will draw into.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, inside the outer border
    pub content: Rect,
    /// Status bar (2 lines) under the play field
    pub status_bar: Rect,
}

/// Create the framed layout:
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render a status bar: status message on line 1, key hints on line 2.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Jump")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Draw `text` horizontally centered on row `y` of `area`. Rows outside the
/// area are skipped.
pub fn render_centered_label(frame: &mut Frame, area: Rect, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.y + area.height {
        return;
    }
    let width = (text.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style))),
        Rect::new(x, y, width, 1),
    );
}

/// Replace everything with a resize hint when the terminal is too small.
/// Returns true if the hint was drawn.
pub fn render_too_small(frame: &mut Frame, area: Rect) -> bool {
    if area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT {
        return false;
    }

    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Need {}x{}, have {}x{}", MIN_WIDTH, MIN_HEIGHT, area.width, area.height),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    let height = area.height.min(2);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, height),
    );
    true
}
