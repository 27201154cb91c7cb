//! Shared UI components for the arcade games.

use crate::arcade::Arcade;
use crate::core::Leaderboard;
use crate::games::{GameKind, Lifecycle};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (board/grid) - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create a standardized game layout with outer border.
///
/// Layout structure (shared by the Snake, Minesweeper and Tetris screens):
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area to use
/// * `title` - Title for the outer border (e.g., " Snake ")
/// * `border_color` - Color for the outer border
/// * `content_min_height` - Minimum height for the content area
/// * `info_panel_width` - Width of the info panel (typically 22-24)
///
/// # Returns
/// A `GameLayout` struct containing the areas for content, status bar, and info panel.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    // Outer border around entire game area
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: content area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    // Left side: content (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Space]", "Start"), ("[Esc]", "Menu")]`
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

    // Line 1: Status message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
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

/// Status bar for a game that is not running: the refusal notice if there is
/// one, otherwise what the next start costs.
pub fn render_start_status_bar(frame: &mut Frame, area: Rect, arcade: &Arcade, kind: GameKind) {
    if let Some(notice) = arcade.notice() {
        render_status_bar(
            frame,
            area,
            notice,
            Color::LightRed,
            &[("[Esc]", "Menu")],
        );
        return;
    }
    let label = start_label(arcade, kind);
    render_status_bar(
        frame,
        area,
        &label,
        Color::Yellow,
        &[("[Space]", "Start"), ("[Esc]", "Menu")],
    );
}

/// "Unlock for 50 binbucks" / "Play for 5 binbucks".
pub fn start_label(arcade: &Arcade, kind: GameKind) -> String {
    let fee = arcade.fee(kind);
    if fee.needs_unlock() {
        format!("Unlock for {} binbucks", fee.required_cost())
    } else {
        format!("Play for {} binbucks", fee.required_cost())
    }
}

/// Game result type for the shared banner.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
}

impl GameResultType {
    pub fn from_lifecycle(lifecycle: Lifecycle) -> Option<Self> {
        match lifecycle {
            Lifecycle::Won => Some(GameResultType::Win),
            Lifecycle::GameOver => Some(GameResultType::Loss),
            Lifecycle::Idle | Lifecycle::Playing => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
        }
    }
}

/// Render a compact game-over banner at the bottom of an area.
///
/// Does not clear the area, so the final board stays visible behind it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
    footer: &str,
) {
    let banner_height: u16 = 5;
    let banner_y = area.y + area.height.saturating_sub(banner_height);

    let banner_area = Rect {
        x: area.x,
        y: banner_y,
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let title_color = result_type.color();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(footer, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            "[Space] Play again  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A "Label: value" info panel line.
pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Balance plus what the next start of `kind` costs.
pub fn wallet_lines(arcade: &Arcade, kind: GameKind) -> Vec<Line<'static>> {
    let fee = arcade.fee(kind);
    let affordable = arcade.can_start(kind);
    vec![
        info_line(
            "Binbucks",
            arcade.balance().to_string(),
            Color::Rgb(255, 215, 0),
        ),
        info_line(
            if fee.needs_unlock() { "Unlock" } else { "Play" },
            fee.required_cost().to_string(),
            if affordable { Color::White } else { Color::Red },
        ),
    ]
}

/// Numbered high score rows, highlighting `highlight` if it is on the table.
pub fn leaderboard_lines(board: &Leaderboard, highlight: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "High Scores",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    for (i, entry) in board.entries().iter().enumerate() {
        let color = if highlight == Some(entry.name.as_str()) {
            Color::LightGreen
        } else {
            Color::White
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:<10}", entry.name), Style::default().fg(color)),
            Span::styled(format!("{:>5}", entry.score), Style::default().fg(color)),
        ]));
    }
    lines
}
