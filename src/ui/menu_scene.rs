//! Game-select menu rendering.

use super::game_common::start_label;
use crate::arcade::Arcade;
use crate::games::GameKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

fn blurb(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Snake => "Eat, grow, don't bite yourself.",
        GameKind::Minesweeper => "16x16 field, 40 mines.",
        GameKind::Tetris => "Clear rows for 100 points each.",
    }
}

/// Render the arcade menu.
pub fn render_menu(frame: &mut Frame, area: Rect, arcade: &Arcade) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Binbucks Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Balance
            Constraint::Min(3),    // Game list
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let balance = Paragraph::new(Line::from(vec![
        Span::styled("Binbucks: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            arcade.balance().to_string(),
            Style::default()
                .fg(Color::Rgb(255, 215, 0))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(balance, chunks[0]);

    let selected = arcade.menu.selected();
    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .map(|&kind| {
            let is_selected = kind == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let fee = arcade.fee(kind);
            let cost_color = if arcade.can_start(kind) {
                Color::Green
            } else {
                Color::Red
            };
            let lock = if fee.needs_unlock() { " [locked]" } else { "" };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}{:<12}", prefix, kind.name()), name_style),
                    Span::styled(start_label(arcade, kind), Style::default().fg(cost_color)),
                    Span::styled(lock, Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(Span::styled(
                    format!("    {}", blurb(kind)),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    let help = Paragraph::new("[↑/↓] Navigate  [Enter] Open  [Q/Esc] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
