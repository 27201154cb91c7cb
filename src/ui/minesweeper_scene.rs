//! Minesweeper game UI rendering.

use super::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_start_status_bar, render_status_bar, wallet_lines, GameResultType,
};
use crate::arcade::Arcade;
use crate::core::Position;
use crate::games::{CellView, GameKind, Lifecycle, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the minesweeper game scene.
pub fn render_minesweeper_scene(frame: &mut Frame, area: Rect, arcade: &Arcade) {
    let snap = arcade.snapshot(GameKind::Minesweeper);
    let layout = create_game_layout(frame, area, " Minesweeper ", Color::Yellow, 10, 24);

    let cursor = (snap.lifecycle == Lifecycle::Playing).then_some(arcade.minesweeper.cursor);
    render_grid(frame, layout.content, &snap, cursor);

    match snap.lifecycle {
        Lifecycle::Idle => {
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Minesweeper)
        }
        Lifecycle::Playing => render_status_bar(
            frame,
            layout.status_bar,
            "Sweeping...",
            Color::Green,
            &[
                ("[Arrows]", "Move"),
                ("[Space]", "Reveal"),
                ("[F]", "Flag"),
                ("[Esc]", "Menu"),
            ],
        ),
        Lifecycle::GameOver | Lifecycle::Won => {
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Minesweeper);
            if let Some(result) = GameResultType::from_lifecycle(snap.lifecycle) {
                render_result_banner(frame, layout.content, result, &snap);
            }
        }
    }

    render_info_panel(frame, layout.info_panel, arcade, &snap);
}

/// Each cell is 2 chars wide, 1 char tall, centred in `area`.
fn render_grid(frame: &mut Frame, area: Rect, snap: &Snapshot, cursor: Option<Position>) {
    let grid_width = (snap.width * 2) as u16;
    let grid_height = snap.height as u16;

    let x_offset = area.x + (area.width.saturating_sub(grid_width)) / 2;
    let y_offset = area.y + (area.height.saturating_sub(grid_height)) / 2;

    for (y, row) in snap.cells.iter().enumerate() {
        let row_y = y_offset + y as u16;
        if row_y >= area.y + area.height {
            break;
        }

        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .map(|(x, &cell)| {
                let (text, color) = cell_display(cell);
                let mut style = Style::default().fg(color);
                if cursor == Some(Position::new(x as i16, y as i16)) {
                    style = style.bg(Color::DarkGray);
                }
                Span::styled(text, style)
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, row_y, grid_width.min(area.width), 1),
        );
    }
}

fn cell_display(cell: CellView) -> (&'static str, Color) {
    match cell {
        CellView::Flagged => ("F ", Color::Red),
        CellView::Mine => ("* ", Color::Red),
        CellView::Open(0) => (". ", Color::DarkGray),
        CellView::Open(1) => ("1 ", Color::Blue),
        CellView::Open(2) => ("2 ", Color::Green),
        CellView::Open(3) => ("3 ", Color::Red),
        CellView::Open(4) => ("4 ", Color::Magenta),
        CellView::Open(5) => ("5 ", Color::Yellow),
        CellView::Open(6) => ("6 ", Color::Cyan),
        CellView::Open(7) => ("7 ", Color::Gray),
        CellView::Open(8) => ("8 ", Color::White),
        CellView::Open(_) => ("? ", Color::White),
        _ => ("# ", Color::Gray),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, arcade: &Arcade, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);

    let flag_color = if usize::from(snap.flags_placed) > snap.mines {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = wallet_lines(arcade, GameKind::Minesweeper);
    lines.push(Line::from(""));
    lines.push(info_line(
        "Grid",
        format!("{}x{}", snap.width, snap.height),
        Color::White,
    ));
    lines.push(info_line(
        "Flags",
        format!("{}/{}", snap.flags_placed, snap.mines),
        flag_color,
    ));
    lines.push(info_line(
        "Time",
        arcade.minesweeper.clock_display(),
        Color::Cyan,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result_banner(frame: &mut Frame, area: Rect, result: GameResultType, snap: &Snapshot) {
    let (title, message) = match result {
        GameResultType::Win => ("CLEARED", format!("Every safe cell in {}s", snap.elapsed_secs)),
        GameResultType::Loss => ("BOOM", "You hit a mine".to_string()),
    };
    render_game_over_banner(frame, area, result, title, &message, "");
}
