//! Tetris game UI rendering.

use super::game_common::{
    create_game_layout, info_line, leaderboard_lines, render_game_over_banner,
    render_info_panel_frame, render_start_status_bar, render_status_bar, wallet_lines,
    GameResultType,
};
use super::pixel_board::{render_prompt, PixelBoard};
use crate::arcade::Arcade;
use crate::games::tetris::PieceColor;
use crate::games::{CellView, GameKind, Lifecycle, Snapshot};
use ratatui::{layout::Rect, style::Color, text::Line, widgets::Paragraph, Frame};

const EMPTY_BG: Color = Color::Rgb(20, 20, 28);

fn rgb(c: PieceColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Render the Tetris game scene.
pub fn render_tetris_scene(frame: &mut Frame, area: Rect, arcade: &Arcade) {
    let snap = arcade.snapshot(GameKind::Tetris);
    let layout = create_game_layout(frame, area, " Tetris ", Color::Magenta, 12, 24);

    let pixels: Vec<Vec<Option<Color>>> = snap
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match *cell {
                    CellView::Locked(c) | CellView::Falling(c) => Some(rgb(c)),
                    _ => None,
                })
                .collect()
        })
        .collect();
    let header = format!("Lines: {}", arcade.tetris.lines_cleared);
    PixelBoard {
        pixels: &pixels,
        empty: EMPTY_BG,
        header: &header,
        cell_width: 2,
    }
    .render(frame, layout.content);

    match snap.lifecycle {
        Lifecycle::Idle => {
            render_prompt(frame, layout.content, "[ Press Space to Start ]", Color::White);
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Tetris);
        }
        Lifecycle::Playing => render_status_bar(
            frame,
            layout.status_bar,
            "Stack them up",
            Color::Magenta,
            &[
                ("[←/→]", "Move"),
                ("[↑]", "Rotate"),
                ("[↓]", "Drop"),
                ("[Esc]", "Menu"),
            ],
        ),
        Lifecycle::GameOver | Lifecycle::Won => {
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Tetris);
            let message = format!("Final score {}", snap.score);
            render_game_over_banner(
                frame,
                layout.content,
                GameResultType::Loss,
                "GAME OVER",
                &message,
                "",
            );
        }
    }

    render_info_panel(frame, layout.info_panel, arcade, &snap);
}

fn render_info_panel(frame: &mut Frame, area: Rect, arcade: &Arcade, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines: Vec<Line> = wallet_lines(arcade, GameKind::Tetris);
    lines.push(info_line("Score", snap.score.to_string(), Color::White));
    lines.push(info_line(
        "Lines",
        arcade.tetris.lines_cleared.to_string(),
        Color::White,
    ));
    if let Some(piece) = &arcade.tetris.piece {
        lines.push(info_line("Piece", format!("{:?}", piece.kind), rgb(piece.color)));
    }
    lines.push(Line::from(""));
    lines.extend(leaderboard_lines(&arcade.tetris.leaderboard, None));

    frame.render_widget(Paragraph::new(lines), inner);
}
