//! Snake game UI rendering.

use super::game_common::{
    create_game_layout, info_line, leaderboard_lines, render_game_over_banner,
    render_info_panel_frame, render_start_status_bar, render_status_bar, wallet_lines,
    GameResultType,
};
use super::pixel_board::{render_prompt, PixelBoard, FULL_BLOCK};
use crate::arcade::Arcade;
use crate::games::{CellView, GameKind, Lifecycle, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_COLOR: Color = Color::Rgb(50, 200, 50);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Render the Snake game scene.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, arcade: &Arcade) {
    let snap = arcade.snapshot(GameKind::Snake);
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 12, 24);

    let pixels = pixels(&snap);
    let header = format!("Score: {}", snap.score);
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
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Snake);
        }
        Lifecycle::Playing => render_status_bar(
            frame,
            layout.status_bar,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[Esc]", "Menu")],
        ),
        Lifecycle::GameOver | Lifecycle::Won => {
            render_start_status_bar(frame, layout.status_bar, arcade, GameKind::Snake);
            render_snake_game_over(frame, layout.content, arcade, &snap);
        }
    }

    render_info_panel(frame, layout.info_panel, arcade, &snap);
}

fn pixels(snap: &Snapshot) -> Vec<Vec<Option<Color>>> {
    snap.cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    CellView::SnakeHead => Some(HEAD_COLOR),
                    CellView::SnakeBody => Some(BODY_COLOR),
                    CellView::Food => Some(FOOD_COLOR),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

fn render_info_panel(frame: &mut Frame, area: Rect, arcade: &Arcade, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    let game = &arcade.snake;

    let mut lines: Vec<Line> = wallet_lines(arcade, GameKind::Snake);
    lines.push(info_line("Score", snap.score.to_string(), Color::White));
    lines.push(info_line(
        "Length",
        game.len().to_string(),
        Color::White,
    ));
    lines.push(Line::from(""));
    lines.extend(leaderboard_lines(
        &game.leaderboard,
        game.new_high_score.then_some(game.player_name.as_str()),
    ));
    lines.push(Line::from(""));
    for (color, label) in [(HEAD_COLOR, "Head"), (BODY_COLOR, "Body"), (FOOD_COLOR, "Food")] {
        lines.push(Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_snake_game_over(frame: &mut Frame, area: Rect, arcade: &Arcade, snap: &Snapshot) {
    let message = format!("Final score {}", snap.score);
    let footer = if arcade.snake.new_high_score {
        "New high score!"
    } else {
        ""
    };
    render_game_over_banner(
        frame,
        area,
        GameResultType::Loss,
        "GAME OVER",
        &message,
        footer,
    );
}
