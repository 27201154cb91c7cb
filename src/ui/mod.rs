//! Terminal rendering. Scenes read engine snapshots and never mutate state.

pub mod game_common;
pub mod menu_scene;
pub mod minesweeper_scene;
pub mod pixel_board;
pub mod snake_scene;
pub mod tetris_scene;

use crate::arcade::{Arcade, Screen};
use crate::games::GameKind;
use ratatui::Frame;

/// Draw whichever screen the arcade is on.
pub fn draw(frame: &mut Frame, arcade: &Arcade) {
    let area = frame.size();
    match arcade.screen() {
        Screen::Menu => menu_scene::render_menu(frame, area, arcade),
        Screen::Game(GameKind::Snake) => snake_scene::render_snake_scene(frame, area, arcade),
        Screen::Game(GameKind::Minesweeper) => {
            minesweeper_scene::render_minesweeper_scene(frame, area, arcade)
        }
        Screen::Game(GameKind::Tetris) => tetris_scene::render_tetris_scene(frame, area, arcade),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MinigameInput;
    use ratatui::{backend::TestBackend, Terminal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn screen_text(arcade: &Arcade) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, arcade)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_menu_lists_games_and_balance() {
        let arcade = Arcade::new(85, "Tester", StdRng::seed_from_u64(1));
        let text = screen_text(&arcade);
        assert!(text.contains("Binbucks Arcade"));
        assert!(text.contains("85"));
        assert!(text.contains("Snake"));
        assert!(text.contains("Minesweeper"));
        assert!(text.contains("Tetris"));
    }

    #[test]
    fn test_every_game_screen_draws_in_every_state() {
        let mut arcade = Arcade::new(500, "Tester", StdRng::seed_from_u64(2));
        for kind in GameKind::ALL {
            arcade.open(kind);
            screen_text(&arcade);
            assert!(arcade.handle_game_input(MinigameInput::Primary));
            screen_text(&arcade);
            for _ in 0..200 {
                arcade.tick(500);
            }
            screen_text(&arcade);
            arcade.back_to_menu();
        }
    }

    #[test]
    fn test_refusal_notice_is_shown() {
        let mut arcade = Arcade::new(10, "Tester", StdRng::seed_from_u64(3));
        arcade.open(GameKind::Tetris);
        assert!(!arcade.handle_game_input(MinigameInput::Primary));
        assert!(screen_text(&arcade).contains("You need 75 binbucks to unlock Tetris!"));
    }
}
