//! The arcade controller.
//!
//! Owns the binbucks wallet, the three game engines and the current screen.
//! Every paid start goes through [`Arcade::start`], which is the only place
//! the wallet is debited.

use crate::core::{
    Charge, EntryFee, Wallet, MINESWEEPER_UNLOCK_COST, PLAY_COST, TETRIS_UNLOCK_COST,
};
use crate::games::{
    minesweeper, snake, tetris, GameKind, MinesweeperGame, MinigameInput, Snapshot, SnakeGame,
    TetrisGame,
};
use crate::input::MenuInput;
use crate::utils::ArcadeConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game(GameKind),
}

/// Game-select menu cursor.
#[derive(Debug, Clone, Default)]
pub struct ArcadeMenu {
    pub selected_index: usize,
}

impl ArcadeMenu {
    pub fn selected(&self) -> GameKind {
        GameKind::from_index(self.selected_index)
    }

    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < GameKind::ALL.len() {
            self.selected_index += 1;
        }
    }
}

/// Entry fees for the three games.
#[derive(Debug, Clone)]
struct Fees {
    snake: EntryFee,
    minesweeper: EntryFee,
    tetris: EntryFee,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            snake: EntryFee::play(PLAY_COST),
            minesweeper: EntryFee::locked(MINESWEEPER_UNLOCK_COST, PLAY_COST),
            tetris: EntryFee::locked(TETRIS_UNLOCK_COST, PLAY_COST),
        }
    }
}

impl Fees {
    fn get(&self, kind: GameKind) -> &EntryFee {
        match kind {
            GameKind::Snake => &self.snake,
            GameKind::Minesweeper => &self.minesweeper,
            GameKind::Tetris => &self.tetris,
        }
    }

    fn get_mut(&mut self, kind: GameKind) -> &mut EntryFee {
        match kind {
            GameKind::Snake => &mut self.snake,
            GameKind::Minesweeper => &mut self.minesweeper,
            GameKind::Tetris => &mut self.tetris,
        }
    }
}

pub struct Arcade {
    wallet: Wallet,
    fees: Fees,
    pub snake: SnakeGame,
    pub minesweeper: MinesweeperGame,
    pub tetris: TetrisGame,
    screen: Screen,
    pub menu: ArcadeMenu,
    /// One-line message for the player, e.g. why a start was refused.
    notice: Option<String>,
    rng: StdRng,
}

impl Arcade {
    pub fn new(starting_balance: i64, player_name: &str, rng: StdRng) -> Self {
        Self {
            wallet: Wallet::new(starting_balance),
            fees: Fees::default(),
            snake: SnakeGame::new().with_player_name(player_name),
            minesweeper: MinesweeperGame::default(),
            tetris: TetrisGame::new(),
            screen: Screen::Menu,
            menu: ArcadeMenu::default(),
            notice: None,
            rng,
        }
    }

    pub fn from_config(config: &ArcadeConfig) -> Self {
        log::info!(
            "arcade opened with {} binbucks for {}",
            config.starting_balance,
            config.player_name
        );
        Self::new(
            config.starting_balance,
            &config.player_name,
            StdRng::from_entropy(),
        )
    }

    pub fn balance(&self) -> i64 {
        self.wallet.balance()
    }

    pub fn fee(&self, kind: GameKind) -> &EntryFee {
        self.fees.get(kind)
    }

    /// Whether the wallet covers the next start of `kind`.
    pub fn can_start(&self, kind: GameKind) -> bool {
        self.fees.get(kind).can_start(&self.wallet)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_playing(&self, kind: GameKind) -> bool {
        match kind {
            GameKind::Snake => self.snake.phase.is_playing(),
            GameKind::Minesweeper => self.minesweeper.phase.is_playing(),
            GameKind::Tetris => self.tetris.phase.is_playing(),
        }
    }

    pub fn snapshot(&self, kind: GameKind) -> Snapshot {
        match kind {
            GameKind::Snake => self.snake.snapshot(),
            GameKind::Minesweeper => self.minesweeper.snapshot(),
            GameKind::Tetris => self.tetris.snapshot(),
        }
    }

    /// Show a game's screen without starting it.
    ///
    /// A run of another game is abandoned, since it would stop ticking.
    pub fn open(&mut self, kind: GameKind) {
        self.notice = None;
        self.switch_to(kind);
    }

    /// Leave the current game, abandoning a run in progress.
    pub fn back_to_menu(&mut self) {
        if let Screen::Game(kind) = self.screen {
            self.abandon(kind);
        }
        self.notice = None;
        self.screen = Screen::Menu;
    }

    /// Stop every running game. Called before the arcade is dropped.
    pub fn shutdown(&mut self) {
        for kind in GameKind::ALL {
            self.abandon(kind);
        }
        log::info!("arcade closed with {} binbucks", self.balance());
    }

    /// Pay for and start `kind`. Returns true if the game started.
    ///
    /// Refused, with no debit and the engine untouched, while the game is
    /// already running or when the balance is below the next start's cost.
    /// A started game is put on screen.
    pub fn start(&mut self, kind: GameKind) -> bool {
        if self.is_playing(kind) {
            return false;
        }

        let fee = self.fees.get_mut(kind);
        let required = fee.required_cost();
        let action = if fee.needs_unlock() { "unlock" } else { "play" };
        let Some(charge) = fee.charge(&mut self.wallet) else {
            log::debug!(
                "{}: start refused, need {} to {}, have {}",
                kind.name(),
                required,
                action,
                self.wallet.balance()
            );
            self.notice = Some(format!(
                "You need {} binbucks to {} {}!",
                required,
                action,
                kind.name()
            ));
            return false;
        };

        match charge {
            Charge::Unlocked(cost) => log::info!(
                "{}: unlocked for {}, balance {}",
                kind.name(),
                cost,
                self.wallet.balance()
            ),
            Charge::Played(cost) => log::info!(
                "{}: paid {}, balance {}",
                kind.name(),
                cost,
                self.wallet.balance()
            ),
        }
        self.notice = None;
        self.switch_to(kind);

        match kind {
            GameKind::Snake => snake::start_game(&mut self.snake, &mut self.rng),
            GameKind::Minesweeper => minesweeper::start_game(&mut self.minesweeper, &mut self.rng),
            GameKind::Tetris => tetris::start_game(&mut self.tetris, &mut self.rng),
        }
        true
    }

    /// Advance the game on screen by `dt_ms`. Games off screen never tick.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        match self.screen {
            Screen::Menu => false,
            Screen::Game(GameKind::Snake) => snake::tick_snake(&mut self.snake, dt_ms, &mut self.rng),
            Screen::Game(GameKind::Minesweeper) => {
                minesweeper::tick_minesweeper(&mut self.minesweeper, dt_ms)
            }
            Screen::Game(GameKind::Tetris) => {
                tetris::tick_tetris(&mut self.tetris, dt_ms, &mut self.rng)
            }
        }
    }

    /// Handle a menu key. Returns false when the player asked to quit.
    pub fn handle_menu_input(&mut self, input: MenuInput) -> bool {
        match input {
            MenuInput::Up => self.menu.navigate_up(),
            MenuInput::Down => self.menu.navigate_down(),
            MenuInput::Select => self.open(self.menu.selected()),
            MenuInput::Quit => return false,
            MenuInput::Other => {}
        }
        true
    }

    /// Handle a key on a game screen. Returns true if anything changed.
    ///
    /// Esc leaves the game. The primary action starts a paid run when the
    /// game is not playing; everything else goes to the engine.
    pub fn handle_game_input(&mut self, input: MinigameInput) -> bool {
        let Screen::Game(kind) = self.screen else {
            return false;
        };
        if input == MinigameInput::Cancel {
            self.back_to_menu();
            return true;
        }
        if !self.is_playing(kind) {
            return input == MinigameInput::Primary && self.start(kind);
        }
        match kind {
            GameKind::Snake => snake::process_input(&mut self.snake, input),
            GameKind::Minesweeper => minesweeper::process_input(&mut self.minesweeper, input),
            GameKind::Tetris => tetris::process_input(&mut self.tetris, input, &mut self.rng),
        }
    }

    fn switch_to(&mut self, kind: GameKind) {
        if let Screen::Game(current) = self.screen {
            if current != kind {
                self.abandon(current);
            }
        }
        self.menu.selected_index = kind.index();
        self.screen = Screen::Game(kind);
    }

    fn abandon(&mut self, kind: GameKind) {
        match kind {
            GameKind::Snake => snake::abandon(&mut self.snake),
            GameKind::Minesweeper => minesweeper::abandon(&mut self.minesweeper),
            GameKind::Tetris => tetris::abandon(&mut self.tetris),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Lifecycle, Phase};

    fn arcade(balance: i64) -> Arcade {
        Arcade::new(balance, "Tester", StdRng::seed_from_u64(99))
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut arcade = arcade(85);
        arcade.handle_menu_input(MenuInput::Up);
        assert_eq!(arcade.menu.selected(), GameKind::Snake);
        for _ in 0..5 {
            arcade.handle_menu_input(MenuInput::Down);
        }
        assert_eq!(arcade.menu.selected(), GameKind::Tetris);
        assert!(!arcade.handle_menu_input(MenuInput::Quit));
    }

    #[test]
    fn test_select_opens_without_charging() {
        let mut arcade = arcade(85);
        arcade.handle_menu_input(MenuInput::Down);
        arcade.handle_menu_input(MenuInput::Select);
        assert_eq!(arcade.screen(), Screen::Game(GameKind::Minesweeper));
        assert_eq!(arcade.balance(), 85);
        assert!(!arcade.is_playing(GameKind::Minesweeper));
    }

    #[test]
    fn test_primary_starts_and_charges() {
        let mut arcade = arcade(85);
        arcade.open(GameKind::Snake);
        assert!(arcade.handle_game_input(MinigameInput::Primary));
        assert!(arcade.is_playing(GameKind::Snake));
        assert_eq!(arcade.balance(), 80);

        // primary while playing is not a second start
        arcade.handle_game_input(MinigameInput::Primary);
        assert_eq!(arcade.balance(), 80);
    }

    #[test]
    fn test_start_refused_when_short() {
        let mut arcade = arcade(49);
        assert!(!arcade.start(GameKind::Minesweeper));
        assert_eq!(arcade.balance(), 49);
        assert_eq!(arcade.minesweeper.phase, Phase::Idle);
        assert_eq!(
            arcade.notice(),
            Some("You need 50 binbucks to unlock Minesweeper!")
        );
        assert!(arcade.fee(GameKind::Minesweeper).needs_unlock());
    }

    #[test]
    fn test_unlock_then_play_costs() {
        let mut arcade = arcade(85);
        assert!(arcade.start(GameKind::Minesweeper));
        assert_eq!(arcade.balance(), 35);
        assert!(arcade.fee(GameKind::Minesweeper).is_unlocked());

        arcade.open(GameKind::Minesweeper);
        arcade.back_to_menu();
        assert!(arcade.start(GameKind::Minesweeper));
        assert_eq!(arcade.balance(), 30);
    }

    #[test]
    fn test_wallet_is_shared_between_games() {
        let mut arcade = arcade(85);
        assert!(arcade.start(GameKind::Tetris));
        assert_eq!(arcade.balance(), 10);
        assert!(!arcade.start(GameKind::Minesweeper));
        assert!(arcade.start(GameKind::Snake));
        assert_eq!(arcade.balance(), 5);
    }

    #[test]
    fn test_menu_is_not_ticked() {
        let mut arcade = arcade(85);
        assert!(arcade.start(GameKind::Snake));
        arcade.screen = Screen::Menu;
        let head = arcade.snake.head();

        assert!(!arcade.tick(500));
        assert_eq!(arcade.snake.head(), head);
    }

    #[test]
    fn test_start_from_menu_shows_and_ticks_the_game() {
        let mut arcade = arcade(85);
        assert!(arcade.start(GameKind::Minesweeper));
        assert_eq!(arcade.screen(), Screen::Game(GameKind::Minesweeper));
        assert_eq!(arcade.menu.selected(), GameKind::Minesweeper);

        for _ in 0..20 {
            arcade.tick(500);
        }
        assert_eq!(arcade.minesweeper.elapsed_secs, 10);
    }

    #[test]
    fn test_opening_another_game_abandons_the_run() {
        let mut arcade = arcade(85);
        arcade.open(GameKind::Snake);
        assert!(arcade.start(GameKind::Snake));

        arcade.open(GameKind::Tetris);
        assert!(!arcade.is_playing(GameKind::Snake));
        arcade.back_to_menu();
        assert!(!arcade.is_playing(GameKind::Snake));
        assert_eq!(arcade.balance(), 80, "no refund");
    }

    #[test]
    fn test_starting_another_game_abandons_the_run() {
        let mut arcade = arcade(85);
        assert!(arcade.start(GameKind::Snake));
        assert!(arcade.start(GameKind::Minesweeper));

        assert!(!arcade.is_playing(GameKind::Snake));
        assert!(arcade.is_playing(GameKind::Minesweeper));
        assert_eq!(arcade.screen(), Screen::Game(GameKind::Minesweeper));
    }

    #[test]
    fn test_refused_start_keeps_the_current_run() {
        let mut arcade = arcade(55);
        assert!(arcade.start(GameKind::Snake));
        assert!(!arcade.start(GameKind::Tetris));

        assert!(arcade.is_playing(GameKind::Snake));
        assert_eq!(arcade.screen(), Screen::Game(GameKind::Snake));
    }

    #[test]
    fn test_can_start_follows_the_fee_gate() {
        let mut arcade = arcade(54);
        assert!(arcade.can_start(GameKind::Snake));
        assert!(arcade.can_start(GameKind::Minesweeper));
        assert!(!arcade.can_start(GameKind::Tetris));

        assert!(arcade.start(GameKind::Minesweeper));
        assert_eq!(arcade.balance(), 4);
        assert!(!arcade.can_start(GameKind::Snake));
        assert!(!arcade.can_start(GameKind::Minesweeper));
    }

    #[test]
    fn test_cancel_abandons_running_game() {
        let mut arcade = arcade(85);
        arcade.open(GameKind::Snake);
        arcade.handle_game_input(MinigameInput::Primary);
        arcade.handle_game_input(MinigameInput::Cancel);

        assert_eq!(arcade.screen(), Screen::Menu);
        assert_eq!(arcade.snapshot(GameKind::Snake).lifecycle, Lifecycle::Idle);
        assert_eq!(arcade.balance(), 80, "no refund");
    }

    #[test]
    fn test_shutdown_stops_everything() {
        let mut arcade = arcade(200);
        for kind in GameKind::ALL {
            assert!(arcade.start(kind));
        }
        assert!(arcade.is_playing(GameKind::Tetris));
        arcade.shutdown();
        for kind in GameKind::ALL {
            assert!(!arcade.is_playing(kind));
        }
    }
}
