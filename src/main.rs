use arcade::arcade::{Arcade, Screen};
use arcade::build_info;
use arcade::core::FRAME_POLL_MS;
use arcade::error::Result;
use arcade::games::GameKind;
use arcade::input::{is_force_quit, menu_input, minigame_input};
use arcade::ui;
use arcade::utils::{config_path, logging, ArcadeConfig, ConfigOverrides};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Snake, Minesweeper and Tetris for binbucks")]
#[command(version = build_info::BUILD_VERSION)]
struct Cli {
    /// Binbucks to start with (overrides the config file)
    #[arg(long)]
    balance: Option<i64>,

    /// Name for the Snake leaderboard
    #[arg(long)]
    name: Option<String>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Open straight into a game instead of the menu
    #[arg(long, value_enum)]
    game: Option<GameArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default config file if there is none
    InitConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GameArg {
    Snake,
    Minesweeper,
    Tetris,
}

impl From<GameArg> for GameKind {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Snake => GameKind::Snake,
            GameArg::Minesweeper => GameKind::Minesweeper,
            GameArg::Tetris => GameKind::Tetris,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = config_path()?;

    if let Some(Command::InitConfig) = cli.command {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            ArcadeConfig::default().save(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let mut config = ArcadeConfig::load(&path)?;
    config.apply(ConfigOverrides {
        starting_balance: cli.balance,
        player_name: cli.name,
        log_level: cli.log_level,
    });
    logging::init(config.level_filter()?, &logging::log_path()?)?;

    let mut arcade = Arcade::from_config(&config);
    if let Some(game) = cli.game {
        arcade.open(game.into());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut arcade);

    arcade.shutdown();
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("arcade exited with error: {}", e);
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, arcade: &mut Arcade) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, arcade))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_force_quit(&key) {
                    return Ok(());
                }
                match arcade.screen() {
                    Screen::Menu => {
                        if !arcade.handle_menu_input(menu_input(&key)) {
                            return Ok(());
                        }
                    }
                    Screen::Game(_) => {
                        arcade.handle_game_input(minigame_input(&key));
                    }
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_tick).as_millis() as u64;
        if dt_ms > 0 {
            arcade.tick(dt_ms);
            last_tick = now;
        }
    }
}
