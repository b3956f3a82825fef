//! Line-oriented REPL: argument parsing, command parsing and execution.
//!
//! Kept free of stdin/stdout so every command can be driven from tests; the
//! binary only feeds lines in and prints what comes back.

use anyhow::{anyhow, Result};

use crate::core::GameConfig;
use crate::session::{Session, SessionError};
use crate::term::{ScorecardLine, ScorecardView};
use crate::types::OverflowPolicy;

pub const HELP: &str = "\
commands:
  add NAME        register a player for the next game
  remove NAME     unregister a player
  players         list registered players
  start           start a new game (archives a game in progress)
  roll N          roll N pins for the current player
  score           running score per player
  summary         frame-by-frame summary as JSON
  card            print the score sheet
  cancel [save]   abandon the game, optionally archiving it
  history         archived games as JSON
  help            show this text
  quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub game: GameConfig,
    pub color: bool,
}

/// Parse binary arguments on top of the environment configuration.
///
/// `--players a,b` and `--overflow fail|ignore` override `TENPIN_PLAYERS` and
/// `TENPIN_OVERFLOW`; `--no-color` disables ANSI styling.
pub fn parse_repl_args(args: &[String], base: GameConfig) -> Result<ReplConfig> {
    let mut config = ReplConfig {
        game: base,
        color: true,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --players"))?;
                config.game.players = crate::core::config::parse_player_list(v);
            }
            "--overflow" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --overflow"))?;
                config.game.overflow = OverflowPolicy::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --overflow value: {}", v))?;
            }
            "--no-color" => config.color = false,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(config)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Players,
    Start,
    Roll(i32),
    Score,
    Summary,
    Card,
    Cancel { save: bool },
    History,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match (verb.to_lowercase().as_str(), rest.as_slice()) {
            ("add", [name]) => Command::Add(name.to_string()),
            ("remove", [name]) => Command::Remove(name.to_string()),
            ("players", []) => Command::Players,
            ("start", []) => Command::Start,
            ("roll", [pins]) => Command::Roll(
                pins.parse()
                    .map_err(|_| anyhow!("invalid pin count: {}", pins))?,
            ),
            ("score", []) => Command::Score,
            ("summary", []) => Command::Summary,
            ("card", []) => Command::Card,
            ("cancel", []) => Command::Cancel { save: false },
            ("cancel", ["save"]) => Command::Cancel { save: true },
            ("history", []) => Command::History,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (verb, _) => return Err(anyhow!("unknown or malformed command: {} (try help)", verb)),
        };
        Ok(Some(cmd))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    /// Score sheet lines for the caller to print (styled or plain).
    Card(Vec<ScorecardLine>),
    Quit,
}

pub struct Repl {
    session: Session,
    view: ScorecardView,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            session: Session::new(config.game),
            view: ScorecardView::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and run one line. Errors are returned for the caller to print;
    /// the session is left as it was.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome> {
        let text = match cmd {
            Command::Add(name) => {
                self.session.add_player(&name)?;
                format!("added {}", name.trim())
            }
            Command::Remove(name) => {
                self.session.remove_player(&name)?;
                format!("removed {}", name.trim())
            }
            Command::Players => {
                if self.session.players().is_empty() {
                    "no players registered (a guest will play)".to_string()
                } else {
                    self.session.players().join(", ")
                }
            }
            Command::Start => {
                let game = self.session.start_game()?;
                format!(
                    "new game: {}. {} to roll",
                    game.players().collect::<Vec<_>>().join(", "),
                    game.current_player()
                )
            }
            Command::Roll(pins) => self.roll(pins)?,
            Command::Score => self
                .session
                .score()?
                .iter()
                .map(|(name, score)| format!("{}: {}", name, score))
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Summary => serde_json::to_string_pretty(&self.session.summary()?)?,
            Command::Card => {
                let summary = self.session.summary()?;
                let current = self
                    .session
                    .active_game()
                    .filter(|g| !g.is_over())
                    .map(|g| g.current_player());
                return Ok(Outcome::Card(self.view.render(&summary, current)));
            }
            Command::Cancel { save } => {
                self.session.cancel_game(save)?;
                if save {
                    "game cancelled and saved".to_string()
                } else {
                    "game cancelled".to_string()
                }
            }
            Command::History => self.session.history_json()?,
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    fn roll(&mut self, pins: i32) -> Result<String> {
        let game = self
            .session
            .active_game()
            .ok_or(SessionError::NoActiveGame)?;
        let player = game.current_player().to_string();

        self.session.roll(pins)?;

        let game = self
            .session
            .active_game()
            .ok_or(SessionError::NoActiveGame)?;
        let score = game.score().get(&player).copied().unwrap_or_default();
        if game.is_over() {
            let finals = game
                .score()
                .iter()
                .map(|(name, score)| format!("{} {}", name, score))
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("{} rolled {} (score {}). game over: {}", player, pins, score, finals))
        } else {
            Ok(format!(
                "{} rolled {} (score {}). next: {}, frame {}",
                player,
                pins,
                score,
                game.current_player(),
                game.frame_number()
            ))
        }
    }
}
