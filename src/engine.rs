//! Session state for the line protocol.
//!
//! Holds the configuration and the current game between commands and
//! writes protocol responses.

use std::io::{self, Write};

use crate::board::{Player, ALL_KINDS};
use crate::config::GameConfig;
use crate::game::Game;
use crate::protocol::Command;

/// What the main loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the mutable state of a protocol session.
pub struct Engine {
    config: GameConfig,
    game: Option<Game>,
}

impl Engine {
    /// Creates a session with no game in progress.
    pub fn new(config: GameConfig) -> Self {
        Engine { config, game: None }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Dispatches one command and writes its response.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame { size } => self.handle_newgame(size, out)?,
            Command::Place {
                player,
                kind,
                position,
            } => match self.game.as_mut() {
                None => writeln!(out, "error no game in progress")?,
                Some(game) => match game.place_unit(player, position, kind) {
                    Ok(id) => writeln!(out, "placed {}", id)?,
                    Err(e) => writeln!(out, "error {}", e)?,
                },
            },
            Command::EndTurn => self.handle_endturn(out)?,
            Command::Status => match &self.game {
                None => writeln!(out, "error no game in progress")?,
                Some(game) => match game.result() {
                    Some(r) => writeln!(out, "result {}", r)?,
                    None => writeln!(out, "phase {}", game.phase())?,
                },
            },
            Command::Budget { player } => self.handle_budget(player, out)?,
            Command::Board => match &self.game {
                None => writeln!(out, "error no game in progress")?,
                Some(game) => {
                    for row in game.board_view().to_text() {
                        writeln!(out, "{}", row)?;
                    }
                }
            },
            Command::View => match &self.game {
                None => writeln!(out, "error no game in progress")?,
                Some(game) => {
                    let json = game.board_view().to_json().map_err(io::Error::other)?;
                    writeln!(out, "{}", json)?;
                }
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn handle_newgame<W: Write>(&mut self, size: Option<(usize, usize)>, out: &mut W) -> io::Result<()> {
        let mut config = self.config;
        if let Some((width, height)) = size {
            config.width = width;
            config.height = height;
        }
        match Game::new(&config) {
            Ok(game) => {
                self.game = Some(game);
                writeln!(out, "ok")
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_endturn<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(out, "error no game in progress");
        };
        match game.end_turn() {
            Ok(report) => {
                writeln!(
                    out,
                    "round {} attacks {} casualties {}",
                    game.turn(),
                    report.attacks.len(),
                    report.casualties.len()
                )?;
                if let Some(r) = game.result() {
                    writeln!(out, "result {}", r)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_budget<W: Write>(&self, player: Player, out: &mut W) -> io::Result<()> {
        let Some(game) = &self.game else {
            return writeln!(out, "error no game in progress");
        };
        write!(out, "budget")?;
        for kind in ALL_KINDS {
            write!(out, " {} {}", kind.name(), game.remaining(player, kind))?;
        }
        writeln!(out)
    }
}
