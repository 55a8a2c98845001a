//! Interactive play: prompts, the human/computer turn loop, and replays.

use crate::config::GameConfig;
use crate::input::{InputError, parse_position, parse_yes};
use crate::messages::{Messages, RULE};
use crate::render::{render_board, render_guide};
use anyhow::{Context, Result};
use greedy_tictactoe::{MoveError, PolicyError, Position, Round, RoundStatus, Strategy};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, instrument, warn};

/// Wins and draws across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Rounds the human won.
    pub human_wins: u32,
    /// Rounds the computer won.
    pub computer_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Scoreboard {
    /// Counts a finished round. Unfinished rounds are ignored.
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::HumanWon => self.human_wins += 1,
            RoundStatus::ComputerWon => self.computer_wins += 1,
            RoundStatus::Draw => self.draws += 1,
            RoundStatus::InProgress => {}
        }
    }

    /// Total rounds counted.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// Errors that end a session rather than a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The input stream reached end of file.
    #[display("Input closed")]
    InputClosed,
}

/// A text session between a human on `input`/`output` and a computer strategy.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    messages: Messages,
    show_guide: bool,
    computer: S,
    round: Round,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write, S: Strategy> Session<R, W, S> {
    /// Creates a session. `computer` plays whichever side it reports.
    pub fn new(input: R, output: W, config: &GameConfig, computer: S) -> Self {
        Self {
            input,
            output,
            messages: Messages::new(*config.language()),
            show_guide: *config.show_guide(),
            computer,
            round: Round::new(),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Results so far.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// The current (or last) round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Gives back the output handle.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player declines a replay or input ends.
    ///
    /// A round that fails with a policy or placement error is abandoned;
    /// the replay prompt is still shown afterwards.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        loop {
            match self.play_round() {
                Ok(status) => self.scoreboard.record(status),
                Err(err) if is_input_closed(&err) => {
                    debug!("Input closed during round");
                    break;
                }
                Err(err) if is_round_error(&err) => {
                    error!(error = %err, "Round abandoned");
                    writeln!(self.output, "{}", self.messages.round_error())?;
                }
                Err(err) => return Err(err),
            }
            writeln!(self.output, "{RULE}")?;

            write!(self.output, "\n{}", self.messages.play_again())?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if parse_yes(&answer) => continue,
                _ => break,
            }
        }

        info!(
            rounds = self.scoreboard.rounds(),
            human_wins = self.scoreboard.human_wins,
            computer_wins = self.scoreboard.computer_wins,
            draws = self.scoreboard.draws,
            "Session finished"
        );
        writeln!(self.output, "\n{}", self.messages.scoreboard(&self.scoreboard))?;
        writeln!(self.output, "{}", self.messages.farewell())?;
        self.output.flush()?;
        Ok(self.scoreboard)
    }

    /// Plays one round from an empty board to a terminal state.
    ///
    /// # Errors
    ///
    /// [`SessionError::InputClosed`] if input ends mid-round, a
    /// [`PolicyError`] or [`MoveError`] if the computer cannot move, or an
    /// I/O error from the output.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundStatus> {
        self.round.reset();
        self.write_banner()?;

        loop {
            let status = if self.round.to_move() == self.computer.mark() {
                self.computer_turn()?
            } else {
                self.human_turn()?
            };

            if status.is_terminal() {
                self.write_board()?;
                writeln!(self.output, "{}", self.messages.outcome(status))?;
                return Ok(status);
            }
        }
    }

    fn write_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "{}", self.messages.welcome())?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "\n{}", self.messages.human_role())?;
        writeln!(self.output, "{}", self.messages.computer_role())?;
        if self.show_guide {
            writeln!(self.output, "\n{}", self.messages.guide_title())?;
            writeln!(self.output, "{}\n", render_guide())?;
        }
        Ok(())
    }

    fn write_board(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", render_board(self.round.board()))?;
        Ok(())
    }

    /// Prompts until the human enters a legal position.
    fn human_turn(&mut self) -> Result<RoundStatus> {
        self.write_board()?;
        writeln!(self.output, "{}", self.messages.human_turn())?;

        loop {
            write!(self.output, "{}", self.messages.position_prompt())?;
            self.output.flush()?;
            let line = self.read_line()?.ok_or(SessionError::InputClosed)?;

            let index = match parse_position(&line) {
                Ok(index) => index,
                Err(err) => {
                    warn!(error = %err, "Rejected input");
                    let text = match err {
                        InputError::ParseFailure { .. } => self.messages.invalid_input(),
                        InputError::OutOfRange { .. } => self.messages.out_of_range(),
                    };
                    writeln!(self.output, "{text}")?;
                    continue;
                }
            };

            match self.round.play(index) {
                Ok(status) => return Ok(status),
                Err(err @ MoveError::Occupied(_)) => {
                    warn!(error = %err, "Rejected move");
                    writeln!(self.output, "{}", self.messages.occupied())?;
                }
                Err(err @ MoveError::OutOfRange(_)) => {
                    warn!(error = %err, "Rejected move");
                    writeln!(self.output, "{}", self.messages.out_of_range())?;
                }
                Err(err @ MoveError::RoundOver) => return Err(err.into()),
            }
        }
    }

    fn computer_turn(&mut self) -> Result<RoundStatus> {
        writeln!(self.output, "\n{}", self.messages.computer_turn())?;

        let decision = self.computer.choose(self.round.board())?;
        debug!(
            player = self.computer.name(),
            index = decision.index,
            tier = %decision.tier,
            "Computer moving"
        );
        let status = self.round.play(decision.index)?;

        let number = Position::from_index(decision.index)
            .map(Position::to_one_based)
            .unwrap_or(decision.index + 1);
        writeln!(self.output, "{}", self.messages.computer_chose(number))?;
        Ok(status)
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<SessionError>(), Some(SessionError::InputClosed))
}

fn is_round_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PolicyError>().is_some() || err.downcast_ref::<MoveError>().is_some()
}
