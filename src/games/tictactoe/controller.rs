//! Turn sequencing between the human and the computer.
//!
//! The controller owns the board for the lifetime of one game and is its
//! only mutator. Each human move is resolved in two steps so the
//! presentation layer can pause between them:
//!
//! 1. [`TurnController::submit_human_move`] places the circle and checks
//!    for the end of the game.
//! 2. [`TurnController::play_computer_turn`] (or the delayed
//!    [`TurnController::respond_after`]) places the cross and checks again.
//!
//! Human input is throttled from step 1 until step 2 completes.

use super::action::Move;
use super::error::GameError;
use super::phases::{GameOutcome, TurnPhase};
use super::rules::evaluate;
use super::selector::HeuristicSelector;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the controller to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed and should be drawn.
    MovePlayed(Move),
    /// The game ended; sent exactly once.
    GameOver(GameOutcome),
}

/// Why a human move was dropped without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum IgnoreReason {
    /// The previous turn is still being resolved.
    Throttled,
    /// The game has already ended.
    GameOver,
}

/// Result of submitting a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Move was placed; carries the outcome after it.
    Accepted(GameOutcome),
    /// Move was a no-op.
    Ignored(IgnoreReason),
}

/// Sequences turns for one game of circle (human) against cross (computer).
#[derive(Debug)]
pub struct TurnController {
    board: Board,
    phase: TurnPhase,
    outcome: GameOutcome,
    selector: HeuristicSelector,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl TurnController {
    /// Creates a controller for a fresh game.
    #[instrument(skip_all)]
    pub fn new(selector: HeuristicSelector, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            phase: TurnPhase::AwaitingHumanMove,
            outcome: GameOutcome::Ongoing,
            selector,
            event_tx,
        }
    }

    /// Creates a controller together with the receiving end of its events.
    pub fn with_channel(selector: HeuristicSelector) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self::new(selector, event_tx), event_rx)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the latest outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Returns true while a human move is being resolved.
    pub fn is_throttled(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::EvaluatingHumanMove
                | TurnPhase::ComputerMoving
                | TurnPhase::EvaluatingComputerMove
        )
    }

    /// Places the human's circle at `position`.
    ///
    /// Throttled or finished games ignore the move and leave all state
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidMove` if `position` is occupied.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_human_move(&mut self, position: Position) -> Result<Submission, GameError> {
        match self.phase {
            TurnPhase::AwaitingHumanMove => {}
            TurnPhase::GameOver => {
                debug!("Game over, move ignored");
                return Ok(Submission::Ignored(IgnoreReason::GameOver));
            }
            _ => {
                debug!("Turn in flight, move ignored");
                return Ok(Submission::Ignored(IgnoreReason::Throttled));
            }
        }

        self.board.occupy(Player::Circle, position)?;
        self.emit(GameEvent::MovePlayed(Move::new(Player::Circle, position)));
        self.transition(TurnPhase::EvaluatingHumanMove);

        let outcome = self.conclude(Player::Circle, TurnPhase::ComputerMoving);
        Ok(Submission::Accepted(outcome))
    }

    /// Plays the computer's reply if one is pending.
    ///
    /// Returns `Ok(None)` without side effects in any phase other than
    /// `ComputerMoving`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_computer_turn(&mut self) -> Result<Option<Move>, GameError> {
        if self.phase != TurnPhase::ComputerMoving {
            return Ok(None);
        }

        let selection = self.selector.select(&self.board)?;
        let position = *selection.position();
        self.board.occupy(Player::Cross, position)?;
        info!(%position, reason = %selection.reason(), "Computer moved");

        let mov = Move::new(Player::Cross, position);
        self.emit(GameEvent::MovePlayed(mov));
        self.transition(TurnPhase::EvaluatingComputerMove);

        self.conclude(Player::Cross, TurnPhase::AwaitingHumanMove);
        Ok(Some(mov))
    }

    /// Waits `delay`, then plays the computer's reply if one is pending.
    ///
    /// Does not wait when no reply is pending.
    #[instrument(skip(self))]
    pub async fn respond_after(&mut self, delay: Duration) -> Result<Option<Move>, GameError> {
        if self.phase != TurnPhase::ComputerMoving {
            return Ok(None);
        }
        tokio::time::sleep(delay).await;
        self.play_computer_turn()
    }

    /// Plays a full turn without delay: the human move, then the reply.
    ///
    /// An accepted submission carries the outcome after both moves.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, position: Position) -> Result<Submission, GameError> {
        match self.submit_human_move(position)? {
            Submission::Accepted(_) => {
                self.play_computer_turn()?;
                Ok(Submission::Accepted(self.outcome))
            }
            ignored @ Submission::Ignored(_) => Ok(ignored),
        }
    }

    /// Evaluates the board after `player` moved and moves to `next` or
    /// `GameOver`.
    fn conclude(&mut self, player: Player, next: TurnPhase) -> GameOutcome {
        let outcome = evaluate(&self.board, player);
        self.outcome = outcome;
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.emit(GameEvent::GameOver(outcome));
            self.transition(TurnPhase::GameOver);
        } else {
            self.transition(next);
        }
        outcome
    }

    fn transition(&mut self, next: TurnPhase) {
        debug!(from = %self.phase, to = %next, "Phase transition");
        self.phase = next;
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            warn!(?event, "Event receiver dropped");
        }
    }
}
