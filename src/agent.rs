//! Host-facing facade: placement arrays in, algebraic move replies out.
//!
//! The host controller re-sends the full placement before every turn, so the
//! agent never tracks the opponent's moves itself; `observe` rebuilds the
//! position from scratch with the agent's own color to move.

use crate::board::chess_types::{square_name, Color};
use crate::board::placement::load_position;
use crate::board::position::Position;
use crate::errors::ChessResult;
use crate::search::engine::{SearchConfig, SearchEngine, SearchReport};
use crate::search::evaluation::{Evaluation, MobilityMaterialEvaluation};

/// One chosen move in the host's wire vocabulary. Castles are reported as
/// the king's two-square journey. The promotion choice is always queen;
/// promotion handling lives host-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReply {
    pub from: String,
    pub to: String,
    pub promotion: char,
}

pub struct Agent<E: Evaluation> {
    color: Color,
    engine: SearchEngine<E>,
    position: Position,
}

impl Agent<MobilityMaterialEvaluation> {
    /// An agent with the stock mobility-and-material evaluation and the
    /// default time budget.
    pub fn new(color: Color) -> Self {
        Self::with_evaluation(
            color,
            MobilityMaterialEvaluation::new(color),
            SearchConfig::default(),
        )
    }
}

impl<E: Evaluation> Agent<E> {
    pub fn with_evaluation(color: Color, evaluation: E, config: SearchConfig) -> Self {
        Self {
            color,
            engine: SearchEngine::new(evaluation, config),
            position: Position::new_empty(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Replaces the current position with a fresh one built from the host's
    /// placement array, with this agent's color to move.
    pub fn observe(&mut self, placement: &[i32; 64]) -> ChessResult<()> {
        let mut position = load_position(placement)?;
        position.side_to_move = self.color;
        self.position = position;
        Ok(())
    }

    /// Searches the observed position. `Ok(None)` means the agent has no
    /// legal move (mate or stalemate, for the host to score).
    pub fn choose_move(&mut self) -> ChessResult<Option<AgentReply>> {
        self.choose_move_with_report().map(|(reply, _)| reply)
    }

    pub fn choose_move_with_report(
        &mut self,
    ) -> ChessResult<(Option<AgentReply>, SearchReport)> {
        let (chosen, report) = self.engine.choose_move_with_report(&mut self.position)?;
        let reply = chosen.map(|mv| AgentReply {
            from: square_name(mv.from),
            to: square_name(mv.destination_square()),
            promotion: 'q',
        });
        Ok((reply, report))
    }
}
