//! Static position evaluation.
//!
//! Evaluations are pure functions of the position: no randomness, no history
//! sensitivity. Positive scores favor the configured perspective regardless
//! of which side is to move; the search supplies the maximizing/minimizing
//! orientation itself.

use crate::board::chess_types::{Color, PieceKind};
use crate::board::position::Position;

pub trait Evaluation {
    fn evaluate(&self, position: &Position) -> i32;
}

const MATERIAL_WEIGHTS: [(PieceKind, i32); 5] = [
    (PieceKind::Queen, 9),
    (PieceKind::Rook, 5),
    (PieceKind::Bishop, 3),
    (PieceKind::Knight, 3),
    (PieceKind::Pawn, 1),
];

fn material(position: &Position, color: Color) -> i32 {
    MATERIAL_WEIGHTS
        .iter()
        .map(|&(kind, weight)| weight * position.piece_count(color, kind) as i32)
        .sum()
}

/// Plain material differential from a fixed perspective.
#[derive(Debug, Clone, Copy)]
pub struct MaterialEvaluation {
    pub perspective: Color,
}

impl MaterialEvaluation {
    pub fn new(perspective: Color) -> Self {
        Self { perspective }
    }
}

impl Evaluation for MaterialEvaluation {
    fn evaluate(&self, position: &Position) -> i32 {
        material(position, self.perspective) - material(position, self.perspective.opposite())
    }
}

/// Material differential dominated by a mobility differential tiebreak.
///
/// Material is scaled so that no plausible mobility swing outweighs a pawn;
/// mobility then orders positions of equal material.
#[derive(Debug, Clone, Copy)]
pub struct MobilityMaterialEvaluation {
    pub perspective: Color,
}

impl MobilityMaterialEvaluation {
    const MATERIAL_SCALE: i32 = 100;

    pub fn new(perspective: Color) -> Self {
        Self { perspective }
    }
}

impl Evaluation for MobilityMaterialEvaluation {
    fn evaluate(&self, position: &Position) -> i32 {
        let us = self.perspective;
        let them = us.opposite();
        let material = material(position, us) - material(position, them);
        let mobility = position.mobility(us) as i32 - position.mobility(them) as i32;
        material * Self::MATERIAL_SCALE + mobility
    }
}
