//! Fixed-capacity transposition store.
//!
//! Slots are addressed by `fingerprint % capacity` and overwritten
//! unconditionally on record; a colliding older entry simply loses its slot.
//! A probe only counts as a hit when the stored fingerprint matches exactly
//! and the stored depth is at least the requested depth, so the score was
//! computed with at least as much lookahead as the caller needs.

use crate::moves::chess_move::Move;

pub const DEFAULT_CAPACITY: usize = 100_000;

/// How a stored score was produced.
///
/// `Exact` scores come from fully searched subtrees. `Lower` records a cut
/// in a maximizing node, `Upper` a cut in a minimizing node; either is
/// served again only when the caller's window confirms the cut still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub key: u64,
    pub depth: u8,
    pub bound: Bound,
    pub score: i32,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TableEntry>>,
    stats: TableStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
            stats: TableStats::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TableStats::default();
    }

    #[inline]
    fn slot(&self, key: u64) -> usize {
        (key as usize) % self.entries.len()
    }

    /// Stores a result, evicting whatever occupied the slot.
    pub fn record(&mut self, entry: TableEntry) {
        self.stats.stores += 1;
        let slot = self.slot(entry.key);
        self.entries[slot] = Some(entry);
    }

    /// Returns a usable score for this node, if one is stored.
    ///
    /// `Exact` entries are always usable. A `Lower` entry is usable only
    /// when its score still sits at or below the caller's alpha and an
    /// `Upper` entry only at or above the caller's beta, confirming the
    /// recorded cutoff holds under the current window too.
    pub fn probe(&mut self, key: u64, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        self.stats.probes += 1;
        let entry = self.entries[self.slot(key)]?;
        if entry.key != key || entry.depth < depth {
            return None;
        }
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score <= alpha,
            Bound::Upper => entry.score >= beta,
        };
        if usable {
            self.stats.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    /// The stored best move for a position, regardless of depth. Used for
    /// move ordering, never for cutting.
    pub fn best_move(&self, key: u64) -> Option<Move> {
        self.entries[self.slot(key)]
            .filter(|entry| entry.key == key)
            .and_then(|entry| entry.best_move)
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
