#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure walker system that traces the clockwise snail spiral.
//!
//! The walker never tracks the matrix boundaries. It relies on the shape of a
//! contracting spiral instead: after the first arm, every side length is
//! walked exactly twice (one horizontal arm, one vertical arm) before it
//! shrinks by one. The first side length carries a third arm, which is why the
//! arm counter starts one below zero.

use std::iter::FusedIterator;

use snail_core::{Assignment, CellCoord, Dimension, Direction};

/// Number of arms walked at every side length once the first arm is done.
const ARMS_PER_LENGTH: i8 = 2;

/// Arm counter value before the first turn. The first length gets an extra arm.
const NO_ARM_STARTED: i8 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// A 1x1 matrix has no arm to walk; only the centre remains.
    Center,
    /// The walker is tracing arms.
    Walking,
    /// Every cell was emitted.
    Finished,
}

/// State machine yielding the cells of a snail matrix in ascending value order.
///
/// The walker is a finite, non-restartable iterator: it yields `n * n`
/// assignments for a dimension of side `n` and then stays exhausted.
#[derive(Clone, Debug)]
pub struct Snail {
    phase: Phase,
    cell: CellCoord,
    direction: Direction,
    value: u32,
    cell_count: u32,
    side_length: u32,
    arms_at_length: i8,
    steps_remaining: u32,
}

impl Snail {
    /// Creates a walker positioned at the top-left cell of the matrix.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        let phase = match dimension.side() {
            0 => Phase::Finished,
            1 => Phase::Center,
            _ => Phase::Walking,
        };
        let side_length = dimension.side().saturating_sub(1);

        Self {
            phase,
            cell: CellCoord::ORIGIN,
            direction: Direction::INITIAL,
            value: 1,
            cell_count: dimension.cell_count(),
            side_length,
            arms_at_length: NO_ARM_STARTED,
            steps_remaining: side_length,
        }
    }

    /// Number of assignments the walker has yet to yield.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        match self.phase {
            Phase::Finished => 0,
            Phase::Center => 1,
            Phase::Walking => self.cell_count - (self.value - 1),
        }
    }

    fn advance(&mut self) {
        if self.steps_remaining == 0 {
            self.turn();
            if self.side_length == 0 {
                self.phase = Phase::Finished;
                return;
            }
        }

        match self.cell.step(self.direction) {
            Some(next) => self.cell = next,
            None => {
                tracing::warn!(
                    column = self.cell.column(),
                    row = self.cell.row(),
                    direction = ?self.direction,
                    "walker stepped off the matrix edge"
                );
                self.phase = Phase::Finished;
                return;
            }
        }
        self.steps_remaining -= 1;
        self.value += 1;
    }

    fn turn(&mut self) {
        self.arms_at_length += 1;
        if self.arms_at_length == ARMS_PER_LENGTH {
            self.side_length -= 1;
            self.arms_at_length = 0;
        }
        self.steps_remaining = self.side_length;
        self.direction = self.direction.rotate_clockwise();

        tracing::trace!(
            direction = ?self.direction,
            side_length = self.side_length,
            next_value = self.value + 1,
            "walker turned"
        );
    }
}

impl Iterator for Snail {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Finished => None,
            Phase::Center => {
                self.phase = Phase::Finished;
                Some(Assignment::new(CellCoord::ORIGIN, 1))
            }
            Phase::Walking => {
                let current = Assignment::new(self.cell, self.value);
                self.advance();
                Some(current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Snail {}

impl FusedIterator for Snail {}

/// Starts a walk over a matrix of the provided dimension.
#[must_use]
pub fn walk(dimension: Dimension) -> Snail {
    Snail::new(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension(side: u32) -> Dimension {
        Dimension::new(side).expect("valid dimension")
    }

    fn heading_between(from: CellCoord, to: CellCoord) -> Direction {
        [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]
        .into_iter()
        .find(|direction| from.step(*direction) == Some(to))
        .expect("consecutive cells are adjacent")
    }

    fn arms(side: u32) -> Vec<(Direction, u32)> {
        let cells: Vec<CellCoord> = Snail::new(dimension(side))
            .map(|assignment| assignment.cell)
            .collect();
        let mut arms: Vec<(Direction, u32)> = Vec::new();
        for pair in cells.windows(2) {
            let heading = heading_between(pair[0], pair[1]);
            match arms.last_mut() {
                Some((current, length)) if *current == heading => *length += 1,
                _ => arms.push((heading, 1)),
            }
        }
        arms
    }

    #[test]
    fn first_side_length_carries_three_arms() {
        assert_eq!(
            arms(4),
            vec![
                (Direction::Right, 3),
                (Direction::Down, 3),
                (Direction::Left, 3),
                (Direction::Up, 2),
                (Direction::Right, 2),
                (Direction::Down, 1),
                (Direction::Left, 1),
            ]
        );
    }

    #[test]
    fn arms_rotate_clockwise() {
        let headings: Vec<Direction> = arms(6).into_iter().map(|(heading, _)| heading).collect();
        for pair in headings.windows(2) {
            assert_eq!(pair[0].rotate_clockwise(), pair[1]);
        }
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut snail = Snail::new(dimension(4));
        assert_eq!(snail.len(), 16);
        let _ = snail.nth(9);
        assert_eq!(snail.remaining(), 6);
        assert_eq!(snail.by_ref().count(), 6);
        assert_eq!(snail.remaining(), 0);
    }

    #[test]
    fn single_cell_bypasses_walk() {
        let mut snail = Snail::new(dimension(1));
        assert_eq!(snail.remaining(), 1);
        assert_eq!(snail.next(), Some(Assignment::new(CellCoord::ORIGIN, 1)));
        assert_eq!(snail.next(), None);
    }

    #[test]
    fn exhausted_walker_stays_exhausted() {
        let mut snail = Snail::new(dimension(2));
        assert_eq!(snail.by_ref().count(), 4);
        assert_eq!(snail.next(), None);
        assert_eq!(snail.next(), None);
    }
}
