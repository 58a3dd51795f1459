//! River flow: every empty cell reachable by riding a chain of rivers.
//!
//! Breadth-first worklist over river cells. From each river, flow runs along
//! its axis in both directions:
//!
//! - an opponent score cell (for the side being moved) stops the ray;
//! - an empty cell is a destination and flow continues past it;
//! - the mover's own cell is passable (it is in flight);
//! - another river is queued and stops the ray;
//! - a stone stops the ray.
//!
//! The visited set bounds the work at `rows * cols` cells, so river cycles
//! terminate.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Board, Coord, Direction, Orientation, PieceKind, Side};

/// The two flow directions along a river's axis.
#[must_use]
pub fn axis_directions(orientation: Orientation) -> [Direction; 2] {
    match orientation {
        Orientation::Horizontal => [Direction::East, Direction::West],
        Orientation::Vertical => [Direction::South, Direction::North],
    }
}

/// Empty cells reachable by flow starting at the river cell `start`.
///
/// - `source`: the mover's cell. Flow passes over it.
/// - `side`: whose opponent score cells are off limits. For pushes this is
///   the pushed piece's owner, not the mover's.
/// - `as_push`: the start cell holds the piece being pushed, and flow out of
///   it follows the *mover's* river instead (the mover has not left
///   `source` yet).
///
/// Destinations are deduplicated in first-seen order.
#[must_use]
pub fn flow_destinations(
    board: &Board,
    start: Coord,
    source: Coord,
    side: Side,
    as_push: bool,
) -> Vec<Coord> {
    let mut destinations = Vec::new();
    let mut recorded: FxHashSet<Coord> = FxHashSet::default();
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(start);

    let mut record = |at: Coord, out: &mut Vec<Coord>| {
        if recorded.insert(at) {
            out.push(at);
        }
    };

    while let Some(at) = queue.pop_front() {
        if !board.in_bounds(at) || !visited.insert(at) {
            continue;
        }

        let cell = if as_push && at == start {
            board.get(source).copied()
        } else {
            board.get(at).copied()
        };

        let orientation = match cell {
            None => {
                if !board.is_opponent_score_cell(at, side) {
                    record(at, &mut destinations);
                }
                continue;
            }
            Some(piece) => match piece.kind {
                PieceKind::River(orientation) => orientation,
                PieceKind::Stone => continue,
            },
        };

        for dir in axis_directions(orientation) {
            let mut next = at.step(dir);
            while board.in_bounds(next) {
                if board.is_opponent_score_cell(next, side) {
                    break;
                }
                match board.get(next) {
                    None => record(next, &mut destinations),
                    Some(_) if next == source => {}
                    Some(piece) => {
                        if piece.is_river() {
                            queue.push_back(next);
                        }
                        break;
                    }
                }
                next = next.step(dir);
            }
        }
    }

    tracing::trace!(
        start = %start,
        visited = visited.len(),
        destinations = destinations.len(),
        "resolved river flow"
    );

    destinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, Piece};

    fn small() -> Board {
        Board::empty(BoardSize::Small)
    }

    #[test]
    fn test_horizontal_river_flows_both_ways() {
        let mut board = small();
        let mover = Coord::new(0, 6);
        let river = Coord::new(0, 5);
        board.place(mover, Piece::stone(Side::Circle));
        board.place(river, Piece::river(Side::Circle, Orientation::Horizontal));

        let dests = flow_destinations(&board, river, mover, Side::Circle, false);
        let expected: Vec<_> = (1..12).map(|x| Coord::new(x, 5)).collect();
        assert_eq!(dests, expected);
    }

    #[test]
    fn test_stone_stops_flow_without_recording() {
        let mut board = small();
        let mover = Coord::new(3, 6);
        let river = Coord::new(3, 5);
        board.place(mover, Piece::stone(Side::Circle));
        board.place(river, Piece::river(Side::Circle, Orientation::Horizontal));
        board.place(Coord::new(5, 5), Piece::stone(Side::Square));
        board.place(Coord::new(1, 5), Piece::stone(Side::Square));

        let dests = flow_destinations(&board, river, mover, Side::Circle, false);
        assert_eq!(dests, vec![Coord::new(4, 5), Coord::new(2, 5)]);
    }

    #[test]
    fn test_flow_chains_through_rivers() {
        let mut board = small();
        let mover = Coord::new(2, 7);
        board.place(mover, Piece::stone(Side::Circle));
        // Horizontal river next to the mover, then a vertical river further east.
        board.place(Coord::new(2, 6), Piece::river(Side::Circle, Orientation::Horizontal));
        board.place(Coord::new(9, 6), Piece::river(Side::Square, Orientation::Vertical));
        board.place(Coord::new(1, 6), Piece::stone(Side::Square));

        let dests = flow_destinations(&board, Coord::new(2, 6), mover, Side::Circle, false);

        assert!(dests.contains(&Coord::new(3, 6)));
        assert!(dests.contains(&Coord::new(8, 6)));
        // Column 9 above and below the vertical river.
        assert!(dests.contains(&Coord::new(9, 0)));
        assert!(dests.contains(&Coord::new(9, 7)));
        assert!(dests.contains(&Coord::new(9, 12)));
        // The vertical river blocks the horizontal ray.
        assert!(!dests.contains(&Coord::new(10, 6)));
        assert!(!dests.contains(&Coord::new(0, 6)));
    }

    #[test]
    fn test_opponent_score_cell_stops_ray() {
        let mut board = small();
        // Square's score cells are (4..=7, 10); circle may not enter them.
        let mover = Coord::new(5, 7);
        board.place(mover, Piece::stone(Side::Circle));
        board.place(Coord::new(5, 8), Piece::river(Side::Circle, Orientation::Vertical));

        let dests = flow_destinations(&board, Coord::new(5, 8), mover, Side::Circle, false);
        let expected: Vec<_> = std::iter::once(Coord::new(5, 9))
            .chain((0..=6).rev().map(|y| Coord::new(5, y)))
            .collect();
        assert_eq!(dests, expected);
        assert!(!dests.contains(&Coord::new(5, 10)));
        assert!(!dests.contains(&Coord::new(5, 11)));
    }

    #[test]
    fn test_own_score_cell_is_reachable() {
        let mut board = small();
        let mover = Coord::new(5, 5);
        board.place(mover, Piece::stone(Side::Circle));
        board.place(Coord::new(5, 4), Piece::river(Side::Circle, Orientation::Vertical));

        let dests = flow_destinations(&board, Coord::new(5, 4), mover, Side::Circle, false);
        assert!(dests.contains(&Coord::new(5, 2)));
        assert!(dests.contains(&Coord::new(5, 0)));
        // Flow passes over the mover's own cell.
        assert!(dests.contains(&Coord::new(5, 6)));
        assert!(dests.contains(&Coord::new(5, 9)));
    }

    #[test]
    fn test_push_mode_uses_mover_orientation() {
        let mut board = small();
        let mover = Coord::new(3, 6);
        let target = Coord::new(4, 6);
        board.place(mover, Piece::river(Side::Circle, Orientation::Horizontal));
        board.place(target, Piece::stone(Side::Square));

        let dests = flow_destinations(&board, target, mover, Side::Square, true);

        // Flow runs east from the target and west past the mover.
        assert!(dests.contains(&Coord::new(5, 6)));
        assert!(dests.contains(&Coord::new(11, 6)));
        assert!(dests.contains(&Coord::new(2, 6)));
        assert!(dests.contains(&Coord::new(0, 6)));
        assert!(!dests.iter().any(|c| c.y != 6));
    }

    #[test]
    fn test_river_cycle_terminates() {
        let mut board = small();
        // 2x2 loop of alternating rivers.
        board.place(Coord::new(5, 5), Piece::river(Side::Circle, Orientation::Horizontal));
        board.place(Coord::new(6, 5), Piece::river(Side::Circle, Orientation::Vertical));
        board.place(Coord::new(6, 6), Piece::river(Side::Square, Orientation::Horizontal));
        board.place(Coord::new(5, 6), Piece::river(Side::Square, Orientation::Vertical));
        let mover = Coord::new(4, 5);
        board.place(mover, Piece::stone(Side::Circle));

        let dests = flow_destinations(&board, Coord::new(5, 5), mover, Side::Circle, false);

        assert!(!dests.is_empty());
        for d in &dests {
            assert!(board.is_empty(*d), "{d} should be empty");
        }
        let unique: FxHashSet<_> = dests.iter().collect();
        assert_eq!(unique.len(), dests.len());
    }
}
