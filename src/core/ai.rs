// Hunt/target guessing logic for the opponent board.
//
// Hunt: any untargeted cell. Target: finish the damaged ship first, along its
// axis once two adjacent hits reveal it.

use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::core::board::{Board, CellState};
use crate::core::coord::Coord;

/// Which candidate pool a guess came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Target,
}

/// Every cell that has not been resolved yet.
pub fn hunt_candidates(board: &Board) -> Vec<Coord> {
    board.untargeted().collect()
}

/// Cells worth shooting to finish ships already hit, sorted and deduplicated.
///
/// For each wounded cell with an adjacent hit the ship's axis is known and only
/// the two cells extending the line of hits qualify. If no wounded cell shows an
/// axis, all untargeted orthogonal neighbours of wounded cells qualify.
/// Empty when nothing is wounded.
pub fn target_candidates(board: &Board) -> Vec<Coord> {
    let wounded = board.wounded();
    let open = |c: Coord| board.contains(c) && !board.is_targeted(c);
    let is_hit = |c: Coord| board.cell(c) == Some(CellState::Hit);

    let mut along_axis = BTreeSet::new();
    for &hit in &wounded {
        for (dr, dc) in [(0, 1), (1, 0)] {
            if !is_hit(hit.offset(dr, dc)) && !is_hit(hit.offset(-dr, -dc)) {
                continue;
            }
            for sign in [1, -1] {
                let mut end = hit;
                while is_hit(end) {
                    end = end.offset(sign * dr, sign * dc);
                }
                if open(end) {
                    along_axis.insert(end);
                }
            }
        }
    }
    if !along_axis.is_empty() {
        return along_axis.into_iter().collect();
    }

    wounded
        .iter()
        .flat_map(|c| c.orthogonal())
        .filter(|&c| open(c))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Candidates for the next shot and the mode they came from. Target mode
/// falls back to hunt mode when it has nothing to offer.
pub fn candidates(board: &Board) -> (Mode, Vec<Coord>) {
    let target = target_candidates(board);
    if target.is_empty() {
        (Mode::Hunt, hunt_candidates(board))
    } else {
        (Mode::Target, target)
    }
}

/// Pick the next shot uniformly among the current candidates. `None` only when
/// every cell has been targeted.
pub fn choose_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let (mode, pool) = candidates(board);
    trace!("{:?} mode with {} candidates", mode, pool.len());
    pool.choose(rng).copied()
}
