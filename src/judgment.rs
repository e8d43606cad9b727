// =============================================================================
// JUDGMENT.RS — Matching lane input against notes, and the miss sweep
// =============================================================================

use log::debug;

use crate::config::Playfield;
use crate::note::{Lane, Note};
use crate::score::PlayState;

/// Result of one lane strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Hit { lane: Lane },
    /// Nothing in range. Not penalized.
    Empty,
}

/// Resolve one strike on `lane`.
///
/// `notes` is in spawn order; the oldest note of that lane overlapping the
/// lane's zone is removed and scored. At most one note per strike.
pub fn judge(
    lane: Lane,
    notes: &mut Vec<Note>,
    playfield: &Playfield,
    state: &mut PlayState,
) -> Judgment {
    let zone = playfield.zone(lane);
    let found = notes
        .iter()
        .position(|n| n.lane == lane && n.rect().overlaps_zone(zone, playfield.tolerance));

    match found {
        Some(idx) => {
            notes.remove(idx);
            state.apply_hit();
            debug!("hit {lane:?} score={} mult={}", state.score, state.multiplier);
            Judgment::Hit { lane }
        }
        None => Judgment::Empty,
    }
}

/// Remove every note that crossed the left edge unjudged, penalizing each.
/// Returns the lanes of the removed notes, oldest first.
pub fn sweep_misses(notes: &mut Vec<Note>, state: &mut PlayState) -> Vec<Lane> {
    let mut missed = Vec::new();
    notes.retain(|n| {
        if n.has_exited() {
            missed.push(n.lane);
            false
        } else {
            true
        }
    });
    for lane in &missed {
        state.apply_miss();
        debug!("miss {lane:?} health={}", state.health());
    }
    missed
}

/// Move every note by its velocity.
pub fn advance_notes(notes: &mut [Note], dt: f32) {
    for note in notes {
        note.advance(dt);
    }
}
