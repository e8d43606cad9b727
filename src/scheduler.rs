// =============================================================================
// SCHEDULER.RS — Countdown-driven consumption of chart events
// =============================================================================

use log::debug;
use thiserror::Error;

use crate::chart::ChartEvent;
use crate::config::Playfield;
use crate::note::{Lane, Note};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The cursor ran past the last event without meeting END.
    #[error("chart ran out of events at index {cursor} without an END record")]
    Exhausted { cursor: usize },
}

/// What a scheduler step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// Still waiting on the countdown or on notes to clear before END.
    Running,
    /// END was reached with an empty board.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    events: Vec<ChartEvent>,
    cursor: usize,
    countdown: f32,
}

impl Scheduler {
    pub fn new(events: Vec<ChartEvent>) -> Self {
        Self { events, cursor: 0, countdown: 0.0 }
    }

    pub fn cursor(&self) -> usize { self.cursor }
    pub fn countdown(&self) -> f32 { self.countdown }
    pub fn events(&self) -> &[ChartEvent] { &self.events }

    /// Advance the countdown by `dt` and consume every event that is due.
    ///
    /// New notes are appended to `notes` (a double appends left then right).
    /// Zero or negative waits chain within the same call. END only moves
    /// the cursor once `notes` is empty.
    pub fn advance(
        &mut self,
        dt: f32,
        notes: &mut Vec<Note>,
        playfield: &Playfield,
    ) -> Result<ScheduleStatus, ScheduleError> {
        self.countdown -= dt;

        while self.countdown <= 0.0 {
            let Some(event) = self.events.get(self.cursor).copied() else {
                return Err(ScheduleError::Exhausted { cursor: self.cursor });
            };

            match event {
                ChartEvent::SpawnLeft => spawn(notes, Lane::Left, playfield),
                ChartEvent::SpawnRight => spawn(notes, Lane::Right, playfield),
                ChartEvent::SpawnDouble => {
                    spawn(notes, Lane::Left, playfield);
                    spawn(notes, Lane::Right, playfield);
                }
                ChartEvent::Wait(secs) => self.countdown = secs,
                ChartEvent::End => {
                    if !notes.is_empty() {
                        return Ok(ScheduleStatus::Running);
                    }
                    self.cursor += 1;
                    return Ok(ScheduleStatus::Finished);
                }
            }
            self.cursor += 1;
        }

        Ok(ScheduleStatus::Running)
    }
}

fn spawn(notes: &mut Vec<Note>, lane: Lane, playfield: &Playfield) {
    debug!("spawn {lane:?}");
    notes.push(Note::new(
        lane,
        playfield.spawn_position(lane),
        playfield.note_velocity(),
        playfield.note_size,
    ));
}
