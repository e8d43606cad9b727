// =============================================================================
// SCORE.RS — Health, score and multiplier for one run
// =============================================================================

use crate::config::Tuning;

/// Per-run scoring state. Health is private so that every write goes
/// through the clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayState {
    pub score: u64,
    /// Never below 1.
    pub multiplier: u32,
    /// Seconds spent in Playing (frozen while paused).
    pub elapsed: f32,
    pub hits: u32,
    pub misses: u32,
    health: f32,
    tuning: Tuning,
}

impl PlayState {
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self {
            score: 0,
            multiplier: 1,
            elapsed: 0.0,
            hits: 0,
            misses: 0,
            health: 0.0,
            tuning,
        };
        state.set_health(tuning.start_health);
        state
    }

    pub fn health(&self) -> f32 { self.health }
    pub fn max_health(&self) -> f32 { self.tuning.max_health }

    /// Set health, clamped to `[0, max_health]`. A cap below zero or NaN
    /// counts as zero.
    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, self.tuning.max_health.max(0.0));
    }

    /// Fill ratio of the health bar in `[0, 1]`.
    pub fn health_fraction(&self) -> f32 {
        if self.tuning.max_health <= 0.0 {
            return 0.0;
        }
        self.health / self.tuning.max_health
    }

    /// Health is exactly zero. Clamping makes this the same as "at or
    /// below zero".
    pub fn is_depleted(&self) -> bool {
        self.health == 0.0
    }

    /// A judged note: score by the current multiplier, then drain one step
    /// of multiplier unless health is already full. The heal comes last so
    /// it does not affect the drain check.
    pub fn apply_hit(&mut self) {
        self.score += u64::from(self.multiplier);
        if self.health < self.tuning.max_health && self.multiplier >= 2 {
            self.multiplier -= 1;
        }
        self.set_health(self.health + self.tuning.hit_heal);
        self.hits += 1;
    }

    /// A note left the playfield unjudged.
    pub fn apply_miss(&mut self) {
        self.set_health(self.health - self.tuning.miss_damage);
        self.multiplier += 1;
        self.misses += 1;
    }
}

// ── Labels ──────────────────────────────────────────────────────────────────

pub fn score_text(state: &PlayState) -> String {
    format!("score: {}", state.score)
}

pub fn multiplier_text(state: &PlayState) -> String {
    format!("multiplier: {}", state.multiplier)
}

/// `MM:SS` from whole seconds.
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
