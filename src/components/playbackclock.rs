//! Frame-rate-relative playback cadence.
//!
//! A [`PlaybackClock`] decides, once per host tick, whether the animation
//! should step to its next frame. The cadence is expressed in host ticks per
//! animation frame (the *threshold*), derived from the host's target FPS and a
//! signed speed modifier:
//!
//! - `modifier > 0`: `threshold = round(fps / modifier)`, larger is faster
//! - `modifier < 0`: `threshold = round(|modifier| * fps)`, more negative is slower
//! - `modifier == 0` or not finite: invalid, treated as `1`
//!
//! A frame is due once every `threshold` ticks: with 60 FPS and a modifier of
//! 2 the clock fires on every 30th call.
//!
//! The threshold is only recomputed after the modifier changes, using the FPS
//! passed on the first tick after the change. A host FPS change alone does not
//! retime a running clock.

/// Counts host ticks and reports when an animation frame is due.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    speed_modifier: f32,
    counter: u32,
    threshold: u32,
    dirty: bool,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PlaybackClock {
    pub fn new(speed_modifier: f32) -> Self {
        Self {
            speed_modifier: coerce(speed_modifier),
            counter: 0,
            threshold: 0,
            dirty: true,
        }
    }

    pub fn speed_modifier(&self) -> f32 {
        self.speed_modifier
    }

    /// Host ticks per animation frame, as of the last recompute.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Change the speed modifier.
    ///
    /// Zero, non-finite values and the current value are ignored. Returns whether the modifier
    /// changed; a change schedules a threshold recompute on the next tick.
    pub fn set_speed_modifier(&mut self, modifier: f32) -> bool {
        if !is_valid(modifier) || modifier == self.speed_modifier {
            return false;
        }
        self.speed_modifier = modifier;
        self.dirty = true;
        true
    }

    /// Count one host tick. Returns `true` on the tick a frame is due.
    ///
    /// A frame is due exactly once every `threshold` calls; a threshold of 0
    /// behaves like 1.
    pub fn should_advance(&mut self, host_fps: u32) -> bool {
        if self.dirty {
            self.recompute(host_fps);
        }
        if self.counter + 1 < self.threshold {
            self.counter += 1;
            false
        } else {
            self.counter = 0;
            true
        }
    }

    /// Forget partially counted ticks.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    fn recompute(&mut self, host_fps: u32) {
        self.speed_modifier = coerce(self.speed_modifier);
        let fps = host_fps as f32;
        let ticks = if self.speed_modifier > 0.0 {
            fps / self.speed_modifier
        } else {
            self.speed_modifier.abs() * fps
        };
        self.threshold = ticks.round_ties_even() as u32;
        self.dirty = false;
    }
}

fn is_valid(modifier: f32) -> bool {
    modifier != 0.0 && modifier.is_finite()
}

fn coerce(modifier: f32) -> f32 {
    if is_valid(modifier) { modifier } else { 1.0 }
}
