/// Monotonic simulation clock.
/// Advanced only by the tick loop, so it is independent of how often the host renders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    /// Elapsed simulation time in seconds.
    elapsed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Current simulation time in seconds since the clock started.
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    /// Move the clock forward. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt as f64;
        }
    }
}

/// Tick length used when the host supplies an unusable one.
pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;

/// Most fixed steps a single frame may run.
const MAX_STEPS_PER_FRAME: f32 = 10.0;

/// `dt` if it is a usable tick length, otherwise `DEFAULT_FIXED_DT`.
pub fn sanitize_fixed_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        DEFAULT_FIXED_DT
    }
}

/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of equal simulation ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick, always finite and positive.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// A zero, negative or non-finite `dt` falls back to `DEFAULT_FIXED_DT`,
    /// so the clock can never stall or run backwards.
    pub fn new(dt: f32) -> Self {
        let sane = sanitize_fixed_dt(dt);
        if sane != dt {
            log::warn!("timestep: unusable fixed dt {}, using {}", dt, sane);
        }
        Self {
            dt: sane,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        // A long stall (tab in background) costs at most MAX_STEPS_PER_FRAME ticks
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a tick left in the accumulator (0.0 to 1.0), for hosts that
    /// interpolate particle angles between ticks.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
