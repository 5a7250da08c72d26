use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::core::time::sanitize_fixed_dt;

/// Delay used when the configured one cannot place a schedule in the future.
pub const DEFAULT_SCHEDULE_DELAY: f64 = 2.0;

/// Configuration for the sandbox, provided by the host.
///
/// Every field has a default, so a host may send a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Canvas width in world units, side panel included.
    pub canvas_width: f32,
    /// Canvas height in world units.
    pub canvas_height: f32,
    /// Width of the side panel on the left edge of the canvas.
    pub sidebar_width: f32,
    /// Distance atoms keep from the canvas edges (and from the side panel).
    pub canvas_margin: f32,
    /// Display radius of an atom's nucleus.
    pub nucleus_radius: f32,
    /// Extra slack around the nucleus that still counts as a hit.
    pub hit_margin: f32,
    /// Simulation seconds between "schedule" and activation.
    pub schedule_delay: f64,
    /// Top-left corner of the spawn area, relative to the canvas left bound (x)
    /// and the top edge (y).
    pub spawn_offset: Vec2,
    /// Size of the spawn area.
    pub spawn_extent: Vec2,
    /// Seed for the sandbox random source.
    pub rng_seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            canvas_width: 1200.0,
            canvas_height: 800.0,
            sidebar_width: 320.0,
            canvas_margin: 20.0,
            nucleus_radius: 16.0,
            hit_margin: 8.0,
            schedule_delay: DEFAULT_SCHEDULE_DELAY,
            spawn_offset: Vec2::new(100.0, 100.0),
            spawn_extent: Vec2::new(600.0, 500.0),
            rng_seed: 42,
        }
    }
}

impl SandboxConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Schedule delay. Zero, negative or non-finite values fall back to
    /// `DEFAULT_SCHEDULE_DELAY`, so a schedule always lands in the future.
    pub fn effective_schedule_delay(&self) -> f64 {
        if self.schedule_delay.is_finite() && self.schedule_delay > 0.0 {
            self.schedule_delay
        } else {
            DEFAULT_SCHEDULE_DELAY
        }
    }

    /// Fixed tick length, with the same fallback `FixedTimestep` applies.
    pub fn effective_fixed_dt(&self) -> f32 {
        sanitize_fixed_dt(self.fixed_dt)
    }
}
