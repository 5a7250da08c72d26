//! Shell allocator: lays out an atom's orbiting particles at creation time.
//!
//! This is a visual allocator with a fixed shape, not a model of real electron
//! configurations.

use std::f32::consts::TAU;
use crate::components::atom::OrbitingParticle;
use crate::core::rng::Rng;

/// Atomic numbers above this are drawn as if they were this.
pub const MAX_VISUAL_PARTICLES: u32 = 24;

/// Particle capacity of each shell, innermost first.
pub const SHELL_CAPACITY: [u32; 4] = [2, 8, 8, 18];

/// Orbit radius of each shell.
pub const SHELL_RADII: [f32; 4] = [30.0, 50.0, 70.0, 90.0];

/// Base angular speed magnitude (rad/s) on even and odd shells.
const EVEN_SHELL_SPEED: f32 = 0.8;
const ODD_SHELL_SPEED: f32 = -0.5;
/// Speed reduction per shell depth.
const DEPTH_FALLOFF: f32 = 0.1;
/// Half-width of the random speed jitter.
const SPEED_JITTER: f32 = 0.1;

/// Particles per shell for an atomic number, after capping. Trailing empty shells are omitted.
pub fn shell_counts(atomic_number: u32) -> Vec<u32> {
    let mut remaining = atomic_number.min(MAX_VISUAL_PARTICLES);
    let mut counts = Vec::with_capacity(SHELL_CAPACITY.len());
    for &cap in SHELL_CAPACITY.iter() {
        if remaining == 0 {
            break;
        }
        let in_shell = remaining.min(cap);
        counts.push(in_shell);
        remaining -= in_shell;
    }
    counts
}

/// Nominal angular speed for a shell, before jitter.
pub fn base_speed(shell: usize) -> f32 {
    let sign_speed = if shell % 2 == 0 { EVEN_SHELL_SPEED } else { ODD_SHELL_SPEED };
    sign_speed * (1.0 - shell as f32 * DEPTH_FALLOFF)
}

/// Build the orbiting particles for an atom.
///
/// Particles in a shell of `k` are spaced evenly starting at angle 0. Speeds carry
/// random jitter, so only structure (counts, radii, angles) is reproducible.
pub fn allocate(atomic_number: u32, rng: &mut Rng) -> Vec<OrbitingParticle> {
    let counts = shell_counts(atomic_number);
    let mut particles = Vec::with_capacity(counts.iter().sum::<u32>() as usize);

    for (shell, &count) in counts.iter().enumerate() {
        let radius = SHELL_RADII[shell];
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let jitter = (rng.next_f32() - 0.5) * 2.0 * SPEED_JITTER;
            particles.push(OrbitingParticle {
                radius,
                angle,
                speed: base_speed(shell) + jitter,
            });
        }
    }

    particles
}
