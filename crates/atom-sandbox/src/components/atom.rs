use glam::Vec2;
use serde::Serialize;
use crate::api::types::AtomId;

/// A sub-particle circling its atom's nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitingParticle {
    /// Distance from the atom center.
    pub radius: f32,
    /// Current angle in radians, kept in [0, TAU).
    pub angle: f32,
    /// Angular speed in radians per second. Sign gives the direction.
    pub speed: f32,
}

impl OrbitingParticle {
    /// Rotate by `speed * dt`, keeping the angle bounded.
    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + self.speed * dt).rem_euclid(std::f32::consts::TAU);
    }

    /// World position of the particle for an atom centered at `center`.
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius
    }
}

/// Pending activation of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActivationSchedule {
    #[default]
    Unscheduled,
    /// Activate once simulation time reaches this value (seconds).
    ScheduledAt(f64),
}

impl ActivationSchedule {
    /// Whether a pending schedule has come due at `now`.
    pub fn is_due(&self, now: f64) -> bool {
        match *self {
            ActivationSchedule::ScheduledAt(at) => now >= at,
            ActivationSchedule::Unscheduled => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActivationSchedule::ScheduledAt(_))
    }

    pub fn time(&self) -> Option<f64> {
        match *self {
            ActivationSchedule::ScheduledAt(at) => Some(at),
            ActivationSchedule::Unscheduled => None,
        }
    }
}

/// An atom on the canvas.
#[derive(Debug, Clone)]
pub struct Atom {
    pub id: AtomId,
    /// Index into the element catalog.
    pub element_index: usize,
    pub pos: Vec2,
    /// Display radius of the nucleus.
    pub radius: f32,
    /// Active atoms animate their particles.
    pub active: bool,
    pub selected: bool,
    pub particles: Vec<OrbitingParticle>,
    pub schedule: ActivationSchedule,
}

impl Atom {
    /// Create an idle, unselected atom.
    pub fn new(id: AtomId, element_index: usize, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            element_index,
            pos,
            radius,
            active: false,
            selected: false,
            particles: Vec::new(),
            schedule: ActivationSchedule::Unscheduled,
        }
    }

    pub fn with_particles(mut self, particles: Vec<OrbitingParticle>) -> Self {
        self.particles = particles;
        self
    }

    /// Whether `point` lies within the nucleus plus `margin`.
    pub fn contains(&self, point: Vec2, margin: f32) -> bool {
        point.distance(self.pos) <= self.radius + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn new_atom_is_idle() {
        let atom = Atom::new(AtomId(1), 0, Vec2::new(400.0, 300.0), 16.0);
        assert!(!atom.active);
        assert!(!atom.selected);
        assert!(atom.particles.is_empty());
        assert_eq!(atom.schedule, ActivationSchedule::Unscheduled);
    }

    #[test]
    fn particle_angle_stays_bounded() {
        let mut p = OrbitingParticle { radius: 30.0, angle: 6.0, speed: 1.0 };
        p.advance(1.0);
        assert!(p.angle >= 0.0 && p.angle < TAU, "angle was {}", p.angle);
        assert!((p.angle - (7.0 - TAU)).abs() < 1e-4);

        let mut q = OrbitingParticle { radius: 30.0, angle: 0.1, speed: -0.5 };
        q.advance(1.0);
        assert!(q.angle >= 0.0 && q.angle < TAU, "angle was {}", q.angle);
    }

    #[test]
    fn particle_position_on_orbit() {
        let p = OrbitingParticle { radius: 50.0, angle: 0.0, speed: 0.0 };
        let pos = p.position(Vec2::new(10.0, 20.0));
        assert!((pos - Vec2::new(60.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn schedule_due_at_boundary() {
        let s = ActivationSchedule::ScheduledAt(2.0);
        assert!(!s.is_due(1.999));
        assert!(s.is_due(2.0));
        assert!(s.is_due(3.0));
        assert!(!ActivationSchedule::Unscheduled.is_due(100.0));
        assert_eq!(s.time(), Some(2.0));
    }

    #[test]
    fn contains_uses_radius_plus_margin() {
        let atom = Atom::new(AtomId(1), 0, Vec2::new(0.0, 0.0), 16.0);
        assert!(atom.contains(Vec2::new(24.0, 0.0), 8.0));
        assert!(!atom.contains(Vec2::new(24.1, 0.0), 8.0));
    }
}
