use crate::api::types::AtomId;
use crate::components::atom::{ActivationSchedule, Atom};

/// Per-tick update: resolve due activations, then spin the particles of active atoms.
///
/// Atoms are independent of each other. Returns the ids activated by a schedule
/// during this tick.
pub fn tick_atoms(atoms: &mut [Atom], now: f64, dt: f32) -> Vec<AtomId> {
    let mut activated = Vec::new();

    for atom in atoms.iter_mut() {
        if atom.schedule.is_due(now) {
            atom.active = true;
            atom.schedule = ActivationSchedule::Unscheduled;
            activated.push(atom.id);
        }

        if atom.active {
            for particle in atom.particles.iter_mut() {
                particle.advance(dt);
            }
        }
    }

    activated
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::components::atom::OrbitingParticle;

    const DT: f32 = 1.0 / 60.0;

    fn atom_with_particle(id: u32) -> Atom {
        Atom::new(AtomId(id), 0, Vec2::new(400.0, 300.0), 16.0).with_particles(vec![
            OrbitingParticle { radius: 30.0, angle: 0.0, speed: 0.6 },
        ])
    }

    #[test]
    fn idle_atoms_do_not_spin() {
        let mut atoms = vec![atom_with_particle(1)];
        tick_atoms(&mut atoms, 0.0, DT);
        assert_eq!(atoms[0].particles[0].angle, 0.0);
    }

    #[test]
    fn active_atoms_spin_by_speed_times_dt() {
        let mut atoms = vec![atom_with_particle(1)];
        atoms[0].active = true;
        tick_atoms(&mut atoms, 0.0, DT);
        assert!((atoms[0].particles[0].angle - 0.6 * DT).abs() < 1e-6);
    }

    #[test]
    fn schedule_fires_at_deadline() {
        let mut atoms = vec![atom_with_particle(1)];
        atoms[0].schedule = ActivationSchedule::ScheduledAt(3.0);

        let fired = tick_atoms(&mut atoms, 3.0 - 1e-6, DT);
        assert!(fired.is_empty());
        assert!(!atoms[0].active);
        assert!(atoms[0].schedule.is_pending());

        let fired = tick_atoms(&mut atoms, 3.0, DT);
        assert_eq!(fired, vec![AtomId(1)]);
        assert!(atoms[0].active);
        assert_eq!(atoms[0].schedule, ActivationSchedule::Unscheduled);
        // Activated atoms spin on the same tick
        assert!(atoms[0].particles[0].angle > 0.0);
    }

    #[test]
    fn stale_schedule_on_active_atom_is_cleared() {
        let mut atoms = vec![atom_with_particle(1)];
        atoms[0].active = true;
        atoms[0].schedule = ActivationSchedule::ScheduledAt(1.0);
        let fired = tick_atoms(&mut atoms, 2.0, DT);
        assert_eq!(fired, vec![AtomId(1)]);
        assert!(atoms[0].active);
        assert!(!atoms[0].schedule.is_pending());
    }
}
