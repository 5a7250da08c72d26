use bytemuck::{Pod, Zeroable};
use crate::core::store::EntityStore;

/// Bits packed into `AtomInstance::flags`.
pub mod atom_flags {
    pub const ACTIVE: u32 = 1 << 0;
    pub const SELECTED: u32 = 1 << 1;
    pub const SCHEDULED: u32 = 1 << 2;
}

/// Per-atom render data for shared-memory reads by the host renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AtomInstance {
    pub x: f32,
    pub y: f32,
    /// Nucleus display radius.
    pub radius: f32,
    /// Index into the element catalog.
    pub element_index: f32,
    /// `atom_flags` bits, stored as a float.
    pub flags: f32,
    /// Index of this atom's first entry in the particle array.
    pub first_particle: f32,
    pub particle_count: f32,
    /// Atom id, so the host can map rows back to atoms.
    pub id: f32,
}

impl AtomInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags as u32) & flag != 0
    }
}

/// One orbiting particle, already placed in world space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    /// Orbit radius, for drawing the shell ring.
    pub orbit_radius: f32,
    pub angle: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 4;
}

/// A link segment between two atom centers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LinkInstance {
    pub ax: f32,
    pub ay: f32,
    pub bx: f32,
    pub by: f32,
}

impl LinkInstance {
    pub const FLOATS: usize = 4;
}

/// Flat render arrays rebuilt from the store every frame.
pub struct RenderBuffer {
    pub atoms: Vec<AtomInstance>,
    pub particles: Vec<ParticleInstance>,
    pub links: Vec<LinkInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(atoms: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(atoms),
            particles: Vec::with_capacity(atoms * 8),
            links: Vec::with_capacity(atoms),
        }
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
        self.particles.clear();
        self.links.clear();
    }

    /// Refill every array from the current store contents, in store order.
    pub fn rebuild(&mut self, store: &EntityStore) {
        self.clear();

        for atom in store.atoms() {
            let mut flags = 0;
            if atom.active {
                flags |= atom_flags::ACTIVE;
            }
            if atom.selected {
                flags |= atom_flags::SELECTED;
            }
            if atom.schedule.is_pending() {
                flags |= atom_flags::SCHEDULED;
            }

            self.atoms.push(AtomInstance {
                x: atom.pos.x,
                y: atom.pos.y,
                radius: atom.radius,
                element_index: atom.element_index as f32,
                flags: flags as f32,
                first_particle: self.particles.len() as f32,
                particle_count: atom.particles.len() as f32,
                id: atom.id.0 as f32,
            });

            for particle in &atom.particles {
                let p = particle.position(atom.pos);
                self.particles.push(ParticleInstance {
                    x: p.x,
                    y: p.y,
                    orbit_radius: particle.radius,
                    angle: particle.angle,
                });
            }
        }

        for link in store.links() {
            if let Some((a, b)) = store.link_endpoints(link) {
                self.links.push(LinkInstance { ax: a.x, ay: a.y, bx: b.x, by: b.y });
            }
        }
    }

    pub fn atom_count(&self) -> u32 {
        self.atoms.len() as u32
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn link_count(&self) -> u32 {
        self.links.len() as u32
    }

    /// Raw pointer to atom data for shared-memory reads.
    pub fn atoms_ptr(&self) -> *const f32 {
        self.atoms.as_ptr() as *const f32
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.links.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
