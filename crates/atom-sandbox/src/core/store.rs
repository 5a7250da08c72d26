use glam::Vec2;
use crate::api::types::AtomId;
use crate::components::atom::{ActivationSchedule, Atom, OrbitingParticle};
use crate::components::link::Link;

/// How `EntityStore::set_selection` combines ids with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Deselect everything, then select exactly the given ids.
    Replace,
    /// Flip the given ids, leave the rest alone.
    Toggle,
}

/// Owns every atom and link.
///
/// Flat `Vec`s in insertion order: iteration order is draw order, and the side
/// panel lists atoms in the same order.
pub struct EntityStore {
    atoms: Vec<Atom>,
    links: Vec<Link>,
    next_id: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            atoms: Vec::with_capacity(64),
            links: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an idle, unselected atom and return its fresh id.
    pub fn add_atom(
        &mut self,
        element_index: usize,
        pos: Vec2,
        radius: f32,
        particles: Vec<OrbitingParticle>,
    ) -> AtomId {
        let id = AtomId(self.next_id);
        self.next_id += 1;
        self.atoms.push(Atom::new(id, element_index, pos, radius).with_particles(particles));
        id
    }

    /// Delete every selected atom and every link touching one. Returns the removed ids.
    pub fn remove_selected(&mut self) -> Vec<AtomId> {
        let removed: Vec<AtomId> = self.atoms.iter()
            .filter(|a| a.selected)
            .map(|a| a.id)
            .collect();
        if removed.is_empty() {
            return removed;
        }

        self.atoms.retain(|a| !a.selected);
        self.links.retain(|l| !removed.iter().any(|id| l.touches(*id)));
        removed
    }

    /// Flip `active` on every selected atom. Schedules are left as they are.
    pub fn toggle_active_selected(&mut self) -> usize {
        let mut count = 0;
        for atom in self.atoms.iter_mut().filter(|a| a.selected) {
            atom.active = !atom.active;
            count += 1;
        }
        count
    }

    /// Schedule every selected atom for `now + delay`, overwriting earlier schedules.
    pub fn schedule_selected(&mut self, now: f64, delay: f64) -> usize {
        let mut count = 0;
        for atom in self.atoms.iter_mut().filter(|a| a.selected) {
            atom.schedule = ActivationSchedule::ScheduledAt(now + delay);
            count += 1;
        }
        count
    }

    /// Remove all atoms and links. Ids keep counting up.
    pub fn clear_all(&mut self) {
        self.atoms.clear();
        self.links.clear();
    }

    /// Link the two selected atoms. No-op unless exactly two are selected,
    /// or when the link already exists.
    pub fn link_selected_pair(&mut self) -> Option<Link> {
        let mut selected = self.atoms.iter().filter(|a| a.selected).map(|a| a.id);
        let (first, second) = match (selected.next(), selected.next(), selected.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return None,
        };

        let link = Link::between(first, second)?;
        if self.links.contains(&link) {
            return None;
        }
        self.links.push(link);
        Some(link)
    }

    /// Apply a selection change. Ids that don't exist are ignored.
    pub fn set_selection(&mut self, ids: &[AtomId], mode: SelectionMode) {
        match mode {
            SelectionMode::Replace => {
                for atom in self.atoms.iter_mut() {
                    atom.selected = ids.contains(&atom.id);
                }
            }
            SelectionMode::Toggle => {
                for atom in self.atoms.iter_mut().filter(|a| ids.contains(&a.id)) {
                    atom.selected = !atom.selected;
                }
            }
        }
    }

    /// Deselect every atom.
    pub fn clear_selection(&mut self) {
        self.set_selection(&[], SelectionMode::Replace);
    }

    /// Move an atom. Returns false if the atom no longer exists.
    pub fn set_position(&mut self, id: AtomId, pos: Vec2) -> bool {
        match self.get_mut(id) {
            Some(atom) => {
                atom.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.iter_mut().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AtomId) -> bool {
        self.get(id).is_some()
    }

    /// Atoms in insertion order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn selected_ids(&self) -> Vec<AtomId> {
        self.atoms.iter().filter(|a| a.selected).map(|a| a.id).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.selected).count()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Positions of both ends of a link, if both atoms exist.
    pub fn link_endpoints(&self, link: &Link) -> Option<(Vec2, Vec2)> {
        Some((self.get(link.a)?.pos, self.get(link.b)?.pos))
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: usize) -> (EntityStore, Vec<AtomId>) {
        let mut store = EntityStore::new();
        let ids = (0..n)
            .map(|i| store.add_atom(0, Vec2::new(400.0 + i as f32 * 50.0, 300.0), 16.0, Vec::new()))
            .collect();
        (store, ids)
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let (mut store, ids) = store_with(5);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids[0], AtomId(1));

        // Ids are never reused, not even after a clear
        store.clear_all();
        let next = store.add_atom(0, Vec2::ZERO, 16.0, Vec::new());
        assert_eq!(next, AtomId(6));
    }

    #[test]
    fn remove_selected_cascades_links() {
        let (mut store, ids) = store_with(3);
        store.set_selection(&[ids[0], ids[1]], SelectionMode::Replace);
        store.link_selected_pair();
        store.set_selection(&[ids[1], ids[2]], SelectionMode::Replace);
        store.link_selected_pair();
        assert_eq!(store.link_count(), 2);

        store.set_selection(&[ids[1]], SelectionMode::Replace);
        let removed = store.remove_selected();
        assert_eq!(removed, vec![ids[1]]);
        assert_eq!(store.atom_count(), 2);
        assert!(store.links().iter().all(|l| !l.touches(ids[1])));
        assert_eq!(store.link_count(), 0);
    }

    #[test]
    fn remove_selected_preserves_order() {
        let (mut store, ids) = store_with(4);
        store.set_selection(&[ids[1]], SelectionMode::Replace);
        store.remove_selected();
        let remaining: Vec<AtomId> = store.atoms().iter().map(|a| a.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn remove_without_selection_is_noop() {
        let (mut store, _) = store_with(2);
        assert!(store.remove_selected().is_empty());
        assert_eq!(store.atom_count(), 2);
    }

    #[test]
    fn link_pair_is_idempotent() {
        let (mut store, ids) = store_with(2);
        store.set_selection(&ids, SelectionMode::Replace);
        assert!(store.link_selected_pair().is_some());
        assert!(store.link_selected_pair().is_none());
        assert_eq!(store.link_count(), 1);
        assert_eq!(store.links()[0], Link { a: ids[0], b: ids[1] });
    }

    #[test]
    fn link_requires_exactly_two() {
        let (mut store, ids) = store_with(3);
        store.set_selection(&[ids[0]], SelectionMode::Replace);
        assert!(store.link_selected_pair().is_none());
        store.set_selection(&ids, SelectionMode::Replace);
        assert!(store.link_selected_pair().is_none());
        store.clear_selection();
        assert!(store.link_selected_pair().is_none());
        assert_eq!(store.link_count(), 0);
    }

    #[test]
    fn toggle_selection_is_self_inverse() {
        let (mut store, ids) = store_with(3);
        store.set_selection(&[ids[0]], SelectionMode::Replace);
        let before = store.selected_ids();

        store.set_selection(&[ids[0], ids[2]], SelectionMode::Toggle);
        assert_eq!(store.selected_ids(), vec![ids[2]]);
        store.set_selection(&[ids[0], ids[2]], SelectionMode::Toggle);
        assert_eq!(store.selected_ids(), before);
    }

    #[test]
    fn replace_ignores_unknown_ids() {
        let (mut store, ids) = store_with(2);
        store.set_selection(&[ids[1], AtomId(99)], SelectionMode::Replace);
        assert_eq!(store.selected_ids(), vec![ids[1]]);
    }

    #[test]
    fn toggle_active_leaves_schedule() {
        let (mut store, ids) = store_with(2);
        store.set_selection(&[ids[0]], SelectionMode::Replace);
        store.schedule_selected(1.0, 2.0);
        assert_eq!(store.toggle_active_selected(), 1);

        let atom = store.get(ids[0]).unwrap();
        assert!(atom.active);
        assert_eq!(atom.schedule, ActivationSchedule::ScheduledAt(3.0));
        assert!(!store.get(ids[1]).unwrap().active);
    }

    #[test]
    fn schedule_overwrites_previous() {
        let (mut store, ids) = store_with(1);
        store.set_selection(&ids, SelectionMode::Replace);
        store.schedule_selected(0.0, 2.0);
        store.schedule_selected(5.0, 2.0);
        assert_eq!(store.get(ids[0]).unwrap().schedule, ActivationSchedule::ScheduledAt(7.0));
    }

    #[test]
    fn set_position_on_missing_atom() {
        let (mut store, ids) = store_with(1);
        assert!(store.set_position(ids[0], Vec2::new(1.0, 2.0)));
        assert!(!store.set_position(AtomId(42), Vec2::new(1.0, 2.0)));
    }
}
