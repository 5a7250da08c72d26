//! Pointer handling for the sandbox: panel buttons, list selection, canvas
//! picking and atom dragging.

use glam::Vec2;
use crate::api::types::{AtomId, Command};
use crate::core::store::{EntityStore, SelectionMode};
use crate::input::keys::ModifierQuery;
use crate::input::layout::{CanvasBounds, PanelLayout};
use crate::input::queue::PointerButton;

/// The current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// No active interaction.
    Idle,
    /// Dragging an atom. `offset` is pointer minus atom position at press time.
    DragAtom { atom: AtomId, offset: Vec2 },
}

/// What the sandbox should do in response to a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResult {
    /// No action needed.
    None,
    /// A panel button was pressed.
    Command(Command),
    /// Change the selection.
    Select { ids: Vec<AtomId>, mode: SelectionMode },
    /// Clicked empty canvas.
    ClearSelection,
    /// Move a dragged atom to an already clamped position.
    MoveAtom { id: AtomId, pos: Vec2 },
}

/// Tunables the controller needs from the sandbox configuration.
#[derive(Debug, Clone, Copy)]
pub struct PickSettings {
    pub sidebar_width: f32,
    pub hit_margin: f32,
    pub bounds: CanvasBounds,
}

/// Turns pointer events into interaction results.
///
/// Holds only the drag session and button hover state; everything else is read
/// from the store passed in with each event.
pub struct SelectionController {
    mode: InteractionMode,
    layout: PanelLayout,
    hovered: Option<usize>,
    pointer: Vec2,
}

impl SelectionController {
    pub fn new(layout: PanelLayout) -> Self {
        Self {
            mode: InteractionMode::Idle,
            layout,
            hovered: None,
            pointer: Vec2::ZERO,
        }
    }

    /// Get the current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Swap in host-provided hit regions.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        self.layout = layout;
        self.hovered = self.hover_index(self.pointer);
    }

    /// Index into `layout().buttons` of the button under the pointer.
    pub fn hovered_button(&self) -> Option<usize> {
        self.hovered
    }

    /// Get the current pointer position.
    pub fn pointer_pos(&self) -> Vec2 {
        self.pointer
    }

    /// Id of the atom being dragged, if any.
    pub fn dragged_atom(&self) -> Option<AtomId> {
        match self.mode {
            InteractionMode::DragAtom { atom, .. } => Some(atom),
            InteractionMode::Idle => None,
        }
    }

    fn hover_index(&self, pos: Vec2) -> Option<usize> {
        self.layout.buttons.iter().position(|b| b.rect.contains(pos))
    }

    /// Handle pointer down event.
    pub fn on_pointer_down(
        &mut self,
        pos: Vec2,
        button: PointerButton,
        store: &EntityStore,
        modifiers: &impl ModifierQuery,
        settings: &PickSettings,
    ) -> InteractionResult {
        self.pointer = pos;
        if button != PointerButton::Primary {
            return InteractionResult::None;
        }

        if let Some(hit) = self.layout.button_at(pos) {
            return InteractionResult::Command(hit.command);
        }

        let mode = if modifiers.toggle_held() {
            SelectionMode::Toggle
        } else {
            SelectionMode::Replace
        };

        if pos.x < settings.sidebar_width {
            return match self.layout.row_at(pos, store.atom_count(), settings.sidebar_width) {
                Some(row) => InteractionResult::Select {
                    ids: vec![store.atoms()[row].id],
                    mode,
                },
                None => InteractionResult::None,
            };
        }

        // Later atoms are drawn on top, so the last hit wins.
        let hit = store.atoms().iter()
            .rev()
            .find(|a| a.contains(pos, settings.hit_margin));

        match hit {
            Some(atom) => {
                self.mode = InteractionMode::DragAtom {
                    atom: atom.id,
                    offset: pos - atom.pos,
                };
                InteractionResult::Select { ids: vec![atom.id], mode }
            }
            None => InteractionResult::ClearSelection,
        }
    }

    /// Handle pointer move event. Updates hover state and any drag in progress.
    pub fn on_pointer_move(
        &mut self,
        pos: Vec2,
        store: &EntityStore,
        settings: &PickSettings,
    ) -> InteractionResult {
        self.pointer = pos;
        self.hovered = self.hover_index(pos);

        match self.mode {
            InteractionMode::DragAtom { atom, offset } if store.contains(atom) => {
                InteractionResult::MoveAtom {
                    id: atom,
                    pos: settings.bounds.clamp(pos - offset),
                }
            }
            // The dragged atom was deleted mid-drag.
            InteractionMode::DragAtom { .. } => InteractionResult::None,
            InteractionMode::Idle => InteractionResult::None,
        }
    }

    /// Handle pointer up event. Ends any drag, whatever the button or position.
    pub fn on_pointer_up(&mut self, pos: Vec2) -> InteractionResult {
        self.pointer = pos;
        self.mode = InteractionMode::Idle;
        InteractionResult::None
    }

    /// Reset the interaction state.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(PanelLayout::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SandboxConfig;
    use crate::api::types::CycleDirection;
    use crate::input::keys::{key_codes, KeyState};

    fn settings() -> PickSettings {
        let config = SandboxConfig::default();
        PickSettings {
            sidebar_width: config.sidebar_width,
            hit_margin: config.hit_margin,
            bounds: CanvasBounds::from_config(&config),
        }
    }

    fn store_with(positions: &[Vec2]) -> EntityStore {
        let mut store = EntityStore::new();
        for &p in positions {
            store.add_atom(0, p, 16.0, Vec::new());
        }
        store
    }

    #[test]
    fn initial_state_is_idle() {
        let controller = SelectionController::default();
        assert_eq!(controller.mode(), InteractionMode::Idle);
        assert_eq!(controller.dragged_atom(), None);
    }

    #[test]
    fn button_press_dispatches_command_and_consumes() {
        let mut controller = SelectionController::default();
        let store = store_with(&[]);
        let result = controller.on_pointer_down(
            Vec2::new(30.0, 80.0),
            PointerButton::Primary,
            &store,
            &KeyState::new(),
            &settings(),
        );
        assert_eq!(result, InteractionResult::Command(Command::AddAtom));
        assert_eq!(controller.mode(), InteractionMode::Idle);

        let result = controller.on_pointer_down(
            Vec2::new(20.0, 25.0),
            PointerButton::Primary,
            &store,
            &KeyState::new(),
            &settings(),
        );
        assert_eq!(result, InteractionResult::Command(Command::CycleElement(CycleDirection::Previous)));
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0)]);
        let result = controller.on_pointer_down(
            Vec2::new(500.0, 400.0),
            PointerButton::Secondary,
            &store,
            &KeyState::new(),
            &settings(),
        );
        assert_eq!(result, InteractionResult::None);
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn list_row_selects_with_modifier_awareness() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0), Vec2::new(600.0, 400.0)]);
        let second_row = Vec2::new(40.0, 370.0);

        let result = controller.on_pointer_down(
            second_row, PointerButton::Primary, &store, &KeyState::new(), &settings(),
        );
        assert_eq!(result, InteractionResult::Select { ids: vec![AtomId(2)], mode: SelectionMode::Replace });

        let mut keys = KeyState::new();
        keys.press(key_codes::CONTROL);
        let result = controller.on_pointer_down(
            second_row, PointerButton::Primary, &store, &keys, &settings(),
        );
        assert_eq!(result, InteractionResult::Select { ids: vec![AtomId(2)], mode: SelectionMode::Toggle });
        // List clicks never start a drag
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn panel_press_off_rows_does_nothing() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0)]);
        let result = controller.on_pointer_down(
            Vec2::new(40.0, 600.0), PointerButton::Primary, &store, &KeyState::new(), &settings(),
        );
        assert_eq!(result, InteractionResult::None);
    }

    #[test]
    fn topmost_atom_wins_overlapping_hit() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0), Vec2::new(510.0, 400.0)]);
        let result = controller.on_pointer_down(
            Vec2::new(505.0, 400.0), PointerButton::Primary, &store, &KeyState::new(), &settings(),
        );
        assert_eq!(result, InteractionResult::Select { ids: vec![AtomId(2)], mode: SelectionMode::Replace });
        assert_eq!(controller.dragged_atom(), Some(AtomId(2)));
    }

    #[test]
    fn empty_canvas_clears_selection() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0)]);
        let result = controller.on_pointer_down(
            Vec2::new(900.0, 100.0), PointerButton::Primary, &store, &KeyState::new(), &settings(),
        );
        assert_eq!(result, InteractionResult::ClearSelection);
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn drag_moves_by_clamped_offset() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0)]);
        let s = settings();
        controller.on_pointer_down(Vec2::new(505.0, 410.0), PointerButton::Primary, &store, &KeyState::new(), &s);

        let result = controller.on_pointer_move(Vec2::new(705.0, 610.0), &store, &s);
        assert_eq!(result, InteractionResult::MoveAtom { id: AtomId(1), pos: Vec2::new(700.0, 600.0) });

        // Dragging into the side panel stops at the canvas edge
        let result = controller.on_pointer_move(Vec2::new(10.0, -50.0), &store, &s);
        assert_eq!(result, InteractionResult::MoveAtom { id: AtomId(1), pos: Vec2::new(340.0, 20.0) });
    }

    #[test]
    fn release_ends_drag() {
        let mut controller = SelectionController::default();
        let store = store_with(&[Vec2::new(500.0, 400.0)]);
        let s = settings();
        controller.on_pointer_down(Vec2::new(500.0, 400.0), PointerButton::Primary, &store, &KeyState::new(), &s);
        controller.on_pointer_up(Vec2::new(50.0, 50.0));
        assert_eq!(controller.on_pointer_move(Vec2::new(800.0, 500.0), &store, &s), InteractionResult::None);
        // Releasing again is harmless
        controller.on_pointer_up(Vec2::new(50.0, 50.0));
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn drag_of_deleted_atom_is_noop() {
        let mut controller = SelectionController::default();
        let mut store = store_with(&[Vec2::new(500.0, 400.0)]);
        let s = settings();
        controller.on_pointer_down(Vec2::new(500.0, 400.0), PointerButton::Primary, &store, &KeyState::new(), &s);
        store.set_selection(&[AtomId(1)], SelectionMode::Replace);
        store.remove_selected();

        assert_eq!(controller.on_pointer_move(Vec2::new(800.0, 500.0), &store, &s), InteractionResult::None);
        controller.on_pointer_up(Vec2::new(800.0, 500.0));
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn hover_tracks_buttons() {
        let mut controller = SelectionController::default();
        let store = store_with(&[]);
        controller.on_pointer_move(Vec2::new(30.0, 120.0), &store, &settings());
        assert_eq!(controller.hovered_button(), Some(3));
        controller.on_pointer_move(Vec2::new(700.0, 120.0), &store, &settings());
        assert_eq!(controller.hovered_button(), None);
    }
}
