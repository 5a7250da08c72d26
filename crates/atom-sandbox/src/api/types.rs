use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Unique identifier for an atom. Assigned monotonically, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AtomId(pub u32);

/// Direction for cycling through the element catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Previous,
    Next,
}

/// Every action the side panel (or a host UI) can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spawn an atom of the currently selected element.
    AddAtom,
    /// Flip `active` on every selected atom.
    ToggleActive,
    /// Schedule every selected atom for activation after the configured delay.
    Schedule,
    /// Link the two selected atoms.
    Link,
    /// Delete every selected atom (and the links touching them).
    RemoveSelected,
    /// Empty the sandbox.
    ClearAll,
    /// Move the selected-element cursor through the catalog.
    CycleElement(CycleDirection),
}

/// Custom event kinds a host sends through `InputEvent::Custom`.
pub mod command_kinds {
    pub const ADD_ATOM: u32 = 1;
    pub const TOGGLE_ACTIVE: u32 = 2;
    pub const SCHEDULE: u32 = 3;
    pub const LINK: u32 = 4;
    pub const REMOVE_SELECTED: u32 = 5;
    pub const CLEAR_ALL: u32 = 6;
    /// `a < 0` cycles backwards, anything else forwards.
    pub const CYCLE_ELEMENT: u32 = 7;
}

impl Command {
    /// Decode a host custom event. Returns `None` for unknown kinds.
    pub fn from_custom(kind: u32, a: f32) -> Option<Self> {
        use command_kinds::*;
        let command = match kind {
            ADD_ATOM => Command::AddAtom,
            TOGGLE_ACTIVE => Command::ToggleActive,
            SCHEDULE => Command::Schedule,
            LINK => Command::Link,
            REMOVE_SELECTED => Command::RemoveSelected,
            CLEAR_ALL => Command::ClearAll,
            CYCLE_ELEMENT if a < 0.0 => Command::CycleElement(CycleDirection::Previous),
            CYCLE_ELEMENT => Command::CycleElement(CycleDirection::Next),
            _ => return None,
        };
        Some(command)
    }

    /// Label shown on the side-panel button bound to this command.
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddAtom => "Add Atom",
            Command::ToggleActive => "Toggle Active",
            Command::Schedule => "Schedule +2s",
            Command::Link => "Link Pair",
            Command::RemoveSelected => "Remove Selected",
            Command::ClearAll => "Clear All",
            Command::CycleElement(CycleDirection::Previous) => "< Element",
            Command::CycleElement(CycleDirection::Next) => "Element >",
        }
    }
}

/// Something that happened during a frame, forwarded to the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SandboxEvent {
    AtomAdded { id: AtomId },
    AtomsRemoved { count: usize },
    LinkCreated { a: AtomId, b: AtomId },
    AtomActivated { id: AtomId },
    SelectionChanged { selected: usize },
    ElementChanged { index: usize },
    Cleared,
}

/// Event kinds in the packed `EventRecord` stream.
pub mod event_kinds {
    pub const ATOM_ADDED: f32 = 1.0;
    pub const ATOMS_REMOVED: f32 = 2.0;
    pub const LINK_CREATED: f32 = 3.0;
    pub const ATOM_ACTIVATED: f32 = 4.0;
    pub const SELECTION_CHANGED: f32 = 5.0;
    pub const ELEMENT_CHANGED: f32 = 6.0;
    pub const CLEARED: f32 = 7.0;
}

/// A sandbox event packed for shared-memory reads.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    fn new(kind: f32, a: f32, b: f32) -> Self {
        Self { kind, a, b, c: 0.0 }
    }
}

impl From<SandboxEvent> for EventRecord {
    fn from(event: SandboxEvent) -> Self {
        use event_kinds::*;
        match event {
            SandboxEvent::AtomAdded { id } => Self::new(ATOM_ADDED, id.0 as f32, 0.0),
            SandboxEvent::AtomsRemoved { count } => Self::new(ATOMS_REMOVED, count as f32, 0.0),
            SandboxEvent::LinkCreated { a, b } => Self::new(LINK_CREATED, a.0 as f32, b.0 as f32),
            SandboxEvent::AtomActivated { id } => Self::new(ATOM_ACTIVATED, id.0 as f32, 0.0),
            SandboxEvent::SelectionChanged { selected } => {
                Self::new(SELECTION_CHANGED, selected as f32, 0.0)
            }
            SandboxEvent::ElementChanged { index } => Self::new(ELEMENT_CHANGED, index as f32, 0.0),
            SandboxEvent::Cleared => Self::new(CLEARED, 0.0, 0.0),
        }
    }
}
