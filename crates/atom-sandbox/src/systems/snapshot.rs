//! Read-only per-frame view of the sandbox, handed to the renderer.

use glam::Vec2;
use serde::Serialize;
use crate::api::types::AtomId;
use crate::components::element::ElementCatalog;
use crate::core::store::EntityStore;
use crate::input::controller::SelectionController;
use crate::input::layout::Rect;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub radius: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomView {
    pub id: AtomId,
    pub element_index: usize,
    pub symbol: &'static str,
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
    pub selected: bool,
    /// Pending activation time, if scheduled.
    pub scheduled_at: Option<f64>,
    pub particles: Vec<ParticleView>,
}

/// A link with both endpoints resolved to positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub a: AtomId,
    pub b: AtomId,
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub label: &'static str,
    pub rect: Rect,
    pub hover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Simulation time in seconds.
    pub time: f64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub sidebar_width: f32,
    pub selected_element: usize,
    pub selected_element_name: &'static str,
    pub selected_element_symbol: &'static str,
    pub atoms: Vec<AtomView>,
    pub links: Vec<LinkView>,
    pub buttons: Vec<ButtonView>,
    /// Y of the first atom row in the side-panel list.
    pub list_top: f32,
}

impl FrameSnapshot {
    /// Side-panel row text for an atom, e.g. `ID 3  O  [Active]`.
    pub fn row_label(atom: &AtomView) -> String {
        let state = if atom.active { "[Active]" } else { "[Idle]" };
        format!("ID {}  {}  {}", atom.id.0, atom.symbol, state)
    }

    /// Serialize for a JSON-reading host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Viewport details the snapshot reports alongside the entities.
pub struct SnapshotFrame {
    pub time: f64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub sidebar_width: f32,
    pub selected_element: usize,
}

/// Build a snapshot from the live state.
pub fn build_snapshot(
    frame: SnapshotFrame,
    store: &EntityStore,
    catalog: &ElementCatalog,
    controller: &SelectionController,
) -> FrameSnapshot {
    let atoms = store.atoms().iter()
        .map(|atom| AtomView {
            id: atom.id,
            element_index: atom.element_index,
            symbol: catalog.element(atom.element_index).symbol,
            pos: atom.pos,
            radius: atom.radius,
            active: atom.active,
            selected: atom.selected,
            scheduled_at: atom.schedule.time(),
            particles: atom.particles.iter()
                .map(|p| ParticleView { radius: p.radius, angle: p.angle })
                .collect(),
        })
        .collect();

    let links = store.links().iter()
        .filter_map(|link| {
            let (from, to) = store.link_endpoints(link)?;
            Some(LinkView { a: link.a, b: link.b, from, to })
        })
        .collect();

    let layout = controller.layout();
    let buttons = layout.buttons.iter()
        .enumerate()
        .map(|(i, b)| ButtonView {
            label: b.command.label(),
            rect: b.rect,
            hover: controller.hovered_button() == Some(i),
        })
        .collect();

    let element = catalog.element(frame.selected_element);
    FrameSnapshot {
        time: frame.time,
        canvas_width: frame.canvas_width,
        canvas_height: frame.canvas_height,
        sidebar_width: frame.sidebar_width,
        selected_element: frame.selected_element,
        selected_element_name: element.name,
        selected_element_symbol: element.symbol,
        atoms,
        links,
        buttons,
        list_top: layout.list_top,
    }
}
