use glam::Vec2;
use crate::api::config::SandboxConfig;
use crate::api::types::{Command, CycleDirection, SandboxEvent};
use crate::components::element::ElementCatalog;
use crate::core::rng::Rng;
use crate::core::store::EntityStore;
use crate::core::time::SimulationClock;
use crate::input::controller::{InteractionResult, PickSettings, SelectionController};
use crate::input::keys::KeyState;
use crate::input::layout::{CanvasBounds, PanelLayout};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::Renderer;
use crate::systems::shells;
use crate::systems::snapshot::{build_snapshot, FrameSnapshot, SnapshotFrame};
use crate::systems::tick::tick_atoms;

/// The sandbox: entity store, input controller and clock behind one owner.
///
/// Input is applied with `handle_input`/`dispatch`, time moves with `step`, and
/// the renderer reads `snapshot` or a `RenderBuffer`.
pub struct Sandbox {
    config: SandboxConfig,
    catalog: ElementCatalog,
    store: EntityStore,
    controller: SelectionController,
    keys: KeyState,
    clock: SimulationClock,
    rng: Rng,
    bounds: CanvasBounds,
    /// Catalog index used by "add atom".
    selected_element: usize,
    events: Vec<SandboxEvent>,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        Self::with_catalog(config, ElementCatalog::builtin())
    }

    pub fn with_catalog(config: SandboxConfig, catalog: ElementCatalog) -> Self {
        log::info!(
            "sandbox: {}x{} canvas, {} elements, seed {}",
            config.canvas_width,
            config.canvas_height,
            catalog.len(),
            config.rng_seed
        );
        Self {
            bounds: CanvasBounds::from_config(&config),
            rng: Rng::new(config.rng_seed),
            catalog,
            store: EntityStore::new(),
            controller: SelectionController::new(PanelLayout::standard()),
            keys: KeyState::new(),
            clock: SimulationClock::new(),
            selected_element: 0,
            events: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Current simulation time in seconds.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn selected_element(&self) -> usize {
        self.selected_element
    }

    /// Point "add atom" at a catalog index (wrapped into range).
    pub fn set_selected_element(&mut self, index: usize) {
        let index = index % self.catalog.len();
        if index != self.selected_element {
            self.selected_element = index;
            self.events.push(SandboxEvent::ElementChanged { index });
        }
    }

    /// Replace the side-panel hit regions.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        self.controller.set_layout(layout);
    }

    /// Events emitted since the last `clear_frame_events`.
    pub fn events(&self) -> &[SandboxEvent] {
        &self.events
    }

    pub fn clear_frame_events(&mut self) {
        self.events.clear();
    }

    fn pick_settings(&self) -> PickSettings {
        PickSettings {
            sidebar_width: self.config.sidebar_width,
            hit_margin: self.config.hit_margin,
            bounds: self.bounds,
        }
    }

    /// Forget held modifier keys, e.g. after the host window lost focus.
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Resize the canvas. Atoms outside the new bounds are pulled back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        self.bounds = CanvasBounds::from_config(&self.config);
        let bounds = self.bounds;
        for atom in self.store.atoms_mut() {
            atom.pos = bounds.clamp(atom.pos);
        }
        log::debug!("sandbox: resized to {}x{}", width, height);
    }

    /// Apply every queued input event, in order.
    pub fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            self.handle_event(*event);
        }
    }

    /// Apply a single input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        let settings = self.pick_settings();
        match event {
            InputEvent::PointerDown { x, y, button } => {
                let result = self.controller.on_pointer_down(
                    Vec2::new(x, y),
                    button,
                    &self.store,
                    &self.keys,
                    &settings,
                );
                self.handle_interaction(result);
            }
            InputEvent::PointerMove { x, y } => {
                let result = self.controller.on_pointer_move(Vec2::new(x, y), &self.store, &settings);
                self.handle_interaction(result);
            }
            InputEvent::PointerUp { x, y, .. } => {
                let result = self.controller.on_pointer_up(Vec2::new(x, y));
                self.handle_interaction(result);
            }
            InputEvent::KeyDown { key_code } => self.keys.press(key_code),
            InputEvent::KeyUp { key_code } => self.keys.release(key_code),
            InputEvent::Custom { kind, a, .. } => match Command::from_custom(kind, a) {
                Some(command) => self.dispatch(command),
                None => log::warn!("sandbox: ignoring unknown custom event kind {}", kind),
            },
        }
    }

    /// Process interaction result.
    fn handle_interaction(&mut self, result: InteractionResult) {
        match result {
            InteractionResult::Command(command) => self.dispatch(command),
            InteractionResult::Select { ids, mode } => {
                self.store.set_selection(&ids, mode);
                self.emit_selection();
            }
            InteractionResult::ClearSelection => {
                if self.store.selected_count() > 0 {
                    self.store.clear_selection();
                    self.emit_selection();
                }
            }
            InteractionResult::MoveAtom { id, pos } => {
                self.store.set_position(id, pos);
            }
            InteractionResult::None => {}
        }
    }

    fn emit_selection(&mut self) {
        self.events.push(SandboxEvent::SelectionChanged {
            selected: self.store.selected_count(),
        });
    }

    /// Run a command.
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("sandbox: {:?}", command);
        match command {
            Command::AddAtom => {
                let element = self.catalog.element(self.selected_element);
                let spawn = Vec2::new(
                    self.bounds.min.x - self.config.canvas_margin + self.config.spawn_offset.x,
                    self.config.spawn_offset.y,
                ) + Vec2::new(
                    self.rng.next_int(self.config.spawn_extent.x.max(0.0) as u32) as f32,
                    self.rng.next_int(self.config.spawn_extent.y.max(0.0) as u32) as f32,
                );
                let particles = shells::allocate(element.atomic_number, &mut self.rng);
                let id = self.store.add_atom(
                    self.selected_element,
                    self.bounds.clamp(spawn),
                    self.config.nucleus_radius,
                    particles,
                );
                self.events.push(SandboxEvent::AtomAdded { id });
            }
            Command::ToggleActive => {
                self.store.toggle_active_selected();
            }
            Command::Schedule => {
                let now = self.clock.now();
                self.store.schedule_selected(now, self.config.effective_schedule_delay());
            }
            Command::Link => {
                if let Some(link) = self.store.link_selected_pair() {
                    self.events.push(SandboxEvent::LinkCreated { a: link.a, b: link.b });
                }
            }
            Command::RemoveSelected => {
                let removed = self.store.remove_selected();
                if !removed.is_empty() {
                    self.events.push(SandboxEvent::AtomsRemoved { count: removed.len() });
                }
            }
            Command::ClearAll => {
                self.store.clear_all();
                self.controller.reset();
                self.events.push(SandboxEvent::Cleared);
                log::info!("sandbox: cleared");
            }
            Command::CycleElement(direction) => {
                let index = match direction {
                    CycleDirection::Next => self.catalog.next(self.selected_element),
                    CycleDirection::Previous => self.catalog.previous(self.selected_element),
                };
                self.set_selected_element(index);
            }
        }
    }

    /// Advance simulation time by one fixed tick and update every atom.
    pub fn step(&mut self, dt: f32) {
        self.clock.advance(dt);
        let activated = tick_atoms(self.store.atoms_mut(), self.clock.now(), dt);
        for id in activated {
            log::debug!("sandbox: atom {} activated", id.0);
            self.events.push(SandboxEvent::AtomActivated { id });
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> FrameSnapshot {
        let frame = SnapshotFrame {
            time: self.clock.now(),
            canvas_width: self.config.canvas_width,
            canvas_height: self.config.canvas_height,
            sidebar_width: self.config.sidebar_width,
            selected_element: self.selected_element,
        };
        build_snapshot(frame, &self.store, &self.catalog, &self.controller)
    }

    /// Rebuild `buffers` and hand the frame to a renderer.
    pub fn render(&self, renderer: &mut dyn Renderer, buffers: &mut RenderBuffer) {
        buffers.rebuild(&self.store);
        renderer.draw(&self.snapshot(), buffers);
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(SandboxConfig::default())
    }
}
