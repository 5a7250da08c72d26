pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::SandboxConfig;
pub use api::sandbox::Sandbox;
pub use api::types::{AtomId, Command, CycleDirection, EventRecord, SandboxEvent};
pub use components::atom::{ActivationSchedule, Atom, OrbitingParticle};
pub use components::element::{Element, ElementCatalog, BUILTIN_ELEMENTS};
pub use components::link::Link;
pub use core::rng::Rng;
pub use core::store::{EntityStore, SelectionMode};
pub use core::time::{FixedTimestep, SimulationClock};
pub use input::controller::{InteractionMode, InteractionResult, SelectionController};
pub use input::keys::{KeyState, ModifierQuery};
pub use input::layout::{CanvasBounds, PanelButton, PanelLayout, Rect};
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use renderer::instance::{AtomInstance, LinkInstance, ParticleInstance, RenderBuffer};
pub use renderer::traits::Renderer;
pub use systems::snapshot::FrameSnapshot;
