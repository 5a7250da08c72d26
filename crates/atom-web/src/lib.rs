//! Browser bridge for the atom sandbox.
//!
//! The host calls `sandbox_init` once, forwards DOM input through the
//! `sandbox_*` functions, calls `sandbox_tick` every animation frame and then
//! reads either the packed buffers (pointer + count) or `get_snapshot_json`.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use atom_sandbox::{InputEvent, PointerButton, SandboxConfig};

pub mod runner;

pub use runner::SandboxRunner;

thread_local! {
    static RUNNER: RefCell<Option<SandboxRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SandboxRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Sandbox not initialized. Call sandbox_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn sandbox_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = SandboxConfig {
        rng_seed: js_sys::Date::now() as u64,
        ..SandboxConfig::default()
    };
    let runner = SandboxRunner::new(config);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("atom-sandbox: initialized");
}

#[wasm_bindgen]
pub fn sandbox_load_config(json: &str) {
    with_runner(|r| r.load_config(json));
}

#[wasm_bindgen]
pub fn sandbox_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn sandbox_pointer_down(x: f32, y: f32, button: u32) {
    let button = PointerButton::from_code(button);
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_up(x: f32, y: f32, button: u32) {
    let button = PointerButton::from_code(button);
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, button }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn sandbox_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn sandbox_blur() {
    with_runner(|r| r.blur());
}

/// Host-side command, e.g. a keyboard shortcut. See `command_kinds`.
#[wasm_bindgen]
pub fn sandbox_command(kind: u32, a: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }));
}

#[wasm_bindgen]
pub fn sandbox_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json())
}

#[wasm_bindgen]
pub fn get_atoms_ptr() -> *const f32 {
    with_runner(|r| r.atoms_ptr())
}

#[wasm_bindgen]
pub fn get_atom_count() -> u32 {
    with_runner(|r| r.atom_count())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn get_links_ptr() -> *const f32 {
    with_runner(|r| r.links_ptr())
}

#[wasm_bindgen]
pub fn get_link_count() -> u32 {
    with_runner(|r| r.link_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

/// Fraction of a tick left over after the last `sandbox_tick`.
#[wasm_bindgen]
pub fn get_alpha() -> f32 {
    with_runner(|r| r.alpha())
}

#[wasm_bindgen]
pub fn get_canvas_width() -> f32 {
    with_runner(|r| r.canvas_width())
}

#[wasm_bindgen]
pub fn get_canvas_height() -> f32 {
    with_runner(|r| r.canvas_height())
}

#[wasm_bindgen]
pub fn get_sidebar_width() -> f32 {
    with_runner(|r| r.sidebar_width())
}
