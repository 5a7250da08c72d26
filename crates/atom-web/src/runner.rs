use atom_sandbox::{
    EventRecord, FixedTimestep, InputEvent, InputQueue, RenderBuffer, Sandbox, SandboxConfig,
};

/// Runner that wires the sandbox to the host frame loop.
///
/// The bridge keeps one of these in a `thread_local!`, because wasm-bindgen
/// cannot export the sandbox directly.
pub struct SandboxRunner {
    sandbox: Sandbox,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    /// Flat buffer of this frame's events for shared-memory reads.
    event_buffer: Vec<EventRecord>,
}

impl SandboxRunner {
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            timestep: FixedTimestep::new(config.effective_fixed_dt()),
            sandbox: Sandbox::new(config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            event_buffer: Vec::with_capacity(64),
        }
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    /// Replace the configuration from host JSON. The sandbox restarts empty.
    /// A malformed document is logged and the current sandbox is kept.
    pub fn load_config(&mut self, json: &str) {
        match SandboxConfig::from_json(json) {
            Ok(config) => {
                log::info!("runner: loaded configuration");
                self.timestep = FixedTimestep::new(config.effective_fixed_dt());
                self.sandbox = Sandbox::new(config);
                self.input.drain();
                self.rebuild();
            }
            Err(err) => log::warn!("runner: ignoring bad configuration: {}", err),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, run fixed steps, rebuild buffers.
    pub fn tick(&mut self, frame_dt: f32) {
        // Clear per-frame transient data
        self.sandbox.clear_frame_events();

        // Input sees the state as rendered last frame
        self.sandbox.handle_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.sandbox.step(self.timestep.dt());
        }

        self.rebuild();
    }

    /// Drop held keys when the host loses focus, so no modifier sticks.
    pub fn blur(&mut self) {
        self.sandbox.release_keys();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.sandbox.resize(width, height);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.render_buffer.rebuild(self.sandbox.store());
        self.event_buffer.clear();
        self.event_buffer
            .extend(self.sandbox.events().iter().map(|&e| EventRecord::from(e)));
    }

    /// Current frame as JSON, or `"null"` if serialization fails.
    pub fn snapshot_json(&self) -> String {
        match self.sandbox.snapshot().to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("runner: snapshot serialization failed: {}", err);
                String::from("null")
            }
        }
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn atoms_ptr(&self) -> *const f32 {
        self.render_buffer.atoms_ptr()
    }

    pub fn atom_count(&self) -> u32 {
        self.render_buffer.atom_count()
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.render_buffer.particles_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.render_buffer.particle_count()
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.render_buffer.links_ptr()
    }

    pub fn link_count(&self) -> u32 {
        self.render_buffer.link_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    /// Leftover fraction of a tick after the last frame, for interpolation.
    pub fn alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    pub fn canvas_width(&self) -> f32 {
        self.sandbox.config().canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.sandbox.config().canvas_height
    }

    pub fn sidebar_width(&self) -> f32 {
        self.sandbox.config().sidebar_width
    }
}
