//! Movement-feel playground entry point
//!
//! Handles platform-specific initialization and runs the demo loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use feel_lab::Settings;
    use feel_lab::consts::*;
    use feel_lab::input::{self, Action, HeldActions};
    use feel_lab::renderer::vertex::{clear_color, colors};
    use feel_lab::renderer::{RenderState, shapes};
    use feel_lab::sim::{DemoPhase, DemoState, TickInput, tick};

    /// Demo instance holding all state
    struct Demo {
        state: DemoState,
        settings: Settings,
        held: HeldActions,
        input: TickInput,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Demo {
        fn new(settings: Settings) -> Self {
            let mut state = DemoState::new();
            state.boundary_mode = settings.boundary_mode;
            state.platformer = settings.platformer;
            state.select_preset(settings.preset_idx);

            Self {
                state,
                settings,
                held: HeldActions::default(),
                input: TickInput::default(),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            // Held axes are sampled once per frame
            self.input.horizontal = self.held.horizontal();
            self.input.vertical = self.held.vertical();

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.start = false;
                self.input.jump = false;
                self.input.dash = false;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = shapes::feel_scene(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let set_text = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            };

            set_text("hud-bounds", self.state.boundary_mode.as_str());
            set_text(
                "hud-mode",
                if self.state.platformer {
                    "PLATFORMER"
                } else {
                    "TOPDOWN"
                },
            );
            set_text("hud-scheme", self.settings.control_scheme.as_str());
            set_text("hud-feel", self.state.preset().name);

            let cooldown = self.state.player.dash_cooldown;
            let dash = if cooldown <= 0.0 {
                "READY".to_string()
            } else {
                format!("CD {cooldown:.2}s")
            };
            set_text("hud-dash", &dash);

            if self.settings.show_fps {
                set_text("hud-fps", &self.fps.to_string());
            }

            // Debug overlay
            if let Some(el) = document.get_element_by_id("debug-overlay") {
                if self.settings.debug_overlay {
                    let _ = el.set_attribute("class", "");
                    let preset = self.state.preset();
                    let vel = self.state.player.vel;
                    let dir = self.state.player.last_move_dir;
                    let text = format!(
                        "vel=({:.1}, {:.1})\naccel={:.1}  friction={:.1}  max={:.1}\ngravity={:.1}  jump={:.1}\nlast_dir=({:.2},{:.2})",
                        vel.x,
                        vel.y,
                        preset.accel,
                        preset.friction,
                        preset.max_speed,
                        preset.gravity,
                        preset.jump_speed,
                        dir.x,
                        dir.y
                    );
                    el.set_text_content(Some(&text));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Title overlay
            if let Some(el) = document.get_element_by_id("title-overlay") {
                if self.state.phase == DemoPhase::Title {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Feel Lab starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let demo = Rc::new(RefCell::new(Demo::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (SCREEN_W, SCREEN_H),
            clear_color(colors::BACKGROUND),
        )
        .await;
        demo.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(demo.clone());

        // Start demo loop
        request_animation_frame(demo);

        log::info!("Feel Lab running!");
    }

    fn setup_input_handlers(demo: Rc<RefCell<Demo>>) {
        let window = web_sys::window().unwrap();

        // Keydown: discrete demo controls first, then held movement/actions
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut d = demo.borrow_mut();
                let key = event.key();

                match key.as_str() {
                    "Escape" => {
                        d.state.reset_to_title();
                        return;
                    }
                    "F1" => {
                        event.prevent_default();
                        d.settings.debug_overlay = !d.settings.debug_overlay;
                        d.settings.save();
                        return;
                    }
                    "Tab" => {
                        event.prevent_default();
                        d.state.cycle_boundary_mode();
                        d.settings.boundary_mode = d.state.boundary_mode;
                        d.settings.save();
                        return;
                    }
                    "c" | "C" => {
                        d.settings.control_scheme = d.settings.control_scheme.cycle();
                        d.settings.save();
                        // Keys held under the old scheme no longer apply
                        d.held.clear();
                        return;
                    }
                    "p" | "P" => {
                        d.state.toggle_platformer();
                        d.settings.platformer = d.state.platformer;
                        d.settings.save();
                        return;
                    }
                    "r" | "R" => {
                        d.state.reset_motion();
                        return;
                    }
                    "1" | "2" | "3" | "4" => {
                        let idx = key.as_bytes()[0] as usize - b'1' as usize;
                        d.state.select_preset(idx);
                        d.settings.preset_idx = d.state.preset_idx;
                        d.settings.save();
                        return;
                    }
                    _ => {}
                }

                let scheme = d.settings.control_scheme;
                if input::key_triggers(scheme, Action::Dash, &key) {
                    d.input.dash = true;
                    return;
                }
                if d.state.phase == DemoPhase::Title
                    && input::key_triggers(scheme, Action::Start, &key)
                {
                    d.input.start = true;
                    return;
                }
                if d.state.platformer && input::key_triggers(scheme, Action::Jump, &key) {
                    d.input.jump = true;
                }
                d.held.process_key(scheme, &key, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release held movement keys
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut d = demo.borrow_mut();
                let scheme = d.settings.control_scheme;
                d.held.process_key(scheme, &event.key(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: release everything so keys don't stick
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                demo.borrow_mut().held.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden: same stuck-key guard
        {
            let document = window.document().unwrap();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    demo.borrow_mut().held.clear();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            demo_loop(demo, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn demo_loop(demo: Rc<RefCell<Demo>>, time: f64) {
        {
            let mut d = demo.borrow_mut();

            // Calculate delta time
            let dt = if d.last_time > 0.0 {
                ((time - d.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            d.last_time = time;

            d.update(dt, time);
            d.render();
            d.update_hud();
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_demo::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Feel Lab (native) starting...");
    log::info!("The playground window is web-only - run with `trunk serve` for the full demo");

    println!("\nRunning headless feel check...");
    headless_feel_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_feel_check() {
    use feel_lab::consts::SIM_DT;
    use feel_lab::sim::{DemoState, TickInput, tick};

    let mut state = DemoState::new();
    state.start();

    // Hold right for a second, then coast
    let held = TickInput {
        horizontal: 1,
        ..Default::default()
    };
    for _ in 0..120 {
        tick(&mut state, &held, SIM_DT);
    }
    let cruising = state.player.speed();

    for _ in 0..120 {
        tick(&mut state, &TickInput::default(), SIM_DT);
    }
    let settled = state.player.speed();

    assert!(settled < cruising, "friction failed to bleed speed");
    println!(
        "✓ {} preset cruises at {:.0} px/s, settles to {:.0} px/s after a second of coasting",
        state.preset().name,
        cruising,
        settled
    );
}
