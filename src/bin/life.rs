//! Game of Life visualizer entry point
//!
//! Renders a seeded random grid and advances one generation every half
//! second while redrawing each animation frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use feel_lab::consts::*;
    use feel_lab::life::Grid;
    use feel_lab::renderer::vertex::{clear_color, colors};
    use feel_lab::renderer::{RenderState, shapes};

    /// Demo instance holding all state
    struct Demo {
        grid: Grid,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
    }

    impl Demo {
        fn new(seed: u64) -> Self {
            Self {
                grid: Grid::random(GRID_W, GRID_H, seed),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Advance generations on a fixed cadence
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.25);
            self.accumulator += dt;

            let mut steps = 0;
            while self.accumulator >= LIFE_STEP_SECS && steps < MAX_SUBSTEPS {
                self.grid.step();
                self.accumulator -= LIFE_STEP_SECS;
                steps += 1;
            }
        }

        /// Render the current generation
        fn render(&mut self) {
            let vertices = shapes::life_cells(&self.grid);
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

        /// Update the generation counter when the page has one
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            if let Some(el) = document.get_element_by_id("hud-gen") {
                el.set_text_content(Some(&self.grid.generation().to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Life Lab starting...");

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

        let seed = js_sys::Date::now() as u64;
        let demo = Rc::new(RefCell::new(Demo::new(seed)));
        log::info!("Grid seeded with: {}", seed);

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

        let logical = (GRID_W as f32 * CELL_SIZE, GRID_H as f32 * CELL_SIZE);
        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            logical,
            clear_color(colors::LIFE_DEAD),
        )
        .await;
        demo.borrow_mut().render_state = Some(render_state);

        // Start demo loop
        request_animation_frame(demo);

        log::info!("Life Lab running!");
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

            let dt = if d.last_time > 0.0 {
                ((time - d.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            d.last_time = time;

            d.update(dt);
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
    log::info!("Life Lab (native) starting...");
    log::info!("The visualizer window is web-only - run with `trunk serve` for the full demo");

    println!("\nRunning headless generations...");
    headless_generations();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_generations() {
    use feel_lab::life::Grid;
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Grid seeded with: {}", seed);

    let mut grid = Grid::random(60, 16, seed);
    for _ in 0..4 {
        println!("generation {}", grid.generation());
        for y in 0..grid.height() {
            let row: String = (0..grid.width())
                .map(|x| if grid.get(x, y) { '#' } else { '.' })
                .collect();
            println!("{row}");
        }
        println!();
        grid.step();
    }
}
