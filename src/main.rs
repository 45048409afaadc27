//! Tank Battle entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use tank_battle::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Log what happened during a tick
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::EnemyDestroyed { at, score, .. } => {
            log::info!("Enemy destroyed at ({:.0}, {:.0}) - score {}", at.x, at.y, score);
        }
        GameEvent::Restarted => log::info!("Game restarted"),
        GameEvent::ProjectileFired { .. } | GameEvent::ProjectileExpired { .. } => {}
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use tank_battle::Settings;
    use tank_battle::consts::*;
    use tank_battle::platform::{FixedClock, FpsCounter, KeyboardState};
    use tank_battle::renderer::{FrameBatch, RenderState, TextAlign, draw_session};
    use tank_battle::sim::{GameSession, tick};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        render_state: Option<RenderState>,
        batch: FrameBatch,
        clock: FixedClock,
        keys: KeyboardState,
        fps: FpsCounter,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let mut keys = KeyboardState::new();
            keys.idle_mode = settings.idle_mode;
            Self {
                session: GameSession::new(seed),
                clock: FixedClock::new(settings.tick_rate_hz),
                settings,
                render_state: None,
                batch: FrameBatch::new(),
                keys,
                fps: FpsCounter::new(),
                last_time: 0.0,
            }
        }

        /// Run however many simulation ticks this frame owes
        fn update(&mut self, dt: f32) {
            let ticks = self.clock.advance(dt);
            for _ in 0..ticks {
                let input = self.keys.sample();
                tick(&mut self.session, &input);
                for event in &self.session.events {
                    super::log_event(event);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let fps = self.fps.record(time);
            let fps = self.settings.show_fps.then_some(fps);

            self.batch.reset();
            draw_session(&self.session, fps, &mut self.batch);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
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

        /// Mirror the frame's text overlays into positioned DOM elements
        fn update_overlays(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(container) = document.get_element_by_id("overlay") else {
                return;
            };

            let scale = container.client_width() as f32 / FIELD_WIDTH;
            let children = container.children();

            for (i, overlay) in self.batch.overlays.iter().enumerate() {
                let el = match children.item(i as u32) {
                    Some(el) => el,
                    None => match create_overlay_element(&document, &container) {
                        Some(el) => el,
                        None => return,
                    },
                };
                el.set_text_content(Some(&overlay.text));

                let Ok(el) = el.dyn_into::<HtmlElement>() else {
                    continue;
                };
                let style = el.style();
                let transform = match overlay.align {
                    TextAlign::Left => "none",
                    TextAlign::Center => "translateX(-50%)",
                };
                let _ = style.set_property("display", "block");
                let _ = style.set_property("left", &format!("{}px", overlay.pos.x * scale));
                let _ = style.set_property("top", &format!("{}px", overlay.pos.y * scale));
                let _ = style.set_property("transform", transform);
                let _ = style.set_property("color", &overlay.css_color());
            }

            // Hide leftovers from earlier frames (e.g. the game over line)
            for i in self.batch.overlays.len() as u32..children.length() {
                if let Some(el) = children
                    .item(i)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let _ = el.style().set_property("display", "none");
                }
            }
        }
    }

    fn create_overlay_element(document: &web_sys::Document, container: &Element) -> Option<Element> {
        let el = document.create_element("div").ok()?;
        el.set_class_name("overlay-text");
        container.append_child(&el).ok()?;
        Some(el)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tank Battle starting...");

        let settings = Settings::load();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at device resolution, field aspect ratio
        let dpr = window.device_pixel_ratio();
        let width = (FIELD_WIDTH as f64 * dpr) as u32;
        let height = (FIELD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        log::info!("Game initialized with seed: {}", seed);

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

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Renderer unavailable: {}", e);
                return;
            }
        }

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Tank Battle running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_down(&event.key()) {
                    // Arrows and space would scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups never arrive, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.keys.release_all();
                g.clock.reset();
                log::info!("Window lost focus, released held keys");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.clock.step()
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            g.update_overlays();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tank Battle (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the playable web version");

    let settings = tank_battle::Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    run_headless(&settings, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play for the configured number of ticks, then print
/// the final overlays
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &tank_battle::Settings, seed: u64) {
    use tank_battle::renderer::{FrameBatch, draw_session};
    use tank_battle::sim::{GameSession, TickInput, tick};

    log::info!(
        "Headless autopilot: seed {}, {} ticks at {} Hz",
        seed,
        settings.demo_ticks,
        settings.tick_rate_hz
    );

    let mut session = GameSession::new(seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..settings.demo_ticks {
        tick(&mut session, &input);
        for event in &session.events {
            log_event(event);
        }
    }

    let mut batch = FrameBatch::new();
    draw_session(&session, None, &mut batch);
    for overlay in &batch.overlays {
        println!("{}", overlay.text);
    }

    let seconds = session.time_ticks as f32 / settings.tick_rate_hz as f32;
    log::info!(
        "Headless run finished: {:.1}s simulated, {} kills, score {}",
        seconds,
        session.kills,
        session.score
    );
}
