use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use torus_viewer::cli::Cli;
use torus_viewer::{Clock, OrbitControls, Renderer, SceneAnimator, SceneContext};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_UPDATE_INTERVAL: f32 = 1.0;
const HEADLESS_TIMESTEP: f32 = 1.0 / 60.0;
// Pixel-delta wheels (touchpads) report roughly this many pixels per step.
const SCROLL_PIXELS_PER_LINE: f32 = 50.0;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: SceneContext,
    animator: SceneAnimator,
    orbit: OrbitControls,
    clock: Clock,
    cursor: Option<(f64, f64)>,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    fn new() -> Self {
        let scene = SceneContext::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
        let animator =
            SceneAnimator::new(scene.mesh.material.color, &mut rand::thread_rng());
        let orbit = OrbitControls::new(&scene.camera);

        Self {
            window: None,
            renderer: None,
            scene,
            animator,
            orbit,
            clock: Clock::new(),
            cursor: None,
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            log::info!("fps: {:.1}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        // Drivers first, then camera damping, then the draw: every frame
        // reads one consistent scene state.
        self.animator.apply(&mut self.scene, self.clock.elapsed());
        self.orbit.update(&mut self.scene.camera);

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("frame skipped: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Torus Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.scene.handle_resize(size.width, size.height);

            let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.scene)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.scene.handle_resize(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.orbit.set_dragging(state.is_pressed());
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((last_x, last_y)) = self.cursor {
                    self.orbit.process_drag(
                        (position.x - last_x) as f32,
                        (position.y - last_y) as f32,
                    );
                }
                self.cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / SCROLL_PIXELS_PER_LINE,
                };
                self.orbit.process_scroll(steps);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

// === Headless drive ===

/// Run the same per-frame update path at a fixed timestep with no window
/// or GPU, logging the animated state once per simulated second.
fn run_headless(frames: u32) {
    let mut scene = SceneContext::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
    let animator = SceneAnimator::new(scene.mesh.material.color, &mut rand::thread_rng());
    let mut orbit = OrbitControls::new(&scene.camera);

    for frame in 0..frames {
        let elapsed = frame as f32 * HEADLESS_TIMESTEP;
        animator.apply(&mut scene, elapsed);
        orbit.update(&mut scene.camera);

        if frame % 60 == 0 {
            let rotation = scene.mesh.rotation;
            let color = scene.mesh.material.color;
            log::info!(
                "t={:.2}s rotation=({:.3}, {:.3}) color=({:.3}, {:.3}, {:.3}) background=({:.3}, {:.3}, {:.3})",
                elapsed,
                rotation.x,
                rotation.y,
                color.r,
                color.g,
                color.b,
                scene.background.r,
                scene.background.g,
                scene.background.b,
            );
        }
    }

    log::info!("headless run complete: {} frames", frames);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.headless {
        run_headless(cli.frames);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    log::info!("torus viewer - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
