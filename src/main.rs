//! Islandgen - interactive procedural island viewer
//!
//! Sliders of the original editor map to keys: Q/A gain, W/S lacunarity,
//! E/D octaves, R/F seed. Arrow keys orbit the camera, Esc quits.

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use islandgen::camera::CameraSystem;
use islandgen::cli::Args;
use islandgen::export;
use islandgen::params::{OrbitCamera, RenderConfig, TerrainConfig};
use islandgen::rendering::{RenderSystem, Uniforms};
use islandgen::terrain::{Heightfield, IslandTerrain, PerlinSource};

const GAIN_STEP: f32 = 0.05;
const LACUNARITY_STEP: f32 = 0.1;

/// Main application state
struct App {
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    terrain: IslandTerrain,
    camera: CameraSystem,
    render_config: RenderConfig,
    start_time: Instant,
}

impl App {
    fn new(config: TerrainConfig) -> Result<Self, Box<dyn Error>> {
        let terrain = IslandTerrain::new(config.island(), config.palette)?;
        Ok(Self {
            window: None,
            render_system: None,
            terrain,
            camera: CameraSystem::new(OrbitCamera::default()),
            render_config: RenderConfig::default(),
            start_time: Instant::now(),
        })
    }

    /// Apply a key press to terrain parameters or the camera
    fn handle_key(&mut self, key: KeyCode) {
        let noise = self.terrain.params().noise;
        match key {
            KeyCode::KeyQ => self.terrain.set_gain(noise.gain + GAIN_STEP),
            KeyCode::KeyA => self.terrain.set_gain(noise.gain - GAIN_STEP),
            KeyCode::KeyW => self.terrain.set_lacunarity(noise.lacunarity + LACUNARITY_STEP),
            KeyCode::KeyS => self.terrain.set_lacunarity(noise.lacunarity - LACUNARITY_STEP),
            KeyCode::KeyE => self.terrain.set_octaves(noise.octaves.saturating_add(1)),
            KeyCode::KeyD => self.terrain.set_octaves(noise.octaves.saturating_sub(1)),
            KeyCode::KeyR => self.terrain.set_seed(noise.seed.wrapping_add(1)),
            KeyCode::KeyF => self.terrain.set_seed(noise.seed.wrapping_sub(1)),
            KeyCode::ArrowLeft => self.camera.rotate(1.0),
            KeyCode::ArrowRight => self.camera.rotate(-1.0),
            KeyCode::ArrowUp => self.camera.tilt(1.0),
            KeyCode::ArrowDown => self.camera.tilt(-1.0),
            _ => return,
        }

        if self.terrain.is_dirty() {
            let noise = self.terrain.params().noise;
            info!(
                gain = noise.gain,
                lacunarity = noise.lacunarity,
                octaves = noise.octaves,
                seed = noise.seed,
                "parameters changed"
            );
        }
    }

    /// Regenerate if needed, then draw a single frame
    fn render_frame(&mut self) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        match self.terrain.regenerate_if_dirty() {
            Ok(true) => {
                if let Err(e) = render_system.upload_mesh(self.terrain.mesh()) {
                    warn!("Keeping previous mesh: {}", e);
                }
            }
            Ok(false) => {}
            Err(e) => warn!("Rejected terrain parameters: {}", e),
        }

        let time_s = self.start_time.elapsed().as_secs_f32();
        let (view_proj, _eye) = self.camera.create_view_proj_matrix(
            time_s,
            &self.terrain.params().grid,
            &self.render_config,
        );

        let [sx, sy, sz] = self.render_config.sun_direction;
        render_system.update_uniforms(&Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            sun_direction: [sx, sy, sz, 0.0],
        });

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = (
                    self.render_config.window_width,
                    self.render_config.window_height,
                );
                render_system.resize(width, height);
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Islandgen")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                warn!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.render_config.window_width = size.width.max(1);
        self.render_config.window_height = size.height.max(1);

        match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.terrain.mesh(),
            &self.render_config,
        )) {
            Ok(render_system) => self.render_system = Some(render_system),
            Err(e) => {
                warn!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        }

        info!("Islandgen is running, press ESC to quit");
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width.max(1);
                self.render_config.window_height = size.height.max(1);
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.handle_key(key);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }
}

/// Write the requested images without opening a window
fn export_images(args: &Args, config: &TerrainConfig) -> Result<(), Box<dyn Error>> {
    let field = Heightfield::generate(&config.grid, &config.noise, &PerlinSource::default())?;

    if let Some(path) = &args.heightmap {
        export::save_heightmap(&field, path)?;
    }
    if let Some(path) = &args.colormap {
        export::save_color_map(&field, &config.palette, path)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("islandgen=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.terrain_config()?;
    config.island().validate()?;

    if args.is_headless() {
        return export_images(&args, &config);
    }

    let mut app = App::new(config)?;
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
