use sgl::prelude::*;
use sdl2::keyboard::Keycode;

/// Camera movement in world units per second.
const MOVE_SPEED: f32 = 2.0;
/// Cube spin in degrees per second.
const SPIN_SPEED: f32 = 45.0;
/// Alternate background toggled with C.
const ALT_CLEAR_COLOR: u32 = 0xFF202830;

fn load_config() -> Config {
    let Some(path) = std::env::args().nth(1) else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            Config::default()
        }
    }
}

fn save_screenshot(engine: &mut Engine, scene: &Scene, window: &Window) -> Result<(), RenderError> {
    let mut target = OffscreenTarget::new(window.width(), window.height());
    engine.render(scene, &mut target)?;
    target.save_png("screenshot.png")?;
    log::info!("Saved screenshot.png");
    Ok(())
}

fn handle_key(key: Keycode, camera: &mut Camera) {
    let step = MOVE_SPEED / 10.0;
    match key {
        Keycode::W => camera.position.z -= step,
        Keycode::S => camera.position.z += step,
        Keycode::A => camera.position.x += step,
        Keycode::D => camera.position.x -= step,
        Keycode::Q => camera.position.y += step,
        Keycode::E => camera.position.y -= step,
        _ => {}
    }
}

fn run(config: Config) -> Result<(), RenderError> {
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut limiter = FrameLimiter::new(&window, config.target_fps);

    let mut scene = Scene::new(config.camera);
    let cube = scene.add_mesh(Mesh::cube(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::ONE));
    if let Some(mesh) = scene.mesh(cube) {
        log::info!("Added {} ({} meshes in scene)", mesh.name(), scene.mesh_count());
    }
    let mut engine = Engine::with_clear_color(config.clear_color);

    'running: loop {
        for event in window.poll_events()? {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(..) => {}
                WindowEvent::KeyDown(Keycode::F11) => window.toggle_fullscreen()?,
                WindowEvent::KeyDown(Keycode::C) => {
                    let next = if engine.clear_color() == config.clear_color {
                        ALT_CLEAR_COLOR
                    } else {
                        config.clear_color
                    };
                    engine.set_clear_color(next);
                }
                WindowEvent::KeyDown(Keycode::F12) => {
                    if let Err(e) = save_screenshot(&mut engine, &scene, &window) {
                        log::error!("Screenshot failed: {}", e);
                    }
                }
                WindowEvent::KeyDown(key) => handle_key(key, scene.camera_mut()),
            }
        }

        let delta = limiter.wait_and_get_delta(&window) as f32 / 1000.0;
        if let Some(mesh) = scene.mesh_mut(cube) {
            mesh.transform_mut()
                .rotate_x(SPIN_SPEED * 0.5 * delta)
                .rotate_y(SPIN_SPEED * delta);
        }

        engine.render(&scene, &mut window)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(load_config()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
