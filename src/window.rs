//! SDL2 window backed by a streaming ARGB8888 texture.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::{FullscreenType, WindowContext};

use crate::error::RenderError;
use crate::render::RenderTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Window closed or Escape pressed.
    Quit,
    /// New drawable size. The texture has already been recreated.
    Resize(u32, u32),
    KeyDown(Keycode),
}

/// Caps the loop at a target frame rate.
pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, target_fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_time: 1000 / u64::from(target_fps.max(1)),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < self.frame_target_time {
            let time_to_wait = self.frame_target_time - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Fields drop in declaration order, so `texture` goes before the
/// `texture_creator` it borrows from.
pub struct Window {
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

fn create_texture(
    creator: &TextureCreator<WindowContext>,
    width: u32,
    height: u32,
) -> Result<Texture<'static>, RenderError> {
    // SAFETY: the creator is boxed and owned by the same Window as the
    // texture; the texture field is declared first so it is dropped first.
    let creator: &'static TextureCreator<WindowContext> = unsafe { &*(creator as *const _) };
    creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, width.max(1), height.max(1))
        .map_err(|e| RenderError::Texture(e.to_string()))
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, RenderError> {
        let sdl_context = sdl2::init().map_err(RenderError::Init)?;
        let video_subsystem = sdl_context.video().map_err(RenderError::Init)?;
        let timer_subsystem = sdl_context.timer().map_err(RenderError::Init)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let texture = create_texture(&texture_creator, width, height)?;
        let event_pump = sdl_context.event_pump().map_err(RenderError::Init)?;

        log::info!("Created {}x{} window \"{}\"", width, height, title);
        Ok(Self {
            texture,
            texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drain pending SDL events. Resizes are applied before they are returned.
    pub fn poll_events(&mut self) -> Result<Vec<WindowEvent>, RenderError> {
        let mut events = Vec::new();
        let mut resized = None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::SizeChanged(w, h),
                    ..
                } => resized = Some((w.max(0) as u32, h.max(0) as u32)),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => events.push(WindowEvent::KeyDown(key)),
                _ => {}
            }
        }

        if let Some((w, h)) = resized {
            self.resize(w, h)?;
            events.push(WindowEvent::Resize(w, h));
        }
        Ok(events)
    }

    /// Recreate the streaming texture for a new size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.texture = create_texture(&self.texture_creator, width, height).map_err(|e| {
            log::error!("Failed to resize to {}x{}: {}", width, height, e);
            e
        })?;
        self.width = width;
        self.height = height;
        log::info!("Resized to {}x{}", width, height);
        Ok(())
    }

    pub fn is_fullscreen(&self) -> bool {
        self.canvas.window().fullscreen_state() != FullscreenType::Off
    }

    /// Switch between windowed and desktop fullscreen.
    ///
    /// The size change arrives later as a [`WindowEvent::Resize`].
    pub fn toggle_fullscreen(&mut self) -> Result<(), RenderError> {
        let next = if self.is_fullscreen() {
            FullscreenType::Off
        } else {
            FullscreenType::Desktop
        };
        self.canvas
            .window_mut()
            .set_fullscreen(next)
            .map_err(RenderError::Window)?;
        log::info!("Fullscreen: {:?}", next);
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

impl RenderTarget for Window {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn paint(&mut self, painter: &mut dyn FnMut(&mut [u8], usize)) -> Result<(), RenderError> {
        self.texture
            .with_lock(None, |pixels, pitch| painter(pixels, pitch))
            .map_err(RenderError::Texture)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(RenderError::Present)?;
        self.canvas.present();
        Ok(())
    }
}
