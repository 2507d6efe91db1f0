//! glance - entry point and winit event loop
//!
//! Owns the window, the softbuffer surface and the event wiring. All state
//! changes flow through `glance::update`; this file only translates raw
//! window events into messages and executes the resulting commands.

mod cli;
mod input;

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use glance::commands::Cmd;
use glance::messages::{DisplayMsg, Msg, ViewMsg};
use glance::model::{AppModel, ViewerOptions};
use glance::update::update;
use glance::{io, render, ImageSet, ViewerConfig};

/// Two presses within this window count as a double click.
const DOUBLE_CLICK_MS: u64 = 400;

// ============================================================================
// VIEW - Render the model to screen
// ============================================================================

struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            surface,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn render(&mut self, model: &AppModel) -> Result<()> {
        let (Some(width), Some(height)) = (NonZeroU32::new(self.width), NonZeroU32::new(self.height))
        else {
            return Ok(());
        };
        self.surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to acquire framebuffer: {}", e))?;

        render::render_frame(
            &mut buffer,
            self.width as usize,
            self.height as usize,
            &model.frame(),
            &model.view.window,
            &model.theme,
        );

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present framebuffer: {}", e))?;
        Ok(())
    }
}

// ============================================================================
// APP - Event wiring
// ============================================================================

struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: (f64, f64),
    left_mouse_down: bool,
    last_click_time: Instant,
    exit_requested: bool,
}

impl App {
    fn new(model: AppModel) -> Self {
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: (0.0, 0.0),
            left_mouse_down: false,
            last_click_time: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            exit_requested: false,
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                update(&mut self.model, Msg::resize(size.width, size.height))
            }

            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    let ctrl = self.modifiers.control_key() || self.modifiers.super_key();
                    let shift = self.modifiers.shift_key();
                    let alt = self.modifiers.alt_key();
                    input::handle_key(&mut self.model, event.logical_key.clone(), ctrl, shift, alt)
                } else {
                    None
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x, position.y);
                if self.left_mouse_down {
                    update(
                        &mut self.model,
                        Msg::View(ViewMsg::Pan {
                            x: position.x,
                            y: position.y,
                        }),
                    )
                } else {
                    None
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.left_mouse_down = true;
                let now = Instant::now();
                let double_click =
                    now.duration_since(self.last_click_time) < Duration::from_millis(DOUBLE_CLICK_MS);
                self.last_click_time = now;

                if double_click {
                    update(&mut self.model, Msg::View(ViewMsg::ResetZoom))
                } else {
                    let (x, y) = self.mouse_position;
                    update(&mut self.model, Msg::View(ViewMsg::StartPan { x, y }))
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.left_mouse_down = false;
                update(&mut self.model, Msg::View(ViewMsg::EndPan))
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y / 50.0,
                };
                if steps == 0.0 {
                    return None;
                }
                self.handle_scroll(steps)
            }

            _ => None,
        }
    }

    /// Route a wheel gesture by modifier state, the way the hotkey help
    /// describes it.
    fn handle_scroll(&mut self, steps: f64) -> Option<Cmd> {
        let ctrl = self.modifiers.control_key() || self.modifiers.super_key();
        let shift = self.modifiers.shift_key();
        let factor = 1.1f32.powf(steps as f32);

        if ctrl && shift {
            update(&mut self.model, Msg::Display(DisplayMsg::PercentileBy(factor)))
        } else if ctrl {
            update(&mut self.model, Msg::Display(DisplayMsg::ScaleBy(factor)))
        } else if shift {
            update(&mut self.model, Msg::Display(DisplayMsg::GammaBy(factor)))
        } else if self.cursor_over_frame() {
            let (x, y) = self.mouse_position;
            update(&mut self.model, Msg::View(ViewMsg::Zoom { steps, x, y }))
        } else {
            // outside the image: cycle through the stack
            update(
                &mut self.model,
                Msg::View(ViewMsg::StepImage(-steps.round() as isize)),
            )
        }
    }

    /// Whether the cursor currently sits over frame pixels (it can leave the
    /// frame when the zoom window extends past the original extent).
    fn cursor_over_frame(&self) -> bool {
        let (vw, vh) = self.model.window_size;
        if vw == 0 || vh == 0 {
            return false;
        }
        let window = &self.model.view.window;
        let (frame_w, frame_h) = self.model.frame_extent();
        let ix = window.x0 + self.mouse_position.0 / vw as f64 * window.width();
        let iy = window.y0 + self.mouse_position.1 / vh as f64 * window.height();
        ix >= 0.0 && iy >= 0.0 && ix < frame_w as f64 && iy < frame_h as f64
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    /// Execute a command produced by an update.
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {
                // Redraw is handled by the caller requesting a window redraw
            }
            Cmd::SaveImage { path } => {
                if let Err(e) = io::save_frame(&self.model.frame(), &path) {
                    tracing::error!("export failed: {:#}", e);
                }
            }
            Cmd::CopyToClipboard => {
                if let Err(e) = io::copy_frame_to_clipboard(&self.model.frame()) {
                    tracing::error!("clipboard copy failed: {:#}", e);
                }
            }
            Cmd::Quit => {
                self.exit_requested = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.model.window_size;
            let window_attributes = Window::default_attributes()
                .with_title("glance")
                .with_inner_size(LogicalSize::new(width, height));

            let window = Rc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("failed to create window"),
            );
            let context = Context::new(Rc::clone(&window)).expect("failed to create context");
            self.renderer =
                Some(Renderer::new(Rc::clone(&window), &context).expect("failed to init renderer"));
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit || self.exit_requested {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Purely event-driven: nothing animates between events
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    let _log_guard = glance::tracing::init();

    let args = cli::CliArgs::parse();
    let config = ViewerConfig::load();
    let theme = glance::theme::load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to default theme", e);
        glance::Theme::default()
    });

    let mut images = Vec::new();
    for path in &args.paths {
        if !glance::util::is_image_file(path) {
            tracing::warn!("skipping {} (not an image file)", path.display());
            continue;
        }
        match io::load_image(path) {
            Ok(image) => images.push(image),
            Err(e) => tracing::warn!("skipping {}: {:#}", path.display(), e),
        }
    }
    anyhow::ensure!(!images.is_empty(), "none of the given paths could be loaded");

    let image_set = ImageSet::from_images(images)
        .map_err(|e| anyhow::anyhow!("invalid input images: {}", e))?;
    let options = ViewerOptions {
        crop: args.crop,
        crop_global: !args.crop_per_image,
        collage: args.collage,
    };
    let model = AppModel::new(image_set, options, config, theme, (args.width, args.height))
        .map_err(|e| anyhow::anyhow!("cannot open viewer: {}", e))?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(model);
    event_loop.run_app(&mut app)?;

    Ok(())
}

// ============================================================================
// TESTS - Keyboard handling tests that require handle_key()
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glance::Theme;
    use ndarray::Array3;
    use winit::keyboard::{Key, SmolStr};

    fn test_model() -> AppModel {
        let images = vec![
            Array3::from_shape_fn((4, 4, 3), |(y, x, c)| (y + x + c) as f32),
            Array3::from_shape_fn((4, 6, 1), |(y, x, _)| (y * x) as f32),
            Array3::<f32>::zeros((6, 4, 3)),
        ];
        AppModel::new(
            ImageSet::from_images(images).unwrap(),
            ViewerOptions::default(),
            ViewerConfig::default(),
            Theme::default(),
            (800, 600),
        )
        .unwrap()
    }

    fn press(model: &mut AppModel, ch: &str, ctrl: bool, shift: bool) -> Option<Cmd> {
        input::handle_key(
            model,
            Key::Character(SmolStr::new(ch)),
            ctrl,
            shift,
            false,
        )
    }

    #[test]
    fn arrow_keys_cycle_images() {
        let mut model = test_model();
        assert_eq!(model.view.selected(), 0);
        input::handle_key(
            &mut model,
            Key::Named(winit::keyboard::NamedKey::ArrowRight),
            false,
            false,
            false,
        );
        assert_eq!(model.view.selected(), 1);
        input::handle_key(
            &mut model,
            Key::Named(winit::keyboard::NamedKey::ArrowLeft),
            false,
            false,
            false,
        );
        input::handle_key(
            &mut model,
            Key::Named(winit::keyboard::NamedKey::ArrowLeft),
            false,
            false,
            false,
        );
        assert_eq!(model.view.selected(), 2);
    }

    #[test]
    fn collage_hotkey_flips_per_image_autoscale() {
        let mut model = test_model();
        assert!(!model.view.collage_active);
        assert!(!model.view.autoscale_per_image);
        press(&mut model, "L", false, true);
        assert!(model.view.collage_active);
        assert!(model.view.autoscale_per_image);
    }

    #[test]
    fn autoscale_hotkey_rescales_current_image() {
        let mut model = test_model();
        press(&mut model, "a", false, false);
        // min 0, max 8 over the first image set envelope (third image is flat zero)
        assert!(model.view.scale > 0.0);
        assert_eq!(model.view.offset, 0.0);
    }

    #[test]
    fn reset_hotkeys_restore_defaults() {
        let mut model = test_model();
        model.view.scale = 4.0;
        model.view.set_gamma(2.0);
        model.view.offset = 0.5;
        press(&mut model, "S", false, true);
        press(&mut model, "G", false, true);
        press(&mut model, "O", false, true);
        assert_eq!(model.view.scale, 1.0);
        assert_eq!(model.view.gamma(), 1.0);
        assert_eq!(model.view.offset, 0.0);
    }

    #[test]
    fn escape_requests_quit() {
        let mut model = test_model();
        let cmd = input::handle_key(
            &mut model,
            Key::Named(winit::keyboard::NamedKey::Escape),
            false,
            false,
            false,
        );
        assert_eq!(cmd, Some(Cmd::Quit));
    }
}
