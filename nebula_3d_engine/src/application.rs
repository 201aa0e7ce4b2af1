//! Application runner — the per-frame loop tying the shell together
//!
//! The [`Application`] owns the window, the graphics device, the event
//! dispatcher, and the input tracker, and drives the winit event loop.
//! Client code implements [`AppHandler`] and receives a [`FrameContext`]
//! every frame. All shell state is owned here; nothing is process-wide.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::error::{Error, Result};
use crate::event::{Event, EventDispatcher, EventType};
use crate::graphics_device::{GraphicsDevice, NullGraphicsDevice};
use crate::input::InputState;
use crate::window::{self, Window, WindowConfig};
use crate::{engine_critical, engine_error, engine_info};

/// Everything the per-frame update sees
pub struct FrameContext<'a> {
    /// Held-key/button snapshot for this frame
    pub input: &'a InputState,
    /// Graphics device for resource creation and drawing
    pub device: &'a mut dyn GraphicsDevice,
    /// Current window width in pixels
    pub window_width: u32,
    /// Current window height in pixels
    pub window_height: u32,
    /// Seconds since the previous frame
    pub delta_time: f32,
}

/// Client hooks driven by the [`Application`]
pub trait AppHandler {
    /// Called once after the window and device exist; create resources here
    ///
    /// # Errors
    ///
    /// Returning an error aborts the application before the first frame.
    fn on_setup(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let _ = device;
        Ok(())
    }

    /// Called every frame between clear and present
    fn on_update(&mut self, frame: &mut FrameContext<'_>);

    /// Called for every translated window event, after the engine's own
    /// bookkeeping (input tracking, close flag) has seen it
    fn on_event(&mut self, event: &Event) {
        let _ = event;
    }
}

/// Factory producing the graphics device once the window exists
pub type DeviceFactory = Box<dyn FnOnce(&Window) -> Result<Box<dyn GraphicsDevice>>>;

/// Owner of the shell: window, device, dispatcher, input, frame loop
pub struct Application<H: AppHandler> {
    config: WindowConfig,
    handler: H,
    device_factory: Option<DeviceFactory>,
    window: Option<Window>,
    device: Option<Box<dyn GraphicsDevice>>,
    dispatcher: EventDispatcher,
    input: Rc<RefCell<InputState>>,
    close_requested: Rc<Cell<bool>>,
    cursor: (f64, f64),
    last_frame: Instant,
}

impl<H: AppHandler> Application<H> {
    /// Create an application that will open a window per `config` and
    /// drive `handler`. The device defaults to the headless
    /// [`NullGraphicsDevice`]; install a real backend with
    /// [`with_device_factory`](Application::with_device_factory).
    pub fn new(config: WindowConfig, handler: H) -> Self {
        Self {
            config,
            handler,
            device_factory: Some(Box::new(|_| {
                Ok(Box::new(NullGraphicsDevice::new()) as Box<dyn GraphicsDevice>)
            })),
            window: None,
            device: None,
            dispatcher: EventDispatcher::new(),
            input: Rc::new(RefCell::new(InputState::new())),
            close_requested: Rc::new(Cell::new(false)),
            cursor: (0.0, 0.0),
            last_frame: Instant::now(),
        }
    }

    /// Replace the device factory (e.g., with a real GPU backend)
    pub fn with_device_factory(mut self, factory: DeviceFactory) -> Self {
        self.device_factory = Some(factory);
        self
    }

    /// Run until the window closes
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop cannot be created or fails.
    pub fn run(mut self) -> Result<()> {
        engine_info!("nebula3d::Application", "Starting application");

        self.register_internal_listeners();

        let event_loop = EventLoop::new().map_err(|error| {
            engine_critical!(
                "nebula3d::Application",
                "Can't create event loop: {}",
                error
            );
            Error::InitializationFailed(error.to_string())
        })?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self)
            .map_err(|error| Error::BackendError(error.to_string()))?;

        engine_info!("nebula3d::Application", "Closing application");
        Ok(())
    }

    /// Wire the engine's own event handling through the dispatcher
    fn register_internal_listeners(&mut self) {
        let close = self.close_requested.clone();
        self.dispatcher.add_listener(EventType::WindowClose, move |_| {
            engine_info!("nebula3d::Application", "[WindowClose]");
            close.set(true);
        });

        self.dispatcher
            .add_listener(EventType::WindowResize, move |event| {
                if let Event::WindowResize { width, height } = event {
                    engine_info!(
                        "nebula3d::Application",
                        "[WindowResize] {}x{}",
                        width,
                        height
                    );
                }
            });

        let input = self.input.clone();
        self.dispatcher
            .add_listener(EventType::KeyPressed, move |event| {
                if let Event::KeyPressed { key, .. } = event {
                    input.borrow_mut().press_key(*key);
                }
            });

        let input = self.input.clone();
        self.dispatcher
            .add_listener(EventType::KeyReleased, move |event| {
                if let Event::KeyReleased { key } = event {
                    input.borrow_mut().release_key(*key);
                }
            });

        let input = self.input.clone();
        self.dispatcher
            .add_listener(EventType::MouseButtonPressed, move |event| {
                if let Event::MouseButtonPressed { button, .. } = event {
                    input.borrow_mut().press_mouse_button(*button);
                }
            });

        let input = self.input.clone();
        self.dispatcher
            .add_listener(EventType::MouseButtonReleased, move |event| {
                if let Event::MouseButtonReleased { button, .. } = event {
                    input.borrow_mut().release_mouse_button(*button);
                }
            });

        let input = self.input.clone();
        self.dispatcher
            .add_listener(EventType::MouseMoved, move |event| {
                if let Event::MouseMoved { x, y } = event {
                    input.borrow_mut().set_cursor_position(*x, *y);
                }
            });
    }

    /// One frame: clear, client update, present
    fn tick(&mut self) {
        let (Some(device), Some(window)) = (self.device.as_mut(), self.window.as_ref()) else {
            return;
        };

        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        device.clear();

        {
            let input = self.input.borrow();
            let mut frame = FrameContext {
                input: &*input,
                device: device.as_mut(),
                window_width: window.width(),
                window_height: window.height(),
                delta_time,
            };
            self.handler.on_update(&mut frame);
        }

        if let Err(error) = device.present() {
            engine_error!("nebula3d::Application", "Present failed: {}", error);
        }
    }
}

impl<H: AppHandler> ApplicationHandler for Application<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match Window::new(event_loop, &self.config) {
            Ok(window) => window,
            Err(_) => {
                event_loop.exit();
                return;
            }
        };

        let factory = match self.device_factory.take() {
            Some(factory) => factory,
            None => return,
        };
        let mut device = match factory(&window) {
            Ok(device) => device,
            Err(error) => {
                engine_critical!(
                    "nebula3d::Application",
                    "Can't create graphics device: {}",
                    error
                );
                event_loop.exit();
                return;
            }
        };
        device.set_viewport(window.width(), window.height(), 0, 0);

        if let Err(error) = self.handler.on_setup(device.as_mut()) {
            engine_critical!("nebula3d::Application", "Setup failed: {}", error);
            event_loop.exit();
            return;
        }

        self.window = Some(window);
        self.device = Some(device);
        self.last_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(engine_event) = window::translate_window_event(&event, self.cursor) {
            match engine_event {
                Event::MouseMoved { x, y } => self.cursor = (x, y),
                Event::WindowResize { width, height } => {
                    if let Some(window) = self.window.as_mut() {
                        window.set_size(width, height);
                    }
                    if let Some(device) = self.device.as_mut() {
                        device.set_viewport(width, height, 0, 0);
                    }
                }
                _ => {}
            }

            self.dispatcher.dispatch(&engine_event);
            self.handler.on_event(&engine_event);
        }

        if let WindowEvent::RedrawRequested = event {
            self.tick();
        }

        if self.close_requested.get() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
