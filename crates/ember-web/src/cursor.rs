use std::cell::RefCell;
use std::rc::Rc;

use ember_trail::{InputEvent, TrailConfig, TrailOverlay};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::error::MountError;
use crate::host::Registrations;

/// Styles that make the canvas a click-through, full-viewport overlay.
const OVERLAY_STYLE: [(&str, &str); 5] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("pointer-events", "none"),
    ("z-index", "100"),
    ("mix-blend-mode", "screen"),
];

/// The cursor trail mounted on a canvas.
///
/// Owns every browser registration it makes: the resize and mousemove
/// listeners and the pending animation frame. `unmount` (or drop) releases
/// all of them.
pub struct CursorParticles {
    overlay: Rc<RefCell<TrailOverlay>>,
    registrations: Registrations<Window>,
}

impl CursorParticles {
    /// Size `canvas` to the viewport and start the trail on it.
    pub fn mount(canvas: HtmlCanvasElement, mut config: TrailConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;

        let style = canvas.style();
        for (property, value) in OVERLAY_STYLE {
            style.set_property(property, value)?;
        }

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        if config.seed.is_none() {
            config.seed = Some((js_sys::Math::random() * u64::MAX as f64) as u64);
        }
        let overlay = TrailOverlay::mount(config, width, height)?;

        let mut particles = Self {
            overlay: Rc::new(RefCell::new(overlay)),
            registrations: Registrations::new(window.clone()),
        };
        // On error, dropping `particles` releases whatever was registered.
        particles.listen(window, canvas)?;
        particles.start_loop(CanvasSurface::new(ctx))?;
        log::debug!("cursor particles mounted ({}x{})", width, height);
        Ok(particles)
    }

    fn listen(&mut self, window: Window, canvas: HtmlCanvasElement) -> Result<(), MountError> {
        let on_resize = {
            let overlay = self.overlay.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                // Setting the size also wipes the canvas.
                let (width, height) = viewport_size(&window);
                canvas.set_width(width);
                canvas.set_height(height);
                overlay.borrow_mut().handle(InputEvent::Resize { width, height });
            })
        };
        self.registrations.listen("resize", on_resize)?;

        let on_mouse_move = {
            let overlay = self.overlay.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    overlay.borrow_mut().handle(InputEvent::pointer_move(
                        event.client_x() as f32,
                        event.client_y() as f32,
                    ));
                }
            })
        };
        self.registrations.listen("mousemove", on_mouse_move)?;

        Ok(())
    }

    fn start_loop(&mut self, mut surface: CanvasSurface) -> Result<(), MountError> {
        let overlay = self.overlay.clone();
        let scheduler = self.registrations.frames().clone();
        let mut last_timestamp: Option<f64> = None;

        let tick = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let dt = last_timestamp.map_or(0.0, |prev| ((timestamp - prev) / 1000.0) as f32);
            last_timestamp = Some(timestamp);

            {
                let mut overlay = overlay.borrow_mut();
                if !overlay.is_mounted() {
                    return;
                }
                overlay.frame(dt).replay(&mut surface);
            }

            if let Err(err) = scheduler.schedule() {
                log::warn!("cursor particles stopped: {}", err);
            }
        });
        self.registrations.start_frames(tick)
    }

    /// Remove both listeners, cancel the pending frame and stop the trail.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        self.registrations.release();
        if let Ok(mut overlay) = self.overlay.try_borrow_mut() {
            overlay.unmount();
        }
    }

    pub fn particle_count(&self) -> usize {
        self.overlay.borrow().particle_count()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.overlay.borrow().instances().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.overlay.borrow().instances().instance_count()
    }
}

impl Drop for CursorParticles {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Viewport size in CSS pixels, 0 for anything the browser won't report.
fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v.max(0.0) as u32)
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
