//! Browser registrations the trail makes, and the `Host` trait they go
//! through.
//!
//! Everything the overlay registers with the page (event listeners and the
//! pending animation frame) is tracked in a `Registrations` so it can be
//! released in one place, on unmount or on drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::error::MountError;

/// The page services the trail registers callbacks with.
pub trait Host: Clone {
    /// A registered event callback.
    type Listener;
    /// The animation-frame callback.
    type Frame;

    fn add_listener(&self, event: &str, listener: &Self::Listener) -> Result<(), MountError>;
    fn remove_listener(&self, event: &str, listener: &Self::Listener) -> Result<(), MountError>;
    /// Schedule `frame` before the next repaint. Returns the request id.
    fn request_frame(&self, frame: &Self::Frame) -> Result<i32, MountError>;
    fn cancel_frame(&self, id: i32) -> Result<(), MountError>;
}

impl Host for Window {
    type Listener = Closure<dyn FnMut(Event)>;
    type Frame = Closure<dyn FnMut(f64)>;

    fn add_listener(&self, event: &str, listener: &Self::Listener) -> Result<(), MountError> {
        self.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn remove_listener(&self, event: &str, listener: &Self::Listener) -> Result<(), MountError> {
        self.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn request_frame(&self, frame: &Self::Frame) -> Result<i32, MountError> {
        Ok(self.request_animation_frame(frame.as_ref().unchecked_ref())?)
    }

    fn cancel_frame(&self, id: i32) -> Result<(), MountError> {
        self.cancel_animation_frame(id)?;
        Ok(())
    }
}

/// Self-rescheduling frame loop.
///
/// The callback sits in a shared slot; it holds a clone of the scheduler to
/// ask for the next frame. `stop` cancels the pending request and empties the
/// slot, which also breaks that reference cycle.
pub struct FrameScheduler<H: Host> {
    host: H,
    slot: Rc<RefCell<Option<H::Frame>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl<H: Host> Clone for FrameScheduler<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            slot: self.slot.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<H: Host> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            slot: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Install `frame` and request its first run.
    pub fn start(&self, frame: H::Frame) -> Result<(), MountError> {
        *self.slot.borrow_mut() = Some(frame);
        self.schedule()
    }

    /// Request the next run of the installed callback. Once stopped, this
    /// requests nothing.
    pub fn schedule(&self) -> Result<(), MountError> {
        self.pending.set(None);
        let slot = self.slot.borrow();
        if let Some(frame) = slot.as_ref() {
            let id = self.host.request_frame(frame)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    /// Id of the outstanding frame request, if any.
    pub fn pending(&self) -> Option<i32> {
        self.pending.get()
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Cancel the outstanding request and drop the callback.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.host.cancel_frame(id) {
                log::debug!("cancelling frame {} failed: {}", id, err);
            }
        }
        let frame = self.slot.borrow_mut().take();
        drop(frame);
    }
}

/// Every listener and the frame loop registered for one mount.
pub struct Registrations<H: Host> {
    host: H,
    listeners: Vec<(&'static str, H::Listener)>,
    frames: FrameScheduler<H>,
}

impl<H: Host> Registrations<H> {
    pub fn new(host: H) -> Self {
        Self {
            frames: FrameScheduler::new(host.clone()),
            host,
            listeners: Vec::new(),
        }
    }

    /// Register `listener` for `event`. It is kept until `release`.
    pub fn listen(&mut self, event: &'static str, listener: H::Listener) -> Result<(), MountError> {
        self.host.add_listener(event, &listener)?;
        self.listeners.push((event, listener));
        Ok(())
    }

    pub fn start_frames(&self, frame: H::Frame) -> Result<(), MountError> {
        self.frames.start(frame)
    }

    pub fn frames(&self) -> &FrameScheduler<H> {
        &self.frames
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Cancel the frame loop and remove every listener. Safe to call more
    /// than once.
    pub fn release(&mut self) {
        self.frames.stop();
        for (event, listener) in self.listeners.drain(..) {
            if let Err(err) = self.host.remove_listener(event, &listener) {
                log::debug!("removing {} listener failed: {}", event, err);
            }
        }
    }
}

impl<H: Host> Drop for Registrations<H> {
    fn drop(&mut self) {
        self.release();
    }
}
