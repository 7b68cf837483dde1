use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` chain. The step closure gets the frame timestamp
/// and returns whether another frame is wanted. Dropping the handle cancels
/// the pending frame and releases the closure.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let pending_inner = pending.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_inner.set(None);
            if step(timestamp) {
                if let Some(next) = callback_inner.borrow().as_ref() {
                    pending_inner.set(request_frame(next));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(first) = callback.borrow().as_ref() {
            pending.set(request_frame(first));
        }

        Self { pending, callback }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the closure <-> Rc cycle.
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
