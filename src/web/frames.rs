//! `requestAnimationFrame` behind the [`FrameScheduler`] seam.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::animator::FrameScheduler;

pub type FrameCallback = Closure<dyn FnMut(f64)>;

/// Owns the frame callback and the id of the frame it is waiting for.
pub struct BrowserFrames {
    window: Window,
    callback: FrameCallback,
    pending: Option<i32>,
}

impl BrowserFrames {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback, pending: None }
    }
}

impl FrameScheduler for BrowserFrames {
    fn request_frame(&mut self) {
        if self.pending.is_some() {
            return;
        }
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending = Some(id),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame({id}) failed: {err:?}");
            }
        }
    }

    fn frame_fired(&mut self) {
        self.pending = None;
    }
}
