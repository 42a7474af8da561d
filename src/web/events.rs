// events.rs - Listener, interval and animation-frame registrations

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

use super::{browser_err, window};
use crate::error::Result;
use crate::lifecycle::{Scoped, Teardown};

/// DOM event listener held for as long as the guard lives
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn listen(
        target: &EventTarget,
        kind: &'static str,
        on_event: impl FnMut(Event) + 'static,
    ) -> Result<Scoped<Self>> {
        let callback = Closure::<dyn FnMut(Event)>::new(on_event);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| browser_err(kind, e))?;
        debug!("listening for '{kind}'");
        Ok(Scoped::new(Self { target: target.clone(), kind, callback }))
    }
}

impl Teardown for EventListener {
    fn teardown(&mut self) {
        let f = self.callback.as_ref().unchecked_ref();
        if let Err(e) = self.target.remove_event_listener_with_callback(self.kind, f) {
            error!("{}", browser_err(self.kind, e));
        }
        debug!("stopped listening for '{}'", self.kind);
    }
}

/// `setInterval` registration
pub struct Interval {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, on_tick: impl FnMut() + 'static) -> Result<Scoped<Self>> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(on_tick);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| browser_err("setInterval", e))?;
        Ok(Scoped::new(Self { window, handle, _callback: callback }))
    }
}

impl Teardown for Interval {
    fn teardown(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

struct FrameState {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// `requestAnimationFrame` loop. The callback gets the frame timestamp in
/// ms. Must not be released from inside its own callback.
pub struct FrameLoop {
    window: Window,
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Scoped<Self>> {
        let window = window()?;
        let state = Rc::new(FrameState { handle: Cell::new(None), callback: RefCell::new(None) });

        // Weak back-reference: the closure lives inside `state`
        let weak = Rc::downgrade(&state);
        let w = window.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            on_frame(now);
            let Some(state) = weak.upgrade() else { return };
            let callback = state.callback.borrow();
            let Some(cb) = callback.as_ref() else { return };
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(h) => state.handle.set(Some(h)),
                Err(e) => error!("{}", browser_err("requestAnimationFrame", e)),
            }
        });

        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| browser_err("requestAnimationFrame", e))?;
        state.handle.set(Some(handle));
        *state.callback.borrow_mut() = Some(closure);

        Ok(Scoped::new(Self { window, state }))
    }
}

impl Teardown for FrameLoop {
    fn teardown(&mut self) {
        if let Some(h) = self.state.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(h) {
                error!("{}", browser_err("cancelAnimationFrame", e));
            }
        }
        self.state.callback.borrow_mut().take();
    }
}
