//! Rate limiting for scroll/resize recomputation.
//!
//! Raw scroll events fire far more often than the screen repaints. The
//! [`FrameGate`] coalesces them into one `requestAnimationFrame` callback;
//! when no frame can be requested, [`Throttle`] bounds the direct-call rate
//! instead.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Tracks whether an animation-frame callback is already queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should queue a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback (or when queuing failed).
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Minimum-interval limiter keyed on caller-supplied timestamps.
///
/// Timestamps come from a monotonic clock (`performance.now()`). A negative
/// elapsed time counts as ready.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    min_interval_ms: f64,
    last_ms: Option<f64>,
    trailing: bool,
}

/// What to do with a call that reached the throttle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Run now.
    Run,
    /// Too early; run once after `wait_ms` so the final state is not lost.
    Defer { wait_ms: u32 },
    /// Too early, and a deferred run is already scheduled.
    Coalesced,
}

impl Throttle {
    #[must_use]
    pub fn new(min_interval_ms: f64) -> Self {
        Self { min_interval_ms: min_interval_ms.max(0.0), last_ms: None, trailing: false }
    }

    /// Returns `true` and records `now_ms` when the interval has elapsed.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if (0.0..self.min_interval_ms).contains(&(now_ms - last)) => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    /// Like [`Throttle::ready`], but a rejected call schedules one trailing
    /// run at the end of the current interval.
    pub fn decide(&mut self, now_ms: f64) -> ThrottleDecision {
        if self.ready(now_ms) {
            return ThrottleDecision::Run;
        }
        if self.trailing {
            return ThrottleDecision::Coalesced;
        }
        self.trailing = true;
        let elapsed = self.last_ms.map_or(0.0, |last| now_ms - last);
        let wait = (self.min_interval_ms - elapsed).ceil().clamp(0.0, f64::from(u32::MAX));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let wait_ms = wait as u32;
        ThrottleDecision::Defer { wait_ms }
    }

    /// Record the deferred run scheduled by [`Throttle::decide`].
    pub fn fire_trailing(&mut self, now_ms: f64) {
        self.trailing = false;
        self.last_ms = Some(now_ms);
    }
}

/// Milliseconds on the page's monotonic clock.
#[cfg(feature = "hydrate")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |perf| perf.now())
}

/// Run `work` on the next animation frame unless one is already queued.
///
/// Falls back to running `work` immediately (subject to `throttle`) when the
/// window cannot schedule a frame; calls the throttle rejects collapse into
/// one trailing run.
#[cfg(feature = "hydrate")]
pub fn run_on_next_frame(
    gate: &std::rc::Rc<std::cell::RefCell<FrameGate>>,
    throttle: &std::rc::Rc<std::cell::RefCell<Throttle>>,
    work: &std::rc::Rc<dyn Fn()>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if !gate.borrow_mut().request() {
        return;
    }

    let run_direct = || {
        gate.borrow_mut().complete();
        let decision = throttle.borrow_mut().decide(now_ms());
        match decision {
            ThrottleDecision::Run => work(),
            ThrottleDecision::Defer { wait_ms } => {
                let throttle = Rc::clone(throttle);
                let work = Rc::clone(work);
                gloo_timers::callback::Timeout::new(wait_ms, move || {
                    throttle.borrow_mut().fire_trailing(now_ms());
                    work();
                })
                .forget();
            }
            ThrottleDecision::Coalesced => {}
        }
    };

    let Some(window) = web_sys::window() else {
        run_direct();
        return;
    };

    let gate_for_cb = Rc::clone(gate);
    let work_for_cb = Rc::clone(work);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        gate_for_cb.borrow_mut().complete();
        work_for_cb();
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        run_direct();
    }
}
