//! Repeating timers behind a small trait so session logic can be driven by a
//! manual clock in tests.
//!
//! An [`IntervalHandle`] owns its timer: cancelling or dropping the handle
//! stops further ticks.

#[cfg(test)]
#[path = "interval_test.rs"]
mod interval_test;

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Longest period a browser timer accepts (`i32::MAX` milliseconds).
pub const MAX_PERIOD: Duration = Duration::from_millis(i32::MAX as u64);

/// Work run on every tick. Returns a future so the tick body may await.
pub type Tick = Rc<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// Something able to run a [`Tick`] on a fixed period.
pub trait Scheduler {
    fn every(&self, period: Duration, tick: Tick) -> IntervalHandle;
}

/// Ownership token for an armed interval.
pub struct IntervalHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl IntervalHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle with no timer behind it.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for IntervalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalHandle").field("armed", &self.cancel.is_some()).finish()
    }
}

/// `setInterval`-backed scheduler. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: Tick) -> IntervalHandle {
        #[cfg(feature = "hydrate")]
        {
            let millis = period_millis(period);
            let interval = gloo_timers::callback::Interval::new(millis, move || {
                leptos::task::spawn_local(tick());
            });
            IntervalHandle::new(move || drop(interval))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, tick);
            IntervalHandle::inert()
        }
    }
}

/// Timer delay in milliseconds, capped at [`MAX_PERIOD`].
#[cfg(any(test, feature = "hydrate"))]
fn period_millis(period: Duration) -> u32 {
    let capped = period.min(MAX_PERIOD).as_millis();
    u32::try_from(capped).unwrap_or(i32::MAX.unsigned_abs())
}
