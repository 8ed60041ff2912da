use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::domain::logging::{LogComponent, get_logger};
use crate::log_info;

/// Tick immediately, then once per `period` until `stopped` reports true.
///
/// `tick` must not block on the fetch it starts: a slow response may overlap
/// the next tick and the later write wins.
pub async fn poll_loop<T, S, F, C>(mut tick: T, mut sleep: S, period: Duration, stopped: C)
where
    T: FnMut(),
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    C: Fn() -> bool,
{
    loop {
        if stopped() {
            break;
        }
        tick();
        if stopped() {
            break;
        }
        sleep(period).await;
    }
}

/// Handle to a running poller
#[derive(Clone)]
pub struct PollHandle {
    abort_handle: AbortHandle,
    stopped: Rc<Cell<bool>>,
}

impl PollHandle {
    /// Stop ticking and drop a pending sleep.
    pub fn cancel(&self) {
        if !self.stopped.replace(true) {
            get_logger().debug(LogComponent::Application("Poller"), "🛑 Poller cancelled");
        }
        self.abort_handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.stopped.get()
    }
}

/// Repeating timer on the browser event loop
pub struct Poller;

impl Poller {
    pub fn start<T>(period: Duration, tick: T) -> PollHandle
    where
        T: FnMut() + 'static,
    {
        let stopped = Rc::new(Cell::new(false));
        let (abort_handle, registration) = AbortHandle::new_pair();

        let flag = stopped.clone();
        let task = Abortable::new(
            poll_loop(tick, gloo_timers::future::sleep, period, move || flag.get()),
            registration,
        );

        log_info!(LogComponent::Application("Poller"), "⏱️ Polling every {}s", period.as_secs());

        wasm_bindgen_futures::spawn_local(async move {
            let _ = task.await;
        });

        PollHandle { abort_handle, stopped }
    }
}
