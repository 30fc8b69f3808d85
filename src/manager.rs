use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::components::toasts::{ToastHub, ToastVariant};
use crate::log;
use crate::queue::{DownloadQueue, SubmitError, TickOutcome};
use crate::types::{DownloadRecord, DownloadRequest};

/// Delay between accepting a submission and the download "starting".
const START_DELAY_MS: u32 = 1_000;
/// Interval between simulated progress ticks.
const TICK_INTERVAL_MS: u32 = 500;
/// Upper bound for the random progress step applied per tick.
const MAX_TICK_STEP: f64 = 15.0;

/// Handle to the owned download queue. Cheap to clone; every clone talks to
/// the same store, and every mutation publishes a fresh snapshot for the
/// view to render.
#[derive(Clone)]
pub struct DownloadManager {
    queue: Rc<RefCell<DownloadQueue>>,
    on_change: Callback<Vec<DownloadRecord>>,
    toasts: ToastHub,
}

impl DownloadManager {
    pub fn new(
        queue: Rc<RefCell<DownloadQueue>>,
        on_change: Callback<Vec<DownloadRecord>>,
        toasts: ToastHub,
    ) -> Self {
        Self {
            queue,
            on_change,
            toasts,
        }
    }

    /// Validate and enqueue a submission. On success the record sits pending
    /// at the head of the queue and its progress driver is already running.
    pub fn submit(&self, request: &DownloadRequest) -> Result<u64, SubmitError> {
        let now_ms = js_sys::Date::now() as u64;
        let result = self.queue.borrow_mut().submit(
            &request.url,
            request.format,
            request.quality,
            now_ms,
        );
        match &result {
            Ok(id) => {
                log::info(
                    "queue_submit",
                    serde_json::json!({
                        "id": id,
                        "url": request.url,
                        "format": request.format,
                        "quality": request.quality,
                    }),
                );
                self.publish();
                self.toasts.push(
                    "Download Started",
                    "Your video download has been added to the queue",
                    ToastVariant::Info,
                );
                spawn_progress_driver(self.clone(), *id);
            }
            Err(err) => {
                log::warn(
                    "queue_submit_rejected",
                    serde_json::json!({ "url": request.url, "reason": err.to_string() }),
                );
                self.toasts.push("Error", &err.to_string(), ToastVariant::Error);
            }
        }
        result
    }

    /// Flip a record between downloading and paused. The driver keeps
    /// ticking either way; paused ticks are inert.
    pub fn toggle(&self, id: u64) {
        let flipped = self.queue.borrow_mut().toggle(id);
        if let Some(status) = flipped {
            log::info("queue_toggle", serde_json::json!({ "id": id, "status": status }));
            self.publish();
        }
    }

    fn begin(&self, id: u64) {
        if self.queue.borrow_mut().begin(id) {
            log::debug("queue_begin", serde_json::json!({ "id": id }));
            self.publish();
        }
    }

    fn tick(&self, id: u64) -> TickOutcome {
        let step = (js_sys::Math::random() * MAX_TICK_STEP) as f32;
        let outcome = self.queue.borrow_mut().tick(id, step);
        match outcome {
            TickOutcome::Advanced(_) => self.publish(),
            TickOutcome::Completed => {
                self.publish();
                log::info("queue_completed", serde_json::json!({ "id": id }));
                let title = self.title_of(id);
                self.toasts.push(
                    "Download Complete",
                    &format!("{title} has been downloaded successfully"),
                    ToastVariant::Success,
                );
            }
            TickOutcome::Inert | TickOutcome::Stopped => {}
        }
        outcome
    }

    fn title_of(&self, id: u64) -> String {
        self.queue
            .borrow()
            .get(id)
            .map(|rec| rec.title.clone())
            .unwrap_or_default()
    }

    fn publish(&self) {
        let snapshot = self.queue.borrow().snapshot();
        self.on_change.emit(snapshot);
    }
}

/// One task per accepted record: sit out the start delay, fire the pending
/// edge, then tick until the store reports a terminal outcome. Pausing does
/// not kill the task; the tick stays inert until the record resumes.
fn spawn_progress_driver(manager: DownloadManager, id: u64) {
    spawn_local(async move {
        TimeoutFuture::new(START_DELAY_MS).await;
        manager.begin(id);
        loop {
            TimeoutFuture::new(TICK_INTERVAL_MS).await;
            if manager.tick(id).is_terminal() {
                break;
            }
        }
    });
}
