use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::error::{NotificationError, NotifyResult};
use super::request::{AuthorizationOptions, NotificationRequest, Sound};

/// Local notification service the gateway talks to.
pub trait NotificationCenter {
    fn request_authorization(&self, options: AuthorizationOptions) -> NotifyResult<bool>;

    /// Schedule a request. A pending request with the same id is replaced.
    fn add(&self, request: NotificationRequest) -> NotifyResult<()>;

    /// Withdraw a pending request. Returns whether one was pending.
    fn remove_pending(&self, id: &str) -> bool;
}

/// A notification that reached its trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id: String,
    pub title: String,
    pub body: String,
    pub sound: Sound,
}

type PendingMap = HashMap<String, (u64, JoinHandle<()>)>;

/// Wall-clock source for trigger checks.
pub type WallClock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Longest single sleep before the wall clock is consulted again. The
/// monotonic timer stops during suspend and ignores clock adjustments.
const MAX_SLEEP_SLICE: Duration = Duration::from_secs(30);

async fn sleep_until_wall(fire_at: DateTime<Local>, clock: WallClock) {
    loop {
        match (fire_at - clock()).to_std() {
            Ok(remaining) if !remaining.is_zero() => {
                tokio::time::sleep(remaining.min(MAX_SLEEP_SLICE)).await;
            }
            _ => return,
        }
    }
}

/// Notification center backed by tokio timers. Fired requests come out of
/// the receiver returned by [`TerminalCenter::new`].
pub struct TerminalCenter {
    runtime: Handle,
    enabled: bool,
    clock: WallClock,
    next_generation: AtomicU64,
    pending: Arc<Mutex<PendingMap>>,
    deliveries: UnboundedSender<Delivery>,
}

impl TerminalCenter {
    pub fn new(runtime: Handle, enabled: bool) -> (Self, UnboundedReceiver<Delivery>) {
        Self::with_clock(runtime, enabled, Arc::new(Local::now))
    }

    pub fn with_clock(
        runtime: Handle,
        enabled: bool,
        clock: WallClock,
    ) -> (Self, UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let center = Self {
            runtime,
            enabled,
            clock,
            next_generation: AtomicU64::new(0),
            pending: Arc::new(Mutex::new(HashMap::new())),
            deliveries: tx,
        };
        (center, rx)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending
            .lock()
            .map(|p| p.contains_key(id))
            .unwrap_or(false)
    }
}

impl NotificationCenter for TerminalCenter {
    fn request_authorization(&self, options: AuthorizationOptions) -> NotifyResult<bool> {
        debug!(
            "authorization requested (alert={}, badge={}, sound={}), granted={}",
            options.alert, options.badge, options.sound, self.enabled
        );
        Ok(self.enabled)
    }

    fn add(&self, request: NotificationRequest) -> NotifyResult<()> {
        if !self.enabled {
            return Err(NotificationError::Disabled);
        }

        let fire_at = request
            .trigger
            .fire_at()
            .ok_or_else(|| NotificationError::InvalidTrigger(request.trigger.to_string()))?;
        if fire_at < (self.clock)() {
            return Err(NotificationError::TriggerInPast(request.trigger.to_string()));
        }

        let mut pending = self
            .pending
            .lock()
            .map_err(|_| NotificationError::Platform("pending request table poisoned".into()))?;

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let id = request.id.clone();
        let table = Arc::clone(&self.pending);
        let tx = self.deliveries.clone();
        let clock = Arc::clone(&self.clock);

        let task = self.runtime.spawn(async move {
            sleep_until_wall(fire_at, clock).await;

            // A replaced task must not evict its successor.
            if let Ok(mut pending) = table.lock() {
                if pending.get(&request.id).is_some_and(|(g, _)| *g == generation) {
                    pending.remove(&request.id);
                }
            }

            let delivery = Delivery {
                id: request.id,
                title: request.title,
                body: request.body,
                sound: request.sound,
            };
            if tx.send(delivery).is_err() {
                debug!("delivery receiver closed, dropping notification");
            }
        });

        info!("scheduled notification {} for {}", id, fire_at.format("%Y-%m-%d %H:%M"));
        if let Some((_, previous)) = pending.insert(id, (generation, task)) {
            previous.abort();
        }
        Ok(())
    }

    fn remove_pending(&self, id: &str) -> bool {
        let Ok(mut pending) = self.pending.lock() else {
            return false;
        };
        match pending.remove(id) {
            Some((_, task)) => {
                task.abort();
                debug!("cancelled notification {}", id);
                true
            }
            None => false,
        }
    }
}

/// Wall clock that advances with tokio's (possibly paused) clock, plus a
/// jump in seconds standing in for suspend or a clock change.
#[cfg(test)]
pub fn tokio_wall_clock() -> (WallClock, Arc<std::sync::atomic::AtomicI64>) {
    use std::sync::atomic::AtomicI64;

    let base = Local::now();
    let start = tokio::time::Instant::now();
    let jump = Arc::new(AtomicI64::new(0));
    let jump_seen = Arc::clone(&jump);
    let clock: WallClock = Arc::new(move || {
        let elapsed = chrono::TimeDelta::from_std(start.elapsed()).unwrap_or_default();
        base + elapsed + chrono::TimeDelta::seconds(jump_seen.load(Ordering::Relaxed))
    });
    (clock, jump)
}
