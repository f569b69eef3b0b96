//! Cancel-and-restart task slots.
//!
//! Starting a task in a slot cancels whatever the slot was running, so a
//! slot never has more than one live task (marquee rotation, input debounce).

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct RunningTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct TaskSlot {
    name: &'static str,
    current: Mutex<Option<RunningTask>>,
}

impl TaskSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: Mutex::new(None),
        }
    }

    /// Spawn `fut` in this slot, cancelling the previous task first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        let name = self.name;

        let mut current = self.current.lock();
        if let Some(previous) = current.take() {
            previous.token.cancel();
            tracing::trace!("Cancelled previous {} task", name);
        }

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => {
                    tracing::trace!("{} task cancelled", name);
                }
                _ = fut => {}
            }
        });

        *current = Some(RunningTask { token, handle });
    }

    /// Cancel the running task, if any
    pub fn cancel(&self) {
        if let Some(task) = self.current.lock().take() {
            task.token.cancel();
        }
    }

    /// Whether the slot holds a task that is neither cancelled nor finished
    pub fn is_active(&self) -> bool {
        self.current
            .lock()
            .as_ref()
            .is_some_and(|t| !t.token.is_cancelled() && !t.handle.is_finished())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TaskSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSlot")
            .field("name", &self.name)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous() {
        let slot = TaskSlot::new("test");
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let fired = Arc::clone(&fired);
            slot.start(async move {
                tokio::time::sleep(Duration::from_millis(300)).await;
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!slot.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let slot = TaskSlot::new("test");
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        slot.start(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(slot.is_active());

        slot.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!slot.is_active());
    }
}
