//! Live wall-clock widget.
//!
//! The clock shares nothing with the game. Mounting spawns a tokio task that
//! sends the formatted local time on every tick; the returned [`ClockHandle`]
//! aborts that task when dropped, which also closes the tick channel.

use chrono::{Local, NaiveTime};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};
use tracing::{debug, instrument, trace};

/// Default repaint cadence.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// Formats a time the way a 12-hour locale clock does, e.g. `3:07:09 PM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

/// Caption shown by the widget.
pub fn caption(time: &str) -> String {
    format!("The time is {time}")
}

fn now() -> String {
    format_time(Local::now().time())
}

/// Owner of the running tick task. Dropping it stops the clock.
#[derive(Debug)]
pub struct ClockHandle {
    task: JoinHandle<()>,
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("Clock unmounted");
    }
}

/// Starts ticking. Must be called inside a tokio runtime.
///
/// The first tick is sent immediately.
#[instrument]
pub fn mount(tick: Duration) -> (ClockHandle, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let time = now();
            trace!(%time, "Clock tick");
            if tx.send(time).is_err() {
                break;
            }
        }
    });
    debug!("Clock mounted");
    (ClockHandle { task }, rx)
}

/// Clock panel state kept by the event loop.
#[derive(Debug)]
pub struct ClockWidget {
    tick: Duration,
    running: Option<(ClockHandle, UnboundedReceiver<String>)>,
    time: String,
}

impl ClockWidget {
    /// Creates an unmounted clock.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            running: None,
            time: now(),
        }
    }

    /// Returns true while the tick task is registered.
    pub fn is_mounted(&self) -> bool {
        self.running.is_some()
    }

    /// Registers the tick task if not already running.
    pub fn mount(&mut self) {
        if self.running.is_none() {
            self.time = now();
            self.running = Some(mount(self.tick));
        }
    }

    /// Releases the tick task.
    pub fn unmount(&mut self) {
        self.running = None;
    }

    /// Shows or hides the clock.
    pub fn toggle(&mut self) {
        if self.is_mounted() {
            self.unmount();
        } else {
            self.mount();
        }
    }

    /// Takes the latest pending tick, if any.
    pub fn poll(&mut self) {
        if let Some((_, rx)) = &mut self.running {
            while let Ok(time) = rx.try_recv() {
                self.time = time;
            }
        }
    }

    /// Caption to display, or `None` while hidden.
    pub fn caption(&self) -> Option<String> {
        self.is_mounted().then(|| caption(&self.time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        let afternoon = NaiveTime::from_hms_opt(15, 7, 9).expect("valid time");
        assert_eq!(format_time(afternoon), "3:07:09 PM");

        let midnight = NaiveTime::from_hms_opt(0, 30, 0).expect("valid time");
        assert_eq!(format_time(midnight), "12:30:00 AM");
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption("9:00:00 AM"), "The time is 9:00:00 AM");
    }

    #[tokio::test]
    async fn test_mount_ticks_immediately() {
        let (_handle, mut rx) = mount(Duration::from_millis(20));
        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick before timeout");
        assert!(first.is_some());
    }

    #[tokio::test]
    async fn test_dropping_handle_closes_channel() {
        let (handle, mut rx) = mount(Duration::from_millis(20));
        assert!(rx.recv().await.is_some());

        drop(handle);
        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "tick task kept running after unmount");
    }

    #[tokio::test]
    async fn test_widget_toggle_mounts_and_unmounts() {
        let mut clock = ClockWidget::new(Duration::from_millis(20));
        assert!(clock.caption().is_none());

        clock.toggle();
        assert!(clock.is_mounted());
        assert!(clock.caption().is_some_and(|c| c.starts_with("The time is ")));

        clock.toggle();
        assert!(!clock.is_mounted());
        assert!(clock.caption().is_none());
    }
}
