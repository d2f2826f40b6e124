use anyhow::Context;
use chrono::Utc;
use rand::Rng;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use vitalcore::prelude::MonitorState;
use vitalcore::telemetry::{LogManager, MetricsRecorder};

pub type SharedState = Arc<RwLock<MonitorState>>;

pub fn read_state(state: &SharedState) -> MonitorState {
    state.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Owns the single writer of the published monitor state.
#[derive(Clone)]
pub struct Runner {
    interval: Duration,
    state: SharedState,
    metrics: Arc<MetricsRecorder>,
    logger: Arc<LogManager>,
}

impl Runner {
    pub fn new(interval: Duration, initial: MonitorState) -> Self {
        Self {
            interval,
            state: Arc::new(RwLock::new(initial)),
            metrics: Arc::new(MetricsRecorder::new()),
            logger: Arc::new(LogManager::new()),
        }
    }

    /// Read-only view handed to the presentation side.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    pub fn metrics(&self) -> Arc<MetricsRecorder> {
        self.metrics.clone()
    }

    /// Runs one simulation tick. A failed tick keeps the last good state.
    pub fn tick<R: Rng>(&self, rng: &mut R) -> bool {
        let current = read_state(&self.state);
        match current.step(rng, Utc::now()) {
            Ok(outcome) => {
                self.logger.record_tick(&outcome.state);
                for alert in &outcome.raised {
                    self.logger.record_alert(alert);
                }
                self.metrics.record_tick(outcome.raised.len());
                *self.state.write().unwrap_or_else(PoisonError::into_inner) = outcome.state;
                true
            }
            Err(err) => {
                self.logger.record_failure(current.ticks + 1, &err);
                self.metrics.record_error();
                false
            }
        }
    }

    /// Steps the walk `ticks` times back to back, without a timer.
    pub fn run_offline<R: Rng>(&self, rng: &mut R, ticks: u64) -> MonitorState {
        for _ in 0..ticks {
            self.tick(rng);
        }
        read_state(&self.state)
    }

    /// Starts the periodic loop on the current runtime. The first advance
    /// happens one full interval after start; `limit` stops the loop after
    /// that many ticks.
    pub fn spawn<R>(self, mut rng: R, limit: Option<u64>) -> RunnerHandle
    where
        R: Rng + Send + 'static,
    {
        let (shutdown, mut cancelled) = watch::channel(false);
        let period = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut attempts = 0u64;

            loop {
                if limit.is_some_and(|max| attempts >= max) {
                    break;
                }
                tokio::select! {
                    biased;
                    changed = cancelled.changed() => {
                        if changed.is_err() || *cancelled.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        self.tick(&mut rng);
                        attempts += 1;
                    }
                }
            }
            log::debug!("runner stopped after {} ticks", attempts);
        });

        RunnerHandle { shutdown, task }
    }
}

/// Handle to a spawned runner loop.
pub struct RunnerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RunnerHandle {
    /// Stops the loop and waits for it to exit. Once this returns no further
    /// snapshot advances occur.
    pub async fn cancel(self) -> anyhow::Result<()> {
        let _ = self.shutdown.send(true);
        self.task.await.context("joining runner task")?;
        Ok(())
    }

    /// Waits for the loop to reach its tick limit, or cancels it when `stop` resolves first.
    pub async fn run_until<F: Future<Output = ()>>(mut self, stop: F) -> anyhow::Result<()> {
        let finished = tokio::select! {
            joined = &mut self.task => {
                joined.context("runner task exited abnormally")?;
                true
            }
            _ = stop => false,
        };
        if finished {
            Ok(())
        } else {
            self.cancel().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vitalcore::prelude::VitalsSnapshot;

    fn runner(interval: Duration) -> Runner {
        Runner::new(interval, MonitorState::default())
    }

    #[test]
    fn offline_run_advances_requested_ticks() {
        let runner = runner(Duration::from_secs(2));
        let mut rng = StdRng::seed_from_u64(8);
        let state = runner.run_offline(&mut rng, 25);
        assert_eq!(state.ticks, 25);
        assert!(state.snapshot.check_bands().is_ok());
        assert_eq!(runner.metrics().snapshot().ticks, 25);
    }

    #[test]
    fn failing_tick_keeps_last_good_snapshot() {
        let broken = MonitorState {
            snapshot: VitalsSnapshot {
                glucose: f64::NAN,
                ..VitalsSnapshot::initial()
            },
            ..MonitorState::default()
        };
        let runner = Runner::new(Duration::from_secs(2), broken);
        let mut rng = StdRng::seed_from_u64(2);

        assert!(!runner.tick(&mut rng));
        let state = read_state(&runner.state());
        assert_eq!(state.ticks, 0);
        assert!(state.snapshot.glucose.is_nan());
        assert_eq!(runner.metrics().snapshot().errors, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn runner_ticks_once_per_interval_until_cancelled() {
        let runner = runner(Duration::from_secs(2));
        let shared = runner.state();
        let handle = runner.spawn(StdRng::seed_from_u64(1), None);

        time::sleep(Duration::from_millis(6_500)).await;
        assert_eq!(read_state(&shared).ticks, 3);

        handle.cancel().await.unwrap();
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(read_state(&shared).ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn runner_does_not_tick_before_first_interval() {
        let runner = runner(Duration::from_secs(2));
        let shared = runner.state();
        let handle = runner.spawn(StdRng::seed_from_u64(1), None);

        time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(read_state(&shared).ticks, 0);
        handle.cancel().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn runner_stops_at_tick_limit() {
        let runner = runner(Duration::from_millis(500));
        let shared = runner.state();
        let handle = runner.spawn(StdRng::seed_from_u64(4), Some(4));

        handle.run_until(std::future::pending::<()>()).await.unwrap();
        assert_eq!(read_state(&shared).ticks, 4);
    }
}
