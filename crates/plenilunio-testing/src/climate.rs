//! Scripted climate source for driving the runtime without a network.

use futures::FutureExt;
use futures::future::BoxFuture;
use plenilunio_providers::{ClimateSource, Error, Result};
use plenilunio_types::{ClimateResponse, LiveClimateReading, SeasonId};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Outcome {
    Reading(LiveClimateReading),
    Status(u16),
    Hang,
}

#[derive(Debug, Clone)]
struct Step {
    delay: Duration,
    outcome: Outcome,
}

/// Climate source answering from per-season queues of canned outcomes.
///
/// Each lookup pops the next step for its season. Seasons with nothing
/// queued answer `503`. Delays use `tokio::time`, so tests running with
/// paused time advance through them instantly.
///
/// # Example
/// ```no_run
/// # use plenilunio_testing::{ScriptedClimateSource, fixtures};
/// # use std::time::Duration;
/// let source = ScriptedClimateSource::new()
///     .respond_after("1", Duration::from_secs(5), fixtures::sample_reading())
///     .fail("2", 503);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedClimateSource {
    steps: Mutex<HashMap<SeasonId, VecDeque<Step>>>,
    calls: Mutex<Vec<SeasonId>>,
}

impl ScriptedClimateSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, season_id: &str, delay: Duration, outcome: Outcome) -> Self {
        self.steps
            .lock()
            .expect("script lock")
            .entry(SeasonId::from(season_id))
            .or_default()
            .push_back(Step { delay, outcome });
        self
    }

    pub fn respond(self, season_id: &str, reading: LiveClimateReading) -> Self {
        self.push(season_id, Duration::ZERO, Outcome::Reading(reading))
    }

    pub fn respond_after(self, season_id: &str, delay: Duration, reading: LiveClimateReading) -> Self {
        self.push(season_id, delay, Outcome::Reading(reading))
    }

    pub fn fail(self, season_id: &str, status: u16) -> Self {
        self.push(season_id, Duration::ZERO, Outcome::Status(status))
    }

    pub fn fail_after(self, season_id: &str, delay: Duration, status: u16) -> Self {
        self.push(season_id, delay, Outcome::Status(status))
    }

    /// Never answer; only the fetcher's timeout ends the lookup.
    pub fn hang(self, season_id: &str) -> Self {
        self.push(season_id, Duration::ZERO, Outcome::Hang)
    }

    /// Seasons looked up so far, in call order.
    pub fn calls(&self) -> Vec<SeasonId> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn next_step(&self, season_id: &SeasonId) -> Step {
        self.calls.lock().expect("calls lock").push(season_id.clone());
        self.steps
            .lock()
            .expect("script lock")
            .get_mut(season_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Step {
                delay: Duration::ZERO,
                outcome: Outcome::Status(503),
            })
    }
}

impl ClimateSource for ScriptedClimateSource {
    fn fetch<'a>(&'a self, season_id: &'a SeasonId) -> BoxFuture<'a, Result<ClimateResponse>> {
        let step = self.next_step(season_id);
        async move {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            match step.outcome {
                Outcome::Reading(climate) => Ok(ClimateResponse {
                    climate,
                    season_id: Some(season_id.clone()),
                    location: None,
                    date: None,
                }),
                Outcome::Status(status) => Err(Error::Status(status)),
                Outcome::Hang => futures::future::pending().await,
            }
        }
        .boxed()
    }
}
