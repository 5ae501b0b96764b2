//! Alignment job polling
//!
//! An [`AlignmentJob`] is a small state machine:
//!
//! ```text
//! Pending --poll--> Pending | Complete | Error
//! Pending --deadline--> TimedOut
//! Pending --cancel--> Cancelled
//! ```
//!
//! Terminal states never change again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use strux_settings::{id, Settings};
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::{AlignError, AlignResult};
use crate::service::AlignmentService;
use crate::wire::{AlignmentResult, JobId, PairwiseRequest, PollStatus};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobConfig {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            poll_interval: Duration::from_millis(1000),
            timeout: Duration::from_millis(300_000),
        }
    }
}

impl JobConfig {
    /// Read `alignment_poll_interval_ms` and `alignment_timeout_ms`
    pub fn from_settings(settings: &Settings) -> Self {
        let interval = settings.get_int(id::alignment_poll_interval_ms);
        let timeout = settings.get_int(id::alignment_timeout_ms);
        JobConfig {
            poll_interval: Duration::from_millis(interval.max(0) as u64),
            timeout: Duration::from_millis(timeout.max(0) as u64),
        }
    }
}

// ============================================================================
// Cancellation
// ============================================================================

#[derive(Debug, Default)]
struct CancelInner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared cancellation flag; clones observe the same state
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<CancelInner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](CancelToken::cancel) has been called
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

// ============================================================================
// Job state machine
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum JobState {
    /// Submitted; `polls` responses so far said pending
    Pending { polls: u32 },
    Complete(AlignmentResult),
    Error(String),
    TimedOut,
    Cancelled,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Pending { .. })
    }
}

/// A submitted alignment job
#[derive(Debug)]
pub struct AlignmentJob {
    id: JobId,
    state: JobState,
    config: JobConfig,
    started: Instant,
    cancel: CancelToken,
}

impl AlignmentJob {
    /// Submit `request` and start the deadline clock
    pub async fn submit<S: AlignmentService + ?Sized>(
        service: &S,
        request: &PairwiseRequest,
        config: JobConfig,
        cancel: CancelToken,
    ) -> AlignResult<Self> {
        if request.reference.residues.is_empty() || request.query.residues.is_empty() {
            return Err(AlignError::InvalidRequest(
                "reference and query need at least one residue".into(),
            ));
        }
        let id = service.submit(request).await?;
        log::debug!(
            "Submitted alignment job {} ({} vs {})",
            id,
            request.reference.entry_id,
            request.query.entry_id
        );
        Ok(AlignmentJob {
            id,
            state: JobState::Pending { polls: 0 },
            config,
            started: Instant::now(),
            cancel,
        })
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn deadline(&self) -> Instant {
        self.started + self.config.timeout
    }

    /// Advance the state machine by at most one poll.
    ///
    /// Transport errors are returned without changing the state, so the
    /// caller may retry.
    pub async fn step<S: AlignmentService + ?Sized>(&mut self, service: &S) -> AlignResult<&JobState> {
        let polls = match self.state {
            JobState::Pending { polls } => polls,
            _ => return Ok(&self.state),
        };

        if self.cancel.is_cancelled() {
            self.state = JobState::Cancelled;
        } else if Instant::now() >= self.deadline() {
            self.state = JobState::TimedOut;
        } else {
            let response = service.poll(&self.id).await?;
            self.state = match response.status {
                PollStatus::Pending => JobState::Pending { polls: polls + 1 },
                PollStatus::Complete => match response.result {
                    Some(result) => JobState::Complete(result),
                    None => JobState::Error("job completed without a result".into()),
                },
                PollStatus::Error => JobState::Error(
                    response
                        .message
                        .unwrap_or_else(|| "unknown service error".into()),
                ),
            };
        }

        if self.state.is_terminal() {
            log::debug!("Alignment job {} finished: {:?}", self.id, self.state);
        }
        Ok(&self.state)
    }

    /// Poll on the configured interval until a terminal state
    pub async fn run<S: AlignmentService + ?Sized>(mut self, service: &S) -> AlignResult<AlignmentResult> {
        loop {
            let state = self.step(service).await?.clone();
            match state {
                JobState::Pending { .. } => {}
                JobState::Complete(result) => return Ok(result),
                JobState::Error(message) => return Err(AlignError::Service(message)),
                JobState::TimedOut => {
                    log::warn!("Alignment job {} timed out", self.id);
                    return Err(AlignError::TimedOut {
                        job: self.id.clone(),
                        after: self.config.timeout,
                    });
                }
                JobState::Cancelled => return Err(AlignError::Cancelled(self.id.clone())),
            }

            let wait = self
                .config
                .poll_interval
                .min(self.deadline().saturating_duration_since(Instant::now()));
            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = self.cancel.cancelled() => {}
            }
        }
    }
}

/// Submit `request` and wait for its result
pub async fn align<S: AlignmentService + ?Sized>(
    service: &S,
    request: &PairwiseRequest,
    config: JobConfig,
    cancel: CancelToken,
) -> AlignResult<AlignmentResult> {
    AlignmentJob::submit(service, request, config, cancel)
        .await?
        .run(service)
        .await
}
