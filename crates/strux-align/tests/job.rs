//! Job state machine against a scripted in-memory service

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use strux_align::{
    align, AlignError, AlignResult, AlignmentJob, AlignmentResult, AlignmentService, CancelToken,
    JobConfig, JobId, JobState, PairwiseRequest, PollResponse, ResidueIdentifier, ServiceFuture,
    StructureResidues,
};

/// Answers polls from a script; once the script runs out it keeps saying pending
struct ScriptedService {
    responses: Mutex<VecDeque<AlignResult<PollResponse>>>,
    polls: Mutex<u32>,
}

impl ScriptedService {
    fn new(responses: Vec<AlignResult<PollResponse>>) -> Self {
        ScriptedService {
            responses: Mutex::new(responses.into()),
            polls: Mutex::new(0),
        }
    }

    fn poll_count(&self) -> u32 {
        *self.polls.lock().unwrap()
    }
}

impl AlignmentService for ScriptedService {
    fn submit<'a>(&'a self, _request: &'a PairwiseRequest) -> ServiceFuture<'a, JobId> {
        Box::pin(async { Ok(JobId::new("job-1")) })
    }

    fn poll<'a>(&'a self, _job: &'a JobId) -> ServiceFuture<'a, PollResponse> {
        *self.polls.lock().unwrap() += 1;
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move { next.unwrap_or_else(|| Ok(PollResponse::pending())) })
    }
}

fn side(entry_id: &str) -> StructureResidues {
    StructureResidues {
        entry_id: entry_id.into(),
        residues: vec![ResidueIdentifier {
            asym_id: "A".into(),
            seq_id: 1,
            struct_oper_id: None,
        }],
    }
}

fn request() -> PairwiseRequest {
    PairwiseRequest {
        reference: side("1ABC"),
        query: side("2XYZ"),
    }
}

fn result() -> AlignmentResult {
    AlignmentResult {
        rmsd: 0.75,
        matrix: [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0,
        ],
    }
}

fn config() -> JobConfig {
    JobConfig {
        poll_interval: Duration::from_millis(100),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test(start_paused = true)]
async fn completes_after_pending_polls() {
    let service = ScriptedService::new(vec![
        Ok(PollResponse::pending()),
        Ok(PollResponse::pending()),
        Ok(PollResponse::complete(result())),
    ]);
    let out = align(&service, &request(), config(), CancelToken::new())
        .await
        .unwrap();
    assert_eq!(out, result());
    assert_eq!(service.poll_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn service_error_is_terminal() {
    let service = ScriptedService::new(vec![Ok(PollResponse::error("bad residues"))]);
    let err = align(&service, &request(), config(), CancelToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, AlignError::Service("bad residues".into()));
}

#[tokio::test(start_paused = true)]
async fn times_out_at_deadline() {
    let service = ScriptedService::new(vec![]);
    let err = align(&service, &request(), config(), CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AlignError::TimedOut { .. }));
    // one poll per interval until the deadline
    assert_eq!(service.poll_count(), 50);
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_polling() {
    let service = ScriptedService::new(vec![]);
    let cancel = CancelToken::new();
    let job = AlignmentJob::submit(&service, &request(), config(), cancel.clone())
        .await
        .unwrap();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        canceller.cancel();
    });

    let err = job.run(&service).await.unwrap_err();
    assert_eq!(err, AlignError::Cancelled(JobId::new("job-1")));
    assert!(service.poll_count() <= 3);
}

#[tokio::test(start_paused = true)]
async fn step_reports_states_and_transport_errors_are_retryable() {
    let service = ScriptedService::new(vec![
        Ok(PollResponse::pending()),
        Err(AlignError::transport("connection reset")),
        Ok(PollResponse::complete(result())),
    ]);
    let mut job = AlignmentJob::submit(&service, &request(), config(), CancelToken::new())
        .await
        .unwrap();
    assert_eq!(job.id().as_str(), "job-1");

    assert_eq!(job.step(&service).await.unwrap(), &JobState::Pending { polls: 1 });
    assert!(job.step(&service).await.is_err());
    assert_eq!(job.state(), &JobState::Pending { polls: 1 });
    assert_eq!(job.step(&service).await.unwrap(), &JobState::Complete(result()));
    // terminal states are sticky and do not poll again
    assert_eq!(job.step(&service).await.unwrap(), &JobState::Complete(result()));
    assert_eq!(service.poll_count(), 3);
}

#[tokio::test]
async fn empty_request_rejected() {
    let service = ScriptedService::new(vec![]);
    let mut req = request();
    req.query.residues.clear();
    let err = AlignmentJob::submit(&service, &req, config(), CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AlignError::InvalidRequest(_)));
    assert_eq!(service.poll_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn complete_without_result_is_an_error() {
    let service = ScriptedService::new(vec![Ok(PollResponse {
        status: strux_align::PollStatus::Complete,
        result: None,
        message: None,
    })]);
    let err = align(&service, &request(), config(), CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AlignError::Service(_)));
}
