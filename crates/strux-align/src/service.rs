//! The alignment service seam

use std::future::Future;
use std::pin::Pin;

use crate::error::AlignResult;
use crate::wire::{JobId, PairwiseRequest, PollResponse};

/// Boxed future returned by [`AlignmentService`] methods
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = AlignResult<T>> + Send + 'a>>;

/// A remote pairwise structure alignment service.
///
/// Jobs are asynchronous on the service side: [`submit`] returns a handle
/// and [`poll`] reports progress until the job completes or fails.
///
/// [`submit`]: AlignmentService::submit
/// [`poll`]: AlignmentService::poll
pub trait AlignmentService: Send + Sync {
    fn submit<'a>(&'a self, request: &'a PairwiseRequest) -> ServiceFuture<'a, JobId>;

    fn poll<'a>(&'a self, job: &'a JobId) -> ServiceFuture<'a, PollResponse>;
}
