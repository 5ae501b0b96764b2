//! STRUX alignment service interface
//!
//! Pairwise structure superposition is delegated to a remote service. This
//! crate defines the wire shapes, the [`AlignmentService`] seam, and
//! [`AlignmentJob`], which polls a submitted job until it completes, fails,
//! runs past its deadline or is cancelled through a [`CancelToken`].
//!
//! # Features
//!
//! - `http` - [`HttpAlignmentService`], a `reqwest` client for the service

mod error;
#[cfg(feature = "http")]
mod http;
mod job;
mod residues;
mod service;
mod wire;

pub use error::{AlignError, AlignResult};
#[cfg(feature = "http")]
pub use http::HttpAlignmentService;
pub use job::{align, AlignmentJob, CancelToken, JobConfig, JobState};
pub use residues::residue_identifiers;
pub use service::{AlignmentService, ServiceFuture};
pub use wire::{
    AlignmentResult, JobId, PairwiseRequest, PollResponse, PollStatus, ResidueIdentifier,
    StructureResidues, SubmitResponse,
};
