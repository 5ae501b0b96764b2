//! JSON shapes exchanged with the alignment service

use std::fmt;

use lin_alg::f32::Mat4;
use serde::{Deserialize, Serialize};
use strux_mol::linalg::mat4_from_column_major;

/// Opaque job handle returned by submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        JobId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One residue of a structure instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueIdentifier {
    pub asym_id: String,
    pub seq_id: i32,
    /// Set only for residues placed by a non-identity operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_oper_id: Option<String>,
}

/// The residues of one side of a pairwise alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureResidues {
    pub entry_id: String,
    pub residues: Vec<ResidueIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseRequest {
    pub reference: StructureResidues,
    pub query: StructureResidues,
}

/// Superposition of the query onto the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub rmsd: f32,
    /// 4x4 transform, column-major
    pub matrix: [f32; 16],
}

impl AlignmentResult {
    /// The transform as a row-major [`Mat4`]
    pub fn transform(&self) -> Mat4 {
        mat4_from_column_major(&self.matrix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Pending,
    Complete,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResponse {
    pub status: PollStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AlignmentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PollResponse {
    pub fn pending() -> Self {
        PollResponse {
            status: PollStatus::Pending,
            result: None,
            message: None,
        }
    }

    pub fn complete(result: AlignmentResult) -> Self {
        PollResponse {
            status: PollStatus::Complete,
            result: Some(result),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        PollResponse {
            status: PollStatus::Error,
            result: None,
            message: Some(message.into()),
        }
    }
}

/// Body returned by job submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub job_id: JobId,
}
