//! Targets and residue ranges
//!
//! The declarative way callers point at residues and chains. Field names
//! follow the mmCIF conventions and serialize in camelCase
//! (`labelAsymId`, `authSeqId`, ...).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{SelectError, SelectResult};

/// Longest residue span a [`SeqRange`] may cover
pub const MAX_SEQ_RANGE_LEN: usize = 100_000;

/// Identifies zero or more residues or chains.
///
/// Every field is optional; a target with no fields set addresses the whole
/// structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Target {
    /// Author residue number; takes precedence over `label_seq_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_seq_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_seq_id: Option<i32>,
    /// Residue name filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_comp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_asym_id: Option<String>,
    /// Struct oper id of the unit, e.g. "1" or "2x5"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_oper_id: Option<String>,
    /// Operator name of the unit, e.g. "ASM_2"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_name: Option<String>,
    /// Widen a residue match to its whole chain
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub extend_to_chain: bool,
}

impl Target {
    /// Target addressing a whole chain
    pub fn chain(label_asym_id: impl Into<String>) -> Self {
        Target {
            label_asym_id: Some(label_asym_id.into()),
            ..Default::default()
        }
    }

    pub fn with_auth_seq_id(mut self, seq_id: i32) -> Self {
        self.auth_seq_id = Some(seq_id);
        self
    }

    pub fn with_label_seq_id(mut self, seq_id: i32) -> Self {
        self.label_seq_id = Some(seq_id);
        self
    }

    pub fn with_comp_id(mut self, comp_id: impl Into<String>) -> Self {
        self.label_comp_id = Some(comp_id.into());
        self
    }

    pub fn with_struct_oper_id(mut self, id: impl Into<String>) -> Self {
        self.struct_oper_id = Some(id.into());
        self
    }

    pub fn with_operator_name(mut self, name: impl Into<String>) -> Self {
        self.operator_name = Some(name.into());
        self
    }

    pub fn extended_to_chain(mut self) -> Self {
        self.extend_to_chain = true;
        self
    }

    /// True if no field constrains the selection
    pub fn is_empty(&self) -> bool {
        self.auth_seq_id.is_none()
            && self.label_seq_id.is_none()
            && self.label_comp_id.is_none()
            && self.label_asym_id.is_none()
            && self.struct_oper_id.is_none()
            && self.operator_name.is_none()
    }
}

/// Inclusive residue span in `label_seq_id` numbering; `end` defaults to `beg`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeqRange {
    pub beg: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i32>,
}

impl SeqRange {
    pub fn new(beg: i32, end: i32) -> Self {
        SeqRange { beg, end: Some(end) }
    }

    pub fn single(seq_id: i32) -> Self {
        SeqRange { beg: seq_id, end: None }
    }

    #[inline]
    pub fn end(&self) -> i32 {
        self.end.unwrap_or(self.beg)
    }

    /// Number of residues covered
    pub fn len(&self) -> usize {
        (self.end() as i64 - self.beg as i64 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn residues(&self) -> RangeInclusive<i32> {
        self.beg..=self.end()
    }

    pub fn validate(&self) -> SelectResult<()> {
        if self.beg > self.end() {
            return Err(SelectError::InvalidRange {
                beg: self.beg,
                end: self.end(),
            });
        }
        if self.len() > MAX_SEQ_RANGE_LEN {
            return Err(SelectError::RangeTooLarge {
                beg: self.beg,
                end: self.end(),
            });
        }
        Ok(())
    }
}

/// A contiguous residue span on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Range {
    pub label_asym_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_seq_range: Option<SeqRange>,
}

impl Range {
    /// The whole chain
    pub fn chain(label_asym_id: impl Into<String>) -> Self {
        Range {
            label_asym_id: label_asym_id.into(),
            label_seq_range: None,
        }
    }

    pub fn new(label_asym_id: impl Into<String>, beg: i32, end: i32) -> Self {
        Range {
            label_asym_id: label_asym_id.into(),
            label_seq_range: Some(SeqRange::new(beg, end)),
        }
    }

    pub fn validate(&self) -> SelectResult<()> {
        if self.label_asym_id.is_empty() {
            return Err(SelectError::MissingChain);
        }
        match &self.label_seq_range {
            Some(range) => range.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_target() {
        assert!(Target::default().is_empty());
        assert!(!Target::chain("A").is_empty());
        // extend_to_chain alone selects nothing specific
        assert!(Target::default().extended_to_chain().is_empty());
    }

    #[test]
    fn test_target_json_names() {
        let target: Target =
            serde_json::from_str(r#"{"labelAsymId":"A","authSeqId":42,"structOperId":"2x5"}"#)
                .unwrap();
        assert_eq!(target.label_asym_id.as_deref(), Some("A"));
        assert_eq!(target.auth_seq_id, Some(42));
        assert_eq!(target.struct_oper_id.as_deref(), Some("2x5"));
        assert!(!target.extend_to_chain);

        let json = serde_json::to_string(&Target::chain("B")).unwrap();
        assert_eq!(json, r#"{"labelAsymId":"B"}"#);
    }

    #[test]
    fn test_target_rejects_unknown_fields() {
        assert!(serde_json::from_str::<Target>(r#"{"chain":"A"}"#).is_err());
    }

    #[test]
    fn test_seq_range_defaults() {
        let r = SeqRange::single(7);
        assert_eq!(r.end(), 7);
        assert_eq!(r.len(), 1);
        assert_eq!(SeqRange::new(5, 9).residues().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_range_validation() {
        assert!(Range::new("A", 5, 9).validate().is_ok());
        assert_eq!(
            Range::new("A", 9, 5).validate(),
            Err(SelectError::InvalidRange { beg: 9, end: 5 })
        );
        assert_eq!(Range::chain("").validate(), Err(SelectError::MissingChain));
    }

    #[test]
    fn test_range_size_cap() {
        assert_eq!(SeqRange::new(i32::MIN, i32::MAX).len(), 1 << 32);
        assert!(SeqRange::new(1, MAX_SEQ_RANGE_LEN as i32).validate().is_ok());
        assert_eq!(
            Range::new("A", 1, 2_000_000_000).validate(),
            Err(SelectError::RangeTooLarge { beg: 1, end: 2_000_000_000 })
        );
    }

    #[test]
    fn test_range_json() {
        let range: Range =
            serde_json::from_str(r#"{"labelAsymId":"A","labelSeqRange":{"beg":5}}"#).unwrap();
        assert_eq!(range.label_seq_range.unwrap().end(), 5);
    }
}
