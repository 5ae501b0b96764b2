//! Residue lists sent to the alignment service

use strux_mol::{Structure, IDENTITY_OPERATOR_NAME};

use crate::wire::{ResidueIdentifier, StructureResidues};

/// One identifier per polymer residue of `structure`, in unit order.
///
/// Residues without a `label_seq_id` are omitted. `struct_oper_id` is only
/// filled in for units placed by an assembly operator; model-level units keep
/// `None` even after a rigid transform.
pub fn residue_identifiers(structure: &Structure) -> Vec<ResidueIdentifier> {
    let mut out = Vec::new();
    for unit in structure.units() {
        let operator = unit.operator();
        let struct_oper_id =
            (operator.name != IDENTITY_OPERATOR_NAME).then(|| operator.struct_oper_id.clone());
        let mut last: Option<i32> = None;
        for (_, atom) in unit.atoms() {
            let Some(seq_id) = atom.label_seq_id else {
                continue;
            };
            if last == Some(seq_id) {
                continue;
            }
            last = Some(seq_id);
            out.push(ResidueIdentifier {
                asym_id: atom.label_asym_id.clone(),
                seq_id,
                struct_oper_id: struct_oper_id.clone(),
            });
        }
    }
    out
}

impl StructureResidues {
    pub fn from_structure(entry_id: impl Into<String>, structure: &Structure) -> Self {
        StructureResidues {
            entry_id: entry_id.into(),
            residues: residue_identifiers(structure),
        }
    }
}
