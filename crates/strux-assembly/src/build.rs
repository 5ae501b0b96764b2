//! Building assembly structures from the generation table

use std::sync::Arc;

use lin_alg::f32::Mat4;
use strux_mol::linalg::{identity_mat4, left_multiply_mat4};
use strux_mol::{Model, Operator, Structure, StructureBuilder};

use crate::error::{AssemblyError, AssemblyResult};
use crate::oper_expr::{combination_id, operator_combinations, parse_oper_expression};

/// Build assembly `assembly_id` of `model`.
///
/// Every generation row of the assembly is expanded into the cartesian
/// product of its operator groups. Each combination becomes one operator
/// named `ASM_{n}` (numbered from 1 across the assembly) whose matrix is the
/// product of the group matrices in expression order, so the rightmost
/// operator is applied first. Units are added operator by operator, chain by
/// chain; chains listed in a row but absent from the model are skipped.
pub fn build_assembly(model: &Arc<Model>, assembly_id: &str) -> AssemblyResult<Structure> {
    let rows = model
        .assembly_gen()
        .ok_or_else(|| AssemblyError::NoAssemblyTable(model.entry_id().to_string()))?;

    let rows: Vec<_> = rows
        .iter()
        .filter(|row| row.assembly_id == assembly_id)
        .collect();
    if rows.is_empty() {
        return Err(AssemblyError::UnknownAssembly(assembly_id.to_string()));
    }

    let mut builder = StructureBuilder::new(format!("{} assembly {}", model.entry_id(), assembly_id));
    let mut operator_count = 0usize;

    for row in rows {
        let groups = parse_oper_expression(&row.oper_expression)?;
        for combo in operator_combinations(&groups) {
            let mut matrix = identity_mat4();
            for oper_id in combo.iter() {
                matrix = left_multiply_mat4(&matrix, lookup_matrix(model, assembly_id, oper_id)?);
            }
            operator_count += 1;
            let operator = Operator::new(
                format!("ASM_{}", operator_count),
                combination_id(&combo),
                matrix,
            )
            .with_assembly(assembly_id);

            for asym in &row.asym_id_list {
                let (Some(elements), Some(ordinal)) =
                    (model.chain_elements(asym), model.chain_ordinal(asym))
                else {
                    log::debug!("Assembly {} lists missing chain {}", assembly_id, asym);
                    continue;
                };
                builder.add_unit(model.clone(), elements, operator.clone(), ordinal as u32);
            }
        }
    }

    log::debug!(
        "Built assembly {} of {}: {} operators, {} units",
        assembly_id,
        model.entry_id(),
        operator_count,
        builder.unit_count()
    );
    Ok(builder.build())
}

fn lookup_matrix<'m>(model: &'m Model, assembly_id: &str, oper_id: &str) -> AssemblyResult<&'m Mat4> {
    model
        .struct_oper(oper_id)
        .map(|op| &op.matrix)
        .ok_or_else(|| AssemblyError::UnknownOperator {
            assembly_id: assembly_id.to_string(),
            oper_id: oper_id.to_string(),
        })
}
