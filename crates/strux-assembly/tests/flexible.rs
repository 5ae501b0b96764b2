//! Flexible assembly over a two-chain model

use std::sync::Arc;

use lin_alg::f32::Vec3;
use strux_assembly::{assemble, AssemblyError, FlexibleSelection, TargetColor};
use strux_color::Color;
use strux_mol::{AtomBuilder, Model, ModelBuilder, Structure};
use strux_select::SelectError;

/// Chain A: residues 1..=20, chain B: residues 1..=5; one atom per residue at x = seq
fn model() -> Arc<Model> {
    let mut builder = ModelBuilder::new("1ABC");
    for (asym, count) in [("A", 20), ("B", 5)] {
        for seq in 1..=count {
            builder = builder.add_atom(
                AtomBuilder::new().name("CA").asym_id(asym).comp_id("ALA").seq_id(seq).build(),
                Vec3::new(seq as f32, 0.0, 0.0),
            );
        }
    }
    Arc::new(builder.build().unwrap())
}

fn shift_x(dx: f32) -> [f32; 16] {
    // column-major: translation in the last column
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        dx, 0.0, 0.0, 1.0,
    ]
}

#[test]
fn split_chain_forms_one_chain_group() {
    let base = Structure::from_model(&model());
    let selections = [
        FlexibleSelection::chain("A").with_range(1, 10),
        FlexibleSelection::chain("B"),
        FlexibleSelection::chain("A").with_range(11, 20).with_matrix(shift_x(100.0)),
    ];
    let out = assemble(&base, &selections, &[]).unwrap();
    let s = &out.structure;

    assert_eq!(s.label(), "1ABC");
    assert_eq!(s.unit_count(), 3);
    // grouped by chain in first-seen order
    assert_eq!(s.label_asym_ids(), vec!["A", "B"]);
    assert_eq!(s.units()[0].label_asym_id(), "A");
    assert_eq!(s.units()[1].label_asym_id(), "A");
    assert_eq!(s.units()[2].label_asym_id(), "B");

    let groups = s.chain_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1].len(), 1);

    assert_eq!(s.units()[0].len(), 10);
    assert_eq!(s.units()[1].len(), 10);
    assert!(out.skipped.is_empty());
}

#[test]
fn untransformed_pieces_keep_input_order() {
    let base = Structure::from_model(&model());
    let selections = [
        FlexibleSelection::chain("A").with_range(11, 20),
        FlexibleSelection::chain("A").with_range(1, 10),
    ];
    let out = assemble(&base, &selections, &[]).unwrap();
    let s = &out.structure;

    assert_eq!(s.unit_count(), 2);
    assert_eq!(s.chain_groups().len(), 1);
    assert_eq!(s.units()[0].atom(0).and_then(|a| a.label_seq_id), Some(11));
    assert_eq!(s.units()[1].atom(0).and_then(|a| a.label_seq_id), Some(1));
    // no transform: coordinates come straight from the base
    let p = s.units()[0].position(0).unwrap();
    assert!((p.x - 11.0).abs() < 1e-6);
}

#[test]
fn non_rigid_transform_applied_as_given() {
    let base = Structure::from_model(&model());
    let mut scale = shift_x(0.0);
    scale[0] = 2.0;
    let selections = [FlexibleSelection::chain("B").with_range(3, 3).with_matrix(scale)];
    let out = assemble(&base, &selections, &[]).unwrap();
    let p = out.structure.units()[0].position(0).unwrap();
    assert!((p.x - 6.0).abs() < 1e-5);
}

#[test]
fn transform_applied_exactly_once() {
    let base = Structure::from_model(&model());
    let selections = [FlexibleSelection::chain("A").with_range(11, 11).with_matrix(shift_x(100.0))];
    let out = assemble(&base, &selections, &[]).unwrap();
    let p = out.structure.units()[0].position(0).unwrap();
    assert!((p.x - 111.0).abs() < 1e-4);
}

#[test]
fn empty_selection_skipped() {
    let base = Structure::from_model(&model());
    let selections = [
        FlexibleSelection::chain("Z"),
        FlexibleSelection::chain("B").with_range(50, 60),
        FlexibleSelection::chain("B").with_range(1, 2),
    ];
    let out = assemble(&base, &selections, &[]).unwrap();
    assert_eq!(out.skipped, vec![0, 1]);
    assert_eq!(out.structure.unit_count(), 1);
    assert_eq!(out.structure.element_count(), 2);
}

#[test]
fn later_colors_win() {
    let base = Structure::from_model(&model());
    let colors = [
        TargetColor::new("A", Color::RED).with_range(10, 12),
        TargetColor::new("A", Color::BLUE).with_range(11, 11),
        TargetColor::new("B", Color::GREEN),
    ];
    let out = assemble(&base, &[FlexibleSelection::chain("A")], &colors).unwrap();
    assert_eq!(out.colors.get("A", 10), Some(Color::RED));
    assert_eq!(out.colors.get("A", 11), Some(Color::BLUE));
    assert_eq!(out.colors.get("A", 12), Some(Color::RED));
    assert_eq!(out.colors.get("A", 13), None);
    // whole-chain color covers every residue of B
    assert_eq!(out.colors.chain("B").map(|c| c.len()), Some(5));
}

#[test]
fn descending_range_rejected() {
    let base = Structure::from_model(&model());
    let err = assemble(&base, &[FlexibleSelection::chain("A").with_range(9, 5)], &[]).unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::Select(SelectError::InvalidRange { beg: 9, end: 5 })
    ));
}

#[test]
fn oversized_ranges_rejected() {
    let base = Structure::from_model(&model());
    let err = assemble(&base, &[FlexibleSelection::chain("A").with_range(1, 2_000_000_000)], &[])
        .unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::Select(SelectError::RangeTooLarge { beg: 1, end: 2_000_000_000 })
    ));

    let colors = [TargetColor::new("A", Color::RED).with_range(1, 2_000_000_000)];
    let err = assemble(&base, &[FlexibleSelection::chain("A")], &colors).unwrap_err();
    assert!(matches!(err, AssemblyError::Select(SelectError::RangeTooLarge { .. })));
}

#[test]
fn no_selections_gives_empty_structure() {
    let base = Structure::from_model(&model());
    let out = assemble(&base, &[], &[]).unwrap();
    assert!(out.structure.is_empty());
    assert!(out.colors.is_empty());
}
