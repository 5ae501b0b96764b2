//! STRUX structural data model
//!
//! This crate holds the in-memory model that selections and assemblies are
//! computed over:
//!
//! - [`Atom`] - one `atom_site` row, with label and auth identifiers
//! - [`Model`] - atoms, coordinates, entities and the symmetry tables
//!   (`pdbx_struct_oper_list`, `pdbx_struct_assembly_gen`)
//! - [`Unit`] - one chain of a model placed by an [`Operator`]
//! - [`Structure`] - an ordered list of units, grouped into chain groups
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strux_mol::{AtomBuilder, ModelBuilder, Structure};
//! use lin_alg::f32::Vec3;
//!
//! let model = ModelBuilder::new("1ABC")
//!     .add_atom(
//!         AtomBuilder::new().name("CA").asym_id("A").comp_id("GLY").seq_id(1).build(),
//!         Vec3::new(0.0, 0.0, 0.0),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let structure = Structure::from_model(&Arc::new(model));
//! assert_eq!(structure.unit_count(), 1);
//! ```

mod atom;
mod coordset;
mod entity;
mod error;
mod index;
mod iterator;
pub mod linalg;
mod model;
mod residue;
mod structure;
mod unit;

pub use atom::{Atom, AtomBuilder};
pub use coordset::CoordSet;
pub use entity::{Entity, EntityKind};
pub use error::{MolError, MolResult};
pub use index::{AtomIndex, UnitId, INVALID_INDEX};
pub use iterator::{ResidueIterator, ResidueView};
pub use model::{AssemblyGen, ChainInfo, Model, ModelBuilder, StructOper};
pub use residue::{
    classify_component, is_amino_acid, is_ion, is_lipid, is_nucleotide, is_standard_amino_acid,
    is_water, MoleculeCategory,
};
pub use structure::{Structure, StructureBuilder};
pub use unit::{Operator, Unit, DEFAULT_STRUCT_OPER_ID, IDENTITY_OPERATOR_NAME};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::atom::{Atom, AtomBuilder};
    pub use crate::entity::{Entity, EntityKind};
    pub use crate::error::{MolError, MolResult};
    pub use crate::index::{AtomIndex, UnitId};
    pub use crate::model::{AssemblyGen, Model, ModelBuilder};
    pub use crate::residue::MoleculeCategory;
    pub use crate::structure::{Structure, StructureBuilder};
    pub use crate::unit::{Operator, Unit};
}
