//! Selection expression tree
//!
//! [`Expression`] is the compiled form of a target: atom-group tests with a
//! chain clause and a residue clause, category queries, and set combinators.
//! [`Predicate`] is the boolean test applied to each atom.

use std::fmt;

use strux_mol::MoleculeCategory;

/// Atom, residue or unit property a predicate can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    AuthSeqId,
    LabelSeqId,
    LabelCompId,
    LabelAsymId,
    AuthAsymId,
    EntityId,
    /// Name of the unit operator
    OperatorName,
    /// Struct oper id of the unit operator
    StructOperId,
}

impl Property {
    /// Short keyword used in the display form
    pub fn keyword(&self) -> &'static str {
        match self {
            Property::AuthSeqId => "resi",
            Property::LabelSeqId => "label_seq_id",
            Property::LabelCompId => "resn",
            Property::LabelAsymId => "chain",
            Property::AuthAsymId => "auth_chain",
            Property::EntityId => "entity",
            Property::OperatorName => "operator",
            Property::StructOperId => "struct_oper",
        }
    }
}

/// A literal value compared against a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i32),
    Str(String),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Boolean test over one atom in the context of its unit
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(Property, Value),
    OneOf(Property, Vec<Value>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn eq(property: Property, value: impl Into<Value>) -> Self {
        Predicate::Eq(property, value.into())
    }

    pub fn one_of<V: Into<Value>>(property: Property, values: impl IntoIterator<Item = V>) -> Self {
        Predicate::OneOf(property, values.into_iter().map(Into::into).collect())
    }

    /// Conjunction, flattening nested ANDs
    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::And(mut l), Predicate::And(r)) => {
                l.extend(r);
                Predicate::And(l)
            }
            (Predicate::And(mut l), r) => {
                l.push(r);
                Predicate::And(l)
            }
            (l, Predicate::And(mut r)) => {
                r.insert(0, l);
                Predicate::And(r)
            }
            (l, r) => Predicate::And(vec![l, r]),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Or(mut l), r) => {
                l.push(r);
                Predicate::Or(l)
            }
            (l, r) => Predicate::Or(vec![l, r]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Combine an optional clause with another predicate
    pub fn and_opt(clause: Option<Predicate>, other: Predicate) -> Predicate {
        match clause {
            Some(p) => p.and(other),
            None => other,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Eq(p, v) => write!(f, "{} {}", p.keyword(), v),
            Predicate::OneOf(p, vs) => {
                write!(f, "{} ", p.keyword())?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
            Predicate::And(ps) => write_joined(f, ps, " and "),
            Predicate::Or(ps) => write_joined(f, ps, " or "),
            Predicate::Not(p) => write!(f, "not ({})", p),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, ")")
}

/// Compiled selection expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Every element
    All,
    /// No element
    Empty,
    /// Atoms passing both clauses; a missing clause passes everything
    AtomGroups {
        chain_test: Option<Predicate>,
        residue_test: Option<Predicate>,
    },
    /// Atoms whose residue falls in a molecule category
    Category(MoleculeCategory),
    /// Union
    Merge(Vec<Expression>),
    /// Intersection
    Intersect(Vec<Expression>),
    /// Whole chains holding at least one element of the inner expression
    ExtendToChain(Box<Expression>),
}

impl Expression {
    /// Atom groups with a single chain test
    pub fn chain_test(predicate: Predicate) -> Self {
        Expression::AtomGroups {
            chain_test: Some(predicate),
            residue_test: None,
        }
    }

    pub fn extend_to_chain(inner: Expression) -> Self {
        Expression::ExtendToChain(Box::new(inner))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Expression::All)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::All => write!(f, "all"),
            Expression::Empty => write!(f, "none"),
            Expression::AtomGroups {
                chain_test,
                residue_test,
            } => match (chain_test, residue_test) {
                (Some(c), Some(r)) => write!(f, "{} and {}", c, r),
                (Some(c), None) => write!(f, "{}", c),
                (None, Some(r)) => write!(f, "{}", r),
                (None, None) => write!(f, "all"),
            },
            Expression::Category(c) => write!(f, "{}", c),
            Expression::Merge(es) => write_joined(f, es, " or "),
            Expression::Intersect(es) => write_joined(f, es, " and "),
            Expression::ExtendToChain(inner) => write!(f, "bychain ({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_flattens() {
        let p = Predicate::eq(Property::LabelAsymId, "A")
            .and(Predicate::eq(Property::OperatorName, "ASM_1"))
            .and(Predicate::eq(Property::StructOperId, "1"));
        match p {
            Predicate::And(items) => assert_eq!(items.len(), 3),
            other => panic!("expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let expr = Expression::AtomGroups {
            chain_test: Some(Predicate::eq(Property::LabelAsymId, "A")),
            residue_test: Some(Predicate::eq(Property::AuthSeqId, 5)),
        };
        assert_eq!(expr.to_string(), "chain A and resi 5");

        let list = Predicate::one_of(Property::LabelSeqId, [1, 2, 3]);
        assert_eq!(list.to_string(), "label_seq_id 1+2+3");

        let merged = Expression::Merge(vec![
            Expression::chain_test(Predicate::eq(Property::LabelAsymId, "A")),
            Expression::Category(MoleculeCategory::Water),
        ]);
        assert_eq!(merged.to_string(), "(chain A or water)");

        let widened = Expression::extend_to_chain(Expression::AtomGroups {
            chain_test: None,
            residue_test: Some(Predicate::eq(Property::LabelCompId, "HEM")),
        });
        assert_eq!(widened.to_string(), "bychain (resn HEM)");
    }

    #[test]
    fn test_and_opt() {
        let p = Predicate::and_opt(None, Predicate::eq(Property::LabelCompId, "HEM"));
        assert_eq!(p, Predicate::eq(Property::LabelCompId, "HEM"));
    }
}
