use std::fmt;

use crate::Scalar;

/// Inferred kind of one column, derived from its non-null cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
    Mixed,
    Empty,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Integer => "int",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "bool",
            ColumnKind::Text => "str",
            ColumnKind::Mixed => "mixed",
            ColumnKind::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

/// Infer the kind of a column. Nulls are skipped; a column that mixes
/// integers and floats is a float column, any other mixture is `Mixed`.
pub fn infer_kind<'a>(values: impl Iterator<Item = &'a Scalar>) -> ColumnKind {
    let mut saw_int = false;
    let mut saw_float = false;
    let mut saw_bool = false;
    let mut saw_text = false;

    for value in values {
        match value {
            Scalar::Null => {}
            Scalar::Int(_) => saw_int = true,
            Scalar::Float(_) => saw_float = true,
            Scalar::Bool(_) => saw_bool = true,
            Scalar::Text(_) => saw_text = true,
        }
    }

    match (saw_int, saw_float, saw_bool, saw_text) {
        (false, false, false, false) => ColumnKind::Empty,
        (_, true, false, false) => ColumnKind::Float,
        (true, false, false, false) => ColumnKind::Integer,
        (false, false, true, false) => ColumnKind::Boolean,
        (false, false, false, true) => ColumnKind::Text,
        _ => ColumnKind::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(values: &[Scalar]) -> ColumnKind {
        infer_kind(values.iter())
    }

    #[test]
    fn test_integer_column() {
        assert_eq!(
            kind_of(&[Scalar::Int(120), Scalar::Null, Scalar::Int(132)]),
            ColumnKind::Integer
        );
    }

    #[test]
    fn test_ints_and_floats_promote_to_float() {
        assert_eq!(
            kind_of(&[Scalar::Int(120), Scalar::Float(35.5)]),
            ColumnKind::Float
        );
    }

    #[test]
    fn test_text_column() {
        assert_eq!(
            kind_of(&[Scalar::Text("Ford".to_string()), Scalar::Null]),
            ColumnKind::Text
        );
    }

    #[test]
    fn test_boolean_column() {
        assert_eq!(
            kind_of(&[Scalar::Bool(true), Scalar::Bool(false)]),
            ColumnKind::Boolean
        );
    }

    #[test]
    fn test_mixed_column() {
        assert_eq!(
            kind_of(&[Scalar::Text("Ford".to_string()), Scalar::Int(120)]),
            ColumnKind::Mixed
        );
    }

    #[test]
    fn test_all_null_column_is_empty() {
        assert_eq!(kind_of(&[Scalar::Null, Scalar::Null]), ColumnKind::Empty);
    }
}
