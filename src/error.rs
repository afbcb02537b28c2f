use strum::{Display, EnumDiscriminants, IntoStaticStr, VariantNames};
use thiserror::Error;

/// Every way an operation on a [`DynamicArray`](crate::DynamicArray) can be refused.
///
/// A failed operation leaves the array exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Display, IntoStaticStr, VariantNames, Hash))]
pub enum ArrayError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfRange { from: usize, to: usize, len: usize },

    #[error("{operation} called on an empty array")]
    EmptyContainer { operation: &'static str },

    #[error("no element at position {position}: iteration has ended")]
    NoSuchElement { position: usize },
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }

    /// True for both the single-index and the range flavour of a bounds violation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::IndexOutOfRange | ErrorKind::RangeOutOfRange
        )
    }
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;

#[cfg(test)]
mod test {
    use super::*;
    use strum::VariantNames;

    #[test]
    fn messages() {
        let errors = [
            ArrayError::IndexOutOfRange { index: 7, len: 3 },
            ArrayError::RangeOutOfRange {
                from: 2,
                to: 1,
                len: 4,
            },
            ArrayError::EmptyContainer {
                operation: "remove_first",
            },
            ArrayError::NoSuchElement { position: 4 },
        ];
        let rendered: Vec<_> = errors.iter().map(ToString::to_string).collect();
        insta::assert_compact_debug_snapshot!(rendered, @r#"["index 7 out of bounds for length 3", "range 2..1 out of bounds for length 4", "remove_first called on an empty array", "no element at position 4: iteration has ended"]"#);
    }

    #[test]
    fn kinds() {
        assert_eq!(
            ErrorKind::VARIANTS,
            [
                "IndexOutOfRange",
                "RangeOutOfRange",
                "EmptyContainer",
                "NoSuchElement"
            ]
        );

        let range = ArrayError::RangeOutOfRange {
            from: 0,
            to: 9,
            len: 2,
        };
        assert_eq!(range.kind(), ErrorKind::RangeOutOfRange);
        assert!(range.is_out_of_range());
        assert!(ArrayError::IndexOutOfRange { index: 0, len: 0 }.is_out_of_range());
        assert!(!ArrayError::NoSuchElement { position: 0 }.is_out_of_range());

        let name: &str = ArrayError::EmptyContainer { operation: "first" }
            .kind()
            .into();
        assert_eq!(name, "EmptyContainer");
    }
}
