//! Position in the displayed person list.

use std::fmt::{Display, Formatter};

/// List index stored zero-based; users see it one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero, which is not a valid one-based position.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn one_based_conversion_rejects_zero() {
        assert!(Index::from_one_based(0).is_none());
        let first = Index::from_one_based(1).unwrap();
        assert_eq!(first.zero_based(), 0);
        assert_eq!(first.to_string(), "1");
    }
}
