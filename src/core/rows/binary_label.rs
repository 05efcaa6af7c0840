use std::fmt::{Display, Formatter, Result};

/// A 0/1 class value. `Positive` (1) is the class scored by precision and recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryLabel {
    Negative,
    Positive,
}

impl BinaryLabel {
    #[inline]
    pub fn as_i32(self) -> i32 {
        match self {
            BinaryLabel::Negative => 0,
            BinaryLabel::Positive => 1,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self == BinaryLabel::Positive
    }
}

impl TryFrom<i32> for BinaryLabel {
    /// The rejected value.
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(BinaryLabel::Negative),
            1 => Ok(BinaryLabel::Positive),
            other => Err(other),
        }
    }
}

impl Display for BinaryLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_i32())
    }
}
