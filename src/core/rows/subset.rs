use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;
use strum_macros::EnumString;

/// Evaluation partition a reference row belongs to.
///
/// Matching is exact and case-sensitive; anything that is not `public` or
/// `private` is kept verbatim in `Other` and ends up in neither view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum Subset {
    #[strum(serialize = "public")]
    Public,
    #[strum(serialize = "private")]
    Private,
    #[strum(default)]
    Other(String),
}

impl Subset {
    pub fn parse(cell: &str) -> Self {
        Subset::from_str(cell).unwrap_or_else(|_| Subset::Other(cell.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Subset::Public => "public",
            Subset::Private => "private",
            Subset::Other(s) => s,
        }
    }
}

impl Display for Subset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}
