use crate::core::rows::{JoinedRow, Subset};

/// Disjoint public and private views over joined rows.
#[derive(Debug, Default)]
pub struct SubsetViews<'a> {
    pub public: Vec<&'a JoinedRow>,
    pub private: Vec<&'a JoinedRow>,
    /// Rows tagged with anything else.
    pub dropped: usize,
}

pub fn split_subsets(rows: &[JoinedRow]) -> SubsetViews<'_> {
    let mut views = SubsetViews::default();
    for row in rows {
        match row.subset {
            Subset::Public => views.public.push(row),
            Subset::Private => views.private.push(row),
            Subset::Other(_) => views.dropped += 1,
        }
    }
    views
}
