use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`WorldDb::stats`](crate::WorldDb::stats). Language and
/// currency totals count distinct names and codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub continents: usize,
    pub languages: usize,
    pub currencies: usize,
}
