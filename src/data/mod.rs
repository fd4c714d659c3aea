/// Data layer: the roster and the queries that run over it.
///
/// Architecture:
/// ```text
///   Roster::starter()
///        │
///        ▼
///   ┌──────────┐
///   │  model   │  Character, Roster
///   └──────────┘
///        │
///        ├──► project    one value per character
///        ├──► aggregate  fold to a total or a count map
///        ├──► filter     subsequence by predicate
///        ├──► sort       reordered copies / chained in place
///        └──► check      every / some
/// ```
///
/// Every query reads the roster it is given and returns fresh values; none
/// of them keep a link back to the roster.

pub mod aggregate;
pub mod check;
pub mod filter;
pub mod model;
pub mod project;
pub mod sort;
