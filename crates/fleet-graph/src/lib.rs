//! `fleet-graph` — adjacency graph, paths, and candidate-path enumeration.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `Graph` (ordered adjacency lists), `GraphBuilder`            |
//! | [`path`]   | `Path` — non-empty node sequence                             |
//! | [`finder`] | `PathFinder` trait, `BfsPathFinder`, `enumerate_paths`       |
//! | [`grid`]   | `GridLayout` — row-major grid numbering and grid graphs      |
//! | [`parse`]  | `parse_adjacency`, `load_adjacency` (`1: [2, 3]` text form)  |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Path`.                 |

pub mod error;
pub mod finder;
pub mod graph;
pub mod grid;
pub mod parse;
pub mod path;


pub use error::{GraphError, GraphResult};
pub use finder::{BfsPathFinder, PathFinder, enumerate_paths};
pub use graph::{Graph, GraphBuilder};
pub use grid::GridLayout;
pub use parse::{load_adjacency, parse_adjacency};
pub use path::Path;
