//! Graph storages.

pub mod adj_list;

#[doc(inline)]
pub use self::adj_list::{AdjList, Digraph, UndirectedGraph};
