//! Type-level markers for the directionality of graph edges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

pub trait EdgeType: private::Sealed + 'static {
    fn is_directed() -> bool;
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
}
