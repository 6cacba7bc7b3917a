use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// A graph vertex identified by its key and carrying an opaque payload.
///
/// Two vertices are considered the same vertex if and only if their keys are
/// equal. The payload is never consulted by any algorithm and is only handed
/// back to the caller.
///
/// Both the key and the payload are reference counted, so cloning a vertex is
/// cheap and does not require `V: Clone`. This allows analyses to return owned
/// sequences of vertices that stay valid after the graph has changed.
///
/// # Examples
///
/// ```
/// use keygraph::core::Vertex;
///
/// let a = Vertex::new("a", 1);
/// let b = Vertex::new("a", 2);
///
/// // Identity is determined by the key only.
/// assert_eq!(a, b);
/// assert_eq!(a.key(), "a");
/// assert_eq!(*b.value(), 2);
/// ```
pub struct Vertex<V> {
    key: Rc<str>,
    value: Rc<V>,
}

/// A pair of vertices, `(from, to)` for directed edges.
pub type VerticesPair<V> = (Vertex<V>, Vertex<V>);

impl<V> Vertex<V> {
    /// Creates a new vertex with given key and payload.
    pub fn new(key: impl Into<Rc<str>>, value: V) -> Self {
        Self {
            key: key.into(),
            value: Rc::new(value),
        }
    }

    /// Returns the key of the vertex.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the payload of the vertex.
    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn shared_key(&self) -> Rc<str> {
        Rc::clone(&self.key)
    }
}

impl Vertex<String> {
    /// Creates a vertex whose payload is its own key.
    pub fn from_key(key: impl AsRef<str>) -> Self {
        let key: Rc<str> = Rc::from(key.as_ref());
        Self {
            value: Rc::new(key.to_string()),
            key,
        }
    }
}

impl<V> Clone for Vertex<V> {
    fn clone(&self) -> Self {
        Self {
            key: Rc::clone(&self.key),
            value: Rc::clone(&self.value),
        }
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> PartialOrd for Vertex<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Vertex<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<V> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

// Consistent with `Eq` and `Hash` above, so vertices stored in hash sets can be
// looked up by key.
impl<V> Borrow<str> for Vertex<V> {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl<V> AsRef<str> for Vertex<V> {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl<V: fmt::Debug> fmt::Debug for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<V> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identity_by_key() {
        let a = Vertex::new("a", 1);
        let b = Vertex::new(String::from("a"), 2);
        let c = Vertex::new("c", 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn lookup_by_key() {
        let set = [Vertex::new("a", ()), Vertex::new("b", ())]
            .into_iter()
            .collect::<HashSet<_>>();

        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }

    #[test]
    fn from_key_payload() {
        let v = Vertex::from_key("x");
        assert_eq!(v.key(), "x");
        assert_eq!(v.value(), "x");
        assert_eq!(v.to_string(), "x");
    }
}
