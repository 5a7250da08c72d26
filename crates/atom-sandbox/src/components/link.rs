use serde::Serialize;
use crate::api::types::AtomId;

/// A visual interaction between two atoms.
/// Always canonical: `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    pub a: AtomId,
    pub b: AtomId,
}

impl Link {
    /// Canonical link between two distinct atoms. `None` for a self-link.
    pub fn between(x: AtomId, y: AtomId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn touches(&self, id: AtomId) -> bool {
        self.a == id || self.b == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_canonicalizes() {
        let l = Link::between(AtomId(5), AtomId(2)).unwrap();
        assert_eq!(l.a, AtomId(2));
        assert_eq!(l.b, AtomId(5));
        assert_eq!(l, Link::between(AtomId(2), AtomId(5)).unwrap());
    }

    #[test]
    fn self_link_rejected() {
        assert!(Link::between(AtomId(3), AtomId(3)).is_none());
    }

    #[test]
    fn touches_either_end() {
        let l = Link::between(AtomId(1), AtomId(2)).unwrap();
        assert!(l.touches(AtomId(1)));
        assert!(l.touches(AtomId(2)));
        assert!(!l.touches(AtomId(3)));
    }
}
