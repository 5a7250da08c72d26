//! Element catalog: the compiled-in table of elements an atom can be made of.

use serde::Serialize;

/// An immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u32,
    /// Display color as RGB bytes.
    pub color: [u8; 3],
}

impl Element {
    const fn new(name: &'static str, symbol: &'static str, atomic_number: u32, color: [u8; 3]) -> Self {
        Self { name, symbol, atomic_number, color }
    }
}

/// Elements offered by the side panel, in cycling order.
pub const BUILTIN_ELEMENTS: [Element; 10] = [
    Element::new("Hydrogen", "H", 1, [200, 200, 255]),
    Element::new("Helium", "He", 2, [255, 200, 200]),
    Element::new("Lithium", "Li", 3, [200, 255, 200]),
    Element::new("Beryllium", "Be", 4, [200, 255, 255]),
    Element::new("Boron", "B", 5, [255, 220, 180]),
    Element::new("Carbon", "C", 6, [180, 180, 180]),
    Element::new("Nitrogen", "N", 7, [150, 200, 255]),
    Element::new("Oxygen", "O", 8, [255, 120, 120]),
    Element::new("Sodium", "Na", 11, [255, 255, 120]),
    Element::new("Chlorine", "Cl", 17, [120, 255, 120]),
];

/// Index of Hydrogen in the builtin table.
pub const HYDROGEN: usize = 0;
/// Index of Oxygen in the builtin table.
pub const OXYGEN: usize = 7;

/// Read-only, cyclically indexed list of elements.
#[derive(Debug, Clone, Copy)]
pub struct ElementCatalog {
    elements: &'static [Element],
}

impl ElementCatalog {
    pub fn builtin() -> Self {
        Self { elements: &BUILTIN_ELEMENTS }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Element> {
        self.elements.get(index)
    }

    /// Element at `index`, wrapped into range.
    pub fn element(&self, index: usize) -> &'static Element {
        &self.elements[index % self.elements.len()]
    }

    pub fn next(&self, index: usize) -> usize {
        (index % self.len() + 1) % self.len()
    }

    pub fn previous(&self, index: usize) -> usize {
        (index % self.len() + self.len() - 1) % self.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Element> {
        self.elements.iter()
    }
}

impl Default for ElementCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
