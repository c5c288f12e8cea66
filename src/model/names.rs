use serde::{Deserialize, Serialize};

/// Icon names in sheet order (left to right, top to bottom).
pub const DEFAULT_ICON_NAMES: [&str; 21] = [
    // Row 1
    "fox-head",
    "compass",
    "map",
    "signpost",
    "plus",
    // Row 2
    "gear",
    "tree",
    "mountains",
    "campfire",
    "lantern",
    // Row 3
    "tent",
    "bridge",
    "paw-print",
    "hiking-boot",
    "water-bottle",
    // Row 4
    "camera",
    "backpack",
    "shop",
    "bicycle",
    "trophy",
    // Row 5
    "trailtowns-logo",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconNameTable {
    names: Vec<String>,
}

impl Default for IconNameTable {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_NAMES.iter().map(|s| s.to_string()).collect())
    }
}

impl IconNameTable {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for IconNameTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
