//! Named colour table.

use std::collections::HashMap;

use super::Colour;

/// Colours known by name, built once per process and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NamedColours {
    colours: HashMap<String, Colour>,
}

const BUILTIN: &[(&str, [u8; 3])] = &[
    ("looksy-black", [0, 0, 0]),
    ("looksy-white", [255, 255, 255]),
    ("looksy-lightgray", [204, 204, 204]),
    ("looksy-red", [255, 0, 0]),
    ("looksy-pink", [255, 102, 179]),
    ("looksy-darkred", [128, 0, 0]),
    ("looksy-orange", [255, 165, 0]),
    ("looksy-lightred", [255, 102, 102]),
    ("looksy-orangered", [255, 64, 0]),
    ("looksy-yellow", [255, 255, 0]),
    ("looksy-lightyellow", [255, 255, 128]),
    ("looksy-gold", [255, 201, 0]),
    ("looksy-darkgreen", [0, 128, 0]),
    ("looksy-green", [0, 255, 0]),
    ("looksy-lightgreen", [176, 255, 176]),
    ("looksy-blue", [0, 0, 255]),
    ("looksy-blueviolet", [104, 103, 253]),
    ("looksy-lightcyan", [128, 255, 255]),
    ("looksy-purple", [128, 0, 128]),
    ("looksy-violet", [129, 1, 255]),
    ("looksy-magenta", [255, 7, 255]),
    ("black", [0, 0, 0]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("darkred", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("orange", [255, 165, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("darkgreen", [0, 128, 0]),
    ("green", [0, 255, 0]),
    ("teal", [0, 128, 128]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
];

impl NamedColours {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin table.
    pub fn builtin() -> Self {
        let colours = BUILTIN
            .iter()
            .map(|(name, rgb)| (name.to_string(), Colour::from(*rgb)))
            .collect();
        Self { colours }
    }

    /// Look up a colour by exact name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.colours.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Add colours that are not already defined. Existing names are kept.
    pub fn extend_missing<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (String, Colour)>,
    {
        for (name, colour) in extra {
            self.colours.entry(name).or_insert(colour);
        }
    }
}
