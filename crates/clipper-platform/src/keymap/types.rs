use std::fmt;

use serde::{Deserialize, Serialize};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_META: u8 = 0b1000;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Ctrl key on all platforms.
    Ctrl,
    /// Alt key (Option on macOS).
    Alt,
    /// Shift key.
    Shift,
    /// Cmd on macOS, Win on Windows, Super on Linux.
    Meta,
}

impl Modifier {
    /// Canonical accelerator order.
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Meta];

    fn bit(self) -> u8 {
        match self {
            Modifier::Ctrl => MOD_CTRL,
            Modifier::Alt => MOD_ALT,
            Modifier::Shift => MOD_SHIFT,
            Modifier::Meta => MOD_META,
        }
    }

    /// Lowercase token used in accelerator strings.
    pub fn accelerator_token(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
            Modifier::Meta => "super",
        }
    }
}

/// An unordered set of modifiers.
///
/// Stored as a bitmask (Ctrl=1, Alt=2, Shift=4, Meta=8) so that two chords
/// compare equal regardless of the order their modifiers were written in.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Modifier>", from = "Vec<Modifier>")]
pub struct ModifierSet(u8);

impl ModifierSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in canonical order (Ctrl, Alt, Shift, Meta).
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::empty();
        for m in iter {
            set.insert(m);
        }
        set
    }
}

impl From<Vec<Modifier>> for ModifierSet {
    fn from(mods: Vec<Modifier>) -> Self {
        mods.into_iter().collect()
    }
}

impl From<ModifierSet> for Vec<Modifier> {
    fn from(set: ModifierSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A decoded shortcut: a set of modifiers and exactly one key.
///
/// `key` holds the logical key (a glyph such as `"a"`, `","` or a named key
/// such as `"Enter"`, `"ArrowLeft"`, `"F5"`). It is empty only for a preview
/// built from a capture that has no key yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub modifiers: ModifierSet,
    pub key: String,
}

impl Chord {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: impl Into<String>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key: key.into(),
        }
    }

    /// Whether this chord may be registered as a global shortcut: at least
    /// one modifier and a key.
    pub fn is_registrable(&self) -> bool {
        !self.modifiers.is_empty() && !self.key.is_empty()
    }
}
