//! Alphabet primitives shared by scoring, rounds and reveal effects.
//!
//! Guesses are restricted to the 26 ASCII letters. [`LetterSet`] stores a set
//! of letters as a 26-bit mask, which keeps "revealed", "guessed" and
//! "phrase letters" cheap to copy and compare.

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

/// One of the 26 guessable letters, always upper-case.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Converts an ASCII letter of either case. Anything else is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let index = (c.to_ascii_uppercase() as u8) - b'A';
        Self::iter().nth(index as usize)
    }

    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Zero-based alphabet position (`A` = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_vowel(self) -> bool {
        matches!(self, Self::A | Self::E | Self::I | Self::O | Self::U)
    }

    pub const fn class(self) -> LetterClass {
        if self.is_vowel() {
            LetterClass::Vowel
        } else {
            LetterClass::Consonant
        }
    }
}

/// Vowel/consonant split used by reveal upgrades and consumables.
///
/// `Y` counts as a consonant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LetterClass {
    Consonant,
    Vowel,
}

impl LetterClass {
    /// Every letter belonging to this class.
    pub fn letters(self) -> LetterSet {
        match self {
            Self::Vowel => LetterSet::vowels(),
            Self::Consonant => LetterSet::vowels().complement(),
        }
    }
}

bitflags::bitflags! {
    /// Set of letters backed by a 26-bit mask (bit 0 = `A`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LetterSet: u32 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
        const E = 1 << 4;
        const F = 1 << 5;
        const G = 1 << 6;
        const H = 1 << 7;
        const I = 1 << 8;
        const J = 1 << 9;
        const K = 1 << 10;
        const L = 1 << 11;
        const M = 1 << 12;
        const N = 1 << 13;
        const O = 1 << 14;
        const P = 1 << 15;
        const Q = 1 << 16;
        const R = 1 << 17;
        const S = 1 << 18;
        const T = 1 << 19;
        const U = 1 << 20;
        const V = 1 << 21;
        const W = 1 << 22;
        const X = 1 << 23;
        const Y = 1 << 24;
        const Z = 1 << 25;
    }
}

impl From<Letter> for LetterSet {
    fn from(letter: Letter) -> Self {
        Self::from_bits_retain(1 << letter.index())
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, letter| set | letter.into())
    }
}

impl LetterSet {
    pub fn vowels() -> Self {
        Self::A | Self::E | Self::I | Self::O | Self::U
    }

    /// Distinct letters occurring in `text`, case-insensitive. Non-letters are ignored.
    pub fn from_text(text: &str) -> Self {
        text.chars().filter_map(Letter::from_char).collect()
    }

    pub fn has(&self, letter: Letter) -> bool {
        self.contains(letter.into())
    }

    /// Adds a letter, returning `true` if it was not already present.
    pub fn add(&mut self, letter: Letter) -> bool {
        let newly_added = !self.has(letter);
        self.insert(letter.into());
        newly_added
    }

    pub fn count(&self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Letters in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::iter().filter(|letter| self.has(*letter))
    }

    /// Collects the members in alphabetical order without allocating.
    pub fn to_array(&self) -> ArrayVec<Letter, 26> {
        self.letters().collect()
    }

    pub fn to_text(&self) -> String {
        self.letters().map(Letter::as_char).collect()
    }
}

// Serialized as a plain string of letters ("ING") so config files stay readable.
#[cfg(feature = "serde")]
impl serde::Serialize for LetterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LetterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        let mut set = Self::empty();
        for c in raw.chars().filter(|c| !c.is_whitespace()) {
            let letter = Letter::from_char(c).ok_or_else(|| {
                serde::de::Error::custom(format!("'{c}' is not a letter in letter set \"{raw}\""))
            })?;
            set.add(letter);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_both_cases() {
        assert_eq!(Letter::from_char('a'), Some(Letter::A));
        assert_eq!(Letter::from_char('Z'), Some(Letter::Z));
        assert_eq!(Letter::from_char('q').map(Letter::as_char), Some('Q'));
        assert_eq!(Letter::from_char('1'), None);
        assert_eq!(Letter::from_char(' '), None);
        assert_eq!(Letter::from_char('é'), None);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("k".parse::<Letter>().ok(), Some(Letter::K));
        assert_eq!(Letter::M.to_string(), "M");
    }

    #[test]
    fn classes_partition_the_alphabet() {
        let vowels = LetterClass::Vowel.letters();
        let consonants = LetterClass::Consonant.letters();
        assert_eq!(vowels.count(), 5);
        assert_eq!(consonants.count(), 21);
        assert!(vowels.intersection(consonants).is_empty());
        assert!(vowels.union(consonants).is_all());
        assert_eq!(Letter::Y.class(), LetterClass::Consonant);
    }

    #[test]
    fn set_from_text_ignores_case_and_symbols() {
        let set = LetterSet::from_text("Hello, World!");
        assert_eq!(set.to_text(), "DEHLORW");
        assert_eq!(set.count(), 7);
    }

    #[test]
    fn add_reports_new_members() {
        let mut set = LetterSet::empty();
        assert!(set.add(Letter::Q));
        assert!(!set.add(Letter::Q));
        assert_eq!(set.to_array().as_slice(), &[Letter::Q]);
    }
}
