use itertools::Itertools;

use crate::math::OrderedSet;

/// The label of a transition. Either a concrete input character or the reserved empty symbol,
/// which marks an epsilon transition that is taken without consuming input.
///
/// Input words are sequences of `char`s, so [`Symbol::Empty`] can never be confused with a
/// symbol that is actually read.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Symbol {
    /// The empty word, an epsilon/lambda transition.
    Empty,
    /// A single input character.
    Char(char),
}

impl Symbol {
    /// Returns true if `self` is [`Symbol::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Symbol::Empty)
    }

    /// Returns the character that is consumed, or `None` for the empty symbol.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Empty => None,
            Symbol::Char(c) => Some(*c),
        }
    }

    /// Returns true if reading `c` is matched by `self`.
    pub fn matches(&self, c: char) -> bool {
        *self == Symbol::Char(c)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::Char(value)
    }
}

impl From<Option<char>> for Symbol {
    fn from(value: Option<char>) -> Self {
        value.map_or(Symbol::Empty, Symbol::Char)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Empty => write!(f, "ε"),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}

/// The input alphabet of an automaton, a set of characters that iterates in ascending order.
/// The empty symbol is never part of an alphabet.
#[derive(Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Alphabet(OrderedSet<char>);

impl Alphabet {
    /// Creates a new [`Alphabet`] of the given size. The symbols are just the first `size` letters
    /// of the latin alphabet, i.e. 'a' to 'z'. Sizes above 26 are clamped to 26.
    pub fn of_size(size: usize) -> Self {
        Self(('a'..='z').take(size).collect())
    }

    /// Returns an iterator over the symbols in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Adds a symbol, returns true if it was not present before.
    pub fn insert(&mut self, symbol: char) -> bool {
        self.0.insert(symbol)
    }

    /// Returns true if every character of `word` belongs to the alphabet.
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<char> for Alphabet {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.universe().join(", "))
    }
}
