//! The Morse alphabet and the fixed ITU M.1677 code table.
//!
//! The table is compiled in and immutable. It is handed to the trie builder
//! as plain data so the builder stays a pure function and can be tested with
//! arbitrary tables.

use crate::error::MorseSpectacleError;

/// One of the two Morse primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Number of distinct symbols; sizes the per-node child table.
    pub const COUNT: usize = 2;

    /// Both symbols in display order (dot branches render before dash).
    pub const ALL: [Symbol; Symbol::COUNT] = [Symbol::Dot, Symbol::Dash];

    /// Stable child-slot index for this symbol.
    pub fn index(self) -> usize {
        match self {
            Symbol::Dot => 0,
            Symbol::Dash => 1,
        }
    }

    /// The textual form used in sequences, edge labels and JSON keys.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One row of the code table: a dot/dash sequence and the character it
/// decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub sequence: &'static str,
    pub character: char,
}

impl CodeEntry {
    pub const fn new(sequence: &'static str, character: char) -> Self {
        Self {
            sequence,
            character,
        }
    }
}

/// International Morse code per ITU-R M.1677: letters, digits and
/// punctuation.
pub const ITU_M1677: &[CodeEntry] = &[
    CodeEntry::new(".-", 'A'),
    CodeEntry::new("-...", 'B'),
    CodeEntry::new("-.-.", 'C'),
    CodeEntry::new("-..", 'D'),
    CodeEntry::new(".", 'E'),
    CodeEntry::new("..-.", 'F'),
    CodeEntry::new("--.", 'G'),
    CodeEntry::new("....", 'H'),
    CodeEntry::new("..", 'I'),
    CodeEntry::new(".---", 'J'),
    CodeEntry::new("-.-", 'K'),
    CodeEntry::new(".-..", 'L'),
    CodeEntry::new("--", 'M'),
    CodeEntry::new("-.", 'N'),
    CodeEntry::new("---", 'O'),
    CodeEntry::new(".--.", 'P'),
    CodeEntry::new("--.-", 'Q'),
    CodeEntry::new(".-.", 'R'),
    CodeEntry::new("...", 'S'),
    CodeEntry::new("-", 'T'),
    CodeEntry::new("..-", 'U'),
    CodeEntry::new("...-", 'V'),
    CodeEntry::new(".--", 'W'),
    CodeEntry::new("-..-", 'X'),
    CodeEntry::new("-.--", 'Y'),
    CodeEntry::new("--..", 'Z'),
    CodeEntry::new("-----", '0'),
    CodeEntry::new(".----", '1'),
    CodeEntry::new("..---", '2'),
    CodeEntry::new("...--", '3'),
    CodeEntry::new("....-", '4'),
    CodeEntry::new(".....", '5'),
    CodeEntry::new("-....", '6'),
    CodeEntry::new("--...", '7'),
    CodeEntry::new("---..", '8'),
    CodeEntry::new("----.", '9'),
    CodeEntry::new(".-.-.-", '.'),
    CodeEntry::new("--..--", ','),
    CodeEntry::new("---...", ':'),
    CodeEntry::new("..--..", '?'),
    CodeEntry::new(".----.", '’'),
    CodeEntry::new("-....-", '–'),
    CodeEntry::new("-..-.", '/'),
    CodeEntry::new("-.--.", '('),
    CodeEntry::new("-.--.-", ')'),
    CodeEntry::new(".-..-.", '"'),
    CodeEntry::new("-...-", '='),
    CodeEntry::new(".-.-.", '+'),
    CodeEntry::new(".--.-.", '@'),
];

/// Parse a sequence string into typed symbols.
///
/// Empty sequences are rejected: inserting one would mark the trie root
/// terminal, which the data model forbids.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Symbol>, MorseSpectacleError> {
    if sequence.is_empty() {
        return Err(MorseSpectacleError::InvalidSequence {
            sequence: sequence.to_string(),
            reason: "empty sequence".to_string(),
        });
    }

    sequence
        .chars()
        .map(|ch| {
            Symbol::from_char(ch).ok_or_else(|| MorseSpectacleError::InvalidSequence {
                sequence: sequence.to_string(),
                reason: format!("unrecognized symbol '{ch}'"),
            })
        })
        .collect()
}
