//! Character alphabets and their bit index mappings
//!
//! Each alphabet fixes the width of a filter's bit vector and maps every
//! member character to exactly one bit position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of the lowercase alphanumeric keyspace (`0-9a-z`)
pub const LOWERCASE_ALPHANUMERIC_WIDTH: usize = 36;

/// Width of the base64 keyspace plus the `=` padding character
pub const BASE64_WIDTH: usize = 65;

/// Width of the 7-bit ASCII keyspace
pub const FULL_ASCII_WIDTH: usize = 128;

/// Character alphabet a filter's bit vector is indexed by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Digits `0-9` then lowercase `a-z`
    LowercaseAlphanumeric,
    /// Digits, `A-Z`, `a-z`, `+`, `/` and the `=` pad
    Base64,
    /// Every character with a code below 128
    FullAscii,
}

impl Alphabet {
    /// Number of bits needed to index every member
    pub const fn width(self) -> usize {
        match self {
            Alphabet::LowercaseAlphanumeric => LOWERCASE_ALPHANUMERIC_WIDTH,
            Alphabet::Base64 => BASE64_WIDTH,
            Alphabet::FullAscii => FULL_ASCII_WIDTH,
        }
    }

    /// Bit position for `c`, or `None` if `c` is not a member
    pub fn index_of(self, c: char) -> Option<usize> {
        match self {
            Alphabet::LowercaseAlphanumeric => match c {
                '0'..='9' => Some(c as usize - '0' as usize),
                'a'..='z' => Some(c as usize - 'a' as usize + 10),
                _ => None,
            },
            Alphabet::Base64 => match c {
                '0'..='9' => Some(c as usize - '0' as usize),
                'A'..='Z' => Some(c as usize - 'A' as usize + 10),
                'a'..='z' => Some(c as usize - 'a' as usize + 36),
                '+' => Some(62),
                '/' => Some(63),
                '=' => Some(64),
                _ => None,
            },
            Alphabet::FullAscii => c.is_ascii().then_some(c as usize),
        }
    }

    /// Whether every character of `hash` belongs to this alphabet
    pub fn admits(self, hash: &str) -> bool {
        hash.chars().all(|c| self.index_of(c).is_some())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alphabet::LowercaseAlphanumeric => "lowercase alphanumeric",
            Alphabet::Base64 => "base64",
            Alphabet::FullAscii => "full ASCII",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Alphabet; 3] = [
        Alphabet::LowercaseAlphanumeric,
        Alphabet::Base64,
        Alphabet::FullAscii,
    ];

    #[test]
    fn test_lowercase_alphanumeric_mapping() {
        let alphabet = Alphabet::LowercaseAlphanumeric;

        assert_eq!(alphabet.index_of('0'), Some(0));
        assert_eq!(alphabet.index_of('9'), Some(9));
        assert_eq!(alphabet.index_of('a'), Some(10));
        assert_eq!(alphabet.index_of('z'), Some(35));
        assert_eq!(alphabet.index_of('A'), None);
        assert_eq!(alphabet.index_of('+'), None);
    }

    #[test]
    fn test_base64_mapping() {
        let alphabet = Alphabet::Base64;

        assert_eq!(alphabet.index_of('0'), Some(0));
        assert_eq!(alphabet.index_of('A'), Some(10));
        assert_eq!(alphabet.index_of('Z'), Some(35));
        assert_eq!(alphabet.index_of('a'), Some(36));
        assert_eq!(alphabet.index_of('z'), Some(61));
        assert_eq!(alphabet.index_of('+'), Some(62));
        assert_eq!(alphabet.index_of('/'), Some(63));
        assert_eq!(alphabet.index_of('='), Some(64));
        assert_eq!(alphabet.index_of('-'), None);
    }

    #[test]
    fn test_full_ascii_mapping() {
        let alphabet = Alphabet::FullAscii;

        assert_eq!(alphabet.index_of('\0'), Some(0));
        assert_eq!(alphabet.index_of('A'), Some(65));
        assert_eq!(alphabet.index_of('\u{7f}'), Some(127));
        assert_eq!(alphabet.index_of('\u{80}'), None);
        assert_eq!(alphabet.index_of('é'), None);
    }

    #[test]
    fn test_every_member_maps_to_a_distinct_in_range_bit() {
        for alphabet in ALL {
            let mut seen = vec![false; alphabet.width()];
            let members = (0u32..256)
                .filter_map(char::from_u32)
                .filter_map(|c| alphabet.index_of(c));

            for index in members {
                assert!(index < alphabet.width(), "{alphabet}: index {index} out of range");
                assert!(!seen[index], "{alphabet}: index {index} mapped twice");
                seen[index] = true;
            }

            assert!(
                seen.iter().all(|&bit| bit),
                "{alphabet}: every bit should have a member"
            );
        }
    }

    #[test]
    fn test_admits_whole_strings() {
        assert!(Alphabet::LowercaseAlphanumeric.admits("deadbeef0123"));
        assert!(!Alphabet::LowercaseAlphanumeric.admits("Ab1"));
        assert!(Alphabet::Base64.admits("dGVzdA=="));
        assert!(!Alphabet::Base64.admits("aaa-bbb"));
        assert!(Alphabet::FullAscii.admits("any ~printable! text"));
        assert!(!Alphabet::FullAscii.admits("caf\u{e9}"));
        assert!(Alphabet::LowercaseAlphanumeric.admits(""));
    }
}
