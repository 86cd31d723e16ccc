use std::convert::TryFrom;
use std::fmt;

use crate::result::Result;
use crate::PixelVeilError;

/// letters that can be hidden, code `n` stands for `ALPHABET[n - 1]`
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// marks the end of a message
pub const TERMINATOR: u8 = 0;

pub const SPACE_CODE: u8 = 27;

/// the highest code a text message can contain
pub const MAX_CODE: u8 = SPACE_CODE;

/// A text message as a sequence of codes in `0..=27`.
///
/// `1..=26` are the letters `A` to `Z`, `27` is a space and `0` terminates the message.
/// If the terminator is present it is the last code, there is never anything behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedMessage {
    codes: Vec<u8>,
}

impl EncodedMessage {
    /// Encodes `text` case insensitive and appends the terminator.
    ///
    /// Fails on the first character that is neither a letter `A-Z` nor a space.
    pub fn encode(text: &str) -> Result<Self> {
        let mut codes = Vec::with_capacity(text.len() + 1);
        for c in text.chars().flat_map(char::to_uppercase) {
            codes.push(code_of(c)?);
        }
        codes.push(TERMINATOR);

        Ok(Self { codes })
    }

    /// Takes a raw stream of codes, everything behind the first terminator is dropped.
    pub fn from_codes<I: IntoIterator<Item = u8>>(codes: I) -> Result<Self> {
        let mut message = Self::default();
        for code in codes {
            if code > MAX_CODE {
                return Err(PixelVeilError::InvalidSymbol(code));
            }
            message.codes.push(code);
            if code == TERMINATOR {
                break;
            }
        }

        Ok(message)
    }

    /// decodes the codes up to the terminator, or all of them if there is none
    pub fn decode(&self) -> String {
        self.codes
            .iter()
            .take_while(|&&code| code != TERMINATOR)
            .map(|&code| char_of(code))
            .collect()
    }

    pub fn codes(&self) -> &[u8] {
        self.codes.as_slice()
    }

    /// number of codes, including the terminator
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn is_terminated(&self) -> bool {
        self.codes.last() == Some(&TERMINATOR)
    }
}

impl TryFrom<&str> for EncodedMessage {
    type Error = PixelVeilError;

    fn try_from(text: &str) -> std::result::Result<Self, Self::Error> {
        Self::encode(text)
    }
}

impl fmt::Display for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

pub fn encode(text: &str) -> Result<EncodedMessage> {
    EncodedMessage::encode(text)
}

pub fn decode(message: &EncodedMessage) -> String {
    message.decode()
}

fn code_of(c: char) -> Result<u8> {
    match c {
        ' ' => Ok(SPACE_CODE),
        'A'..='Z' => Ok(c as u8 - b'A' + 1),
        _ => Err(PixelVeilError::UnsupportedCharacter(c)),
    }
}

/// `code` must be in `1..=MAX_CODE`, which `EncodedMessage` guarantees
fn char_of(code: u8) -> char {
    if code == SPACE_CODE {
        ' '
    } else {
        ALPHABET[(code - 1) as usize] as char
    }
}
