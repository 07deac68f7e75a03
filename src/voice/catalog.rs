//! The fixed catalog of selectable KittenTTS voices.

use thiserror::Error;

/// Errors that can occur when parsing a voice selection.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },

    #[error("Please enter a valid number.")]
    NotANumber,
}

/// A selectable voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub description: &'static str,
}

const KITTEN_VOICES: &[Voice] = &[
    Voice {
        id: "expr-voice-2-m",
        description: "Male Voice #2 - Expressive",
    },
    Voice {
        id: "expr-voice-2-f",
        description: "Female Voice #2 - Expressive",
    },
    Voice {
        id: "expr-voice-3-m",
        description: "Male Voice #3 - Expressive",
    },
    Voice {
        id: "expr-voice-3-f",
        description: "Female Voice #3 - Expressive",
    },
    Voice {
        id: "expr-voice-4-m",
        description: "Male Voice #4 - Expressive",
    },
    Voice {
        id: "expr-voice-4-f",
        description: "Female Voice #4 - Expressive",
    },
    Voice {
        id: "expr-voice-5-m",
        description: "Male Voice #5 - Expressive",
    },
    Voice {
        id: "expr-voice-5-f",
        description: "Female Voice #5 - Expressive",
    },
];

/// Index of `expr-voice-2-f` in [`KITTEN_VOICES`].
const KITTEN_DEFAULT_INDEX: usize = 1;

/// Ordered, read-only set of voices with a designated default.
///
/// Selection numbers shown to the operator are 1-indexed and follow
/// declaration order.
#[derive(Debug, Clone, Copy)]
pub struct VoiceCatalog {
    voices: &'static [Voice],
    default_index: usize,
}

impl VoiceCatalog {
    /// The built-in KittenTTS catalog.
    pub const fn kitten() -> Self {
        Self {
            voices: KITTEN_VOICES,
            default_index: KITTEN_DEFAULT_INDEX,
        }
    }

    /// Number of voices in the catalog.
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// All voices in declaration order.
    pub fn voices(&self) -> &'static [Voice] {
        self.voices
    }

    /// The voice used when the operator makes no selection.
    pub fn default_voice(&self) -> &'static Voice {
        &self.voices[self.default_index]
    }

    /// Whether `voice` is the catalog default.
    pub fn is_default(&self, voice: &Voice) -> bool {
        voice.id == self.default_voice().id
    }

    /// Look a voice up by its identifier.
    pub fn get(&self, id: &str) -> Option<&'static Voice> {
        self.voices.iter().find(|v| v.id == id)
    }

    /// Look a voice up by its 1-indexed selection number.
    pub fn by_number(&self, number: usize) -> Option<&'static Voice> {
        number
            .checked_sub(1)
            .and_then(|index| self.voices.get(index))
    }

    /// Parse an operator's voice selection.
    ///
    /// An empty answer selects the default voice; otherwise the answer must
    /// be an integer in `1..=len()`.
    pub fn parse_selection(&self, input: &str) -> Result<&'static Voice, SelectionError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.default_voice());
        }

        let out_of_range = SelectionError::OutOfRange { max: self.len() };
        let number: i64 = match input.parse() {
            Ok(number) => number,
            // Integers too large for i64 are still integers.
            Err(_) if is_integer_literal(input) => return Err(out_of_range),
            Err(_) => return Err(SelectionError::NotANumber),
        };
        usize::try_from(number)
            .ok()
            .and_then(|n| self.by_number(n))
            .ok_or(out_of_range)
    }
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::kitten()
    }
}
