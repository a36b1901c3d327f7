/// Punctuation allowed in names and drug names besides `A-Z` and `0-9`
pub const SAFE_PUNCTUATION: [char; 13] = [' ', '-', '.', '%', '&', '/', '(', ')', ',', '#', '"', '\'', '\\'];

/// Set of characters considered safe in upper cased names.
///
/// The default set holds `A-Z`, `0-9` and [SAFE_PUNCTUATION]. It is used to report names with
/// unexpected characters and to decide which characters survive
/// [NormalizeMode::AlphanumericOnly](crate::normalize_mode::NormalizeMode::AlphanumericOnly).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafeChars {
    chars: Vec<char>,
}

impl SafeChars {
    /// Create a set from an explicit list of characters.
    pub fn new(chars: Vec<char>) -> SafeChars {
        SafeChars {
            chars,
        }
    }

    pub fn chars(&self) -> &Vec<char> {
        &self.chars
    }

    pub fn is_safe(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// First character of `value`, upper cased, that is not in the set.
    pub fn first_unsafe(&self, value: &str) -> Option<char> {
        value.to_uppercase().chars().find(|c| !self.is_safe(*c))
    }
}

impl Default for SafeChars {
    fn default() -> Self {
        let chars = ('A'..='Z')
            .chain('0'..='9')
            .chain(SAFE_PUNCTUATION)
            .collect();
        SafeChars::new(chars)
    }
}
