use regex::Regex;

use crate::field::Field;
use crate::normalize_mode::NormalizeMode;
use crate::policy::ValidationPolicy;
use crate::safe_chars::SafeChars;

/// Settings of a single run, fixed before the first line is read.
#[derive(Clone, Debug)]
pub(crate) struct Config {
    field_separator: char,
    fields: Vec<Field>,
    validation_policy: ValidationPolicy,
    normalize_mode: NormalizeMode,
    safe_chars: SafeChars,
    header: Option<(usize, Regex)>,
    skip_invalid: bool,
    warn_unsafe: bool,
}

impl Config {
    pub(crate) fn new(
        field_separator: char,
        fields: Vec<Field>,
        validation_policy: ValidationPolicy,
        normalize_mode: NormalizeMode,
        safe_chars: SafeChars,
        header: Option<(usize, Regex)>,
        skip_invalid: bool,
        warn_unsafe: bool,
    ) -> Config {
        Config {
            field_separator,
            fields,
            validation_policy,
            normalize_mode,
            safe_chars,
            header,
            skip_invalid,
            warn_unsafe,
        }
    }

    pub(crate) fn field_separator(&self) -> char {
        self.field_separator
    }

    pub(crate) fn fields(&self) -> &Vec<Field> {
        &self.fields
    }

    pub(crate) fn validation_policy(&self) -> ValidationPolicy {
        self.validation_policy
    }

    pub(crate) fn normalize_mode(&self) -> NormalizeMode {
        self.normalize_mode
    }

    pub(crate) fn safe_chars(&self) -> &SafeChars {
        &self.safe_chars
    }

    pub(crate) fn skip_invalid(&self) -> bool {
        self.skip_invalid
    }

    pub(crate) fn warn_unsafe(&self) -> bool {
        self.warn_unsafe
    }

    /// True when the header marker matches its field in `fields`. Field indexes start at 1.
    pub(crate) fn is_header(&self, fields: &[String]) -> bool {
        match &self.header {
            Some((index, marker)) => index
                .checked_sub(1)
                .and_then(|i| fields.get(i))
                .map(|field| marker.is_match(field))
                .unwrap_or(false),
            None => false,
        }
    }
}
