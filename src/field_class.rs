/// Character class a checked field must belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldClass {
    /// Decimal digits only, at least one
    Integer,
    /// Decimal digits with at most one decimal point, at least one digit
    Number,
    /// Alphabetic characters only, may be empty
    Alphabetic,
}

impl FieldClass {
    /// Check `value` against this class. Characters listed in `exempt` are skipped before the
    /// class is evaluated.
    pub fn admits(&self, value: &str, exempt: &[char]) -> bool {
        let mut chars = value.chars().filter(|c| !exempt.contains(c));
        match self {
            FieldClass::Integer => {
                let mut digits = 0;
                let all = chars.all(|c| {
                    digits += 1;
                    c.is_ascii_digit()
                });
                all && digits > 0
            }
            FieldClass::Number => {
                let mut digits = 0;
                let mut points = 0;
                for c in chars {
                    if c.is_ascii_digit() {
                        digits += 1;
                    } else if c == '.' {
                        points += 1;
                    } else {
                        return false;
                    }
                }
                digits > 0 && points <= 1
            }
            FieldClass::Alphabetic => chars.all(char::is_alphabetic),
        }
    }

    /// Human readable description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldClass::Integer => "numeric",
            FieldClass::Number => "a number",
            FieldClass::Alphabetic => "alphabetic",
        }
    }
}
