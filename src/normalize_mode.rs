use crate::safe_chars::SafeChars;

/// How a drug name is compared when two drugs have the same total cost
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Compare the upper cased name with all its characters
    #[default]
    Full,
    /// Compare the upper cased name keeping only safe letters and digits
    AlphanumericOnly,
}

impl NormalizeMode {
    pub fn normalize(&self, name: &str, safe_chars: &SafeChars) -> String {
        let upper = name.to_uppercase();
        match self {
            NormalizeMode::Full => upper,
            NormalizeMode::AlphanumericOnly => upper
                .chars()
                .filter(|c| c.is_alphanumeric() && safe_chars.is_safe(*c))
                .collect(),
        }
    }

    /// Interpret a sort mode token: `true`, `1`, `t`, `y`, `yes` and `alpha` select
    /// [NormalizeMode::AlphanumericOnly], anything else [NormalizeMode::Full].
    pub fn from_token(token: &str) -> NormalizeMode {
        match token.to_lowercase().as_str() {
            "true" | "1" | "t" | "y" | "yes" | "alpha" => NormalizeMode::AlphanumericOnly,
            _ => NormalizeMode::Full,
        }
    }
}
