//! Form DTOs

/// Form body for POST /guess
///
/// Read from raw urlencoded pairs: the first `guess` wins when the field is
/// repeated, and a missing field becomes an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessForm {
    pub guess: String,
}

impl GuessForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let guess = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "guess").then_some(value))
            .unwrap_or_default();
        Self { guess }
    }
}
