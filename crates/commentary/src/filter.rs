/// Rule deciding whether a record's English text is substantial enough to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Any non-empty text
    NonEmpty,
    /// Text strictly longer than the given number of characters
    LongerThan(usize),
}
impl Acceptance {
    /// Threshold used by the strict rule.
    pub const STRICT_MIN_CHARS: usize = 50;

    /// The strict rule: more than [`STRICT_MIN_CHARS`](Self::STRICT_MIN_CHARS) characters.
    pub fn strict() -> Self {
        Self::LongerThan(Self::STRICT_MIN_CHARS)
    }

    pub fn accepts(&self, english: &str) -> bool {
        match self {
            Self::NonEmpty => !english.is_empty(),
            Self::LongerThan(min) => english.chars().count() > *min,
        }
    }
}
