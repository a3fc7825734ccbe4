//! Identifiers for the Simpson-family rules.

use std::fmt;

/// A Simpson-family quadrature rule.
///
/// Passed as a hint to `integrate` to force a particular rule, and carried
/// back on every result so callers know which rule was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Composite Simpson 1/3 rule (even interval count).
    Simpson13,
    /// Simpson 3/8 rule (exactly three intervals).
    Simpson38,
    /// Even-length 1/3-rule prefix plus one trailing 3/8 segment.
    Combined,
}

impl Rule {
    /// Pick the rule implied by the parity of `intervals`.
    ///
    /// Even counts use [`Rule::Simpson13`], exactly three uses
    /// [`Rule::Simpson38`], everything else falls to [`Rule::Combined`].
    pub fn select(intervals: usize) -> Self {
        if intervals % 2 == 0 {
            Rule::Simpson13
        } else if intervals == 3 {
            Rule::Simpson38
        } else {
            Rule::Combined
        }
    }

    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Simpson13 => "Simpson's 1/3 Rule",
            Rule::Simpson38 => "Simpson's 3/8 Rule",
            Rule::Combined => "Combined Simpson's Rule",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_by_parity() {
        assert_eq!(Rule::select(2), Rule::Simpson13);
        assert_eq!(Rule::select(8), Rule::Simpson13);
        assert_eq!(Rule::select(3), Rule::Simpson38);
        assert_eq!(Rule::select(1), Rule::Combined);
        assert_eq!(Rule::select(5), Rule::Combined);
        assert_eq!(Rule::select(11), Rule::Combined);
    }

    #[test]
    fn display_names() {
        assert_eq!(Rule::Simpson13.to_string(), "Simpson's 1/3 Rule");
        assert_eq!(Rule::Simpson38.to_string(), "Simpson's 3/8 Rule");
        assert_eq!(Rule::Combined.to_string(), "Combined Simpson's Rule");
    }
}
