//! Letter health grade.

use serde::{Deserialize, Serialize};

/// Letter grade derived from a 0–1 score. `A` is healthiest, `F` worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthGrade {
    A,
    B,
    C,
    D,
    F,
}

impl HealthGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// All grades, best first.
    pub fn all() -> &'static [HealthGrade] {
        &[Self::A, Self::B, Self::C, Self::D, Self::F]
    }
}

impl std::fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_order_best_to_worst() {
        assert!(HealthGrade::A < HealthGrade::B);
        assert!(HealthGrade::D < HealthGrade::F);
        assert_eq!(HealthGrade::all().len(), 5);
    }

    #[test]
    fn grade_serializes_as_letter() {
        let json = serde_json::to_string(&HealthGrade::C).unwrap();
        assert_eq!(json, "\"C\"");
        let back: HealthGrade = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(back, HealthGrade::F);
    }
}
