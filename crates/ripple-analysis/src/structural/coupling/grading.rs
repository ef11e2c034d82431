//! Letter grading of 0–1 scores.
//!
//! Layer reports and combined reports share the cut points
//! 0.40 / 0.60 / 0.80 / 0.95 but not the boundary semantics: a layer grade
//! uses strict `<` (a score of exactly 0.40 is a B), the combined grade uses
//! inclusive `<=` (exactly 0.40 is an A). Both are relied on by stored
//! reports and must stay as they are.

use ripple_core::constants::{GRADE_A_CUTOFF, GRADE_B_CUTOFF, GRADE_C_CUTOFF, GRADE_D_CUTOFF};
use ripple_core::types::HealthGrade;

/// Grade a layer's global instability. Half-open intervals; NaN grades F.
pub fn grade_layer(score: f64) -> HealthGrade {
    if score < GRADE_A_CUTOFF {
        HealthGrade::A
    } else if score < GRADE_B_CUTOFF {
        HealthGrade::B
    } else if score < GRADE_C_CUTOFF {
        HealthGrade::C
    } else if score < GRADE_D_CUTOFF {
        HealthGrade::D
    } else {
        HealthGrade::F
    }
}

/// Grade a combined coupling index. Inclusive upper bounds; NaN grades F.
pub fn grade_combined(score: f64) -> HealthGrade {
    if score <= GRADE_A_CUTOFF {
        HealthGrade::A
    } else if score <= GRADE_B_CUTOFF {
        HealthGrade::B
    } else if score <= GRADE_C_CUTOFF {
        HealthGrade::C
    } else if score <= GRADE_D_CUTOFF {
        HealthGrade::D
    } else {
        HealthGrade::F
    }
}
