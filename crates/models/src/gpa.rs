//! Grade-point average arithmetic

/// A single enrollment's contribution to a GPA: the grade earned (if any)
/// and the number of credits the course carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedCredit {
    pub grade: Option<f64>,
    pub credits: i32,
}

impl GradedCredit {
    pub fn new(grade: Option<f64>, credits: i32) -> Self {
        Self { grade, credits }
    }
}

/// Rounds a value to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the credit-weighted GPA over graded enrollments
///
/// Ungraded enrollments are excluded from both the numerator and the
/// denominator. Returns `0.0` when nothing has been graded yet.
///
/// # Arguments
/// * `entries` - The grade and credit weight of each enrollment
///
/// # Returns
/// * The GPA rounded to two decimal places
pub fn weighted_gpa<I>(entries: I) -> f64
where
    I: IntoIterator<Item = GradedCredit>,
{
    let (points, credits) = entries
        .into_iter()
        .filter_map(|entry| entry.grade.map(|grade| (grade, entry.credits)))
        .fold((0.0, 0i64), |(points, credits), (grade, weight)| {
            (points + grade * f64::from(weight), credits + i64::from(weight))
        });

    if credits > 0 {
        round2(points / credits as f64)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_by_credits() {
        let gpa = weighted_gpa([GradedCredit::new(Some(4.0), 4), GradedCredit::new(Some(2.0), 1)]);
        assert_eq!(gpa, 3.6);
    }

    #[test]
    fn matches_seeded_student() {
        let gpa = weighted_gpa([GradedCredit::new(Some(3.7), 3), GradedCredit::new(Some(3.9), 3)]);
        assert_eq!(gpa, 3.8);
    }

    #[test]
    fn skips_ungraded_enrollments() {
        let gpa = weighted_gpa([
            GradedCredit::new(Some(3.0), 3),
            GradedCredit::new(None, 4),
        ]);
        assert_eq!(gpa, 3.0);
    }

    #[test]
    fn zero_grade_still_counts() {
        let gpa = weighted_gpa([GradedCredit::new(Some(0.0), 3), GradedCredit::new(Some(4.0), 3)]);
        assert_eq!(gpa, 2.0);
    }

    #[test]
    fn nothing_graded_is_zero() {
        assert_eq!(weighted_gpa([GradedCredit::new(None, 3)]), 0.0);
        assert_eq!(weighted_gpa(Vec::new()), 0.0);
    }

    #[test]
    fn rounds_to_two_places() {
        // (3.3 * 3 + 3.7 * 4) / 7 = 3.5285...
        let gpa = weighted_gpa([GradedCredit::new(Some(3.3), 3), GradedCredit::new(Some(3.7), 4)]);
        assert_eq!(gpa, 3.53);
    }
}
