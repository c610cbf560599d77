/// Distinct non-empty values with their counts, in order of first appearance.
///
/// Records whose field is absent or empty are skipped entirely; they still
/// count toward the caller's totals. Order is stable, never sorted.
pub fn ordered_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values.flatten() {
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// Number of values equal to `expected` (missing values never match).
pub fn count_equal<'a, I>(values: I, expected: &str) -> usize
where
    I: Iterator<Item = Option<&'a str>>,
{
    values.flatten().filter(|v| *v == expected).count()
}

/// Render a breakdown as bullet lines, `• value: n unit`.
pub fn bullet_lines(counts: &[(String, usize)], unit: &str) -> String {
    counts
        .iter()
        .map(|(value, n)| format!("• {}: {} {}", value, n, unit))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_counts_preserves_first_appearance_order() {
        let values = [
            Some("Firearm"),
            Some("Narcotics"),
            None,
            Some("Firearm"),
            Some(""),
            Some("Documents"),
            Some("Narcotics"),
        ];
        let counts = ordered_counts(values.into_iter());
        assert_eq!(
            counts,
            vec![
                ("Firearm".to_string(), 2),
                ("Narcotics".to_string(), 2),
                ("Documents".to_string(), 1),
            ]
        );
    }

    #[test]
    fn count_equal_ignores_missing() {
        let values = [Some("Active"), None, Some("Released"), Some("Active")];
        assert_eq!(count_equal(values.into_iter(), "Active"), 2);
    }

    #[test]
    fn bullet_lines_format() {
        let counts = vec![("Patrol".to_string(), 3), ("K9".to_string(), 1)];
        assert_eq!(
            bullet_lines(&counts, "vehicles"),
            "• Patrol: 3 vehicles\n• K9: 1 vehicles"
        );
    }
}
