use crate::Defect;
use serde::{Deserialize, Serialize};

/// Column the defect summary table is sorted by.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum DefectSortKey {
    Severity,
    Confidence,
    Type,
}

/// Returns a sorted copy of `defects`, leaving the source untouched.
///
/// Severity sorts descending (high first), confidence descending, type
/// ascending case-insensitively. `sort_by` is stable, so ties keep their
/// original insertion order.
pub fn sort_defects(defects: &[Defect], key: DefectSortKey) -> Vec<Defect> {
    let mut sorted = defects.to_vec();
    match key {
        DefectSortKey::Severity => sorted.sort_by(|a, b| b.severity.cmp(&a.severity)),
        DefectSortKey::Confidence => {
            sorted.sort_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        DefectSortKey::Type => {
            sorted.sort_by(|a, b| a.kind.to_lowercase().cmp(&b.kind.to_lowercase()));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    fn defect(id: &str, kind: &str, severity: Severity, confidence: f64) -> Defect {
        Defect {
            id: id.into(),
            kind: kind.into(),
            x: 10.0,
            y: 10.0,
            width: 5.0,
            height: 5.0,
            confidence,
            severity,
        }
    }

    #[test]
    fn severity_sort_puts_high_first_and_keeps_tie_order() {
        let defects = vec![
            defect("a", "Scratch", Severity::High, 0.5),
            defect("b", "Scratch", Severity::High, 0.9),
            defect("c", "Dust Particle", Severity::Low, 0.99),
        ];
        let sorted = sort_defects(&defects, DefectSortKey::Severity);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn confidence_sort_is_descending() {
        let defects = vec![
            defect("a", "Scratch", Severity::Low, 0.72),
            defect("b", "Paint Bubble", Severity::High, 0.95),
            defect("c", "Orange Peel", Severity::Medium, 0.89),
        ];
        let sorted = sort_defects(&defects, DefectSortKey::Confidence);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn type_sort_is_ascending_and_case_insensitive() {
        let defects = vec![
            defect("a", "scratch", Severity::Low, 0.5),
            defect("b", "Dust Particle", Severity::Low, 0.5),
            defect("c", "Orange Peel", Severity::Low, 0.5),
        ];
        let sorted = sort_defects(&defects, DefectSortKey::Type);
        let kinds: Vec<&str> = sorted.iter().map(|d| d.kind.as_str()).collect();
        assert_eq!(kinds, ["Dust Particle", "Orange Peel", "scratch"]);
    }

    #[test]
    fn sorting_does_not_mutate_the_source() {
        let defects = vec![
            defect("a", "Scratch", Severity::Low, 0.5),
            defect("b", "Scratch", Severity::High, 0.9),
        ];
        let _ = sort_defects(&defects, DefectSortKey::Severity);
        assert_eq!(defects[0].id, "a");
    }
}
