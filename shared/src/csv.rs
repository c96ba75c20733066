use crate::Defect;

/// Renders the defect list as the CSV the table's export button downloads.
///
/// Field formatting matches the report contract exactly: confidence as a
/// percentage to one decimal, coordinates and sizes to one decimal with a
/// space after the separating comma inside the location and size columns.
pub fn defects_to_csv(defects: &[Defect]) -> String {
    let mut rows = vec!["ID,Type,Severity,Confidence,Location (x,y),Size (w,h)".to_string()];
    for d in defects {
        rows.push(format!(
            "{},{},{},{:.1}%,{:.1}%, {:.1}%,{:.1}%, {:.1}%",
            d.id,
            d.kind,
            d.severity,
            d.confidence * 100.0,
            d.x,
            d.y,
            d.width,
            d.height
        ));
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn export_matches_report_field_formats() {
        let defects = vec![Defect {
            id: "DEF001".into(),
            kind: "Scratch".into(),
            x: 25.0,
            y: 15.0,
            width: 8.0,
            height: 3.0,
            confidence: 0.95,
            severity: Severity::High,
        }];
        let csv = defects_to_csv(&defects);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Type,Severity,Confidence,Location (x,y),Size (w,h)")
        );
        assert_eq!(
            lines.next(),
            Some("DEF001,Scratch,high,95.0%,25.0%, 15.0%,8.0%, 3.0%")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_list_exports_header_only() {
        assert_eq!(
            defects_to_csv(&[]),
            "ID,Type,Severity,Confidence,Location (x,y),Size (w,h)"
        );
    }
}
