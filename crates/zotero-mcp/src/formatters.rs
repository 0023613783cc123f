//! Display formatting for Zotero records.

use crate::models::Creator;

/// Fallback shown when no creator contributes a name.
const NO_AUTHORS: &str = "No authors listed";

/// Format creator names into a single display string.
///
/// Each creator contributes its [`Creator::display_name`]; creators with
/// neither split nor combined names are skipped. Contributions are joined
/// with `"; "` in input order.
#[must_use]
pub fn format_creators(creators: &[Creator]) -> String {
    let names: Vec<String> = creators.iter().filter_map(Creator::display_name).collect();

    if names.is_empty() { NO_AUTHORS.to_string() } else { names.join("; ") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_creators_mixed() {
        let creators = vec![Creator::personal("Jane", "Doe"), Creator::institution("Acme Corp")];
        assert_eq!(format_creators(&creators), "Doe, Jane; Acme Corp");
    }

    #[test]
    fn test_format_creators_empty_input() {
        assert_eq!(format_creators(&[]), "No authors listed");
    }

    #[test]
    fn test_format_creators_skips_nameless_records() {
        let creators = vec![
            Creator::personal("Jane", "Doe"),
            Creator::default(),
            Creator::personal("John", "Smith"),
        ];
        assert_eq!(format_creators(&creators), "Doe, Jane; Smith, John");
    }

    #[test]
    fn test_format_creators_all_nameless() {
        let creators = vec![Creator::default(), Creator::default()];
        assert_eq!(format_creators(&creators), "No authors listed");
    }
}
