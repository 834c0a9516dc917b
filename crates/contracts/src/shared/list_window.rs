//! Server-truncated lists.
//!
//! Read endpoints may return only the head of a long list together with the
//! true total. The UI renders what it got and adds a note when the two differ.

/// Note rendered under a list the server cut short, e.g.
/// "Showing first 100 of 500 mappings". `None` when the list is complete.
pub fn truncation_note(shown: usize, total: u64, noun: &str) -> Option<String> {
    if (shown as u64) < total {
        Some(format!("Showing first {} of {} {}", shown, total, noun))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_list_gets_note() {
        assert_eq!(
            truncation_note(100, 500, "mappings").as_deref(),
            Some("Showing first 100 of 500 mappings")
        );
    }

    #[test]
    fn test_complete_list_has_no_note() {
        assert_eq!(truncation_note(3, 3, "items"), None);
        assert_eq!(truncation_note(0, 0, "items"), None);
    }

    #[test]
    fn test_total_smaller_than_shown_has_no_note() {
        // servers that under-report the total must not produce "first 5 of 2"
        assert_eq!(truncation_note(5, 2, "items"), None);
    }
}
