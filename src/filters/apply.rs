use crate::models::PostOfficeRecord;

/// Filter records by post-office name, returning the matching subset.
///
/// Matching is a case-insensitive substring test on the `Name` field. Order
/// is preserved from the input. An empty filter matches every record, so the
/// full set is always recoverable by clearing the filter text.
pub fn filter_by_name<'a>(records: &'a [PostOfficeRecord], filter: &str) -> Vec<&'a PostOfficeRecord> {
    if filter.is_empty() {
        return records.iter().collect();
    }

    let needle = filter.to_lowercase();
    records.iter().filter(|record| record.name.to_lowercase().contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PostOfficeRecord {
        PostOfficeRecord {
            name: name.to_string(),
            branch_type: "Sub Post Office".to_string(),
            delivery_status: "Delivery".to_string(),
            district: "Mumbai".to_string(),
            division: "Mumbai City".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let records = vec![record("Fort"), record("Colaba"), record("Town Hall")];
        let filtered = filter_by_name(&records, "");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_substring_match() {
        let records = vec![record("Fort"), record("Colaba"), record("Town Hall")];
        let filtered = filter_by_name(&records, "ol");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Colaba");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let records = vec![record("Town Hall"), record("Fort")];

        let filtered = filter_by_name(&records, "town");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Town Hall");

        let filtered = filter_by_name(&records, "TOWN");
        assert_eq!(filtered.len(), 1);

        let filtered = filter_by_name(&records, "fOrT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fort");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = vec![record("Fort"), record("Colaba")];
        assert!(filter_by_name(&records, "xyz").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let records =
            vec![record("Andheri East"), record("Bandra East"), record("Chembur East")];
        let filtered = filter_by_name(&records, "east");
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Andheri East", "Bandra East", "Chembur East"]);
    }

    #[test]
    fn test_filter_on_empty_records() {
        assert!(filter_by_name(&[], "anything").is_empty());
        assert!(filter_by_name(&[], "").is_empty());
    }

    #[test]
    fn test_full_name_match() {
        let records = vec![record("Fort"), record("Fortview")];
        let filtered = filter_by_name(&records, "fortview");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fortview");
    }
}
