//! Incidence index construction.
//!
//! Expands incidence records, each covering a range of days, into a per-day
//! list of entries.

use crate::error::EngineResult;
use crate::models::{DayIncidences, DayRange, IncidenceEntry, IncidenceRecord};

/// Builds the per-day incidence index.
///
/// Every record is expanded onto each day of its inclusive range. Entries on
/// a day keep the order the records were supplied in, which is the order
/// their labels are later joined in.
///
/// # Returns
///
/// The index, or `InvalidDayRange` for the first record whose range is not
/// two integers `lo-hi` with `lo <= hi`.
///
/// # Example
///
/// ```
/// use jornada_register::calculation::build_incidence_index;
/// use jornada_register::models::IncidenceRecord;
///
/// let records = vec![
///     IncidenceRecord::new("Vacaciones", "5-6", None),
///     IncidenceRecord::new("Médico", "6-6", Some("10:00-11:00 # Cita")),
/// ];
/// let index = build_incidence_index(&records).unwrap();
/// assert_eq!(index[&5].len(), 1);
/// assert_eq!(index[&6][0].label, "Vacaciones");
/// assert_eq!(index[&6][1].label, "Médico");
/// ```
pub fn build_incidence_index(records: &[IncidenceRecord]) -> EngineResult<DayIncidences> {
    let mut index = DayIncidences::new();

    for record in records {
        let range: DayRange = record.day_range.parse()?;
        for day in range.days() {
            index.entry(day).or_default().push(IncidenceEntry {
                label: record.label.clone(),
                time_window: record.time_window.clone(),
            });
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_empty_records_give_empty_index() {
        let index = build_incidence_index(&[]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_range_expands_inclusively() {
        let records = vec![IncidenceRecord::new("Vacaciones", "12-16", None)];
        let index = build_incidence_index(&records).unwrap();

        assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec![12, 13, 14, 15, 16]);
        assert!(index.values().all(|entries| entries.len() == 1));
        assert!(index[&12][0].is_whole_day());
    }

    #[test]
    fn test_overlapping_records_keep_input_order() {
        let records = vec![
            IncidenceRecord::new("Formación", "10-10", Some("12:00-13:00")),
            IncidenceRecord::new("Médico", "9-10", Some("09:00-10:00")),
        ];
        let index = build_incidence_index(&records).unwrap();

        let labels: Vec<_> = index[&10].iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Formación", "Médico"]);
        assert_eq!(index[&9].len(), 1);
    }

    #[test]
    fn test_window_comment_already_stripped() {
        let records = vec![IncidenceRecord::new("Médico", "10-10", Some("10:00-11:00 # Cita"))];
        let index = build_incidence_index(&records).unwrap();

        let window = index[&10][0].time_window.as_ref().unwrap();
        assert_eq!(window.as_str(), "10:00-11:00");
    }

    #[test]
    fn test_inverted_range_fails() {
        let records = vec![
            IncidenceRecord::new("Vacaciones", "1-2", None),
            IncidenceRecord::new("Médico", "10-3", None),
        ];
        match build_incidence_index(&records) {
            Err(EngineError::InvalidDayRange { range }) => assert_eq!(range, "10-3"),
            other => panic!("Expected InvalidDayRange, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_range_fails() {
        let records = vec![IncidenceRecord::new("Vacaciones", "uno-dos", None)];
        assert!(matches!(
            build_incidence_index(&records),
            Err(EngineError::InvalidDayRange { .. })
        ));
    }

    #[test]
    fn test_oversized_range_fails_without_expanding() {
        let records = vec![IncidenceRecord::new("Vacaciones", "1-4000000000", None)];
        match build_incidence_index(&records) {
            Err(EngineError::InvalidDayRange { range }) => assert_eq!(range, "1-4000000000"),
            other => panic!("Expected InvalidDayRange, got {:?}", other),
        }
    }
}
