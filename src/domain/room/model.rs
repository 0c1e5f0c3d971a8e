//! Room domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// A bookable room
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Unique room ID
    pub id: i32,
    /// Room name (intended unique by business rule)
    pub name: String,
    /// Seating capacity, always > 0
    pub capacity: i32,
    /// Whether the room has a projector
    pub has_projector: bool,
    /// Cleared when the room is booked, never reset automatically
    pub is_available: bool,
    /// When the room was created
    pub created_at: DateTime<Utc>,
    /// When the room was last edited
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form-shaped input for creating or editing a room.
#[derive(Debug, Clone)]
pub struct RoomInput {
    pub name: String,
    pub capacity: i32,
    pub has_projector: bool,
    pub is_available: bool,
}

impl RoomInput {
    /// Field-level validation messages, evaluated independently so a form
    /// with several bad fields reports all of them at once.
    ///
    /// Name uniqueness needs the store and is checked by the service.
    pub fn validation_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.name.is_empty() {
            messages.push("Room name not provided.".to_string());
        }
        if self.capacity <= 0 {
            messages.push("Room capacity must be greater than 0.".to_string());
        }
        messages
    }
}

/// Room list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSort {
    /// Storage-native order (no explicit sort requested)
    Unsorted,
    /// Sort option "1"
    CapacityDesc,
    /// Sort option "2"
    CapacityAsc,
}

impl RoomSort {
    /// Map the raw `sort_option` form value. Unknown values fall back to
    /// the unsorted list.
    pub fn from_option(opt: Option<&str>) -> Self {
        match opt {
            Some("1") => Self::CapacityDesc,
            Some("2") => Self::CapacityAsc,
            _ => Self::Unsorted,
        }
    }
}

/// Search criteria over rooms. Every field is independently optional and the
/// applied filters are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct RoomSearch {
    /// Case-insensitive substring match on the room name
    pub name: Option<String>,
    /// Exact projector match; `None` means no filter
    pub has_projector: Option<bool>,
    pub capacity_from: Option<i32>,
    pub capacity_to: Option<i32>,
    pub reserved_from: Option<NaiveDate>,
    pub reserved_to: Option<NaiveDate>,
}

impl RoomSearch {
    /// The name filter, if a non-empty name was supplied.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The inclusive capacity range; applies only when both bounds are set.
    pub fn capacity_range(&self) -> Option<(i32, i32)> {
        self.capacity_from.zip(self.capacity_to)
    }

    /// The inclusive reservation-date range; applies only when both bounds
    /// are set. Matches rooms holding at least one reservation in the range.
    pub fn reserved_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.reserved_from.zip(self.reserved_to)
    }

    /// Whether any filter would be applied at all.
    pub fn has_criteria(&self) -> bool {
        self.name_filter().is_some()
            || self.has_projector.is_some()
            || self.capacity_range().is_some()
            || self.reserved_range().is_some()
    }
}

/// Result of a room search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// No criteria were supplied; no query was executed.
    NoCriteria,
    /// Rooms matching the criteria (possibly empty).
    Found(Vec<Room>),
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, capacity: i32) -> RoomInput {
        RoomInput {
            name: name.to_string(),
            capacity,
            has_projector: false,
            is_available: true,
        }
    }

    #[test]
    fn valid_input_has_no_messages() {
        assert!(input("Atrium", 10).validation_messages().is_empty());
    }

    #[test]
    fn blank_name_and_zero_capacity_both_reported() {
        let messages = input("", 0).validation_messages();
        assert_eq!(
            messages,
            vec![
                "Room name not provided.".to_string(),
                "Room capacity must be greater than 0.".to_string(),
            ]
        );
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let messages = input("Hall", -3).validation_messages();
        assert_eq!(messages, vec!["Room capacity must be greater than 0."]);
    }

    #[test]
    fn sort_option_mapping() {
        assert_eq!(RoomSort::from_option(Some("1")), RoomSort::CapacityDesc);
        assert_eq!(RoomSort::from_option(Some("2")), RoomSort::CapacityAsc);
        assert_eq!(RoomSort::from_option(Some("3")), RoomSort::Unsorted);
        assert_eq!(RoomSort::from_option(None), RoomSort::Unsorted);
    }

    #[test]
    fn empty_search_has_no_criteria() {
        assert!(!RoomSearch::default().has_criteria());
    }

    #[test]
    fn blank_name_does_not_count_as_criteria() {
        let search = RoomSearch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!search.has_criteria());
        assert!(search.name_filter().is_none());
    }

    #[test]
    fn capacity_range_requires_both_bounds() {
        let mut search = RoomSearch {
            capacity_from: Some(10),
            ..Default::default()
        };
        assert!(search.capacity_range().is_none());
        assert!(!search.has_criteria());

        search.capacity_to = Some(50);
        assert_eq!(search.capacity_range(), Some((10, 50)));
        assert!(search.has_criteria());
    }

    #[test]
    fn reserved_range_requires_both_bounds() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let search = RoomSearch {
            reserved_from: Some(from),
            ..Default::default()
        };
        assert!(search.reserved_range().is_none());

        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let search = RoomSearch {
            reserved_to: Some(to),
            ..search
        };
        assert_eq!(search.reserved_range(), Some((from, to)));
    }

    #[test]
    fn projector_filter_alone_counts_as_criteria() {
        let search = RoomSearch {
            has_projector: Some(false),
            ..Default::default()
        };
        assert!(search.has_criteria());
    }
}
