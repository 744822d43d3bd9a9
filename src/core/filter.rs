//! Facility search predicate
//!
//! Filters by service type and by a trimmed, case-sensitive substring of the
//! name or address. Output keeps input order. The extended criteria stored by
//! the filters screen are deliberately not part of this predicate.

use crate::domain::{Facility, ServiceType};

/// Pure: does a facility match the query and type selection?
///
/// `query` is expected to be trimmed already; an empty query matches everything.
pub fn matches(facility: &Facility, query: &str, service_type: Option<ServiceType>) -> bool {
    if let Some(kind) = service_type {
        if facility.kind != kind {
            return false;
        }
    }

    query.is_empty() || facility.name.contains(query) || facility.address.contains(query)
}

/// Pure: filter a facility list for the search screen
///
/// # Examples
///
/// ```
/// use carefinder::core::filter::filter_facilities;
/// use carefinder::domain::{mock_catalog, ServiceType};
///
/// let all = mock_catalog();
/// let home = filter_facilities(&all, "", Some(ServiceType::HomeBased));
/// assert_eq!(home.len(), 1);
/// assert_eq!(home[0].name, "든든재가센터");
/// ```
pub fn filter_facilities(
    all: &[Facility],
    query: &str,
    service_type: Option<ServiceType>,
) -> Vec<Facility> {
    let query = query.trim();
    all.iter()
        .filter(|f| matches(f, query, service_type))
        .cloned()
        .collect()
}
