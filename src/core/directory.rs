// src/core/directory.rs

use crate::core::models::{Availability, Doctor};
use strum::Display;

/// Criteria applied to the doctor directory. A record is visible iff every
/// predicate holds; inactive predicates (empty query, no specialization)
/// match everything.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorFilter {
    /// Case-insensitive substring matched against name, clinic, or any
    /// specialization. Empty matches every record.
    pub query: String,
    /// Exact membership test against the record's specialization list.
    /// `None` means "all specializations".
    pub specialization: Option<&'static str>,
    /// Inclusive upper bound on the record's distance.
    pub max_distance_km: u8,
    /// When set, only `Availability::Available` records pass.
    pub available_only: bool,
}

impl Default for DoctorFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            specialization: None,
            max_distance_km: 10,
            available_only: false,
        }
    }
}

impl DoctorFilter {
    /// Whether a single record satisfies the conjunction of all four
    /// predicates.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.matches_query(doctor)
            && self.matches_specialization(doctor)
            && doctor.distance_km <= f64::from(self.max_distance_km)
            && (!self.available_only || doctor.availability == Availability::Available)
    }

    fn matches_query(&self, doctor: &Doctor) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        doctor.name.to_lowercase().contains(&needle)
            || doctor.clinic.to_lowercase().contains(&needle)
            || doctor
                .specializations
                .iter()
                .any(|spec| spec.to_lowercase().contains(&needle))
    }

    fn matches_specialization(&self, doctor: &Doctor) -> bool {
        match self.specialization {
            None => true,
            Some(spec) => doctor.specializations.contains(&spec),
        }
    }
}

/// Produces the visible subset of `doctors`, preserving input order. An empty
/// result is valid and simply renders as a zero count.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], filter: &DoctorFilter) -> Vec<&'a Doctor> {
    doctors.iter().filter(|d| filter.matches(d)).collect()
}

/// Ordering options offered above the result list. The selection is
/// presentational only: results always keep their seed order, matching the
/// behavior of the app this one reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortBy {
    Distance,
    Rating,
    Availability,
}

impl SortBy {
    pub fn next(self) -> Self {
        match self {
            SortBy::Distance => SortBy::Rating,
            SortBy::Rating => SortBy::Availability,
            SortBy::Availability => SortBy::Distance,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortBy::Distance => SortBy::Availability,
            SortBy::Rating => SortBy::Distance,
            SortBy::Availability => SortBy::Rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::{DOCTORS, SPECIALIZATIONS};

    fn names(filter: &DoctorFilter) -> Vec<&'static str> {
        filter_doctors(DOCTORS, filter).iter().map(|d| d.name).collect()
    }

    #[test]
    fn empty_filter_within_default_radius() {
        // Default radius is 10 km and every seed record sits inside it.
        assert_eq!(names(&DoctorFilter::default()).len(), 5);
    }

    #[test]
    fn query_chen_yields_exactly_sarah_chen() {
        let filter = DoctorFilter { query: "Chen".to_string(), ..DoctorFilter::default() };
        assert_eq!(names(&filter), vec!["Dr. Sarah Chen"]);
    }

    #[test]
    fn query_is_case_insensitive_and_spans_fields() {
        let by_clinic = DoctorFilter { query: "eyecare PLUS".to_string(), ..DoctorFilter::default() };
        assert_eq!(names(&by_clinic), vec!["Dr. Michael Rodriguez"]);

        let by_spec = DoctorFilter { query: "strabismus".to_string(), ..DoctorFilter::default() };
        assert_eq!(names(&by_spec), vec!["Dr. James Liu"]);
    }

    #[test]
    fn specialization_glaucoma_yields_exactly_rodriguez() {
        let filter = DoctorFilter { specialization: Some("Glaucoma"), ..DoctorFilter::default() };
        assert_eq!(names(&filter), vec!["Dr. Michael Rodriguez"]);
    }

    #[test]
    fn max_distance_two_km_yields_exactly_rodriguez() {
        let filter = DoctorFilter { max_distance_km: 2, ..DoctorFilter::default() };
        assert_eq!(names(&filter), vec!["Dr. Michael Rodriguez"]);
    }

    #[test]
    fn distance_bound_is_inclusive() {
        let at_limit = Doctor {
            id: 99,
            name: "Dr. Edge Case",
            clinic: "Boundary Clinic",
            specializations: &["Glaucoma"],
            rating: 4.0,
            reviews: 1,
            distance_km: 10.0,
            phone: "",
            email: "",
            address: "",
            availability: Availability::Available,
            next_slot: "",
            experience_years: 1,
        };
        let doctors = [at_limit];
        let filter = DoctorFilter { max_distance_km: 10, ..DoctorFilter::default() };
        assert_eq!(filter_doctors(&doctors, &filter).len(), 1);
    }

    #[test]
    fn available_only_drops_busy_and_unavailable() {
        let filter = DoctorFilter {
            available_only: true,
            max_distance_km: 50,
            ..DoctorFilter::default()
        };
        assert_eq!(
            names(&filter),
            vec!["Dr. Sarah Chen", "Dr. Emily Johnson", "Dr. James Liu"]
        );
    }

    #[test]
    fn result_order_preserves_seed_order() {
        let filter = DoctorFilter { max_distance_km: 50, ..DoctorFilter::default() };
        let ids: Vec<u8> = filter_doctors(DOCTORS, &filter).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    // For every combination of the four filter inputs, the visible set must
    // equal the records that pass each predicate evaluated independently,
    // in seed order.
    #[test]
    fn conjunction_holds_over_the_full_filter_grid() {
        let queries = ["", "chen", "EyeCare", "Retinal", "zzz-no-match"];
        let mut specializations: Vec<Option<&'static str>> = vec![None];
        specializations.extend(SPECIALIZATIONS.iter().map(|s| Some(*s)));
        let distances = [2u8, 5, 10, 25, 50];

        for query in queries {
            for specialization in &specializations {
                for max_distance_km in distances {
                    for available_only in [false, true] {
                        let filter = DoctorFilter {
                            query: query.to_string(),
                            specialization: *specialization,
                            max_distance_km,
                            available_only,
                        };
                        let got: Vec<u8> =
                            filter_doctors(DOCTORS, &filter).iter().map(|d| d.id).collect();

                        let needle = query.to_lowercase();
                        let expected: Vec<u8> = DOCTORS
                            .iter()
                            .filter(|d| {
                                needle.is_empty()
                                    || d.name.to_lowercase().contains(&needle)
                                    || d.clinic.to_lowercase().contains(&needle)
                                    || d.specializations
                                        .iter()
                                        .any(|s| s.to_lowercase().contains(&needle))
                            })
                            .filter(|d| match specialization {
                                None => true,
                                Some(s) => d.specializations.contains(s),
                            })
                            .filter(|d| d.distance_km <= f64::from(max_distance_km))
                            .filter(|d| {
                                !available_only || d.availability == Availability::Available
                            })
                            .map(|d| d.id)
                            .collect();

                        assert_eq!(got, expected, "filter diverged: {filter:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn sort_cycle_round_trips() {
        let mut sort = SortBy::Distance;
        for _ in 0..3 {
            sort = sort.next();
        }
        assert_eq!(sort, SortBy::Distance);
        assert_eq!(SortBy::Distance.prev(), SortBy::Availability);
    }
}
