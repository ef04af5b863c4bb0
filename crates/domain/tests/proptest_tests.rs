//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::entities::GeocodeCandidate;
use domain::value_objects::{GeoLocation, LocationQuery, Timezone, UiEvent, UiState};
use proptest::prelude::*;

// ============================================================================
// LocationQuery Property Tests
// ============================================================================

mod location_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalized_output_is_lowercase_letters_and_commas_plus_spaces(
            raw in "[A-Za-z ,\t]{3,40}"
        ) {
            if let Ok(query) = LocationQuery::normalize(&raw) {
                let normalized = query.as_str();
                prop_assert!(normalized
                    .chars()
                    .all(|c| c.is_lowercase() || c == ',' || c == ' '));
                prop_assert!(!normalized.contains("  "));
                prop_assert_eq!(normalized.trim(), normalized);
            }
        }

        #[test]
        fn candidate_named_like_the_input_matches_its_token(
            word in "[A-Za-zİÜÖÇŞĞÉÀ]{3,12}"
        ) {
            let query = LocationQuery::normalize(&word).expect("letters only");
            let candidate = GeocodeCandidate::new(word.as_str(), "TR", GeoLocation::lagos());
            prop_assert!(candidate.name_matches(query.primary_token()));
        }

        #[test]
        fn digits_are_rejected(
            prefix in "[a-z]{0,10}",
            digit in "[0-9]",
            suffix in "[a-z]{0,10}"
        ) {
            let raw = format!("{prefix}{digit}{suffix}abc");
            prop_assert!(LocationQuery::normalize(&raw).is_err());
        }

        #[test]
        fn punctuation_other_than_comma_is_rejected(
            word in "[a-z]{3,10}",
            punct in "[!?.;:'\"()\\-_/@#]"
        ) {
            let raw = format!("{word}{punct}");
            prop_assert!(LocationQuery::normalize(&raw).is_err());
        }

        #[test]
        fn short_input_is_rejected(raw in "[a-z]{0,2}", pad in "[ ]{0,5}") {
            let padded = format!("{pad}{raw}{pad}");
            prop_assert!(LocationQuery::normalize(&padded).is_err());
        }

        #[test]
        fn two_word_queries_are_idempotent(
            first in "[a-zA-Z]{2,12}",
            second in "[a-zA-Z]{2,12}"
        ) {
            let once = LocationQuery::normalize(&format!("{first} {second}"))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let twice = LocationQuery::normalize(once.as_str())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn primary_token_is_first_word(
            first in "[a-z]{3,12}",
            rest in "[a-z]{3,12}"
        ) {
            let query = LocationQuery::normalize(&format!("  {first}   {rest} "))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(query.primary_token(), first.as_str());
        }
    }
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Timezone Property Tests
// ============================================================================

mod timezone_tests {
    use super::*;

    proptest! {
        #[test]
        fn local_date_matches_zoned_datetime(ts in 0i64..4_102_444_800i64) {
            for tz in [Timezone::utc(), Timezone::lagos(), Timezone::new_york()] {
                let zoned = tz.datetime(ts);
                prop_assert!(zoned.as_ref().is_some_and(|dt| dt.timestamp() == ts));
                prop_assert_eq!(tz.local_date(ts), zoned.map(|dt| dt.date_naive()));
            }
        }
    }
}

// ============================================================================
// UiState Property Tests
// ============================================================================

mod ui_state_tests {
    use super::*;

    fn event() -> impl Strategy<Value = UiEvent> {
        prop_oneof![
            Just(UiEvent::Submit),
            Just(UiEvent::Succeeded),
            Just(UiEvent::Failed),
        ]
    }

    proptest! {
        #[test]
        fn submit_always_reaches_loading(events in prop::collection::vec(event(), 0..20)) {
            let mut state = UiState::default();
            for e in events {
                if let Ok(next) = state.next(e) {
                    state = next;
                }
            }
            prop_assert_eq!(state.next(UiEvent::Submit), Ok(UiState::Loading));
        }

        #[test]
        fn outcomes_only_accepted_while_loading(events in prop::collection::vec(event(), 0..20)) {
            let mut state = UiState::default();
            for e in events {
                let result = state.next(e);
                if e != UiEvent::Submit {
                    prop_assert_eq!(result.is_ok(), state == UiState::Loading);
                }
                if let Ok(next) = result {
                    state = next;
                }
            }
        }
    }
}
