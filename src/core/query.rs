use crate::domain::model::{AgeFilter, FilterState, LocationFilter, Query, YearRate};

/// Derive the aggregation query from the current filter state.
///
/// Pure: the query is a function of the state at the moment of fetch and
/// nothing is carried over between calls. Cannot fail; absent filters are
/// simply omitted and rate coercion is permissive.
pub fn build_query(state: &FilterState) -> Query {
    let gender = if state.gender.is_empty() {
        None
    } else {
        Some(state.gender.clone())
    };

    let location = if state.locations.is_empty() {
        None
    } else {
        Some(LocationFilter {
            any_of: state.locations.clone(),
        })
    };

    // Both bounds must be set and non-zero. A bound of 0 deactivates the
    // filter; kept until the requirement is confirmed otherwise.
    let age = match (state.age_from, state.age_to) {
        (Some(from), Some(to)) if from != 0 && to != 0 => Some(AgeFilter {
            over: from,
            up_to: to,
        }),
        _ => None,
    };

    let year_rates = state
        .year_rates
        .iter()
        .filter(|(_, rate)| rate.is_active())
        .map(|(year, rate)| YearRate {
            year: year.clone(),
            rate: rate.as_number(),
        })
        .collect();

    Query {
        gender,
        location,
        age,
        year_rates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RateValue;

    #[test]
    fn gender_omitted_iff_empty() {
        let mut state = FilterState::default();
        assert_eq!(build_query(&state).gender, None);

        state.gender = "m".to_string();
        assert_eq!(build_query(&state).gender, Some("m".to_string()));
    }

    #[test]
    fn location_filter_omitted_iff_no_selection() {
        let mut state = FilterState::default();
        assert_eq!(build_query(&state).location, None);

        state.locations = vec!["Berlin".to_string(), "Hamburg".to_string()];
        let query = build_query(&state);
        assert_eq!(
            query.location.unwrap().any_of,
            vec!["Berlin".to_string(), "Hamburg".to_string()]
        );
    }

    #[test]
    fn age_filter_requires_both_bounds() {
        let mut state = FilterState::default();
        state.age_from = Some(30);
        assert_eq!(build_query(&state).age, None);

        state.age_to = Some(50);
        let age = build_query(&state).age.unwrap();
        assert_eq!(age.over, 30);
        assert_eq!(age.up_to, 50);
    }

    #[test]
    fn age_bound_of_zero_deactivates_the_filter() {
        let mut state = FilterState::default();
        state.age_from = Some(0);
        state.age_to = Some(50);
        assert_eq!(build_query(&state).age, None);
    }

    #[test]
    fn blanked_year_is_dropped() {
        let mut state = FilterState::default();
        state.year_rates.clear();
        state
            .year_rates
            .insert("2019".to_string(), RateValue::Number(0.013));
        state
            .year_rates
            .insert("2020".to_string(), RateValue::Text(String::new()));

        let query = build_query(&state);
        assert_eq!(query.year_rates.len(), 1);
        assert_eq!(query.year_rates[0].year, "2019");
        assert_eq!(query.year_rates[0].rate, 0.013);
    }

    #[test]
    fn numeric_zero_rate_is_dropped() {
        let mut state = FilterState::default();
        state.year_rates.clear();
        state
            .year_rates
            .insert("2019".to_string(), RateValue::Number(0.0));

        assert!(build_query(&state).year_rates.is_empty());
    }

    #[test]
    fn non_numeric_rate_text_coerces_to_nan_sentinel() {
        let mut state = FilterState::default();
        state.year_rates.clear();
        state
            .year_rates
            .insert("2019".to_string(), RateValue::Text("abc".to_string()));

        // Does not crash, does not drop the year; the sentinel is passed
        // through unchanged.
        let query = build_query(&state);
        assert_eq!(query.year_rates.len(), 1);
        assert!(query.year_rates[0].rate.is_nan());
    }

    #[test]
    fn edited_rate_text_is_coerced_numerically() {
        let mut state = FilterState::default();
        state
            .year_rates
            .insert("2021".to_string(), RateValue::Text("0.015".to_string()));

        let query = build_query(&state);
        let rate_2021 = query
            .year_rates
            .iter()
            .find(|yr| yr.year == "2021")
            .unwrap();
        assert_eq!(rate_2021.rate, 0.015);
    }

    #[test]
    fn default_state_query_has_all_five_years_and_nothing_else() {
        let query = build_query(&FilterState::default());
        assert_eq!(query.gender, None);
        assert_eq!(query.location, None);
        assert_eq!(query.age, None);

        let years: Vec<&str> = query.year_rates.iter().map(|yr| yr.year.as_str()).collect();
        assert_eq!(years, vec!["2019", "2020", "2021", "2022", "2023"]);
    }

    #[test]
    fn wire_names_and_omissions_in_serialized_query() {
        let mut state = FilterState::default();
        state.gender = "w".to_string();
        state.locations = vec!["Berlin".to_string()];
        state.age_from = Some(30);
        state.age_to = Some(50);

        let json = serde_json::to_value(build_query(&state)).unwrap();
        assert_eq!(json["Geschlecht"], "w");
        assert_eq!(json["Standort"]["$in"][0], "Berlin");
        assert_eq!(json["Alter"]["$gt"], 30);
        assert_eq!(json["Alter"]["$lte"], 50);
        assert_eq!(json["JahrZins"][0]["jahr"], "2019");
        assert_eq!(json["JahrZins"][0]["zins"], 0.013);

        let empty = serde_json::to_value(build_query(&FilterState::default())).unwrap();
        let object = empty.as_object().unwrap();
        assert!(!object.contains_key("Geschlecht"));
        assert!(!object.contains_key("Standort"));
        assert!(!object.contains_key("Alter"));
        assert!(object.contains_key("JahrZins"));
    }
}
