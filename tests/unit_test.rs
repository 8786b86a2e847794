// Unit tests for usertable
// These tests work with the public API without modifying the main codebase

#[cfg(test)]
mod model_tests {
    use usertable::model::User;

    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn user_deserializes_from_the_api_shape() {
        let user: User = serde_json::from_str(SAMPLE).expect("valid user JSON");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(user.company.bs, "harness real-time e-markets");
    }

    #[test]
    fn schema_round_trips_unchanged() {
        // No field may be renamed or transformed during loading.
        let original: serde_json::Value = serde_json::from_str(SAMPLE).expect("valid JSON");
        let user: User = serde_json::from_str(SAMPLE).expect("valid user JSON");
        let reserialized = serde_json::to_value(&user).expect("serializable");
        assert_eq!(reserialized, original);
    }
}

#[cfg(test)]
mod sort_state_tests {
    use usertable::table::{SortColumn, SortDirection, SortState};

    #[test]
    fn default_is_unsorted() {
        assert_eq!(SortState::default(), SortState::Unsorted);
        assert_eq!(SortState::default().direction_for(SortColumn::Name), None);
    }

    #[test]
    fn toggle_cycles_through_directions() {
        let s = SortState::Unsorted.toggled(SortColumn::Email);
        assert_eq!(s.direction_for(SortColumn::Email), Some(SortDirection::Ascending));
        let s = s.toggled(SortColumn::Email);
        assert_eq!(s.direction_for(SortColumn::Email), Some(SortDirection::Descending));
        let s = s.toggled(SortColumn::Email);
        assert_eq!(s.direction_for(SortColumn::Email), Some(SortDirection::Ascending));
    }

    #[test]
    fn toggling_a_different_column_starts_ascending() {
        let s = SortState::Unsorted
            .toggled(SortColumn::Email)
            .toggled(SortColumn::Email)
            .toggled(SortColumn::City);
        assert_eq!(s.direction_for(SortColumn::City), Some(SortDirection::Ascending));
        assert_eq!(s.direction_for(SortColumn::Email), None);
    }

    #[test]
    fn every_column_has_a_label_and_a_digit_binding() {
        assert_eq!(SortColumn::ALL.len(), 8);
        for column in SortColumn::ALL {
            assert!(!column.label().is_empty());
        }
    }
}

#[cfg(test)]
mod api_tests {
    use usertable::api::FetchError;

    #[test]
    fn fetch_error_displays_only_the_message() {
        let err = FetchError("Cannot reach the server.".to_string());
        assert_eq!(err.to_string(), "Cannot reach the server.");
    }
}
