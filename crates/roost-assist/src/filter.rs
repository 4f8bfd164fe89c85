//! In-memory listing filter predicate.
//!
//! Pure and independent of the retrieval mechanism, so a future
//! server-side pushdown can replace the in-memory pass without touching
//! the semantics.

use roost_core::types::Listing;

use crate::types::SearchQuery;

/// Filter predicates derived from a search intent.
///
/// An absent field imposes no constraint (open filter); it is never
/// interpreted as "must be empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Substring matched against address or title, case-sensitive.
    pub location: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<i64>,
    /// Exact-match room category.
    pub room_type: Option<String>,
    /// Required amenity tags; a listing must contain all of them.
    pub amenities: Vec<String>,
}

impl From<&SearchQuery> for ListingFilter {
    fn from(query: &SearchQuery) -> Self {
        Self {
            location: query.location.clone(),
            max_price: query.max_price,
            room_type: query.room_type.clone(),
            amenities: query.amenities.clone(),
        }
    }
}

/// True iff every present filter field is individually satisfied by the
/// listing (conjunctive semantics).
pub fn matches(listing: &Listing, filter: &ListingFilter) -> bool {
    if let Some(ref location) = filter.location {
        // Either field matching is sufficient.
        if !listing.address.contains(location.as_str())
            && !listing.title.contains(location.as_str())
        {
            return false;
        }
    }

    if let Some(max_price) = filter.max_price {
        if listing.price > max_price {
            return false;
        }
    }

    if let Some(ref room_type) = filter.room_type {
        if listing.room_type != *room_type {
            return false;
        }
    }

    // Superset check: every requested amenity must be present.
    filter
        .amenities
        .iter()
        .all(|amenity| listing.amenities.contains(amenity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing() -> Listing {
        Listing {
            id: "L1".to_string(),
            title: "斗六套房A".to_string(),
            address: "雲林縣斗六市大學路100號".to_string(),
            price: 2800,
            room_type: "套房".to_string(),
            amenities: vec!["Wi-Fi".to_string(), "冷氣".to_string()],
            is_published: true,
        }
    }

    // ---- Open filter ----

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(matches(&make_listing(), &ListingFilter::default()));
    }

    // ---- Location ----

    #[test]
    fn test_location_matches_title() {
        let filter = ListingFilter {
            location: Some("套房A".to_string()),
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));
    }

    #[test]
    fn test_location_matches_address() {
        let filter = ListingFilter {
            location: Some("大學路".to_string()),
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));
    }

    #[test]
    fn test_location_either_field_is_sufficient() {
        // Present in the title only.
        let mut listing = make_listing();
        listing.address = "別的地方".to_string();
        let filter = ListingFilter {
            location: Some("斗六".to_string()),
            ..Default::default()
        };
        assert!(matches(&listing, &filter));

        // Present in the address only.
        let mut listing = make_listing();
        listing.title = "某間房".to_string();
        assert!(matches(&listing, &filter));
    }

    #[test]
    fn test_location_no_match() {
        let filter = ListingFilter {
            location: Some("台北".to_string()),
            ..Default::default()
        };
        assert!(!matches(&make_listing(), &filter));
    }

    #[test]
    fn test_location_is_case_sensitive() {
        let mut listing = make_listing();
        listing.title = "Douliu Studio".to_string();
        listing.address = String::new();
        let filter = ListingFilter {
            location: Some("douliu".to_string()),
            ..Default::default()
        };
        assert!(!matches(&listing, &filter));
    }

    // ---- Price ----

    #[test]
    fn test_max_price_inclusive() {
        let filter = ListingFilter {
            max_price: Some(2800),
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));
    }

    #[test]
    fn test_max_price_rejects_above() {
        let filter = ListingFilter {
            max_price: Some(2799),
            ..Default::default()
        };
        assert!(!matches(&make_listing(), &filter));
    }

    #[test]
    fn test_max_price_zero_is_a_real_ceiling() {
        let filter = ListingFilter {
            max_price: Some(0),
            ..Default::default()
        };
        assert!(!matches(&make_listing(), &filter));

        let mut free = make_listing();
        free.price = 0;
        assert!(matches(&free, &filter));
    }

    // ---- Room type ----

    #[test]
    fn test_room_type_exact_match() {
        let filter = ListingFilter {
            room_type: Some("套房".to_string()),
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));

        let filter = ListingFilter {
            room_type: Some("雅房".to_string()),
            ..Default::default()
        };
        assert!(!matches(&make_listing(), &filter));
    }

    #[test]
    fn test_room_type_no_substring_semantics() {
        let filter = ListingFilter {
            room_type: Some("套".to_string()),
            ..Default::default()
        };
        assert!(!matches(&make_listing(), &filter));
    }

    // ---- Amenities ----

    #[test]
    fn test_amenities_superset_required() {
        // Requesting {Wi-Fi, 冷氣} must reject a listing with only {Wi-Fi}.
        let mut listing = make_listing();
        listing.amenities = vec!["Wi-Fi".to_string()];
        let filter = ListingFilter {
            amenities: vec!["Wi-Fi".to_string(), "冷氣".to_string()],
            ..Default::default()
        };
        assert!(!matches(&listing, &filter));
    }

    #[test]
    fn test_amenities_all_present_matches() {
        let filter = ListingFilter {
            amenities: vec!["Wi-Fi".to_string(), "冷氣".to_string()],
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));
    }

    #[test]
    fn test_amenities_subset_request_matches() {
        let filter = ListingFilter {
            amenities: vec!["冷氣".to_string()],
            ..Default::default()
        };
        assert!(matches(&make_listing(), &filter));
    }

    #[test]
    fn test_empty_amenities_imposes_nothing() {
        let mut listing = make_listing();
        listing.amenities = vec![];
        assert!(matches(&listing, &ListingFilter::default()));
    }

    // ---- Conjunction ----

    #[test]
    fn test_all_fields_conjunctive() {
        let filter = ListingFilter {
            location: Some("斗六".to_string()),
            max_price: Some(3000),
            room_type: Some("套房".to_string()),
            amenities: vec!["Wi-Fi".to_string()],
        };
        assert!(matches(&make_listing(), &filter));

        // Flipping any one dimension to a failing value must reject.
        let mut f = filter.clone();
        f.location = Some("虎尾".to_string());
        assert!(!matches(&make_listing(), &f));

        let mut f = filter.clone();
        f.max_price = Some(1000);
        assert!(!matches(&make_listing(), &f));

        let mut f = filter.clone();
        f.room_type = Some("雅房".to_string());
        assert!(!matches(&make_listing(), &f));

        let mut f = filter;
        f.amenities = vec!["車位".to_string()];
        assert!(!matches(&make_listing(), &f));
    }

    /// Randomized sweep of the conjunction property: `matches` is true iff
    /// every present field is individually satisfied. Uses a seeded LCG so
    /// the sweep is deterministic.
    #[test]
    fn test_conjunction_property_randomized() {
        let mut seed: u64 = 0x5EED_CAFE;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as u32
        };

        let locations = ["斗六", "虎尾", "雲科大"];
        let room_types = ["套房", "雅房", "整層住家"];
        let amenity_pool = ["Wi-Fi", "冷氣", "洗衣機", "車位"];

        for _ in 0..500 {
            let listing = Listing {
                id: "X".to_string(),
                title: format!("{}房源", locations[(next() % 3) as usize]),
                address: format!("{}某路", locations[(next() % 3) as usize]),
                price: (next() % 5000) as i64,
                room_type: room_types[(next() % 3) as usize].to_string(),
                amenities: amenity_pool
                    .iter()
                    .filter(|_| next() % 2 == 0)
                    .map(|a| a.to_string())
                    .collect(),
                is_published: true,
            };

            let filter = ListingFilter {
                location: (next() % 2 == 0).then(|| locations[(next() % 3) as usize].to_string()),
                max_price: (next() % 2 == 0).then(|| (next() % 5000) as i64),
                room_type: (next() % 2 == 0).then(|| room_types[(next() % 3) as usize].to_string()),
                amenities: amenity_pool
                    .iter()
                    .filter(|_| next() % 4 == 0)
                    .map(|a| a.to_string())
                    .collect(),
            };

            let location_ok = filter.location.as_ref().map_or(true, |loc| {
                listing.address.contains(loc.as_str()) || listing.title.contains(loc.as_str())
            });
            let price_ok = filter.max_price.map_or(true, |max| listing.price <= max);
            let type_ok = filter
                .room_type
                .as_ref()
                .map_or(true, |rt| listing.room_type == *rt);
            let amenities_ok = filter
                .amenities
                .iter()
                .all(|a| listing.amenities.contains(a));

            assert_eq!(
                matches(&listing, &filter),
                location_ok && price_ok && type_ok && amenities_ok,
                "conjunction mismatch for listing {:?} and filter {:?}",
                listing,
                filter
            );
        }
    }

    // ---- From<SearchQuery> ----

    #[test]
    fn test_filter_from_search_query() {
        let query = SearchQuery {
            location: Some("斗六".to_string()),
            max_price: Some(3000),
            room_type: Some("套房".to_string()),
            amenities: vec!["Wi-Fi".to_string()],
        };
        let filter = ListingFilter::from(&query);
        assert_eq!(filter.location.as_deref(), Some("斗六"));
        assert_eq!(filter.max_price, Some(3000));
        assert_eq!(filter.room_type.as_deref(), Some("套房"));
        assert_eq!(filter.amenities, vec!["Wi-Fi".to_string()]);
    }
}
