use unicode_normalization::UnicodeNormalization;

use crate::models::{Filters, Record};

/// Apply the search term and facet selections to a collection, returning
/// the matching records in their original order (a stable filter, never
/// a sort).
pub fn apply_filters(records: &[Record], search_term: &str, filters: &Filters) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches_filters(record, search_term, filters))
        .cloned()
        .collect()
}

/// Check one record against the search term and every facet clause.
/// AND across clauses, OR within a facet's selected values. A record that
/// lacks the field a clause inspects passes that clause, so facets only
/// meaningful to other categories never filter anything out.
pub fn matches_filters(record: &Record, search_term: &str, filters: &Filters) -> bool {
    matches_search(record, search_term)
        && matches_level(record, filters)
        && matches_weather(record, filters)
        && matches_location(record, filters)
        && matches_shadow(record, filters)
}

/// Check whether any facet value is selected.
pub fn has_filters(filters: &Filters) -> bool {
    !filters.levels.is_empty()
        || !filters.weathers.is_empty()
        || !filters.locations.is_empty()
        || !filters.shadows.is_empty()
}

fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = normalize(term);
    [record.name(), record.location(), record.crop()]
        .into_iter()
        .flatten()
        .any(|field| normalize(field).contains(&needle))
}

fn matches_level(record: &Record, filters: &Filters) -> bool {
    if filters.levels.is_empty() {
        return true;
    }
    match record.level() {
        Some(level) => filters.levels.contains(&level),
        None => true,
    }
}

fn matches_weather(record: &Record, filters: &Filters) -> bool {
    if filters.weathers.is_empty() {
        return true;
    }
    match record.weather() {
        // A record's weather string may concatenate several symbols
        // ("☀️🌈"), so a selection matches by substring.
        Some(weather) => filters
            .weathers
            .iter()
            .any(|selected| weather.contains(selected.as_str())),
        None => true,
    }
}

fn matches_location(record: &Record, filters: &Filters) -> bool {
    if filters.locations.is_empty() {
        return true;
    }
    match record.location() {
        Some(location) => filters
            .locations
            .iter()
            .any(|selected| location.contains(selected.as_str())),
        None => true,
    }
}

fn matches_shadow(record: &Record, filters: &Filters) -> bool {
    if filters.shadows.is_empty() {
        return true;
    }
    match record.shadow() {
        // Exact membership, unlike weather/location: shadow values come
        // from a small closed vocabulary and never concatenate.
        Some(shadow) => filters.shadows.contains(shadow),
        None => true,
    }
}

/// NFC-normalize and lowercase before comparing. The bundled data is
/// Korean and may arrive decomposed depending on how a file was authored.
fn normalize(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FishRecord, ShopRecord};

    fn fish(name: &str, level: u32, weather: &str, location: &str, shadow: &str) -> Record {
        Record::Fish(FishRecord {
            level,
            name: name.to_string(),
            time: "종일".to_string(),
            weather: weather.to_string(),
            location: location.to_string(),
            shadow: shadow.to_string(),
            star1: 10,
            star2: 15,
            star3: 20,
            star4: 30,
            star5: 40,
        })
    }

    fn shop(name: &str) -> Record {
        Record::Shop(ShopRecord {
            name: name.to_string(),
            price: 100,
            method: "상점".to_string(),
        })
    }

    fn sample_records() -> Vec<Record> {
        vec![
            fish("Bass", 3, "☀️", "River", "소형"),
            fish("Trout", 5, "🌧️", "Lake", "중형"),
        ]
    }

    #[test]
    fn test_empty_state_is_identity() {
        let records = sample_records();
        let result = apply_filters(&records, "", &Filters::new());
        assert_eq!(result, records);
    }

    #[test]
    fn test_result_preserves_original_order() {
        let records = vec![
            fish("가물치", 7, "☀️", "늪", "대형"),
            fish("붕어", 1, "☀️", "연못", "소형"),
            fish("잉어", 3, "☀️", "연못", "중형"),
        ];
        let mut filters = Filters::new();
        filters.levels.insert(1);
        filters.levels.insert(7);

        let result = apply_filters(&records, "", &filters);
        assert_eq!(result, vec![records[0].clone(), records[1].clone()]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = sample_records();
        let mut filters = Filters::new();
        filters.weathers.insert("☀️".to_string());

        let once = apply_filters(&records, "a", &filters);
        let twice = apply_filters(&once, "a", &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let records = sample_records();
        let result = apply_filters(&records, "ba", &Filters::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), Some("Bass"));
    }

    #[test]
    fn test_search_matches_location() {
        let records = sample_records();
        let result = apply_filters(&records, "lake", &Filters::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), Some("Trout"));
    }

    #[test]
    fn test_search_matches_crop() {
        use crate::models::GardenRecord;
        let records = vec![Record::Garden(GardenRecord {
            level: 2,
            content: "씨앗".to_string(),
            crop: "당근".to_string(),
            cost: 40,
            time: "2일".to_string(),
            star1: 12,
            star2: 18,
            star3: 24,
            star4: 36,
            star5: 48,
        })];
        assert_eq!(apply_filters(&records, "당근", &Filters::new()).len(), 1);
        assert_eq!(apply_filters(&records, "감자", &Filters::new()).len(), 0);
    }

    #[test]
    fn test_no_search_field_matches_nonempty_term() {
        // Shop records have a name but no location/crop; a term that hits
        // none of the present fields excludes the record without faulting.
        let records = vec![shop("나무 의자")];
        assert_eq!(apply_filters(&records, "강", &Filters::new()).len(), 0);
    }

    #[test]
    fn test_level_selection() {
        let records = sample_records();
        let mut filters = Filters::new();
        filters.levels.insert(5);

        let result = apply_filters(&records, "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), Some("Trout"));
    }

    #[test]
    fn test_records_without_a_level_pass_the_level_clause() {
        let records = vec![shop("나무 의자")];
        let mut filters = Filters::new();
        filters.levels.insert(3);

        assert_eq!(apply_filters(&records, "", &filters).len(), 1);
    }

    #[test]
    fn test_weather_selection_matches_by_substring() {
        let records = vec![fish("무지개송어", 5, "☀️🌈", "폭포", "중형")];
        let mut filters = Filters::new();
        filters.weathers.insert("🌈".to_string());

        assert!(matches_filters(&records[0], "", &filters));
    }

    #[test]
    fn test_weather_selection_excludes_nonmatching_records() {
        let records = vec![fish("메기", 8, "🌧️", "강 하류", "대형")];
        let mut filters = Filters::new();
        filters.weathers.insert("☀️".to_string());
        filters.weathers.insert("🌈".to_string());

        assert!(!matches_filters(&records[0], "", &filters));
    }

    #[test]
    fn test_location_selection_matches_by_substring() {
        let record = fish("잉어", 3, "☀️", "강 상류", "중형");
        let mut filters = Filters::new();
        filters.locations.insert("강".to_string());
        assert!(matches_filters(&record, "", &filters));

        filters.locations.clear();
        filters.locations.insert("바다".to_string());
        assert!(!matches_filters(&record, "", &filters));
    }

    #[test]
    fn test_shadow_selection_is_exact() {
        let record = fish("메기", 8, "🌧️", "강 하류", "대형");

        let mut filters = Filters::new();
        filters.shadows.insert("소형".to_string());
        assert!(!matches_filters(&record, "", &filters));

        filters.shadows.insert("대형".to_string());
        assert!(matches_filters(&record, "", &filters));
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let records = sample_records();
        let mut filters = Filters::new();
        filters.levels.insert(3);

        // Search matches Trout, level matches Bass; the conjunction is empty.
        assert_eq!(apply_filters(&records, "trout", &filters).len(), 0);
    }

    #[test]
    fn test_has_filters() {
        let mut filters = Filters::new();
        assert!(!has_filters(&filters));

        filters.shadows.insert("금색".to_string());
        assert!(has_filters(&filters));
    }
}
