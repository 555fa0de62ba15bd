use crate::models::Record;

/// The weather vocabulary is a fixed closed set, not derived from data.
/// Each entry is the symbol stored in record weather strings and its label.
pub const WEATHER_OPTIONS: [(&str, &str); 3] = [
    ("☀️", "맑음"),
    ("🌧️", "비"),
    ("🌈", "무지개"),
];

/// Distinct levels across a collection, ascending. Records without a
/// level are skipped. Always computed over the full unfiltered collection
/// so selector options never disappear while filtering.
pub fn level_options(records: &[Record]) -> Vec<u32> {
    let mut levels: Vec<u32> = records.iter().filter_map(Record::level).collect();
    levels.sort_unstable();
    levels.dedup();
    levels
}

/// Distinct shadow classes in order of first appearance.
pub fn shadow_options(records: &[Record]) -> Vec<String> {
    let mut shadows: Vec<String> = Vec::new();
    for record in records {
        if let Some(shadow) = record.shadow() {
            if !shadows.iter().any(|seen| seen == shadow) {
                shadows.push(shadow.to_string());
            }
        }
    }
    shadows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FishRecord, ShopRecord};

    fn fish(level: u32, shadow: &str) -> Record {
        Record::Fish(FishRecord {
            level,
            name: "물고기".to_string(),
            time: "종일".to_string(),
            weather: "☀️".to_string(),
            location: "연못".to_string(),
            shadow: shadow.to_string(),
            star1: 10,
            star2: 15,
            star3: 20,
            star4: 30,
            star5: 40,
        })
    }

    #[test]
    fn test_levels_are_sorted_and_deduplicated() {
        let records = vec![fish(5, "소형"), fish(3, "소형"), fish(5, "중형"), fish(1, "대형")];
        assert_eq!(level_options(&records), vec![1, 3, 5]);
    }

    #[test]
    fn test_shadows_keep_first_seen_order() {
        let records = vec![fish(1, "중형"), fish(2, "소형"), fish(3, "중형"), fish(4, "금색")];
        assert_eq!(shadow_options(&records), vec!["중형", "소형", "금색"]);
    }

    #[test]
    fn test_absent_facets_yield_empty_options() {
        let records = vec![Record::Shop(ShopRecord {
            name: "나무 의자".to_string(),
            price: 320,
            method: "목공 작업대".to_string(),
        })];
        assert!(level_options(&records).is_empty());
        assert!(shadow_options(&records).is_empty());
        assert!(level_options(&[]).is_empty());
    }
}
