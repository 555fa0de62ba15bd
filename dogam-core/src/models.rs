use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishRecord {
    pub level: u32,
    pub name: String,
    pub time: String,
    pub weather: String,
    pub location: String,
    pub shadow: String,
    pub star1: u32,
    pub star2: u32,
    pub star3: u32,
    pub star4: u32,
    pub star5: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdRecord {
    pub level: u32,
    pub name: String,
    pub time: String,
    pub weather: String,
    pub location: String,
    pub star1: u32,
    pub star2: u32,
    pub star3: u32,
    pub star4: u32,
    pub star5: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsectRecord {
    pub level: u32,
    pub name: String,
    pub time: String,
    pub weather: String,
    pub location: String,
    pub star1: u32,
    pub star2: u32,
    pub star3: u32,
    pub star4: u32,
    pub star5: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingRecord {
    pub level: u32,
    pub name: String,
    pub obtain_method: String,
    pub recipe: String,
    pub cost: u32,
    pub efficiency: String,
    pub star1: u32,
    pub star2: u32,
    pub star3: u32,
    pub star4: u32,
    pub star5: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenRecord {
    pub level: u32,
    pub content: String,
    pub crop: String,
    pub cost: u32,
    pub time: String,
    pub star1: u32,
    pub star2: u32,
    pub star3: u32,
    pub star4: u32,
    pub star5: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub name: String,
    pub price: u32,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherRecord {
    pub name: String,
    pub price: u32,
    pub location: String,
    pub time: String,
}

/// A record from any category. The field accessors return `None` when the
/// variant has no such field, which is what lets one filter function serve
/// all seven categories.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Fish(FishRecord),
    Bird(BirdRecord),
    Insect(InsectRecord),
    Cooking(CookingRecord),
    Garden(GardenRecord),
    Shop(ShopRecord),
    Other(OtherRecord),
}

impl Record {
    pub fn category(&self) -> Category {
        match self {
            Record::Fish(_) => Category::Fish,
            Record::Bird(_) => Category::Bird,
            Record::Insect(_) => Category::Insect,
            Record::Cooking(_) => Category::Cooking,
            Record::Garden(_) => Category::Garden,
            Record::Shop(_) => Category::Shop,
            Record::Other(_) => Category::Other,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Record::Fish(r) => Some(&r.name),
            Record::Bird(r) => Some(&r.name),
            Record::Insect(r) => Some(&r.name),
            Record::Cooking(r) => Some(&r.name),
            Record::Garden(_) => None,
            Record::Shop(r) => Some(&r.name),
            Record::Other(r) => Some(&r.name),
        }
    }

    pub fn crop(&self) -> Option<&str> {
        match self {
            Record::Garden(r) => Some(&r.crop),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Record::Fish(r) => Some(&r.location),
            Record::Bird(r) => Some(&r.location),
            Record::Insect(r) => Some(&r.location),
            Record::Other(r) => Some(&r.location),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<u32> {
        match self {
            Record::Fish(r) => Some(r.level),
            Record::Bird(r) => Some(r.level),
            Record::Insect(r) => Some(r.level),
            Record::Cooking(r) => Some(r.level),
            Record::Garden(r) => Some(r.level),
            Record::Shop(_) | Record::Other(_) => None,
        }
    }

    pub fn weather(&self) -> Option<&str> {
        match self {
            Record::Fish(r) => Some(&r.weather),
            Record::Bird(r) => Some(&r.weather),
            Record::Insect(r) => Some(&r.weather),
            _ => None,
        }
    }

    pub fn shadow(&self) -> Option<&str> {
        match self {
            Record::Fish(r) => Some(&r.shadow),
            _ => None,
        }
    }

    /// Display key for a card: `name` everywhere except garden, which is
    /// keyed by its crop.
    pub fn display_name(&self) -> &str {
        match self {
            Record::Garden(r) => &r.crop,
            _ => self.name().unwrap_or_default(),
        }
    }

    /// The five ordinal sale prices, for the variants that carry them.
    pub fn star_prices(&self) -> Option<[u32; 5]> {
        match self {
            Record::Fish(r) => Some([r.star1, r.star2, r.star3, r.star4, r.star5]),
            Record::Bird(r) => Some([r.star1, r.star2, r.star3, r.star4, r.star5]),
            Record::Insect(r) => Some([r.star1, r.star2, r.star3, r.star4, r.star5]),
            Record::Cooking(r) => Some([r.star1, r.star2, r.star3, r.star4, r.star5]),
            Record::Garden(r) => Some([r.star1, r.star2, r.star3, r.star4, r.star5]),
            Record::Shop(_) | Record::Other(_) => None,
        }
    }
}

/// Active facet selections. An empty set places no constraint on its facet;
/// a record only has to satisfy the non-empty sets. OR within a facet,
/// AND across facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub levels: BTreeSet<u32>,
    pub weathers: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub shadows: BTreeSet<String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every selection set.
    pub fn clear(&mut self) {
        self.levels.clear();
        self.weathers.clear();
        self.locations.clear();
        self.shadows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_record() -> Record {
        Record::Shop(ShopRecord {
            name: "나무 의자".to_string(),
            price: 320,
            method: "목공 작업대".to_string(),
        })
    }

    fn garden_record() -> Record {
        Record::Garden(GardenRecord {
            level: 2,
            content: "씨앗 꾸러미".to_string(),
            crop: "당근".to_string(),
            cost: 40,
            time: "2일".to_string(),
            star1: 12,
            star2: 18,
            star3: 24,
            star4: 36,
            star5: 48,
        })
    }

    #[test]
    fn test_absent_fields_are_none() {
        let shop = shop_record();
        assert_eq!(shop.level(), None);
        assert_eq!(shop.weather(), None);
        assert_eq!(shop.location(), None);
        assert_eq!(shop.shadow(), None);
        assert_eq!(shop.crop(), None);
        assert_eq!(shop.star_prices(), None);
    }

    #[test]
    fn test_garden_is_keyed_by_crop() {
        let garden = garden_record();
        assert_eq!(garden.name(), None);
        assert_eq!(garden.crop(), Some("당근"));
        assert_eq!(garden.display_name(), "당근");
    }

    #[test]
    fn test_cooking_field_names_match_the_data_files() {
        let raw = serde_json::json!({
            "level": 4,
            "name": "야채 수프",
            "obtainMethod": "요리 교실",
            "recipe": "당근 x2, 감자 x1",
            "cost": 60,
            "efficiency": "보통",
            "star1": 80, "star2": 120, "star3": 160, "star4": 240, "star5": 320
        });
        let cooking: CookingRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(cooking.obtain_method, "요리 교실");
        assert_eq!(Record::Cooking(cooking).level(), Some(4));
    }

    #[test]
    fn test_filters_clear_empties_every_set() {
        let mut filters = Filters::new();
        filters.levels.insert(3);
        filters.weathers.insert("🌈".to_string());
        filters.locations.insert("강".to_string());
        filters.shadows.insert("대형".to_string());

        filters.clear();
        assert_eq!(filters, Filters::new());
    }
}
