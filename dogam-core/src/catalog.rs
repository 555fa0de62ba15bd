use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use crate::category::Category;
use crate::io::load_collection;
use crate::models::Record;

/// All seven collections, loaded once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct Catalog {
    collections: BTreeMap<Category, Vec<Record>>,
}

impl Catalog {
    /// Load `<id>.json` for every category from a directory.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Catalog, Box<dyn Error>> {
        let mut collections = BTreeMap::new();
        for category in Category::ALL {
            let path = dir.as_ref().join(format!("{}.json", category.id()));
            collections.insert(category, load_collection(category, &path)?);
        }
        Ok(Catalog { collections })
    }

    /// Build a catalog from collections parsed elsewhere.
    pub fn from_collections(collections: BTreeMap<Category, Vec<Record>>) -> Catalog {
        Catalog { collections }
    }

    pub fn records(&self, category: Category) -> &[Record] {
        self.collections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total record count across every category.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShopRecord;

    #[test]
    fn test_records_for_a_missing_category_are_empty() {
        let mut collections = BTreeMap::new();
        collections.insert(
            Category::Shop,
            vec![Record::Shop(ShopRecord {
                name: "나무 의자".to_string(),
                price: 320,
                method: "목공 작업대".to_string(),
            })],
        );
        let catalog = Catalog::from_collections(collections);

        assert_eq!(catalog.records(Category::Shop).len(), 1);
        assert!(catalog.records(Category::Fish).is_empty());
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_data_dir_fails_loudly() {
        assert!(Catalog::load_dir("no/such/dir").is_err());
    }
}
