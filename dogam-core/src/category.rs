use std::fmt;
use std::str::FromStr;

/// The seven fixed record categories. The set is closed at build time;
/// adding a category is a code change, not a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Fish,
    Bird,
    Insect,
    Cooking,
    Garden,
    Shop,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fish,
        Category::Bird,
        Category::Insect,
        Category::Cooking,
        Category::Garden,
        Category::Shop,
        Category::Other,
    ];

    /// Stable string id, also the stem of the category's data file.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Fish => "fish",
            Category::Bird => "bird",
            Category::Insect => "insect",
            Category::Cooking => "cooking",
            Category::Garden => "garden",
            Category::Shop => "shop",
            Category::Other => "other",
        }
    }

    /// Tab label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fish => "물고기",
            Category::Bird => "새",
            Category::Insect => "곤충",
            Category::Cooking => "요리",
            Category::Garden => "원예",
            Category::Shop => "상점가",
            Category::Other => "기타",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Fish => "🐟",
            Category::Bird => "🐦",
            Category::Insect => "🐛",
            Category::Cooking => "🍳",
            Category::Garden => "🌱",
            Category::Shop => "🏪",
            Category::Other => "📦",
        }
    }

    /// Facets whose selectors are offered for this category. `location`
    /// is honored by the filter engine but never offered as a selector.
    pub fn supported_facets(&self) -> &'static [FacetName] {
        match self {
            Category::Fish => &[FacetName::Level, FacetName::Weather, FacetName::Shadow],
            Category::Bird | Category::Insect => &[FacetName::Level, FacetName::Weather],
            Category::Cooking | Category::Garden => &[FacetName::Level],
            Category::Shop | Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fish" => Ok(Category::Fish),
            "bird" => Ok(Category::Bird),
            "insect" => Ok(Category::Insect),
            "cooking" => Ok(Category::Cooking),
            "garden" => Ok(Category::Garden),
            "shop" => Ok(Category::Shop),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// The filterable attributes a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetName {
    Level,
    Weather,
    Location,
    Shadow,
}

impl FacetName {
    pub fn id(&self) -> &'static str {
        match self {
            FacetName::Level => "level",
            FacetName::Weather => "weather",
            FacetName::Location => "location",
            FacetName::Shadow => "shadow",
        }
    }
}

impl fmt::Display for FacetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FacetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(FacetName::Level),
            "weather" => Ok(FacetName::Weather),
            "location" => Ok(FacetName::Location),
            "shadow" => Ok(FacetName::Shadow),
            other => Err(format!("unknown facet '{}'", other)),
        }
    }
}
