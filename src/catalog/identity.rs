use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Metadata category a resolver can be asked about.
///
/// Six of the categories are answered by a catalog context; `Model` and
/// `Main` are loaded straight from resources, and `Other` is never answered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SchemaCategory {
    Component,
    DataFormat,
    Language,
    Transformer,
    DevConsole,
    PojoBean,
    Other,
    Model,
    Main,
}

/// Category of parameter schema a catalog context knows how to produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CatalogKind {
    Component,
    DataFormat,
    Language,
    Transformer,
    DevConsole,
    PojoBean,
    Eip,
}

impl SchemaCategory {
    pub const ALL: [SchemaCategory; 9] = [
        SchemaCategory::Component,
        SchemaCategory::DataFormat,
        SchemaCategory::Language,
        SchemaCategory::Transformer,
        SchemaCategory::DevConsole,
        SchemaCategory::PojoBean,
        SchemaCategory::Other,
        SchemaCategory::Model,
        SchemaCategory::Main,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaCategory::Component => "component",
            SchemaCategory::DataFormat => "dataformat",
            SchemaCategory::Language => "language",
            SchemaCategory::Transformer => "transformer",
            SchemaCategory::DevConsole => "dev-console",
            SchemaCategory::PojoBean => "bean",
            SchemaCategory::Other => "other",
            SchemaCategory::Model => "model",
            SchemaCategory::Main => "main",
        }
    }

    /// Parse the string form; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    /// The catalog-context lookup backing this category, if it is delegated.
    pub fn catalog_kind(&self) -> Option<CatalogKind> {
        match self {
            SchemaCategory::Component => Some(CatalogKind::Component),
            SchemaCategory::DataFormat => Some(CatalogKind::DataFormat),
            SchemaCategory::Language => Some(CatalogKind::Language),
            SchemaCategory::Transformer => Some(CatalogKind::Transformer),
            SchemaCategory::DevConsole => Some(CatalogKind::DevConsole),
            SchemaCategory::PojoBean => Some(CatalogKind::PojoBean),
            SchemaCategory::Other | SchemaCategory::Model | SchemaCategory::Main => None,
        }
    }
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 7] = [
        CatalogKind::Component,
        CatalogKind::DataFormat,
        CatalogKind::Language,
        CatalogKind::Transformer,
        CatalogKind::DevConsole,
        CatalogKind::PojoBean,
        CatalogKind::Eip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Component => "component",
            CatalogKind::DataFormat => "dataformat",
            CatalogKind::Language => "language",
            CatalogKind::Transformer => "transformer",
            CatalogKind::DevConsole => "dev-console",
            CatalogKind::PojoBean => "bean",
            CatalogKind::Eip => "eip",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for SchemaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchemaCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchemaCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown schema category '{value}'")))
    }
}

impl Serialize for CatalogKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown catalog kind '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_parse_back() {
        for category in SchemaCategory::ALL {
            assert_eq!(SchemaCategory::parse(category.as_str()), Some(category));
        }
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SchemaCategory::parse("eip"), None);
        assert_eq!(CatalogKind::parse("model"), None);
    }

    #[test]
    fn only_six_categories_delegate_to_catalog() {
        let delegated: Vec<_> = SchemaCategory::ALL
            .into_iter()
            .filter_map(|category| category.catalog_kind())
            .collect();
        assert_eq!(delegated.len(), 6);
        assert!(!delegated.contains(&CatalogKind::Eip));
        assert_eq!(SchemaCategory::Other.catalog_kind(), None);
        assert_eq!(SchemaCategory::Model.catalog_kind(), None);
        assert_eq!(SchemaCategory::Main.catalog_kind(), None);
    }

    #[test]
    fn serde_uses_string_forms() {
        let encoded = serde_json::to_string(&SchemaCategory::DevConsole).unwrap();
        assert_eq!(encoded, "\"dev-console\"");
        let decoded: CatalogKind = serde_json::from_str("\"bean\"").unwrap();
        assert_eq!(decoded, CatalogKind::PojoBean);
        assert!(serde_json::from_str::<SchemaCategory>("\"route\"").is_err());
    }
}
