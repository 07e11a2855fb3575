#![forbid(unsafe_code)]

//! Static navigation catalog.
//!
//! The category tree rendered by both the mobile accordion and the desktop
//! mega menu. Immutable after controller construction; a full system would
//! source it from a CMS, here it is declarative data.

/// A single navigation entry inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryItem {
    /// Display name.
    pub name: String,
    /// Route the entry links to.
    pub link: String,
}

impl CategoryItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// An ordered category of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductCategory {
    /// Section title shown as the accordion row / mega-menu column header.
    pub title: String,
    /// Entries in display order.
    pub items: Vec<CategoryItem>,
}

impl ProductCategory {
    /// Create a category with its entries.
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<CategoryItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// The storefront's default product navigation.
#[must_use]
pub fn default_catalog() -> Vec<ProductCategory> {
    vec![
        ProductCategory::new(
            "Sopaipillas 🇨🇱",
            vec![
                CategoryItem::new("Formato Cóctel", "/productos/sopaipillas-coctel"),
                CategoryItem::new("Formato Grande", "/productos/sopaipillas-grandes"),
            ],
        ),
        ProductCategory::new(
            "Empanadas Crudas",
            vec![
                CategoryItem::new("Para Horno", "/productos/empanadas-horno"),
                CategoryItem::new("Para Freír", "/productos/empanadas-freir"),
            ],
        ),
        ProductCategory::new(
            "Masas Crudas",
            vec![CategoryItem::new("Discos para Empanada", "/productos/masas")],
        ),
        ProductCategory::new(
            "Otras Frituras",
            vec![
                CategoryItem::new("Calzones Rotos", "/productos/calzones-rotos"),
                CategoryItem::new("Arrollados y Chaparritas", "/productos/arrollados"),
                CategoryItem::new("Tequeños", "/productos/tequenos"),
            ],
        ),
    ]
}
