// Core structs: Product, Category, BuildType, BuildRequest, BuildSuggestion
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Shown by the frontend when a catalog record has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.png";

/// Canonical product record. Every catalog source is normalized into this
/// shape before any other component sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub brand: String,
    pub specs: BTreeMap<String, String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Product {
    /// Which of the eight build slots this product fills, if any.
    pub fn slot(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Wattage spec as an integer; unparseable or missing values read as 0.
    pub fn wattage(&self) -> u32 {
        self.specs
            .get("wattage")
            .map(|w| crate::utils::leading_number(w))
            .unwrap_or(0)
    }
}

/// The eight build slots, in the order a build lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Cooler,
    Case,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Cooler,
        Category::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Motherboard => "Motherboard",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Psu => "PSU",
            Category::Cooler => "Cooler",
            Category::Case => "Case",
        }
    }

    /// Case-insensitive label lookup. SSD and HDD records fill the storage slot.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("ssd") || label.eq_ignore_ascii_case("hdd") {
            return Some(Category::Storage);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    #[default]
    Gaming,
    Workstation,
    Budget,
    HighEnd,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Gaming => "gaming",
            BuildType::Workstation => "workstation",
            BuildType::Budget => "budget",
            BuildType::HighEnd => "high-end",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated query together with the intent extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest {
    pub raw_query: String,
    pub budget: u32,
    pub build_type: BuildType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSuggestion {
    pub components: Vec<Product>,
    pub total_price: f64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(String),
    #[error("catalog request timed out after {0} ms")]
    Timeout(u64),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("malformed catalog payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Http(e.to_string())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    EmptyQuery,
}
