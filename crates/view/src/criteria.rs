use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_catalog::{Price, Product};
use storefront_core::{DomainError, ValueObject};

/// Category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Exact match on the category tag; `All` matches everything.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    /// `""` and `"all"` (any case) select everything.
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Active filter constraints, combined conjunctively.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the product title; empty matches all.
    pub name_query: String,
    /// Inclusive lower bound.
    pub min_price: Price,
    /// Inclusive upper bound; `None` means unbounded.
    pub max_price: Option<Price>,
    pub category: CategoryFilter,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn matches_price(&self, price: Price) -> bool {
        if price.total_cmp(&self.min_price) == Ordering::Less {
            return false;
        }
        match self.max_price {
            Some(max) => price.total_cmp(&max) != Ordering::Greater,
            None => true,
        }
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
    }
}

/// Ordering rule for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "price-low-to-high")]
    PriceAscending,
    #[serde(rename = "price-high-to-low")]
    PriceDescending,
    #[serde(rename = "unsorted")]
    Unsorted,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriceAscending => "price-low-to-high",
            SortOrder::PriceDescending => "price-high-to-low",
            SortOrder::Unsorted => "unsorted",
        }
    }

    /// Comparator for a stable sort. `Unsorted` treats everything as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::PriceAscending => a.price.total_cmp(&b.price),
            SortOrder::PriceDescending => b.price.total_cmp(&a.price),
            SortOrder::Unsorted => Ordering::Equal,
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-low-to-high" | "asc" => Ok(SortOrder::PriceAscending),
            "price-high-to-low" | "desc" => Ok(SortOrder::PriceDescending),
            "unsorted" | "none" => Ok(SortOrder::Unsorted),
            other => Err(DomainError::validation(format!(
                "unknown sort order '{other}' (expected price-low-to-high, price-high-to-low or unsorted)"
            ))),
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
