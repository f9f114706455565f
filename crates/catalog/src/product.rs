use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use selvedge_core::{DomainError, Entity, Money, ProductId};

/// Product category. Fixed set; the storefront sells exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "T-shirts")]
    TShirts,
    Hoodies,
    Jeans,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::TShirts, Category::Hoodies, Category::Jeans];

    pub fn label(self) -> &'static str {
        match self {
            Category::TShirts => "T-shirts",
            Category::Hoodies => "Hoodies",
            Category::Jeans => "Jeans",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Product color.
///
/// `Gray` is in the set because the seed catalog ships gray hoodies, even
/// though the filter sidebar only offers four swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Blue,
    Red,
    Gray,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Black,
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Gray,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Gray => "gray",
        }
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product.
///
/// Immutable once created; the only way in is the validated [`NewProduct`]
/// path or deserialization of a snapshot the source already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    category: Category,
    color: Color,
    image: String,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The explicit product-creation path (add-product form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    pub color: Color,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    /// Validate and attach an identifier, yielding a catalog [`Product`].
    pub fn build(self, id: ProductId) -> Result<Product, DomainError> {
        if !id.is_valid() {
            return Err(DomainError::invalid_id("product id must be non-empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name must be non-empty"));
        }
        if self.price.is_zero() {
            return Err(DomainError::validation("product price must be positive"));
        }

        Ok(Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            color: self.color,
            image: self.image,
            created_at: self.created_at,
        })
    }
}
