use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use entrepot_core::Entity;

/// Product identifier.
///
/// A thin wrapper over the caller-assigned reference (e.g. `"E001"`). The
/// constructor does not validate: blank ids are representable, and are
/// rejected where uniqueness can actually be checked — at registry insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

// Lets a map keyed by `ProductId` be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Capability bound for anything a registry can stock.
///
/// The registry is generic over this trait rather than over [`Product`]
/// itself, so callers can store their own entity types as long as they expose
/// an id, a display name and a price.
pub trait StockItem: Entity<Id = ProductId> {
    /// Display name. Name lookups compare case-insensitively.
    fn name(&self) -> &str;

    /// Unit price. Zero and negative prices are representable; no invariant
    /// is enforced here.
    fn price(&self) -> f64;
}

/// A catalog product.
///
/// Immutable once constructed; the only mutation a registry supports is
/// removal. Electronic articles are the same struct with `warranty_months`
/// set, rather than a separate type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    warranty_months: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            warranty_months: None,
        }
    }

    /// An electronic article: a product carrying a warranty.
    pub fn electronic(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        warranty_months: u32,
    ) -> Self {
        Self {
            warranty_months: Some(warranty_months),
            ..Self::new(id, name, price)
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn warranty_months(&self) -> Option<u32> {
        self.warranty_months
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockItem for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (id {}) - {:.2}€", self.name, self.id, self.price)?;
        if let Some(months) = self.warranty_months {
            write!(f, " [warranty: {months} months]")?;
        }
        Ok(())
    }
}
