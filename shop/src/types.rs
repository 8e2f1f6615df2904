//! Domain types for the shop.
//!
//! Field names on the wire follow the storefront's JSON conventions
//! (`_id`, `purchaseQuantity`, `currentCategory`, `cartOpen`), so these types
//! double as the action and state payloads the UI exchanges with the host.

use serde::{Deserialize, Serialize};
use storefront_core::action::ActionKind;

/// Unique identifier for a product
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a `ProductId` from any string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a category
///
/// The empty id means "no category selected".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a `CategoryId` from any string, including the empty one
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the "no category" id
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A catalog product
///
/// Only `_id` is required on input; every other field defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image file name or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub quantity: u32,
    /// Category the product is listed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

impl Product {
    /// Creates a product with a name and every other field defaulted
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the unit price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A product placed in the cart
///
/// Serialized as the product's own fields plus `purchaseQuantity`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being bought
    #[serde(flatten)]
    pub product: Product,
    /// How many units the shopper wants
    #[serde(rename = "purchaseQuantity", default)]
    pub purchase_quantity: u32,
}

impl CartItem {
    /// Creates a cart entry
    #[must_use]
    pub const fn new(product: Product, purchase_quantity: u32) -> Self {
        Self {
            product,
            purchase_quantity,
        }
    }

    /// The product id this entry is keyed by
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// A product category
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl Category {
    /// Creates a category
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// State of the shop UI
///
/// `Default` is the value a host starts from: nothing loaded, no category
/// selected, empty closed cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopState {
    /// Products currently listed
    pub products: Vec<Product>,
    /// Categories available for filtering
    pub categories: Vec<Category>,
    /// Selected category, empty when none
    pub current_category: CategoryId,
    /// Cart entries in insertion order
    ///
    /// Holds at most one entry per product id when callers follow the
    /// convention; the reducer does not deduplicate.
    pub cart: Vec<CartItem>,
    /// Whether the cart panel is visible
    pub cart_open: bool,
}

impl ShopState {
    /// Creates the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything that can change [`ShopState`]
///
/// Serialized as `{ "type": "<TAG>", ...payload }`. Tags this version does
/// not know decode to [`ShopAction::Unrecognized`], which the reducer treats
/// as a no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopAction {
    /// Replace the product list
    UpdateProducts {
        /// New product list
        products: Vec<Product>,
    },

    /// Append one entry to the cart and open it
    AddToCart {
        /// Entry to append
        product: CartItem,
    },

    /// Append several entries to the cart, in order
    AddMultipleToCart {
        /// Entries to append
        products: Vec<CartItem>,
    },

    /// Set the quantity of every cart entry with this id and open the cart
    UpdateCartQuantity {
        /// Product whose entries change
        #[serde(rename = "_id")]
        id: ProductId,
        /// New quantity
        #[serde(rename = "purchaseQuantity")]
        purchase_quantity: u32,
    },

    /// Remove every cart entry with this id
    RemoveFromCart {
        /// Product to remove
        #[serde(rename = "_id")]
        id: ProductId,
    },

    /// Empty and close the cart
    ClearCart,

    /// Flip cart visibility
    ToggleCart,

    /// Replace the category list
    UpdateCategories {
        /// New category list
        categories: Vec<Category>,
    },

    /// Select a category
    UpdateCurrentCategory {
        /// Category to select, stored verbatim
        #[serde(rename = "currentCategory")]
        current_category: CategoryId,
    },

    /// An action type this version does not know
    #[serde(other)]
    Unrecognized,
}

impl ActionKind for ShopAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::UpdateProducts { .. } => "UPDATE_PRODUCTS",
            Self::AddToCart { .. } => "ADD_TO_CART",
            Self::AddMultipleToCart { .. } => "ADD_MULTIPLE_TO_CART",
            Self::UpdateCartQuantity { .. } => "UPDATE_CART_QUANTITY",
            Self::RemoveFromCart { .. } => "REMOVE_FROM_CART",
            Self::ClearCart => "CLEAR_CART",
            Self::ToggleCart => "TOGGLE_CART",
            Self::UpdateCategories { .. } => "UPDATE_CATEGORIES",
            Self::UpdateCurrentCategory { .. } => "UPDATE_CURRENT_CATEGORY",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
