//! Shopping-cart state for a storefront UI.
//!
//! This crate holds the whole client-side shop state (product list, category
//! list, selected category, cart contents, cart visibility) and the reducer
//! that advances it. It demonstrates:
//!
//! - A pure reducer over an owned state value
//! - JSON wire format for actions and state (`{"type": "ADD_TO_CART", ...}`)
//! - Replaying an action stream through a [`Store`](storefront_runtime::Store)
//! - Testing with `ReducerTest` and `proptest`
//!
//! # Quick Start
//!
//! ```no_run
//! use shop::{CartItem, Product, ShopAction, ShopReducer, ShopState};
//! use storefront_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(ShopState::new(), ShopReducer::new());
//!
//! let soap = Product::new("soap", "Soap").with_price(3.5);
//! store
//!     .send(ShopAction::AddToCart {
//!         product: CartItem::new(soap, 1),
//!     })
//!     .await?;
//!
//! let open = store.state(|s| s.cart_open).await;
//! println!("Cart open: {open}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reducer;
pub mod types;
pub mod wire;

pub use config::ShopConfig;
pub use reducer::{ShopReducer, reduce};
pub use types::{CartItem, Category, CategoryId, Product, ProductId, ShopAction, ShopState};
pub use wire::{
    Catalog, WireError, decode_action, decode_action_stream, decode_catalog, encode_action,
    encode_state,
};
