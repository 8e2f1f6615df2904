//! Reducer logic for the shop.
//!
//! Every transition consumes the previous [`ShopState`] and returns the next
//! one. Fields an action does not name are moved across untouched.

use crate::types::{CartItem, Category, CategoryId, Product, ProductId, ShopAction, ShopState};
use storefront_core::reducer::Reducer;

/// Reducer for the shop UI state
#[derive(Clone, Copy, Debug, Default)]
pub struct ShopReducer;

impl ShopReducer {
    /// Creates a new `ShopReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn update_products(state: ShopState, products: Vec<Product>) -> ShopState {
        ShopState { products, ..state }
    }

    fn add_to_cart(state: ShopState, item: CartItem) -> ShopState {
        let mut cart = state.cart;
        cart.push(item);

        ShopState {
            cart,
            cart_open: true,
            ..state
        }
    }

    fn add_multiple_to_cart(state: ShopState, items: Vec<CartItem>) -> ShopState {
        let mut cart = state.cart;
        cart.extend(items);

        ShopState { cart, ..state }
    }

    /// Every entry with a matching id is rebuilt with the new quantity;
    /// the scan does not stop at the first match.
    fn update_cart_quantity(state: ShopState, id: &ProductId, purchase_quantity: u32) -> ShopState {
        let cart = state
            .cart
            .into_iter()
            .map(|item| {
                if item.id() == id {
                    CartItem {
                        purchase_quantity,
                        ..item
                    }
                } else {
                    item
                }
            })
            .collect();

        ShopState {
            cart,
            cart_open: true,
            ..state
        }
    }

    fn remove_from_cart(state: ShopState, id: &ProductId) -> ShopState {
        let mut cart = state.cart;
        cart.retain(|item| item.id() != id);
        let cart_open = !cart.is_empty();

        ShopState {
            cart,
            cart_open,
            ..state
        }
    }

    fn clear_cart(state: ShopState) -> ShopState {
        ShopState {
            cart: Vec::new(),
            cart_open: false,
            ..state
        }
    }

    fn toggle_cart(state: ShopState) -> ShopState {
        ShopState {
            cart_open: !state.cart_open,
            ..state
        }
    }

    fn update_categories(state: ShopState, categories: Vec<Category>) -> ShopState {
        ShopState { categories, ..state }
    }

    fn update_current_category(state: ShopState, current_category: CategoryId) -> ShopState {
        ShopState {
            current_category,
            ..state
        }
    }
}

impl Reducer for ShopReducer {
    type State = ShopState;
    type Action = ShopAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // ========== Catalog ==========
            ShopAction::UpdateProducts { products } => Self::update_products(state, products),
            ShopAction::UpdateCategories { categories } => {
                Self::update_categories(state, categories)
            }
            ShopAction::UpdateCurrentCategory { current_category } => {
                Self::update_current_category(state, current_category)
            }

            // ========== Cart ==========
            ShopAction::AddToCart { product } => Self::add_to_cart(state, product),
            ShopAction::AddMultipleToCart { products } => {
                Self::add_multiple_to_cart(state, products)
            }
            ShopAction::UpdateCartQuantity {
                id,
                purchase_quantity,
            } => Self::update_cart_quantity(state, &id, purchase_quantity),
            ShopAction::RemoveFromCart { id } => Self::remove_from_cart(state, &id),
            ShopAction::ClearCart => Self::clear_cart(state),
            ShopAction::ToggleCart => Self::toggle_cart(state),

            ShopAction::Unrecognized => state,
        }
    }
}

/// Apply one action to the shop state
///
/// Shorthand for `ShopReducer.reduce(state, action)`.
#[must_use]
pub fn reduce(state: ShopState, action: ShopAction) -> ShopState {
    ShopReducer.reduce(state, action)
}
