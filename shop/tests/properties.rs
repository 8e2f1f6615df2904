//! Property-based tests for the shop reducer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use shop::{
    CartItem, Category, CategoryId, Product, ProductId, ShopAction, ShopState, decode_action,
    encode_action, reduce,
};
use storefront_testing::properties;

// ============================================================================
// Strategies
// ============================================================================

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        id_strategy(),
        "[A-Za-z ]{0,12}",
        0u32..100_000,
        0u32..500,
        proptest::option::of(id_strategy()),
    )
        .prop_map(|(id, name, cents, quantity, category)| {
            let product = Product {
                quantity,
                ..Product::new(id, name).with_price(f64::from(cents) / 100.0)
            };
            match category {
                Some(category) => product.with_category(category.as_str()),
                None => product,
            }
        })
}

fn cart_item_strategy() -> impl Strategy<Value = CartItem> {
    (product_strategy(), 0u32..20).prop_map(|(product, quantity)| CartItem::new(product, quantity))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    (id_strategy(), "[A-Za-z ]{0,12}").prop_map(|(id, name)| Category::new(id.as_str(), name))
}

fn state_strategy() -> impl Strategy<Value = ShopState> {
    (
        prop::collection::vec(product_strategy(), 0..6),
        prop::collection::vec(category_strategy(), 0..4),
        prop_oneof![Just(String::new()), id_strategy()],
        prop::collection::vec(cart_item_strategy(), 0..6),
        any::<bool>(),
    )
        .prop_map(
            |(products, categories, current_category, cart, cart_open)| ShopState {
                products,
                categories,
                current_category: CategoryId::new(current_category),
                cart,
                cart_open,
            },
        )
}

fn action_strategy() -> impl Strategy<Value = ShopAction> {
    prop_oneof![
        prop::collection::vec(product_strategy(), 0..4)
            .prop_map(|products| ShopAction::UpdateProducts { products }),
        cart_item_strategy().prop_map(|product| ShopAction::AddToCart { product }),
        prop::collection::vec(cart_item_strategy(), 0..4)
            .prop_map(|products| ShopAction::AddMultipleToCart { products }),
        (id_strategy(), 0u32..20).prop_map(|(id, purchase_quantity)| {
            ShopAction::UpdateCartQuantity {
                id: ProductId::new(id),
                purchase_quantity,
            }
        }),
        id_strategy().prop_map(|id| ShopAction::RemoveFromCart {
            id: ProductId::new(id)
        }),
        prop::sample::select(vec![
            ShopAction::ClearCart,
            ShopAction::ToggleCart,
            ShopAction::Unrecognized,
        ]),
        prop::collection::vec(category_strategy(), 0..4)
            .prop_map(|categories| ShopAction::UpdateCategories { categories }),
        id_strategy().prop_map(|id| ShopAction::UpdateCurrentCategory {
            current_category: CategoryId::new(id)
        }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn unrecognized_is_identity(state in state_strategy()) {
        properties::assert_identity(&shop::ShopReducer::new(), state, ShopAction::Unrecognized);
    }

    #[test]
    fn update_products_touches_only_products(
        state in state_strategy(),
        products in prop::collection::vec(product_strategy(), 0..4),
    ) {
        let next = reduce(state.clone(), ShopAction::UpdateProducts { products: products.clone() });
        prop_assert_eq!(next, ShopState { products, ..state });
    }

    #[test]
    fn update_categories_touches_only_categories(
        state in state_strategy(),
        categories in prop::collection::vec(category_strategy(), 0..4),
    ) {
        let next = reduce(state.clone(), ShopAction::UpdateCategories { categories: categories.clone() });
        prop_assert_eq!(next, ShopState { categories, ..state });
    }

    #[test]
    fn update_current_category_is_verbatim(state in state_strategy(), id in "[a-z]{0,8}") {
        let next = reduce(state.clone(), ShopAction::UpdateCurrentCategory {
            current_category: CategoryId::new(id.as_str()),
        });
        prop_assert_eq!(next, ShopState { current_category: CategoryId::new(id), ..state });
    }

    #[test]
    fn add_to_cart_appends_and_opens(state in state_strategy(), item in cart_item_strategy()) {
        let next = reduce(state.clone(), ShopAction::AddToCart { product: item.clone() });

        prop_assert_eq!(next.cart.len(), state.cart.len() + 1);
        prop_assert_eq!(&next.cart[..state.cart.len()], &state.cart[..]);
        prop_assert_eq!(next.cart.last(), Some(&item));
        prop_assert!(next.cart_open);
        prop_assert_eq!(next.products, state.products);
        prop_assert_eq!(next.categories, state.categories);
        prop_assert_eq!(next.current_category, state.current_category);
    }

    #[test]
    fn add_multiple_preserves_order_and_visibility(
        state in state_strategy(),
        items in prop::collection::vec(cart_item_strategy(), 0..5),
    ) {
        let next = reduce(state.clone(), ShopAction::AddMultipleToCart { products: items.clone() });

        let mut expected = state.cart.clone();
        expected.extend(items);
        prop_assert_eq!(next, ShopState { cart: expected, ..state });
    }

    #[test]
    fn update_cart_quantity_rewrites_matches_only(
        state in state_strategy(),
        id in id_strategy(),
        quantity in 0u32..20,
    ) {
        let id = ProductId::new(id);
        let next = reduce(state.clone(), ShopAction::UpdateCartQuantity {
            id: id.clone(),
            purchase_quantity: quantity,
        });

        prop_assert!(next.cart_open);
        prop_assert_eq!(next.cart.len(), state.cart.len());
        for (before, after) in state.cart.iter().zip(&next.cart) {
            prop_assert_eq!(&before.product, &after.product);
            if before.id() == &id {
                prop_assert_eq!(after.purchase_quantity, quantity);
            } else {
                prop_assert_eq!(after.purchase_quantity, before.purchase_quantity);
            }
        }
    }

    #[test]
    fn remove_from_cart_syncs_visibility(state in state_strategy(), id in id_strategy()) {
        let id = ProductId::new(id);
        let next = reduce(state.clone(), ShopAction::RemoveFromCart { id: id.clone() });

        let expected: Vec<CartItem> = state.cart.iter().filter(|i| i.id() != &id).cloned().collect();
        prop_assert_eq!(&next.cart, &expected);
        prop_assert_eq!(next.cart_open, !expected.is_empty());
        prop_assert_eq!(next.products, state.products);
    }

    #[test]
    fn clear_cart_is_idempotent(state in state_strategy()) {
        let next = reduce(state.clone(), ShopAction::ClearCart);
        prop_assert!(next.cart.is_empty());
        prop_assert!(!next.cart_open);

        properties::assert_idempotent(&shop::ShopReducer::new(), state, || ShopAction::ClearCart);
    }

    #[test]
    fn toggle_cart_is_an_involution(state in state_strategy()) {
        let next = reduce(state.clone(), ShopAction::ToggleCart);
        prop_assert_eq!(next.cart_open, !state.cart_open);

        properties::assert_involution(&shop::ShopReducer::new(), state, || ShopAction::ToggleCart);
    }

    #[test]
    fn every_action_survives_the_wire(action in action_strategy()) {
        let decoded = decode_action(&encode_action(&action).unwrap()).unwrap();
        prop_assert_eq!(decoded, action);
    }

    #[test]
    fn reduce_is_deterministic(state in state_strategy(), action in action_strategy()) {
        let first = reduce(state.clone(), action.clone());
        let second = reduce(state, action);
        prop_assert_eq!(first, second);
    }
}
