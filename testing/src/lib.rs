//! # Storefront Testing
//!
//! Testing utilities and helpers for the Storefront reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - Algebraic property checks (identity, idempotence, involution)
//! - Test tracing setup
//!
//! ## Example
//!
//! ```ignore
//! use storefront_testing::{properties, ReducerTest};
//!
//! #[test]
//! fn clear_cart_is_idempotent() {
//!     properties::assert_idempotent(&ShopReducer::new(), sample_state(), || ShopAction::ClearCart);
//! }
//! ```

pub mod reducer_test;

/// Test helpers and utilities
pub mod helpers {
    /// Route `tracing` output through the test harness
    ///
    /// Safe to call from every test: only the first call installs the
    /// subscriber. Filter with `RUST_LOG` (defaults to `debug`).
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Algebraic properties of reducer transitions
///
/// Each helper compares whole states, so it also checks that the action
/// leaves every other field alone.
pub mod properties {
    use std::fmt::Debug;
    use storefront_core::reducer::Reducer;

    /// Assert that `action` leaves `state` unchanged
    ///
    /// # Panics
    ///
    /// Panics if the reducer changes the state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_identity<R>(reducer: &R, state: R::State, action: R::Action)
    where
        R: Reducer,
        R::State: Clone + PartialEq + Debug,
    {
        let next = reducer.reduce(state.clone(), action);
        assert_eq!(next, state, "Expected the action to leave state unchanged");
    }

    /// Assert that applying the action twice equals applying it once
    ///
    /// `action` is called once per application.
    ///
    /// # Panics
    ///
    /// Panics if the second application changes the state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_idempotent<R, F>(reducer: &R, state: R::State, action: F)
    where
        R: Reducer,
        R::State: Clone + PartialEq + Debug,
        F: Fn() -> R::Action,
    {
        let once = reducer.reduce(state, action());
        let twice = reducer.reduce(once.clone(), action());
        assert_eq!(twice, once, "Expected the action to be idempotent");
    }

    /// Assert that applying the action twice restores the original state
    ///
    /// `action` is called once per application.
    ///
    /// # Panics
    ///
    /// Panics if two applications do not cancel out.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_involution<R, F>(reducer: &R, state: R::State, action: F)
    where
        R: Reducer,
        R::State: Clone + PartialEq + Debug,
        F: Fn() -> R::Action,
    {
        let once = reducer.reduce(state.clone(), action());
        let twice = reducer.reduce(once, action());
        assert_eq!(twice, state, "Expected the action to undo itself");
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use reducer_test::ReducerTest;
