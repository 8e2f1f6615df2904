//! # Storefront Core
//!
//! Core traits for the Storefront reducer architecture.
//!
//! This crate provides the abstractions every feature is built from. It has
//! no I/O and no async dependencies.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: Every input that can change that state
//! - **Reducer**: Pure function `(State, Action) → State`
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - State is owned by an explicit container, never a global
//!
//! ## Example
//!
//! ```
//! use storefront_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState {
//!                 count: state.count + 1,
//!             },
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let state = CounterReducer.reduce(CounterState::default(), CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

/// Action module - naming helpers for action types
///
/// Actions are plain enums owned by each feature. The only thing the
/// runtime needs to know about them is a stable, human-readable name for
/// log fields and metric labels.
pub mod action {
    /// A stable name for each action variant
    ///
    /// # Example
    ///
    /// ```
    /// use storefront_core::action::ActionKind;
    ///
    /// enum LightAction {
    ///     On,
    ///     Off,
    /// }
    ///
    /// impl ActionKind for LightAction {
    ///     fn kind(&self) -> &'static str {
    ///         match self {
    ///             Self::On => "ON",
    ///             Self::Off => "OFF",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LightAction::Off.kind(), "OFF");
    /// ```
    pub trait ActionKind {
        /// The name of this action variant
        ///
        /// Must be a small, fixed set of values: it is used as a metric label.
        fn kind(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Ownership
    ///
    /// `reduce` consumes the current state and returns the next one. Fields an
    /// action does not touch are moved into the result unchanged, so a
    /// transition never copies more than it rewrites and never mutates a
    /// value somebody else still holds.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// This is a total, pure function:
        /// 1. No I/O
        /// 2. No failure outcome
        /// 3. Same inputs always produce the same output
        ///
        /// # Arguments
        ///
        /// - `state`: The current state, moved in
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The state after applying `action`
        fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
    }

    impl<R: Reducer + ?Sized> Reducer for &R {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
            (**self).reduce(state, action)
        }
    }
}

pub use action::ActionKind;
pub use reducer::Reducer;
