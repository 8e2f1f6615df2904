//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use storefront_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Actions given with [`ReducerTest::when_action`] are applied in the order
/// they were added, each to the state the previous one produced.
///
/// # Example
///
/// ```ignore
/// use storefront_testing::ReducerTest;
///
/// ReducerTest::new(ShopReducer::new())
///     .given_state(ShopState::default())
///     .when_action(ShopAction::ToggleCart)
///     .then_state(|state| {
///         assert!(state.cart_open);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
{
    reducer: R,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
}

impl<R, S, A> ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions to apply, in order (When)
    #[must_use]
    pub fn when_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Assert the resulting state equals `expected` (Then)
    #[must_use]
    pub fn then_state_eq(self, expected: S) -> Self
    where
        S: PartialEq + std::fmt::Debug + 'static,
    {
        self.then_state(move |state| assert_eq!(state, &expected))
    }

    /// Run the test and execute all assertions
    ///
    /// Returns the final state so a test can keep going with it.
    ///
    /// # Panics
    ///
    /// Panics if the initial state or action is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) -> S {
        let initial = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "Action must be set with when_action()"
        );

        let state = self
            .actions
            .into_iter()
            .fold(initial, |state, action| self.reducer.reduce(state, action));

        for assertion in self.state_assertions {
            assertion(&state);
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                },
                TestAction::Decrement => TestState {
                    count: state.count - 1,
                },
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_decrement() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state_eq(TestState { count: 4 })
            .run();
    }

    #[test]
    fn test_reducer_test_action_sequence() {
        let state = ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_actions([TestAction::Increment, TestAction::Increment])
            .when_action(TestAction::Decrement)
            .run();

        assert_eq!(state.count, 1);
    }

    #[test]
    #[should_panic(expected = "Action must be set")]
    fn test_reducer_test_requires_action() {
        let _ = ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .run();
    }
}
