//! # Storefront Runtime
//!
//! Runtime implementation for the Storefront reducer architecture.
//!
//! This crate provides the Store: the explicit state container a host owns
//! and updates only through its reducer.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, serializes reducer calls, notifies subscribers
//! - **Metrics**: Prometheus recorder and store-level counters
//!
//! ## Example
//!
//! ```ignore
//! use storefront_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use storefront_core::{action::ActionKind, reducer::Reducer};
use tokio::sync::RwLock;

/// Prometheus metrics for observability
pub mod metrics;

use crate::metrics::StoreMetrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers themselves cannot fail, so the only failures are about the
    /// store's own lifecycle.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use storefront_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(256);
/// assert_eq!(config.broadcast_capacity, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of applied actions buffered for each subscriber
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(broadcast_capacity: usize) -> Self {
        Self { broadcast_capacity }
    }

    /// Set the action broadcast capacity
    ///
    /// A capacity of zero is bumped to one; the channel cannot be empty.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
        }
    }
}

/// Store module - the runtime state container
pub mod store {
    use super::{
        ActionKind, Arc, AtomicBool, Ordering, Reducer, RwLock, StoreConfig, StoreError,
        StoreMetrics,
    };
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Subscribers (broadcast of every applied action)
    ///
    /// Cloning a Store yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(ShopState::default(), ShopReducer::new());
    ///
    /// store.send(ShopAction::ToggleCart).await?;
    /// let open = store.state(|s| s.cart_open).await;
    /// ```
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        shutdown: Arc<AtomicBool>,
        /// Every action the reducer has applied, in application order.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A> + Send + Sync + 'static,
        A: ActionKind + Clone + Send + 'static,
        S: Default + Send + Sync + 'static,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, config: StoreConfig) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                shutdown: Arc::new(AtomicBool::new(false)),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Moves the current state into the reducer
        /// 3. Stores the returned state
        /// 4. Broadcasts the action to subscribers (still under the lock, so
        ///    subscribers observe actions in application order)
        ///
        /// Concurrent `send()` calls serialize on the lock.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        ///
        /// # Panics
        ///
        /// If the reducer panics the panic propagates and the state left behind
        /// is `S::default()`. Reducers must be total.
        #[tracing::instrument(skip(self, action), fields(kind = action.kind()), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            let kind = action.kind();

            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                StoreMetrics::record_rejected(kind);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let current = std::mem::take(&mut *state);
                *state = self.reducer.reduce(current, action.clone());
                StoreMetrics::record_action(kind, start.elapsed());
            }

            // No subscribers is the normal case for a headless store
            if self.action_broadcast.send(action).is_err() {
                tracing::trace!("No action subscribers");
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let cart_len = store.state(|s| s.cart.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone the whole current state
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        /// Subscribe to every action applied by this store
        ///
        /// # Notes
        ///
        /// - Only actions sent after subscribing are received
        /// - A receiver that falls more than `broadcast_capacity` actions
        ///   behind gets [`broadcast::error::RecvError::Lagged`] and skips ahead
        /// - The channel closes once every Store handle is dropped
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of live action subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.action_broadcast.receiver_count()
        }

        /// Stop accepting actions
        ///
        /// State stays readable. Every handle sharing this store observes the
        /// shutdown. Calling this more than once is harmless.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!("Store shut down");
                StoreMetrics::record_shutdown();
            }
        }

        /// Whether [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }

    impl<S, A, R> Clone for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                shutdown: Arc::clone(&self.shutdown),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
