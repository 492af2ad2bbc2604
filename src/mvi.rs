//! Model-View-Intent primitives.
//!
//! Unidirectional data flow: intents (user actions or system events) are
//! fed through a reducer, which produces the next state, which the view
//! renders.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for state objects.
///
/// A state is a self-contained snapshot of everything the view needs to
/// render. It is cloned to produce successors and compared to detect
/// changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is a user action (key press) or a system event (fetch result)
/// that may transition the state.
pub trait Intent: Send + 'static {}

/// Pure state-transition function over a state/intent pair.
///
/// The reducer is the only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
