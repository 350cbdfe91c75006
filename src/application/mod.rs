// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Holds the controller's state and the policy that turns it into a view
// - Sits between the services (which mutate state) and the ui (which draws it)

pub mod state;
pub mod view;

pub use state::{SearchState, DETAIL_ERROR_PREFIX};
pub use view::{DetailCard, MainPanel, ResultCard, ViewModel};
