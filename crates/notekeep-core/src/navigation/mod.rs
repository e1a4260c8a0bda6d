//! Navigation domain types: the route table and the guard's state machine values.

mod route;
mod state;

pub use route::{Route, RouteTable, default_routes};
pub use state::{GuardState, NavigationDecision};
