//! `courier-route` — turns one truck load into an ordered delivery route.
//!
//! # Crate layout
//!
//! | Module        | Contents                                  |
//! |---------------|-------------------------------------------|
//! | [`itinerary`] | `Itinerary`, `Stop`                       |
//! | [`planner`]   | `RoutePlanner` (greedy builder + commit)  |
//! | [`error`]     | `RouteError`, `RouteResult<T>`            |

pub mod error;
pub mod itinerary;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use itinerary::{Itinerary, Stop};
pub use planner::RoutePlanner;
