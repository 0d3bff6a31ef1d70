/// Route primitives and route id utilities
///
/// Contains pure functional components for building route config entries:
/// - `helpers`: index, named, layout and prefix constructors
/// - `id`: dot-delimited route id generation and uniqueness checks

pub mod helpers;
pub mod id;

// Re-export commonly used items
pub use helpers::{index, layout, prefix, route, RouteOptions};
pub use id::{ensure_unique_ids, generate_route_id, route_ids};
