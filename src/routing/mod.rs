//! Request routing: reserved-path gate and locale resolution.
//!
//! Every request passes the [`RouteGate`] first. Only paths it lets through
//! reach the [`LocaleResolver`].

mod gate;
mod reserved;
mod resolver;

pub use gate::{blocked_response, GateDecision, RouteGate, NOINDEX_NOFOLLOW, ROBOTS_TAG_HEADER};
pub use reserved::{ReservedPaths, RESERVED_SEGMENT};
pub use resolver::{LocaleResolver, Resolution, ResolveAction};
