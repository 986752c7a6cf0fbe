#![forbid(unsafe_code)]

pub mod catalog;
pub mod countdown;
pub mod model;
pub mod time;

pub use catalog::{Catalog, CatalogFilter};
pub use countdown::{Countdown, CountdownPhase, Tick};
pub use time::Clock;
