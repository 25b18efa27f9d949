pub mod analysis;
pub mod engine;
pub mod models;
pub mod session;

pub use engine::PickEngine;
pub use session::{Session, SessionReport};
