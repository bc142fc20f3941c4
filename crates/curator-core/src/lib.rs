pub mod catalog;
pub mod error;
pub mod flow;
pub mod onboarding;
pub mod profile;
pub mod recommend;
pub mod session;
pub mod types;

pub use error::{CuratorError, Result};
