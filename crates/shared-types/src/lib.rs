pub mod error;
pub mod feature_flags;

pub mod auth;
pub mod dashboard;
pub mod demo;
pub mod session;
pub mod tabs;

pub use error::*;
pub use feature_flags::*;

pub use auth::*;
pub use dashboard::*;
pub use session::*;
pub use tabs::*;
