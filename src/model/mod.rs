//! Domain records delivered by the backend: posts and user profiles.

mod post;
mod user;

pub use post::*;
pub use user::*;
