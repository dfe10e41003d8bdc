//! User profile: name, club, picture, and the body data IDT scoring reads.

pub mod store;
pub mod types;

pub use store::ProfileStore;
pub use types::{parse_weight, Gender, Profile, ProfileAttribute, ProfileError};
