pub mod layout;
pub mod roles;
pub mod score;
