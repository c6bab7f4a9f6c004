pub mod admin;
pub mod blogs;
pub mod profile;
pub mod users;
