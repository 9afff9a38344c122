pub mod admin;
pub mod landing;
pub mod projects;
pub mod upload;
