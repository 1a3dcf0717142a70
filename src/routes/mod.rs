pub mod assets;
pub mod health;
pub mod landing;
pub mod signup;
