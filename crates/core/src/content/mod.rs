pub mod landing;
pub mod post;
pub mod slug;
pub mod validate;
