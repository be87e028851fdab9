//! Content model and file-backed stores for the site CMS.

pub mod content;
pub mod error;
pub mod store;

pub use content::landing::LandingCopy;
pub use content::post::{BlogPost, Category, PostSection};
pub use error::{StoreError, StoreResult};
pub use store::{ContentPaths, ContentStore};
