pub mod comment;
pub mod dashboard;
pub mod email;
pub mod errors;
pub mod newsletter;
pub mod post;
pub mod slug;
pub mod taxonomy;
