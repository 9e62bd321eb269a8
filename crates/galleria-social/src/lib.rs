//! # galleria-social
//!
//! The storefront's social layer: the wishlist toggle, the detail-page like
//! toggle with its visible count, and append-only comments.
//!
//! Wishlist and likes are two separate tables toggled independently on
//! different surfaces; they look similar and are deliberately not unified.
//! Both toggles are check-then-act with the table's unique pair index as the
//! backstop: when two requests race and the insert hits the constraint, the
//! outcome is "already in this state", never an error.

pub mod error;
pub mod service;

pub use error::SocialError;
pub use service::{LikeToggle, SocialService, WishlistToggle};
