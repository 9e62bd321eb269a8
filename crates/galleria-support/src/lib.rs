//! # galleria-support
//!
//! The support inbox: shoppers (logged in or not) submit a subject and a
//! message; the back office lists them. Contact details are denormalized at
//! write time — from the session when there is one, else from the form — so
//! the inbox shows who wrote, as of when they wrote.
//!
//! Every ticket starts as `pending`; nothing in the storefront transitions
//! it further.

pub mod error;
pub mod service;

pub use error::SupportError;
pub use service::{SupportForm, SupportService};
