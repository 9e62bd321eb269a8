//! # galleria-orders
//!
//! The checkout core. [`CheckoutForm`] collects every field failure in one
//! pass; [`OrderService::place_order`] turns a valid submission into an
//! order row with the artwork's title and price snapshotted at placement,
//! and returns rejections together with the computed total so the form can
//! be re-rendered with the buyer's input.
//!
//! Order status is a four-stage string mutated only through
//! [`OrderService::set_status`], which consults the transition policy in
//! [`policy`]. The policy currently permits every move, including backwards;
//! tightening it is a one-line change there, invisible to call sites.

pub mod error;
pub mod forms;
pub mod policy;
pub mod service;

pub use error::OrderError;
pub use forms::{CheckoutForm, RejectedCheckout, ValidatedCheckout};
pub use service::{CheckoutRejection, OrderService, OrderWithArtwork, PlacedOrder};
