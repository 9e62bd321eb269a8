//! Backend implementations.

pub mod local;
pub mod s3;

pub use local::LocalImageStore;
pub use s3::S3ImageStore;
