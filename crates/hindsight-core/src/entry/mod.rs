pub mod base;
pub mod category;
pub mod request;

pub use base::{is_delta_header, Entry};
pub use category::{Bucket, Category};
pub use request::{RecordRequest, ValidatedRecord};
