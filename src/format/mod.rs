pub mod bytes;
pub mod date;

pub use bytes::format_bytes;
pub use date::format_date;
