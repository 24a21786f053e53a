/// Streaming copy primitives shared across urlcat crates.
///
/// One concern: pull a byte stream from an HTTP source and append it to a
/// caller-owned sink through a fixed-size buffer, releasing the source on
/// every exit path and leaving the sink open.
pub mod copy;
pub mod errors;

pub use copy::{copy_reader, copy_url, BUF_SIZE};
pub use errors::CopyError;
