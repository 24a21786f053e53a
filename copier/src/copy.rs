/// Fixed-buffer streaming copy.
///
/// The copy loop mirrors classic buffered stream plumbing: one 8 KiB scratch
/// buffer per call, read-until-exhausted from the source, write exactly the
/// bytes read to the sink, in order. The sink is borrowed and stays open;
/// the source is consumed and dropped on every exit path.
use std::io::{ErrorKind, Read, Write};

use tracing::{debug, info};

use crate::errors::CopyError;

/// Transfer buffer capacity. Declared once per copy call, reused across
/// read iterations.
pub const BUF_SIZE: usize = 8192;

/// Fetch `address` with a blocking GET and append the response body to
/// `sink`. Returns the number of bytes transferred.
///
/// The response body is dropped before this function returns, whether the
/// transfer succeeds or fails. `sink` is never closed here. The response
/// status is not inspected: an error page's body is copied like any other
/// content.
pub fn copy_url<W: Write>(sink: &mut W, address: &str) -> Result<u64, CopyError> {
    debug!("GET {}", address);
    let response = reqwest::blocking::get(address)?;

    let total = copy_reader(response, sink)?;
    info!("Copied {} bytes from {}", total, address);
    Ok(total)
}

/// Drain `reader` into `sink` through a fixed-size buffer. Returns the
/// number of bytes transferred.
///
/// Takes `reader` by value: it is dropped exactly once, on success and on
/// error alike. Reads interrupted by a signal are retried; a read of zero
/// bytes ends the transfer.
pub fn copy_reader<R: Read, W: Write>(mut reader: R, sink: &mut W) -> std::io::Result<u64> {
    let mut buffer = [0u8; BUF_SIZE];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink.write_all(&buffer[..read])?;
        total += read as u64;
    }

    Ok(total)
}
