//! Hex helpers backed by `faster-hex`, mirroring the core crate's own
//! `hex.rs` convenience wrapper so the CLI's argument parsing and the
//! library's internals agree on how odd-length input is rejected.

/// Decodes a hex string into raw bytes. Odd-length input is rejected before
/// it reaches `faster_hex`, which otherwise panics on it.
pub fn decode<T: AsRef<[u8]>>(data: T) -> Result<Vec<u8>, faster_hex::Error> {
    let input = data.as_ref();
    if input.len() % 2 != 0 {
        return Err(faster_hex::Error::InvalidLength(input.len()));
    }
    let mut bytes = vec![0u8; input.len() / 2];
    faster_hex::hex_decode(input, &mut bytes)?;
    Ok(bytes)
}

/// Encodes bytes as a lowercase hex string.
pub fn encode(data: &[u8]) -> String {
    faster_hex::hex_string(data)
}
