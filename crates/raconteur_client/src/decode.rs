//! Incremental UTF-8 decoding.

/// Stateful UTF-8 decoder for transport-sized chunks.
///
/// Chunk boundaries are byte boundaries, not character boundaries, so a
/// multi-byte scalar can arrive split across two chunks. The decoder carries
/// the incomplete tail of each chunk into the next call. Invalid sequences
/// decode lossily as U+FFFD rather than failing the cycle.
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    carry: Vec<u8>,
}

impl Utf8Decoder {
    /// Creates a decoder with no carried state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes one chunk, returning all complete characters now available.
    pub fn decode(&mut self, input: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(input);

        let mut out = String::new();
        let mut rest: &[u8] = &bytes;
        loop {
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    out.push_str(s);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    if let Ok(s) = std::str::from_utf8(valid) {
                        out.push_str(s);
                    }
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            // Incomplete tail; hold it for the next chunk.
                            self.carry = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flushes carried state at end of stream.
    ///
    /// A stream that ends mid-character yields one U+FFFD so the truncation
    /// is visible rather than silently dropped.
    pub fn flush(&mut self) -> String {
        if self.carry.is_empty() {
            String::new()
        } else {
            self.carry.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }
}
