#[cfg(test)]
#[path = "decoder_test.rs"]
mod tests;

/// Incremental UTF-8 decoder for streamed response bodies.
///
/// Chunk boundaries land anywhere, including in the middle of a multi-byte
/// sequence. `push` decodes as much of the buffered bytes as possible and
/// holds an incomplete trailing sequence back until the next chunk. Bytes
/// that can never form a valid sequence are substituted with the replacement
/// character.
#[derive(Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    out.push_str(valid);
                    self.pending.clear();
                    break;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    out.push_str(std::str::from_utf8(&self.pending[..valid_up_to]).unwrap());

                    match err.error_len() {
                        // An invalid sequence, not a chunk boundary.
                        Some(error_len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid_up_to + error_len);
                        }
                        // An incomplete trailing sequence. Hold it back until
                        // more bytes arrive.
                        None => {
                            self.pending.drain(..valid_up_to);
                            break;
                        }
                    }
                }
            }
        }

        return out;
    }

    /// Drains whatever is left at end of stream. A dangling partial sequence
    /// decodes to replacement characters.
    pub fn flush(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }

        let out = String::from_utf8_lossy(&self.pending).to_string();
        self.pending.clear();

        return out;
    }
}
