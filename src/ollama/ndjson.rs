/// Incremental line splitter for newline-delimited JSON response bodies.
///
/// Network chunks can split a line (or even a UTF-8 sequence) anywhere, so
/// bytes are buffered until a full line is available.
#[derive(Default)]
pub struct NdjsonDecoder {
    buf: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pop the next complete line, without its terminator.
    pub fn next_line(&mut self) -> Option<String> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
        line.pop(); // \n
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Drain whatever remains after the stream ends (an unterminated line).
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.buf);
        Some(String::from_utf8_lossy(&rest).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_split_across_pushes() {
        let mut dec = NdjsonDecoder::new();
        dec.push(b"{\"a\":");
        assert_eq!(dec.next_line(), None);
        dec.push(b"1}\n");
        assert_eq!(dec.next_line().as_deref(), Some("{\"a\":1}"));
        assert_eq!(dec.next_line(), None);
    }

    #[test]
    fn multiple_lines_in_one_push() {
        let mut dec = NdjsonDecoder::new();
        dec.push(b"one\ntwo\nthr");
        assert_eq!(dec.next_line().as_deref(), Some("one"));
        assert_eq!(dec.next_line().as_deref(), Some("two"));
        assert_eq!(dec.next_line(), None);
        assert_eq!(dec.finish().as_deref(), Some("thr"));
        assert_eq!(dec.finish(), None);
    }

    #[test]
    fn strips_carriage_return() {
        let mut dec = NdjsonDecoder::new();
        dec.push(b"line\r\n");
        assert_eq!(dec.next_line().as_deref(), Some("line"));
    }
}
