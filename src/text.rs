pub(crate) trait TextBuffer {
    fn push_str(&mut self, s: &str);
    fn push_char(&mut self, ch: char);
}

impl TextBuffer for String {
    fn push_str(&mut self, s: &str) {
        self.push_str(s);
    }

    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }
}

impl TextBuffer for Vec<u8> {
    fn push_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }

    fn push_char(&mut self, ch: char) {
        if ch.is_ascii() {
            self.push(ch as u8);
            return;
        }

        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.extend_from_slice(encoded.as_bytes());
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends `value` with JSON string escaping applied.
///
/// `"` and `\` get their short escapes, as do the whitespace-class controls
/// `\b \f \n \r \t`; any other byte below 0x20 becomes `\u00XX`. Everything
/// else, `/` included, passes through verbatim.
pub(crate) fn escape_json_into<B: TextBuffer>(out: &mut B, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let short = match byte {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x08 => Some("\\b"),
            0x0C => Some("\\f"),
            b'\n' => Some("\\n"),
            b'\r' => Some("\\r"),
            b'\t' => Some("\\t"),
            byte if byte < 0x20 => None,
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        match short {
            Some(escape) => out.push_str(escape),
            None => {
                out.push_str("\\u00");
                out.push_char(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                out.push_char(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
        }
        start = idx + 1;
    }
    if start < bytes.len() {
        out.push_str(&value[start..]);
    }
}
