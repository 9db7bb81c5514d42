use crate::text::TextBuffer;

// Below 2^53 every integer-valued double has an exact i64 image.
const EXACT_INT_BOUND: f64 = 9_007_199_254_740_992.0;

/// Appends the shortest decimal form of `value` that re-parses to the same
/// bit pattern. `value` must be finite; the encoder rejects the rest first.
pub(crate) fn write_f64<B: TextBuffer>(out: &mut B, value: f64) {
    debug_assert!(value.is_finite());
    if value == 0.0 {
        out.push_str(if value.is_sign_negative() { "-0" } else { "0" });
        return;
    }
    if value.fract() == 0.0 && value.abs() < EXACT_INT_BOUND {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(value as i64));
        return;
    }
    let mut buffer = ryu::Buffer::new();
    out.push_str(buffer.format_finite(value));
}
