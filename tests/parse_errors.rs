use rstest::rstest;

use feather_json::{from_slice, from_str, from_str_with_options, ErrorCode, ParseOptions};

fn code_of(input: &str) -> ErrorCode {
    from_str(input).unwrap_err().code
}

#[rstest]
#[case("")]
#[case(" ")]
#[case(" \t\r\n ")]
fn empty_input_expects_a_value(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ExpectedValue);
}

#[rstest]
#[case("nul")]
#[case("tru")]
#[case("falss")]
#[case("?")]
#[case("+0")]
#[case("+1")]
#[case(".123")]
#[case("1.")]
#[case("1em")]
#[case("INF")]
#[case("inf")]
#[case("NAN")]
#[case("nan")]
#[case("-")]
#[case("[1,]")]
#[case("[\"a\", nul]")]
#[case("{\"1\": tru}")]
fn malformed_literals_and_numbers_are_invalid(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::InvalidValue);
}

#[rstest]
#[case("true ?")]
#[case("null x")]
#[case("1 2")]
#[case("0123")]
#[case("0x0")]
#[case("0x123")]
fn leftover_text_after_the_document(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::TrailingCharacters);
}

#[rstest]
#[case("1e309")]
#[case("-1e309")]
fn overflowing_numbers_are_out_of_range(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::NumberOutOfRange);
}

#[rstest]
#[case("\"")]
#[case("\"abc")]
#[case("\"abc\\")]
#[case("{\"1\": \"123}")]
fn unterminated_strings(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::UnterminatedString);
}

#[rstest]
#[case("\"\\v\"")]
#[case("\"\\'\"")]
#[case("\"\\0\"")]
#[case("\"\\x12\"")]
fn unrecognized_escapes(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::InvalidEscape);
}

#[rstest]
#[case("\"\x01\"")]
#[case("\"\x1f\"")]
#[case("\"raw\0nul\"")]
#[case("{\"\x07\": \"123\"}")]
fn raw_control_bytes_in_strings(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ControlCharacterInString);
}

#[rstest]
#[case("\"\\u\"")]
#[case("\"\\u0\"")]
#[case("\"\\u01\"")]
#[case("\"\\u012\"")]
#[case("\"\\u/000\"")]
#[case("\"\\uG000\"")]
#[case("\"\\u0/00\"")]
#[case("\"\\u0G00\"")]
#[case("\"\\u00/0\"")]
#[case("\"\\u00G0\"")]
#[case("\"\\u000/\"")]
#[case("\"\\u000G\"")]
#[case("\"\\u 123\"")]
#[case("\"\\uD800\\uG000\"")]
fn malformed_hex_escapes(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::InvalidUnicodeHex);
}

#[rstest]
#[case("\"\\uD800\"")]
#[case("\"\\uDBFF\"")]
#[case("\"\\uD800\\\\\"")]
#[case("\"\\uD800\\uDBFF\"")]
#[case("\"\\uD800\\uE000\"")]
#[case("\"\\uDC00\"")]
#[case("\"\\udfff\"")]
fn broken_surrogate_pairs(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::UnpairedSurrogate);
}

#[rstest]
#[case("[1")]
#[case("[1}")]
#[case("[1 2")]
#[case("[[]")]
fn arrays_missing_comma_or_bracket(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ExpectedCommaOrArrayEnd);
}

#[rstest]
#[case("{:1,")]
#[case("{1:1,")]
#[case("{true:1,")]
#[case("{false:1,")]
#[case("{null:1,")]
#[case("{[]:1,")]
#[case("{{}:1,")]
#[case("{\"a\":1,")]
fn objects_missing_a_key(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ExpectedObjectKey);
}

#[rstest]
#[case("{\"a\"}")]
#[case("{\"a\",\"b\"}")]
fn objects_missing_a_colon(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ExpectedColon);
}

#[rstest]
#[case("{\"a\":1")]
#[case("{\"a\":1]")]
#[case("{\"a\":1 \"b\"")]
#[case("{\"a\":{}")]
fn objects_missing_comma_or_brace(#[case] input: &str) {
    assert_eq!(code_of(input), ErrorCode::ExpectedCommaOrObjectEnd);
}

#[rstest]
#[case("true ?", 5)]
#[case("nul", 0)]
#[case("[1,]", 3)]
#[case("{\"a\"}", 4)]
#[case("\"ab\x01cd\"", 3)]
fn errors_carry_the_byte_offset(#[case] input: &str, #[case] offset: usize) {
    assert_eq!(from_str(input).unwrap_err().offset, offset);
}

#[test]
fn error_messages_name_the_failure_and_position() {
    let error = from_str("[1,]").unwrap_err();
    assert_eq!(error.to_string(), "invalid value at offset 3");
}

#[test]
fn nesting_deeper_than_the_configured_limit_fails() {
    let options = ParseOptions::new().with_max_depth(8);
    let fits = format!("{}{}", "[".repeat(8), "]".repeat(8));
    assert!(from_str_with_options(&fits, &options).is_ok());

    let too_deep = format!("{}{}", "[".repeat(9), "]".repeat(9));
    assert_eq!(
        from_str_with_options(&too_deep, &options).unwrap_err().code,
        ErrorCode::RecursionLimitExceeded
    );
}

#[test]
fn objects_count_toward_the_depth_limit_too() {
    let options = ParseOptions::new().with_max_depth(3);
    assert!(from_str_with_options("{\"a\":[{\"b\":1}]}", &options).is_ok());
    assert_eq!(
        from_str_with_options("{\"a\":[{\"b\":[1]}]}", &options)
            .unwrap_err()
            .code,
        ErrorCode::RecursionLimitExceeded
    );
}

#[test]
fn default_depth_limit_is_128() {
    let fits = format!("{}{}", "[".repeat(128), "]".repeat(128));
    assert!(from_str(&fits).is_ok());

    let too_deep = format!("{}{}", "[".repeat(129), "]".repeat(129));
    assert_eq!(
        from_str(&too_deep).unwrap_err().code,
        ErrorCode::RecursionLimitExceeded
    );
}

#[test]
fn rejects_bytes_that_are_not_utf8() {
    let error = from_slice(b"\"abc\xff\"").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidUtf8);
    assert_eq!(error.offset, 4);
}

#[test]
fn accepts_utf8_bytes() {
    let value = from_slice("[1, \"caf\u{e9}\"]".as_bytes()).unwrap();
    assert_eq!(value.get_index(1).and_then(|v| v.as_str()), Some("caf\u{e9}"));
}
