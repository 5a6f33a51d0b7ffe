/// Placeholder character in display patterns.
pub const PLACEHOLDER: u8 = b'X';

/// Fill `pattern` left to right with bytes from `source`.
///
/// Every `X` in the pattern consumes the next source byte; every other
/// pattern byte is copied through. Once the source runs out, remaining
/// placeholders are dropped, so the output can be shorter than the
/// pattern. Extra source bytes are ignored.
///
/// ```rust
/// use brdoc::core::format_document;
///
/// assert_eq!(format_document("71656686759", "XXX.XXX.XXX-XX"), "716.566.867-59");
/// assert_eq!(format_document("123", "XXX.XXX.XXX-XX"), "123..-");
/// ```
pub fn format_document(source: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut source = source.chars();
    for ch in pattern.chars() {
        if ch == char::from(PLACEHOLDER) {
            if let Some(next) = source.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
