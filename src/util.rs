/// Returns true if `str` is empty or made only of White_Space characters.
///
/// White_Space is specified in the Unicode Character Database:
/// [White_Space](https://www.unicode.org/Public/UCD/latest/ucd/PropList.txt)
pub fn is_blank(str: &str) -> bool {
    str.chars().all(char::is_whitespace)
}
