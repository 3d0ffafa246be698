use once_cell::sync::Lazy;
use regex::Regex;

/// Anything other than letters, digits and the plain space / 非字母、数字、空格的字符
static SPECIAL_CHARACTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{Alphabetic}\d ]").expect("special character pattern is valid")
});

/// Check whether text contains a special character / 检查文本是否包含特殊字符
///
/// Search phrases failing this check are rejected before they reach the engine.
pub fn contains_special_characters(text: &str) -> bool {
    SPECIAL_CHARACTERS.is_match(text)
}

/// Check if length (in chars) is within bounds, inclusive / 检查长度是否在范围内
pub fn is_length_valid(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.chars().count())
}
