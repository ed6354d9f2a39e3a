use log::warn;
use regex::Regex;

pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case, train::to_train_case,
};

/// Custom regex filter for template processing.
///
/// # Returns
/// * `bool` - True if `val` matches the pattern `re`, false otherwise or if
///   the pattern does not compile
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}
