//! Phone number normalization.

/// Country code prepended to every local number.
pub const COUNTRY_CODE_PREFIX: &str = "+91";

/// Turn a local phone number into its international form.
///
/// The input is assumed to be local digits for the single supported
/// country. Nothing is validated or stripped: a non-empty input is returned
/// with the country code in front, an empty input stays empty.
pub fn normalize_phone(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        format!("{}{}", COUNTRY_CODE_PREFIX, raw)
    }
}
