/// Case-insensitive substring helpers.
/// ASCII inputs are compared byte-wise without allocating; anything else
/// falls back to lowercasing both sides.
pub trait FastLowercase {
    fn fast_to_lowercase(&self) -> String;
    fn fast_contains_ignore_case(&self, pattern: &str) -> bool;
}

impl FastLowercase for str {
    #[inline]
    fn fast_to_lowercase(&self) -> String {
        if self.is_ascii() {
            self.to_ascii_lowercase()
        } else {
            self.to_lowercase()
        }
    }

    #[inline]
    fn fast_contains_ignore_case(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return true;
        }

        if self.is_ascii() && pattern.is_ascii() {
            let haystack = self.as_bytes();
            let needle = pattern.as_bytes();
            if haystack.len() < needle.len() {
                return false;
            }
            haystack
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
        } else {
            self.fast_to_lowercase()
                .contains(&pattern.fast_to_lowercase())
        }
    }
}
