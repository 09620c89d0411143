//! Search parameters of the users listing route.
//!
//! The raw query string is validated once, here, into `UsersSearch`. A
//! missing, empty, zero, negative or non-numeric `page` becomes page 1;
//! validation never fails.

use std::fmt;
use std::num::NonZeroU32;

use url::form_urlencoded;

/// Validated search parameters of `/users/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsersSearch {
    pub page: NonZeroU32,
}

impl UsersSearch {
    pub const FIRST_PAGE: NonZeroU32 = NonZeroU32::MIN;

    pub fn new(page: NonZeroU32) -> Self {
        Self { page }
    }

    /// Normalize an untyped key/value bag. The first `page` key wins.
    pub fn validate<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "page")
            .and_then(|(_, value)| parse_page(value.as_ref()))
            .unwrap_or(Self::FIRST_PAGE);
        Self { page }
    }

    /// Normalize a raw query string such as `page=2&sort=asc`.
    pub fn from_query(query: &str) -> Self {
        Self::validate(form_urlencoded::parse(query.as_bytes()))
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .finish()
    }
}

impl Default for UsersSearch {
    fn default() -> Self {
        Self {
            page: Self::FIRST_PAGE,
        }
    }
}

impl fmt::Display for UsersSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

fn parse_page(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_bag_defaults_to_first_page() {
        assert_eq!(UsersSearch::validate(pairs(&[])).page(), 1);
    }

    #[test]
    fn zero_page_defaults_to_first_page() {
        assert_eq!(UsersSearch::validate(pairs(&[("page", "0")])).page(), 1);
    }

    #[test]
    fn explicit_page_is_kept() {
        assert_eq!(UsersSearch::validate(pairs(&[("page", "3")])).page(), 3);
    }

    #[test]
    fn garbage_defaults_to_first_page() {
        for raw in ["", "-2", "abc", "2.5", "99999999999"] {
            assert_eq!(
                UsersSearch::validate(pairs(&[("page", raw)])).page(),
                1,
                "{raw:?}"
            );
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let search = UsersSearch::validate(pairs(&[("sort", "asc"), ("page", "4"), ("page", "9")]));
        assert_eq!(search.page(), 4);
    }

    #[test]
    fn from_query_decodes_and_validates() {
        assert_eq!(UsersSearch::from_query("page=2&tab=all").page(), 2);
        assert_eq!(UsersSearch::from_query("").page(), 1);
        assert_eq!(UsersSearch::from_query("page=%32").page(), 2);
    }

    #[test]
    fn renders_back_to_query() {
        let search = UsersSearch::new(NonZeroU32::new(5).unwrap());
        assert_eq!(search.to_query(), "page=5");
        assert_eq!(UsersSearch::from_query(&search.to_query()), search);
    }
}
