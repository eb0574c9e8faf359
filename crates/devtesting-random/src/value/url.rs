//! Random URLs.
//!
//! Generated URLs always use `https` and look like
//! `https://subdomainXXXXX.domainXXXXX.tld/a/bc?name=value#frag`, where every
//! generated piece is ASCII alphanumeric and so never needs escaping.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random_bool;
use super::string::random_alphanumeric_string;

const SCHEME: &str = "https";
const TOP_LEVEL_DOMAINS: [&str; 5] = ["com", "edu", "gov", "net", "org"];

/// One `name` or `name=value` pair of a URL query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryItem {
    /// The item's name.
    pub name: String,
    /// The item's value; `None` renders as a bare name.
    pub value: Option<String>,
}

impl fmt::Display for QueryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// The parts of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlComponents {
    /// The scheme, without `://`.
    pub scheme: String,
    /// The host name.
    pub host: String,
    /// The path, starting with `/`.
    pub path: String,
    /// The query items; `None` means the URL has no query at all.
    pub query_items: Option<Vec<QueryItem>>,
    /// The fragment, without `#`.
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// Returns the query string without its leading `?`, if there is a query.
    #[must_use]
    pub fn query(&self) -> Option<String> {
        self.query_items.as_ref().map(|items| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Renders the components as a URL string.
    #[must_use]
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)?;
        if let Some(query) = self.query() {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Returns a random query item: a 3–10 character name and, nine times in
/// ten, a 3–10 character value.
pub fn random_query_item<G: Rng + ?Sized>(rng: &mut G) -> QueryItem {
    let name = random_sized_alphanumeric(3..=10, rng);
    let value = if rng.random_range(0..10) == 0 {
        None
    } else {
        Some(random_sized_alphanumeric(3..=10, rng))
    };

    QueryItem { name, value }
}

/// Returns random URL components.
///
/// The host is `subdomain<5>.domain<5>.<tld>` with a uniformly chosen
/// top-level domain, and the path has 1–5 segments of 1–5 characters. A
/// 3–5 character fragment and 1–5 query items are included when the
/// corresponding flag is `Some(true)`, omitted when it is `Some(false)`, and
/// decided by a coin flip when it is `None`.
pub fn random_url_components<G: Rng + ?Sized>(
    include_fragment: Option<bool>,
    include_query_items: Option<bool>,
    rng: &mut G,
) -> UrlComponents {
    let subdomain = random_alphanumeric_string(5, rng);
    let domain = random_alphanumeric_string(5, rng);
    let tld = TOP_LEVEL_DOMAINS[rng.random_range(0..TOP_LEVEL_DOMAINS.len())];
    let host = format!("subdomain{subdomain}.domain{domain}.{tld}");

    let segment_count = rng.random_range(1..=5);
    let segments: Vec<String> = (0..segment_count)
        .map(|_| random_sized_alphanumeric(1..=5, rng))
        .collect();
    let path = format!("/{}", segments.join("/"));

    let fragment = include_fragment
        .unwrap_or_else(|| random_bool(rng))
        .then(|| random_sized_alphanumeric(3..=5, rng));

    let query_items: Option<Vec<QueryItem>> = include_query_items
        .unwrap_or_else(|| random_bool(rng))
        .then(|| {
            let item_count = rng.random_range(1..=5);
            (0..item_count).map(|_| random_query_item(rng)).collect()
        });

    UrlComponents {
        scheme: SCHEME.to_owned(),
        host,
        path,
        query_items,
        fragment,
    }
}

/// Returns a random URL string; see [`random_url_components`].
pub fn random_url<G: Rng + ?Sized>(
    include_fragment: Option<bool>,
    include_query_items: Option<bool>,
    rng: &mut G,
) -> String {
    random_url_components(include_fragment, include_query_items, rng).url()
}

fn random_sized_alphanumeric<G: Rng + ?Sized>(
    lengths: std::ops::RangeInclusive<usize>,
    rng: &mut G,
) -> String {
    let count = rng.random_range(lengths);
    random_alphanumeric_string(count, rng)
}
