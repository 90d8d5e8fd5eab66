//! # Location
//!
//! Keeps the active filter set in the page URL so a filtered view can be shared or bookmarked.
//!
//! ## Encoding
//! - Single query parameter `filters`
//! - Each active name is percent-encoded like `encodeURIComponent`, then joined with `,`
//! - A comma inside a name is therefore `%2C` and never collides with the separator
//! - The joined value is then form-encoded as a whole, like any other query value
//! - No active filters means no parameter at all, so the unfiltered URL stays canonical
//!
//! ## Store
//! Reading and writing goes through [`QueryStore`], which only knows decoded query pairs in
//! URL order. [`Location`] is the concrete store: a URL whose query is replaced in place on
//! write, the same way a history replace changes the address bar without navigating or adding
//! an entry. Only the `filters` pair is touched, every other pair keeps its position, repeats
//! included.
use std::{fmt, str::FromStr};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::{Position, Url};

use crate::filters::{ActiveFilters, Filters, build_active_filter_set};

pub use url::ParseError;

pub const FILTERS_PARAM: &str = "filters";

const FILTER_SEPARATOR: &str = ",";

// Resolves paths such as `/jobs?filters=ML`; never rendered.
const RELATIVE_BASE: &str = "http://localhost/";

// Same unreserved marks as encodeURIComponent.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decoded query pairs in URL order. Keys may repeat.
pub type QueryParams = Vec<(String, String)>;

pub trait QueryStore {
    fn read(&self) -> QueryParams;

    fn write(&mut self, params: QueryParams);
}

/// An absolute URL, or a path with query and fragment when parsed without a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
    relative: bool,
}

impl Location {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(Self { url, relative: false }),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Self {
                url: Url::parse(RELATIVE_BASE)?.join(input)?,
                relative: true,
            }),
            Err(e) => Err(e),
        }
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            f.write_str(&self.url[Position::BeforePath..])
        } else {
            f.write_str(self.url.as_str())
        }
    }
}

impl QueryStore for Location {
    fn read(&self) -> QueryParams {
        self.url.query_pairs().into_owned().collect()
    }

    fn write(&mut self, params: QueryParams) {
        if params.is_empty() {
            self.url.set_query(None);
            return;
        }

        self.url.query_pairs_mut().clear().extend_pairs(params);
    }
}

/// Parameter value for `active`, `None` when nothing is active.
pub fn encode_filter_param(active: &ActiveFilters) -> Option<String> {
    if active.is_empty() {
        return None;
    }

    let encoded: Vec<String> = active
        .iter()
        .map(|name| utf8_percent_encode(name, COMPONENT).to_string())
        .collect();

    Some(encoded.join(FILTER_SEPARATOR))
}

/// Active set from an already form-decoded parameter value.
pub fn decode_filter_param(value: Option<&str>) -> ActiveFilters {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return ActiveFilters::new();
    };

    value
        .split(FILTER_SEPARATOR)
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8_lossy()
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Reads the first `filters` pair, like `URLSearchParams.get`.
pub fn read_active_filters<S: QueryStore + ?Sized>(store: &S) -> ActiveFilters {
    let params = store.read();

    decode_filter_param(
        params
            .iter()
            .find(|(key, _)| key == FILTERS_PARAM)
            .map(|(_, value)| value.as_str()),
    )
}

/// Replaces the first `filters` pair in place and drops any repeats of it. Appended when absent.
pub fn write_active_filters<S: QueryStore + ?Sized>(store: &mut S, active: &ActiveFilters) {
    let mut params = store.read();

    let position = params.iter().position(|(key, _)| key == FILTERS_PARAM);
    params.retain(|(key, _)| key != FILTERS_PARAM);

    if let Some(value) = encode_filter_param(active) {
        let index = position.unwrap_or(params.len());
        params.insert(index, (FILTERS_PARAM.to_string(), value));
    }

    #[cfg(feature = "verbose")]
    tracing::debug!(?params, "Replacing query");

    store.write(params);
}

/// Writes the active subset of `filters`.
pub fn sync_filters<S: QueryStore + ?Sized>(store: &mut S, filters: &Filters) {
    write_active_filters(store, &build_active_filter_set(filters));
}
