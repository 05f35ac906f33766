use crate::constants::*;
use bookproxy_core::{lenient, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Body a client posts to the proxy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    /// `search` or `bestsellers`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub search_type: Option<String>,
    /// Keywords, echoed back for bestsellers. Numbers are read as text.
    #[serde(default, deserialize_with = "lenient::text")]
    pub query: Option<String>,
    /// Browse node to restrict a keyword search to.
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    /// Requested number of items, capped at 50. Numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient::count")]
    pub max_results: Option<u32>,
}

impl ClientRequest {
    /// Parse a client body. An empty body is an empty request.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body)
            .map_err(|e| Error::request_invalid(ERR_INVALID_JSON).with_source(e))
    }
}

/// Kind of lookup a client asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Keyword search in the books index.
    Search,
    /// Most relevant items of the books browse node.
    Bestsellers,
}

impl SearchType {
    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Search => "search",
            SearchType::Bestsellers => "bestsellers",
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `SearchItems` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchItemsRequest {
    /// Keyword search.
    Search {
        /// Search keywords.
        keywords: String,
        /// Optional browse node filter.
        browse_node_id: Option<String>,
        /// Number of items, at most 50.
        item_count: u32,
    },
    /// Bestsellers of the books category.
    Bestsellers {
        /// Number of items, at most 50.
        item_count: u32,
    },
}

impl SearchItemsRequest {
    /// Validate a client request.
    ///
    /// Both `searchType` and `query` are required, empty strings included.
    pub fn from_client(req: &ClientRequest) -> Result<Self> {
        let (Some(search_type), Some(query)) = (
            req.search_type.as_deref().filter(|v| !v.is_empty()),
            req.query.as_deref().filter(|v| !v.is_empty()),
        ) else {
            return Err(Error::request_invalid(ERR_MISSING_PARAMETERS));
        };

        let item_count = req
            .max_results
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .min(MAX_ITEM_COUNT);

        match search_type {
            "search" => Ok(SearchItemsRequest::Search {
                keywords: query.to_string(),
                browse_node_id: req.category.clone().filter(|v| !v.is_empty()),
                item_count,
            }),
            "bestsellers" => Ok(SearchItemsRequest::Bestsellers { item_count }),
            _ => Err(Error::request_invalid(ERR_INVALID_SEARCH_TYPE)),
        }
    }

    /// Kind of this request.
    pub fn search_type(&self) -> SearchType {
        match self {
            SearchItemsRequest::Search { .. } => SearchType::Search,
            SearchItemsRequest::Bestsellers { .. } => SearchType::Bestsellers,
        }
    }

    /// Build the PA-API payload for this request.
    pub fn payload<'a>(&'a self, partner_tag: &'a str) -> Payload<'a> {
        match self {
            SearchItemsRequest::Search {
                keywords,
                browse_node_id,
                item_count,
            } => Payload {
                keywords: Some(keywords.as_str()),
                search_index: Some(SEARCH_INDEX_BOOKS),
                browse_node_id: browse_node_id.as_deref(),
                item_count: *item_count,
                partner_tag,
                partner_type: PARTNER_TYPE_ASSOCIATES,
                sort_by: None,
                resources: SEARCH_RESOURCES,
            },
            SearchItemsRequest::Bestsellers { item_count } => Payload {
                keywords: None,
                search_index: None,
                browse_node_id: Some(BROWSE_NODE_BOOKS),
                item_count: *item_count,
                partner_tag,
                partner_type: PARTNER_TYPE_ASSOCIATES,
                sort_by: Some(SORT_BY_RELEVANCE),
                resources: BESTSELLERS_RESOURCES,
            },
        }
    }
}

/// JSON body of a PA-API `SearchItems` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_index: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_node_id: Option<&'a str>,
    pub item_count: u32,
    pub partner_tag: &'a str,
    pub partner_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'a str>,
    pub resources: &'a [&'a str],
}
