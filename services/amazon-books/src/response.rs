//! PA-API `SearchItems` response and the book shape handed to clients.

use serde::{Deserialize, Serialize};

/// Response of `SearchItems`.
///
/// Only the fields the proxy maps are modeled; everything is optional since
/// PA-API leaves out whatever a listing lacks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItemsResponse {
    /// Matched items.
    pub search_result: Option<SearchResult>,
    /// Errors reported alongside (or instead of) the result.
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// `SearchResult` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    /// Items of this page.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Total number of matches upstream.
    pub total_result_count: Option<u64>,
}

/// Entry of the `Errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    /// Error code, e.g. `NoResults`.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
}

/// One product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ASIN")]
    pub asin: Option<String>,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    pub item_info: Option<ItemInfo>,
    pub offers: Option<Offers>,
    pub browse_node_info: Option<BrowseNodeInfo>,
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInfo {
    pub title: Option<DisplayValue>,
    pub by_line_info: Option<ByLineInfo>,
    pub content_info: Option<ContentInfo>,
    pub external_ids: Option<ExternalIds>,
    pub features: Option<DisplayValues>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayValue {
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayValues {
    #[serde(default)]
    pub display_values: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ByLineInfo {
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    pub manufacturer: Option<DisplayValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contributor {
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentInfo {
    pub publication_date: Option<DisplayValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "ISBNs")]
    pub isbns: Option<DisplayValues>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offers {
    #[serde(default)]
    pub summaries: Vec<OfferSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferSummary {
    pub lowest_price: Option<Price>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    pub display_amount: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNodeInfo {
    #[serde(default)]
    pub browse_nodes: Vec<BrowseNode>,
    pub website_sales_rank: Option<WebsiteSalesRank>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNode {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebsiteSalesRank {
    pub sales_rank: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Images {
    pub primary: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSet {
    pub large: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// A book as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: String,
    pub sales_rank: Option<u64>,
    pub category: String,
    pub isbn: Option<String>,
    pub publisher: String,
    pub publication_date: String,
    pub description: String,
    pub rating: String,
    pub reviews: u32,
    pub genre: String,
    pub amazon_url: Option<String>,
    pub image_url: Option<String>,
    pub source: String,
}

/// Body of a successful proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub books: Vec<Book>,
    pub total_results: usize,
    pub search_type: String,
    pub query: String,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|v| !v.is_empty())
}

fn display(v: Option<DisplayValue>) -> Option<String> {
    non_empty(v.and_then(|v| v.display_value))
}

impl From<Item> for Book {
    fn from(item: Item) -> Self {
        let info = item.item_info.unwrap_or_default();
        let by_line = info.by_line_info.unwrap_or_default();
        let browse = item.browse_node_info.unwrap_or_default();

        let author = by_line
            .contributors
            .into_iter()
            .filter_map(|c| non_empty(c.name))
            .collect::<Vec<_>>()
            .join(", ");
        let price = item
            .offers
            .and_then(|o| o.summaries.into_iter().next())
            .and_then(|s| s.lowest_price)
            .and_then(|p| non_empty(p.display_amount));
        let category = browse
            .browse_nodes
            .into_iter()
            .next()
            .and_then(|n| non_empty(n.display_name))
            .unwrap_or_else(|| "Books".to_string());
        let description = info
            .features
            .map(|f| f.display_values.join(" "))
            .unwrap_or_default();

        Book {
            title: display(info.title).unwrap_or_else(|| "Unknown Title".to_string()),
            author: non_empty(Some(author)).unwrap_or_else(|| "Unknown Author".to_string()),
            price: price.unwrap_or_else(|| "Price not available".to_string()),
            // A rank of zero means unranked.
            sales_rank: browse
                .website_sales_rank
                .and_then(|r| r.sales_rank)
                .filter(|r| *r != 0),
            genre: category.clone(),
            category,
            isbn: info
                .external_ids
                .and_then(|ids| ids.isbns)
                .and_then(|isbns| isbns.display_values.into_iter().next())
                .filter(|v| !v.is_empty()),
            publisher: display(by_line.manufacturer).unwrap_or_else(|| "Unknown".to_string()),
            publication_date: display(info.content_info.and_then(|c| c.publication_date))
                .unwrap_or_else(|| "Unknown".to_string()),
            description: non_empty(Some(description))
                .unwrap_or_else(|| "No description available".to_string()),
            rating: "N/A".to_string(),
            reviews: 0,
            amazon_url: non_empty(item.detail_page_url),
            image_url: non_empty(
                item.images
                    .and_then(|i| i.primary)
                    .and_then(|p| p.large)
                    .and_then(|l| l.url),
            ),
            source: "Amazon".to_string(),
        }
    }
}

impl SearchItemsResponse {
    /// Map every item into a [`Book`].
    pub fn into_books(self) -> Vec<Book> {
        self.search_result
            .map(|r| r.items.into_iter().map(Book::from).collect())
            .unwrap_or_default()
    }
}
