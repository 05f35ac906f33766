// Env values.
pub const AMAZON_ACCESS_KEY_ID: &str = "AMAZON_ACCESS_KEY_ID";
pub const AMAZON_SECRET_ACCESS_KEY: &str = "AMAZON_SECRET_ACCESS_KEY";
pub const AMAZON_PARTNER_TAG: &str = "AMAZON_PARTNER_TAG";
pub const AMAZON_PAAPI_HOST: &str = "AMAZON_PAAPI_HOST";
pub const AMAZON_PAAPI_REGION: &str = "AMAZON_PAAPI_REGION";

// PA-API endpoint.
pub const DEFAULT_HOST: &str = "webservices.amazon.com";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const SERVICE: &str = "ProductAdvertisingAPI";
pub const SEARCH_ITEMS_PATH: &str = "/paapi5/searchitems";
pub const SEARCH_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";
/// Must match byte for byte what is signed and sent.
pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json; charset=utf-8";

// Payload values.
pub const SEARCH_INDEX_BOOKS: &str = "Books";
pub const BROWSE_NODE_BOOKS: &str = "17";
pub const PARTNER_TYPE_ASSOCIATES: &str = "Associates";
pub const SORT_BY_RELEVANCE: &str = "Relevance";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const MAX_ITEM_COUNT: u32 = 50;

pub const SEARCH_RESOURCES: &[&str] = &[
    "Images.Primary.Large",
    "ItemInfo.Title",
    "ItemInfo.ByLineInfo",
    "ItemInfo.ContentInfo",
    "ItemInfo.ContentRating",
    "ItemInfo.Classifications",
    "ItemInfo.ExternalIds",
    "ItemInfo.Features",
    "ItemInfo.ManufactureInfo",
    "ItemInfo.ProductInfo",
    "ItemInfo.TechnicalInfo",
    "Offers.Listings.Price",
    "Offers.Listings.ProgramEligibility.IsPrimeExclusive",
    "Offers.Listings.ProgramEligibility.IsPrimePantry",
    "Offers.Summaries.HighestPrice",
    "Offers.Summaries.LowestPrice",
    "Offers.Summaries.OfferCount",
    "BrowseNodeInfo.BrowseNodes",
    "BrowseNodeInfo.BrowseNodes.Ancestor",
    "BrowseNodeInfo.BrowseNodes.SalesRank",
    "BrowseNodeInfo.WebsiteSalesRank",
];

pub const BESTSELLERS_RESOURCES: &[&str] = &[
    "Images.Primary.Large",
    "ItemInfo.Title",
    "ItemInfo.ByLineInfo",
    "ItemInfo.ContentInfo",
    "ItemInfo.Classifications",
    "Offers.Listings.Price",
    "Offers.Summaries.LowestPrice",
    "BrowseNodeInfo.BrowseNodes.SalesRank",
    "BrowseNodeInfo.WebsiteSalesRank",
];

// Client facing messages.
pub const ERR_CREDENTIALS_NOT_CONFIGURED: &str = "Amazon API credentials not configured";
pub const ERR_MISSING_PARAMETERS: &str = "Missing required parameters: searchType and query";
pub const ERR_INVALID_SEARCH_TYPE: &str = r#"Invalid searchType. Use "search" or "bestsellers""#;
pub const ERR_INVALID_JSON: &str = "Invalid JSON in request body.";
pub const ERR_FETCH_FAILED: &str = "Failed to fetch from Amazon Books API";
