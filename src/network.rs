//! Network constants for the CoinGecko market-data API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Header carrying the CoinGecko demo API key.
pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Environment variable the API key is read from.
pub const API_KEY_ENV: &str = "COIN_GECKO_API_TOKEN";
