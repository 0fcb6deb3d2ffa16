//! Conversion: CoinResponse → CoinDetails (TryFrom + validation).

use super::wire::{self, usd_of};
use super::{CoinDetails, PriceChange, ValidationError};

impl TryFrom<&wire::CoinResponse> for CoinDetails {
    type Error = ValidationError;

    fn try_from(source: &wire::CoinResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if source.id.is_empty() {
            errors.push(ValidationError::MissingId);
        }
        if source.name.trim().is_empty() {
            errors.push(ValidationError::MissingName);
        }
        if source.symbol.trim().is_empty() {
            errors.push(ValidationError::MissingSymbol);
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id.to_string(), errors));
        }

        let md = &source.market_data;
        let image_url = [&source.image.large, &source.image.small, &source.image.thumb]
            .into_iter()
            .find(|url| !url.is_empty())
            .cloned()
            .unwrap_or_default();

        Ok(CoinDetails {
            id: source.id.clone(),
            name: source.name.clone(),
            symbol: source.symbol.to_uppercase(),
            image_url,
            market_cap_rank: source.market_cap_rank,
            current_price: usd_of(&md.current_price),
            price_change_24h: PriceChange {
                value: usd_of(&md.price_change_24h_in_currency),
                percentage: usd_of(&md.price_change_percentage_24h_in_currency),
            },
            description: source.description.get("en").cloned().unwrap_or_default(),
        })
    }
}

impl TryFrom<wire::CoinResponse> for CoinDetails {
    type Error = ValidationError;

    fn try_from(source: wire::CoinResponse) -> Result<Self, Self::Error> {
        CoinDetails::try_from(&source)
    }
}
