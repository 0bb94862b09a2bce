//! Eligibility query DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{EligibilityResult, EligibleOffer};

/// Query parameters for `GET /users/{user_id}/eligible-offers`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EligibleOffersQuery {
    /// Reference instant (RFC 3339). Defaults to the current time.
    #[serde(default)]
    pub now: Option<String>,
}

/// One eligible offer with its justification.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EligibleOfferDto {
    /// Qualifying offer.
    pub offer_id: String,
    /// Why the user qualifies.
    pub reason: String,
}

impl From<EligibleOffer> for EligibleOfferDto {
    fn from(entry: EligibleOffer) -> Self {
        Self {
            offer_id: entry.offer_id.into(),
            reason: entry.reason,
        }
    }
}

/// Response body for `GET /users/{user_id}/eligible-offers`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EligibleOffersResponse {
    /// The evaluated user, echoed back.
    pub user_id: String,
    /// Offers the user qualifies for. Order carries no meaning.
    pub eligible_offers: Vec<EligibleOfferDto>,
}

impl From<EligibilityResult> for EligibleOffersResponse {
    fn from(result: EligibilityResult) -> Self {
        Self {
            user_id: result.user_id,
            eligible_offers: result
                .eligible_offers
                .into_iter()
                .map(EligibleOfferDto::from)
                .collect(),
        }
    }
}
