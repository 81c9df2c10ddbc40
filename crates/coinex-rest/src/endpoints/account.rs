//! Private account endpoints
//!
//! These endpoints require authentication.

use coinex_auth::Credentials;
use coinex_types::{MarketType, ResponseEnvelope};
use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::CoinExRestClient;
use crate::error::RestResult;
use crate::params::RequestParams;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a CoinExRestClient,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a CoinExRestClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Get account balances
    ///
    /// Margin balances are served from the spot asset path.
    #[instrument(skip(self))]
    pub async fn get_balances(&self, market_type: MarketType) -> RestResult<ResponseEnvelope> {
        debug!("Fetching balances");
        let path = format!("/v2/assets/{}/balance", market_type.path_segment());
        self.client
            .execute(Method::GET, &path, &RequestParams::new(), Some(self.credentials))
            .await
    }
}
