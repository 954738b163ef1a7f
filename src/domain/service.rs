//! Service registrations granting downstream applications OAuth-based API
//! access to the hub.

use serde::{Deserialize, Serialize};

use crate::domain::types::{ApiToken, OauthClientId, ServiceName, ServiceUrl, TypeConstraintError};

/// A registered downstream service the hub proxies to and issues OAuth
/// credentials for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRegistration {
    pub name: ServiceName,
    pub url: ServiceUrl,
    pub oauth_client_id: OauthClientId,
    pub api_token: ApiToken,
}

impl ServiceRegistration {
    /// Builds a registration from raw strings, filling host-style defaults:
    /// a missing OAuth client id becomes `service-<name>` and a missing API
    /// token is generated.
    pub fn try_new(
        name: &str,
        url: &str,
        oauth_client_id: Option<&str>,
        api_token: Option<&str>,
    ) -> Result<Self, TypeConstraintError> {
        let name = ServiceName::new(name)?;
        let url = ServiceUrl::new(url)?;
        let oauth_client_id = match oauth_client_id {
            Some(id) => OauthClientId::new(id)?,
            None => OauthClientId::new(format!("service-{name}"))?,
        };
        let api_token = match api_token {
            Some(token) => ApiToken::new(token)?,
            None => ApiToken::generate(),
        };
        Ok(Self {
            name,
            url,
            oauth_client_id,
            api_token,
        })
    }
}
