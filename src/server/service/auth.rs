//! OAuth2 login with Google

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::GoogleUserInfo,
    state::OAuth2Client,
};

pub struct GoogleAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Google consent URL and the CSRF state that must come back on the callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges the authorization code and fetches the user's profile.
    ///
    /// # Returns
    /// - `Ok(GoogleUserInfo)` - Profile of the signed in Google account
    /// - `Err(AppError::AuthErr)` - Code exchange was rejected
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    pub async fn callback(&self, code: String) -> Result<GoogleUserInfo, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Ok(info)
    }
}
