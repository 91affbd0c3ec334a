use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    #[display("user/refresh_token")]
    RefreshToken,
    #[display("maintenance")]
    Maintenance,
}

impl Endpoint {
    /// Joins the endpoint onto the api base, tolerating a missing trailing slash.
    pub fn url(self, api_url: &str) -> anyhow::Result<url::Url> {
        let base = if api_url.ends_with('/') {
            url::Url::parse(api_url)?
        } else {
            url::Url::parse(&format!("{api_url}/"))?
        };

        Ok(base.join(&self.to_string())?)
    }
}
