use anyhow::anyhow;
use dioxus::logger::tracing;
use serde::Deserialize;

use crate::auth::endpoints::Endpoint;
use crate::auth::session::{SessionProvider, SessionToken};

const MAINTENANCE_PATH: &str = "/maintenance";

/// Contract the navigation guard needs from the backend.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Renews the session and writes the new token back to the session store.
    async fn refresh_token(&self) -> anyhow::Result<()>;

    /// Fire-and-forget check; must return without waiting on the network.
    fn maintenance(&self);
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    #[serde(default)]
    msg: Option<String>,
    data: T,
}

#[derive(Debug, Deserialize)]
struct RefreshedToken {
    #[serde(alias = "token")]
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct MaintenanceStatus {
    #[serde(default)]
    active: bool,
}

/// Backend user service reached over HTTP.
#[derive(Debug, Clone)]
pub struct UserService<S> {
    client: reqwest::Client,
    api_url: String,
    session: S,
}

impl<S> UserService<S>
where
    S: SessionProvider,
{
    pub fn new(api_url: impl Into<String>, session: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            session,
        }
    }
}

impl<S> AuthService for UserService<S>
where
    S: SessionProvider,
{
    async fn refresh_token(&self) -> anyhow::Result<()> {
        let Some(current) = self.session.token() else {
            anyhow::bail!("no session token to refresh");
        };

        let response = self
            .client
            .get(Endpoint::RefreshToken.url(&self.api_url)?)
            .bearer_auth(current.as_str())
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<RefreshedToken>>()
            .await?;

        let Some(token) = SessionToken::new(response.data.access_token) else {
            anyhow::bail!("refresh returned an empty token");
        };

        self.session.store(&token)?;
        tracing::debug!("session token refreshed");

        Ok(())
    }

    fn maintenance(&self) {
        let client = self.client.clone();
        let url = Endpoint::Maintenance.url(&self.api_url);

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(error) = check_maintenance(client, url).await {
                tracing::warn!("maintenance check failed: {error:?}");
            }
        });
    }
}

async fn check_maintenance(client: reqwest::Client, url: anyhow::Result<url::Url>) -> anyhow::Result<()> {
    let status = client
        .get(url?)
        .send()
        .await?
        .error_for_status()?
        .json::<Envelope<MaintenanceStatus>>()
        .await?;

    if !status.data.active {
        return Ok(());
    }

    let Some(window) = web_sys::window() else {
        anyhow::bail!("window not available");
    };

    let location = window.location();
    let path = location
        .pathname()
        .map_err(|err| anyhow!("failed to get pathname: {err:?}"))?;

    if path != MAINTENANCE_PATH {
        tracing::info!("maintenance mode active, leaving {path}");
        location
            .set_pathname(MAINTENANCE_PATH)
            .map_err(|err| anyhow!("{err:?}"))?;
    }

    Ok(())
}
