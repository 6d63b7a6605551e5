//! Typed client for the board backend under `/usr/`.
//!
//! Wraps [`ApiClient`] with two hooks: every request carries the stored
//! auth key as the `authKey` query parameter, and every response reporting
//! an expired session (`F-A`/`F-B`) clears the local session and sends the
//! user to the login page.

use std::sync::Arc;

use serde::Deserialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::hooks::{Hooks, RequestConfig};
use super::transport::{HttpResponse, ReqwestTransport, Transport};
use super::types::{
    is_session_expired_code, ArticleDetailBody, ArticleListBody, AuthKeyBody, CreatedBody,
    Envelope, JoinRequest,
};
use crate::config::ClientConfig;
use crate::session::SessionStore;
use crate::ui::{Alert, Navigator, Notifier, LOGIN_PATH};

/// Query parameter carrying the session token.
pub const AUTH_KEY_PARAM: &str = "authKey";

pub struct MainApi<T: Transport = ReqwestTransport> {
    client: ApiClient<T>,
}

impl MainApi<ReqwestTransport> {
    /// Create a client talking to `config.base_url` over reqwest.
    pub fn from_config(
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(
            ReqwestTransport::new(config),
            &config.base_url,
            session,
            navigator,
            notifier,
        )
    }
}

impl<T: Transport> MainApi<T> {
    pub fn new(
        transport: T,
        base_url: &str,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let hooks = session_hooks(session, navigator, Arc::clone(&notifier));
        Self {
            client: ApiClient::new(transport, base_url, hooks, notifier),
        }
    }

    /// GET /article/list?boardId={board_id}
    pub async fn article_list(
        &self,
        board_id: u64,
    ) -> Result<Envelope<ArticleListBody>, ApiError> {
        self.client
            .get(&format!("/article/list?boardId={}", board_id))
            .await
    }

    /// GET /article/detail?id={id}
    pub async fn article_detail(
        &self,
        id: u64,
    ) -> Result<Envelope<ArticleDetailBody>, ApiError> {
        self.client.get(&format!("/article/detail?id={}", id)).await
    }

    /// POST /article/doAdd with `boardId`, `title`, `body`.
    pub async fn article_do_write(
        &self,
        board_id: u64,
        title: &str,
        body: &str,
    ) -> Result<Envelope<CreatedBody>, ApiError> {
        self.client
            .post_by_form(
                "/article/doAdd",
                &[
                    ("boardId", board_id.to_string()),
                    ("title", title.to_string()),
                    ("body", body.to_string()),
                ],
            )
            .await
    }

    /// GET /member/authKey?loginId={login_id}&loginPw={login_pw}
    pub async fn member_auth_key(
        &self,
        login_id: &str,
        login_pw: &str,
    ) -> Result<Envelope<AuthKeyBody>, ApiError> {
        let path = format!(
            "/member/authKey?loginId={}&loginPw={}",
            urlencoding::encode(login_id),
            urlencoding::encode(login_pw)
        );
        self.client.get(&path).await
    }

    /// POST /member/doJoin with the registration fields.
    pub async fn member_do_join(
        &self,
        request: &JoinRequest,
    ) -> Result<Envelope<CreatedBody>, ApiError> {
        self.client
            .post_by_form("/member/doJoin", &request.fields())
            .await
    }
}

/// Build the auth-key and session-expiry hooks over the given collaborators.
pub fn session_hooks(
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
) -> Hooks {
    let reader = Arc::clone(&session);
    Hooks::identity()
        .with_request(move |config| attach_auth_key(reader.as_ref(), config))
        .with_response(move |response| {
            expire_session_if_rejected(
                &response,
                session.as_ref(),
                navigator.as_ref(),
                notifier.as_ref(),
            );
            response
        })
}

/// Replace the request's params with the stored auth key.
///
/// With no stored key the request still goes out, without `authKey`.
fn attach_auth_key(session: &dyn SessionStore, mut config: RequestConfig) -> RequestConfig {
    config.params.clear();
    match session.auth_key() {
        Ok(Some(key)) => config.params.push((AUTH_KEY_PARAM.to_string(), key)),
        Ok(None) => {}
        Err(e) => log::warn!("Failed to read auth key, sending request without it: {}", e),
    }
    config
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultCodeOnly {
    result_code: Option<String>,
}

fn expire_session_if_rejected(
    response: &HttpResponse,
    session: &dyn SessionStore,
    navigator: &dyn Navigator,
    notifier: &dyn Notifier,
) {
    let Ok(peek) = serde_json::from_slice::<ResultCodeOnly>(&response.body) else {
        return;
    };
    let Some(code) = peek.result_code.filter(|c| is_session_expired_code(c)) else {
        return;
    };

    log::info!("Server rejected session ({}), clearing local session", code);
    notifier.alert(&Alert::LoginRequired);
    if let Err(e) = session.clear() {
        log::error!("Failed to clear session: {}", e);
    }
    navigator.redirect(LOGIN_PATH);
}
