//! CLI command handlers.
//!
//! Each handler runs one endpoint through [`AppState::api`] and unwraps the
//! envelope. The login handler also persists the returned member as the
//! current session.

use crate::api::transport::Transport;
use crate::api::types::{Article, JoinRequest};
use crate::session::Session;
use crate::state::AppState;

/// Authenticate and store the member's session keys.
pub async fn login<T: Transport>(
    state: &AppState<T>,
    login_id: &str,
    login_pw: &str,
) -> Result<Session, String> {
    log::info!("Logging in as {}", login_id);

    let body = state
        .api
        .member_auth_key(login_id, login_pw)
        .await
        .map_err(|e| format!("Login request failed: {}", e))?
        .into_body()
        .map_err(|e| format!("Login failed: {}", e))?;

    let session = Session {
        auth_key: body.auth_key,
        member_id: body.id,
        member_name: body.name,
        member_nickname: body.nickname,
    };
    state
        .session
        .save(&session)
        .map_err(|e| format!("Failed to store session: {}", e))?;

    log::info!("Login complete for member {}", session.member_id);
    Ok(session)
}

/// Forget the local session. There is no server-side logout endpoint.
pub fn logout<T: Transport>(state: &AppState<T>) -> Result<(), String> {
    state
        .session
        .clear()
        .map_err(|e| format!("Failed to clear session: {}", e))?;
    log::info!("Logout complete");
    Ok(())
}

pub fn whoami<T: Transport>(state: &AppState<T>) -> Result<Option<Session>, String> {
    state
        .session
        .load()
        .map_err(|e| format!("Failed to read session: {}", e))
}

/// Register a new member, returning its id.
pub async fn join<T: Transport>(
    state: &AppState<T>,
    request: &JoinRequest,
) -> Result<u64, String> {
    let created = state
        .api
        .member_do_join(request)
        .await
        .map_err(|e| format!("Join request failed: {}", e))?
        .into_body()
        .map_err(|e| format!("Join failed: {}", e))?;
    Ok(created.id)
}

pub async fn list_articles<T: Transport>(
    state: &AppState<T>,
    board_id: u64,
) -> Result<Vec<Article>, String> {
    let body = state
        .api
        .article_list(board_id)
        .await
        .map_err(|e| format!("Article list request failed: {}", e))?
        .into_body()
        .map_err(|e| format!("Failed to list articles: {}", e))?;
    Ok(body.articles)
}

pub async fn show_article<T: Transport>(state: &AppState<T>, id: u64) -> Result<Article, String> {
    let body = state
        .api
        .article_detail(id)
        .await
        .map_err(|e| format!("Article request failed: {}", e))?
        .into_body()
        .map_err(|e| format!("Failed to load article {}: {}", id, e))?;
    Ok(body.article)
}

/// Create an article, returning its id.
pub async fn write_article<T: Transport>(
    state: &AppState<T>,
    board_id: u64,
    title: &str,
    body: &str,
) -> Result<u64, String> {
    let created = state
        .api
        .article_do_write(board_id, title, body)
        .await
        .map_err(|e| format!("Write request failed: {}", e))?
        .into_body()
        .map_err(|e| format!("Failed to write article: {}", e))?;
    Ok(created.id)
}
