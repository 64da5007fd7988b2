use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use biglove_shared::coerce::{is_truthy, js_string, json_int, parse_int};
use biglove_shared::constants::ENDPOINTS;
use biglove_shared::{CommentId, ForumId, PostId, PostQuery, UserId, VoteDirection};
use biglove_store::{
    timestamp, CommentWithAuthor, Entity, Forum, ForumStore, NewComment, NewPost, PostWithAuthor,
    Reactions, User, VoteTally,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    /// One lock over the whole store: every operation sees and leaves a
    /// consistent state.
    pub store: Arc<RwLock<ForumStore>>,
}

impl AppState {
    pub fn new(store: ForumStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
        .route("/api/forums", get(list_forums))
        .route("/api/forums/{id}", get(get_forum))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post))
        .route(
            "/api/posts/{id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/api/posts/{id}/vote", post(vote))
        .route("/api/posts/{id}/react", post(react))
        .route("/api/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─── Request / response bodies ───

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPostsParams {
    forum_id: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

/// A POST body read as a loose JSON object.
///
/// Only `application/json` bodies are parsed. A missing body, another
/// content type, malformed JSON or a JSON value that is not an object all
/// read as `{}`, so every field is simply absent. Fields are coerced by the
/// handlers: ids through [`json_int`], text through [`js_string`].
struct JsonBody(Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(Map::new()));
        }
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(_) => Ok(Self(Map::new())),
            Err(e) => {
                debug!(error = %e, "Unparseable JSON body, treating as empty");
                Ok(Self(Map::new()))
            }
        }
    }
}

fn is_json_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(with = "biglove_store::timestamp")]
    timestamp: DateTime<Utc>,
    endpoints: &'static [&'static str],
}

// ─── Users & forums ───

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.read().await.list_users())
}

async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ServerError> {
    let id = path_id(&raw_id, Entity::User)?;
    let user = state.store.read().await.get_user(UserId(id))?;
    Ok(Json(user))
}

async fn list_forums(State(state): State<AppState>) -> Json<Vec<Forum>> {
    Json(state.store.read().await.list_forums())
}

async fn get_forum(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Forum>, ServerError> {
    let id = path_id(&raw_id, Entity::Forum)?;
    let forum = state.store.read().await.get_forum(ForumId(id))?;
    Ok(Json(forum))
}

// ─── Posts ───

async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> Json<Vec<PostWithAuthor>> {
    let query = PostQuery::from_params(
        params.forum_id.as_deref(),
        params.offset.as_deref(),
        params.limit.as_deref(),
    );
    Json(state.store.read().await.list_posts(&query))
}

async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PostWithAuthor>, ServerError> {
    let id = path_id(&raw_id, Entity::Post)?;
    let post = state.store.read().await.get_post(PostId(id))?;
    Ok(Json(post))
}

/// Ids may arrive as JSON numbers or numeric strings; anything else is
/// stored as `null`.
async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> (StatusCode, Json<PostWithAuthor>) {
    let tags = body
        .get("tags")
        .filter(|v| is_truthy(v))
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    let new = NewPost {
        title: text_field(&body, "title"),
        content: text_field(&body, "content"),
        forum_id: body.get("forumId").and_then(json_int).map(ForumId),
        author_id: body.get("authorId").and_then(json_int).map(UserId),
        tags,
    };

    let created = state.store.write().await.create_post(new);
    info!(
        id = %created.post.id,
        forum = ?created.post.forum_id,
        author = ?created.post.author_id,
        "Post created via API"
    );

    (StatusCode::CREATED, Json(created))
}

async fn vote(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<VoteTally>, ServerError> {
    let id = path_id(&raw_id, Entity::Post)?;
    // Anything but "up" or "down" leaves the counters alone.
    let direction = body
        .get("type")
        .and_then(Value::as_str)
        .and_then(VoteDirection::parse);
    let tally = state
        .store
        .write()
        .await
        .record_vote(PostId(id), direction)?;
    Ok(Json(tally))
}

async fn react(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Reactions>, ServerError> {
    let id = path_id(&raw_id, Entity::Post)?;
    // A missing emoji is counted under "undefined".
    let emoji = js_string(body.get("emoji"));
    let reactions = state.store.write().await.add_reaction(PostId(id), &emoji)?;
    Ok(Json(reactions))
}

// ─── Comments ───

async fn list_comments(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<Vec<CommentWithAuthor>> {
    let Some(id) = parse_int(&raw_id) else {
        return Json(Vec::new());
    };
    Json(state.store.read().await.list_comments_for_post(PostId(id)))
}

async fn create_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> (StatusCode, Json<CommentWithAuthor>) {
    // Falsy or non-numeric parents mean a top-level comment.
    let parent_id = body
        .get("parentId")
        .filter(|v| is_truthy(v))
        .and_then(json_int)
        .map(CommentId);

    let new = NewComment {
        post_id: parse_int(&raw_id).map(PostId),
        author_id: body.get("authorId").and_then(json_int).map(UserId),
        content: text_field(&body, "content"),
        parent_id,
    };

    let created = state.store.write().await.create_comment(new);
    info!(
        id = %created.comment.id,
        post = ?created.comment.post_id,
        "Comment created via API"
    );

    (StatusCode::CREATED, Json(created))
}

// ─── Health ───

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: timestamp::now(),
        endpoints: ENDPOINTS,
    })
}

// ─── Helpers ───

/// A path id that is not a number can never match a record.
fn path_id(raw: &str, entity: Entity) -> Result<i64, ServerError> {
    parse_int(raw).ok_or(ServerError::NotFound(entity))
}

/// A text body field; absent or `null` reads as `""`.
fn text_field(body: &Map<String, Value>, key: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => String::new(),
        value => js_string(value),
    }
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
