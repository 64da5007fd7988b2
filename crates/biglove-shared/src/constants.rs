/// Application name
pub const APP_NAME: &str = "Big Love Forum";

/// Default HTTP API port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Page size of `GET /api/posts` when `limit` is not given
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Page start of `GET /api/posts` when `offset` is not given
pub const DEFAULT_PAGE_OFFSET: i64 = 0;

/// Route catalogue reported by the health endpoint
pub const ENDPOINTS: &[&str] = &[
    "GET /api/users",
    "GET /api/users/:id",
    "GET /api/forums",
    "GET /api/forums/:id",
    "GET /api/posts",
    "GET /api/posts/:id",
    "GET /api/posts/:postId/comments",
    "POST /api/posts",
    "POST /api/posts/:postId/comments",
    "POST /api/posts/:id/vote",
    "POST /api/posts/:id/react",
];
