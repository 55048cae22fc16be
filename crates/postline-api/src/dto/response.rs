//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postline_entity::comment::Comment;
use postline_entity::post::Post;
use postline_entity::user::{User, UserRole};
use postline_service::AuthSession;

/// Public account fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Registration time.
    pub joined_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            joined_at: user.joined_at,
        }
    }
}

/// Returned by register, login, and refresh.
///
/// Expiry fields are seconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiry.
    pub access_token_expires_at: i64,
    /// Refresh token expiry.
    pub refresh_token_expires_at: i64,
}

impl From<AuthSession> for TokenResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            id: session.user.id,
            username: session.user.username,
            email: session.user.email,
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
            access_token_expires_at: session.tokens.access_expires_at.timestamp(),
            refresh_token_expires_at: session.tokens.refresh_expires_at.timestamp(),
        }
    }
}

/// A post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author's user ID.
    pub author_id: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.body,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: i64,
    /// Comment text.
    pub content: String,
    /// Parent post ID.
    pub post_id: i64,
    /// Author's user ID.
    pub author_id: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.body,
            post_id: comment.post_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
