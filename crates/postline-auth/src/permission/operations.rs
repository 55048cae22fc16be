//! Operation names passed by the service layer to the evaluator.

/// Create a post.
pub const POST_CREATE: &str = "post:create";
/// List posts.
pub const POST_VIEW_LIST: &str = "post:view_list";
/// View one post.
pub const POST_VIEW: &str = "post:view";
/// Edit a post.
pub const POST_UPDATE: &str = "post:update";
/// Delete a post.
pub const POST_DELETE: &str = "post:delete";

/// Comment on a post.
pub const COMMENT_CREATE: &str = "comment:create";
/// Read comments, at operation level for listings and object level for one comment.
pub const COMMENT_VIEW: &str = "comment:view";
/// Edit a comment.
pub const COMMENT_UPDATE: &str = "comment:update";
/// Delete a comment.
pub const COMMENT_DELETE: &str = "comment:delete";

/// List all accounts.
pub const USER_VIEW_LIST: &str = "user:view_list";
