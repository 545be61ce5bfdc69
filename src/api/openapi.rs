//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    author_handler, comment_handler, news_handler, tag_handler, user_handler,
};
use crate::domain::{
    AuthorResponse, CommentResponse, CreateAuthor, CreateComment, CreateNews, CreateTag,
    CreateUser, NewsResponse, PatchAuthor, PatchComment, PatchNews, PatchTag, PatchUser,
    TagResponse, UpdateAuthor, UpdateComment, UpdateNews, UpdateTag, UpdateUser, UserResponse,
};

/// OpenAPI documentation for the Newsroom API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newsroom API",
        version = "0.1.0",
        description = "News content backend with authors, tags, comments, and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Author endpoints
        author_handler::list_authors,
        author_handler::get_author,
        author_handler::create_author,
        author_handler::update_author,
        author_handler::patch_author,
        author_handler::delete_author,
        // News endpoints
        news_handler::list_news,
        news_handler::get_news,
        news_handler::create_news,
        news_handler::update_news,
        news_handler::patch_news,
        news_handler::delete_news,
        news_handler::get_news_author,
        news_handler::get_news_tags,
        news_handler::get_news_comments,
        // Tag endpoints
        tag_handler::list_tags,
        tag_handler::get_tag,
        tag_handler::create_tag,
        tag_handler::update_tag,
        tag_handler::patch_tag,
        tag_handler::delete_tag,
        // Comment endpoints
        comment_handler::list_comments,
        comment_handler::get_comment,
        comment_handler::create_comment,
        comment_handler::update_comment,
        comment_handler::patch_comment,
        comment_handler::delete_comment,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::patch_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            AuthorResponse,
            CreateAuthor,
            UpdateAuthor,
            PatchAuthor,
            NewsResponse,
            CreateNews,
            UpdateNews,
            PatchNews,
            TagResponse,
            CreateTag,
            UpdateTag,
            PatchTag,
            CommentResponse,
            CreateComment,
            UpdateComment,
            PatchComment,
            UserResponse,
            CreateUser,
            UpdateUser,
            PatchUser,
        )
    ),
    tags(
        (name = "Authors", description = "Author management operations"),
        (name = "News", description = "News management operations"),
        (name = "Tags", description = "Tag management operations"),
        (name = "Comments", description = "Comment management operations"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
