//! Blog handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_shared::dto::{
    BlogByTagResponse, BlogListResponse, BlogPostDto, ClearPostsResponse, CreateBlogPostRequest,
    DeletePostResponse,
};

use crate::handlers::ListQuery;
use crate::middleware::admin::AdminKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blog
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let (page, limit) = query.window();
    let result = state.blog.list_published(page, limit, None).await?;

    Ok(HttpResponse::Ok().json(BlogListResponse {
        posts: result.items.into_iter().map(BlogPostDto::summary).collect(),
        pagination: result.pagination,
    }))
}

/// GET /api/blog/tag/{tag}
pub async fn list_by_tag(
    state: web::Data<AppState>,
    tag: web::Path<String>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let tag = tag.into_inner();
    let (page, limit) = query.window();
    let result = state.blog.list_published(page, limit, Some(&tag)).await?;

    Ok(HttpResponse::Ok().json(BlogByTagResponse {
        posts: result.items.into_iter().map(BlogPostDto::summary).collect(),
        tag,
        pagination: result.pagination,
    }))
}

/// GET /api/blog/tags/all
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.blog.list_tags().await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// GET /api/blog/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.blog.get_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(BlogPostDto::from(post)))
}

/// POST /api/blog - admin only
pub async fn create(
    _admin: AdminKey,
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let created = state.blog.create(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(BlogPostDto::from(created)))
}

/// DELETE /api/blog/{id} - admin only
pub async fn delete(
    _admin: AdminKey,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let title = state.blog.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DeletePostResponse {
        message: "Blog post deleted successfully".to_string(),
        title,
    }))
}

/// DELETE /api/blog/clear/all - admin only
pub async fn clear_all(_admin: AdminKey, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let deleted_count = state.blog.clear_all().await?;

    Ok(HttpResponse::Ok().json(ClearPostsResponse {
        message: "All blog posts cleared successfully".to_string(),
        deleted_count,
    }))
}
