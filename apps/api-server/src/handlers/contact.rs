//! Contact handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use folio_shared::dto::{ContactDto, ContactListResponse, ContactRequest, SubmitContactResponse};

use crate::handlers::ListQuery;
use crate::middleware::admin::AdminKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let source_ip = {
        let info = req.connection_info();
        info.realip_remote_addr().map(str::to_owned)
    };

    state
        .contact
        .submit(body.into_inner().into(), source_ip)
        .await?;

    Ok(HttpResponse::Created().json(SubmitContactResponse {
        message: "Message sent successfully! I'll get back to you soon.".to_string(),
        success: true,
    }))
}

/// GET /api/contact - admin only
pub async fn list(
    _admin: AdminKey,
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let (page, limit) = query.window();
    let result = state.contact.list_all(page, limit).await?;

    Ok(HttpResponse::Ok().json(ContactListResponse {
        contacts: result.items.into_iter().map(ContactDto::from).collect(),
        pagination: result.pagination,
    }))
}
