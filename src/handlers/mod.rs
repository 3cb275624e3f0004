//! HTTP handlers and route configuration.

pub mod comments;
pub mod posts;
pub mod share;

use actix_web::{web, HttpResponse};

/// Wire the four blog routes onto an actix `App`.
///
/// Expects `Data<dyn BlogRepo>`, `Data<dyn Mailer>` and `Data<SiteConfig>`
/// to be registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::post_list))
        .service(
            web::resource("/{post_id}/share/")
                .route(web::get().to(share::share_form))
                .route(web::post().to(share::share_submit)),
        )
        .service(
            // POST-only; the catch-all route rejects every other verb
            // before any lookup or parsing happens.
            web::resource("/{post_id}/comment/")
                .route(web::post().to(comments::submit_comment))
                .route(web::route().to(comments::method_not_allowed)),
        )
        .route(
            "/{year}/{month}/{day}/{slug}/",
            web::get().to(posts::post_detail),
        );
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
