use std::collections::HashMap;

use actix_web::{
    get, http::header::ContentType, http::StatusCode, post, web, HttpResponse, ResponseError,
};
use log::{error, warn};

use crate::{
    error::{Error, Result},
    handler,
    render::Renderer,
};

fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page)
}

#[get("/")]
async fn index(renderer: web::Data<dyn Renderer>) -> Result<HttpResponse> {
    let page = handler::render_form(renderer.get_ref()).map_err(|e| {
        error!("Failed to render form: {}", e);
        e
    })?;
    Ok(html(StatusCode::OK, page))
}

#[post("/calculate")]
async fn calculate(
    renderer: web::Data<dyn Renderer>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse> {
    match handler::handle_submission(&form, renderer.get_ref()) {
        Ok(page) => Ok(html(StatusCode::OK, page)),
        Err(e @ Error::Input(_)) => {
            warn!("Rejected submission: {}", e);
            let page = renderer.render_error(&e.to_string())?;
            Ok(html(e.status_code(), page))
        }
        Err(e) => {
            error!("Failed to handle submission: {}", e);
            Err(e)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(calculate);
}
