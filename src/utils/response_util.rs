use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;

/// 303 to `location`, so the browser follows up with a GET.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn ok_to(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
