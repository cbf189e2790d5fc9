use crate::utils;
use actix_web::HttpResponse;

#[tracing::instrument(name = "/signup/confirmation: Thank-you page")]
pub async fn signup_confirmation() -> HttpResponse {
    utils::ok_to(include_str!("confirmation.html").into())
}
