use crate::domain::SubmissionState;
use crate::error::BizErrorEnum;
use crate::notification_client::SubmissionNotifier;
use crate::request::SignupData;
use crate::routes::signup_page;
use crate::signup_form::SignupFormController;
use crate::submission_store::SubmissionStore;
use crate::utils;
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "/signup: Handle signup form",
    skip(form, store, notifier),
    fields(charity_name = %form.charity_name, role = %form.role)
)]
pub async fn signup(
    form: web::Form<SignupData>,
    store: web::Data<dyn SubmissionStore>,
    notifier: web::Data<dyn SubmissionNotifier>,
) -> Result<HttpResponse, BizErrorEnum> {
    let data = form.into_inner();
    data.check_required()?;

    let controller = SignupFormController::new(store.into_inner(), notifier.into_inner());
    for (field, value) in data.into_fields() {
        controller.update(field, value)?;
    }

    match controller.submit().await {
        SubmissionState::Success => Ok(utils::redirect_to("/signup/confirmation")),
        SubmissionState::Failure(message) => {
            // The form stays editable: same page, same values, reason in the banner
            Ok(utils::ok_to(signup_page(&controller.input(), Some(&message))))
        }
        // A fresh controller always runs the submission to completion
        state => {
            tracing::error!("Submission ended in a non-terminal state: {:?}", state);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}
