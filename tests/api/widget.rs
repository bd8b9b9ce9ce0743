use crate::helpers::spawn_app;
use waitlist::widget::{FormView, SubmitOutcome, WaitlistApi, WaitlistForm};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

// the form driven against the real endpoint, with the record store mocked
#[tokio::test]
async fn the_form_confirms_once_the_record_is_saved() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.record_store_server)
        .await;
    let api = WaitlistApi::new(app.address.clone());
    let mut form = WaitlistForm::new();

    form.set_email_text("a@b.com");
    assert_eq!(form.submit(&api).await, SubmitOutcome::Confirmed);
    assert_eq!(form.view(), FormView::Confirmation);

    // latched - a second attempt never leaves the form
    form.set_email_text("c@d.com");
    assert_eq!(form.submit(&api).await, SubmitOutcome::AlreadySubmitted);
}

#[tokio::test]
async fn the_form_shows_the_generic_error_when_saving_fails() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.record_store_server)
        .await;
    let api = WaitlistApi::new(app.address.clone());
    let mut form = WaitlistForm::new();

    form.set_email_text("a@b.com");

    assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Failed to save email"));
    assert_eq!(form.email_text(), "a@b.com");
    assert_eq!(form.view(), FormView::Idle);
}
