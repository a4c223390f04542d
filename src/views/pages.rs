use askama::Template;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate;

#[derive(Template)]
#[template(path = "waitlist.html")]
struct WaitlistTemplate;

#[derive(Template)]
#[template(path = "partners.html")]
struct PartnersTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate;

pub async fn landing() -> impl IntoResponse {
    Html(LandingTemplate.render().unwrap_or_default())
}

pub async fn waitlist() -> impl IntoResponse {
    Html(WaitlistTemplate.render().unwrap_or_default())
}

pub async fn partners() -> impl IntoResponse {
    Html(PartnersTemplate.render().unwrap_or_default())
}

pub async fn contact() -> impl IntoResponse {
    Html(ContactTemplate.render().unwrap_or_default())
}
