//! The error page shown when a request fails on the server side.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A 500 page with a short description of what failed and how to fix it.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    /// The page for a full page load that needed the recipe service.
    pub fn recipe_service_unavailable() -> Self {
        Self {
            description: "Recipe Service Unavailable",
            fix: "The recipe service could not be reached. Please try again later.",
        }
    }

    fn into_html(self) -> Html<String> {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        Html(page.into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{assert_valid_html, parse_html_document};

    use super::InternalServerError;

    #[tokio::test]
    async fn recipe_service_page_explains_outage() {
        let response = InternalServerError::recipe_service_unavailable().into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(html.html().contains("Recipe Service Unavailable"));
    }
}
