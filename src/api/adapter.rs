use actix_web::HttpResponse;
use serde_json::json;

use crate::api::protocols::{Controller, HttpRequest, ResponseBody};

/// Runs a controller and renders its response: data as-is on success,
/// `{ "error": message }` otherwise.
pub async fn adapt_route(controller: &dyn Controller, request: HttpRequest) -> HttpResponse {
    let response = controller.handle(request).await;
    let mut builder = HttpResponse::build(response.status_code);

    match response.body {
        ResponseBody::Data(data) => builder.json(data),
        ResponseBody::Error(error) => builder.json(json!({ "error": error.to_string() })),
    }
}
