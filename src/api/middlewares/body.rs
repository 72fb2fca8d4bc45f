use crate::api::protocols::{Body, HttpRequest};
use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};

/// Extracts the JSON object body of a request into a controller request.
#[derive(Debug)]
pub struct JsonRequest(pub HttpRequest);

impl JsonRequest {
    pub fn into_inner(self) -> HttpRequest {
        self.0
    }
}

impl FromRequest for JsonRequest {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &actix_web::HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(32768)
        .map(|res: Result<Body, _>| match res {
            Ok(body) => Ok(JsonRequest(HttpRequest::new(body))),
            Err(err) => Err(AppError::from(err)),
        })
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest},
        web,
    };
    use serde::Deserialize;
    use serde_json::{Value, json};

    use super::*;

    #[derive(Deserialize)]
    struct Error {
        error: String,
    }

    async fn index(data: JsonRequest) -> impl Responder {
        HttpResponse::Ok().json(data.into_inner().body)
    }

    async fn send_req(data: &str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload(data.to_string())
            .insert_header(ContentType::json())
            .send_request(&app)
            .await;

        let status = res.status();
        let body: Value = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_object_body() {
        let (status, body) = send_req("{ \"email\": \"any_email@mail.com\", \"age\": 3 }").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "email": "any_email@mail.com", "age": 3 }));
    }

    #[actix_web::test]
    async fn test_empty_object_body() {
        let (status, body) = send_req("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn test_non_object_body() {
        let (status, body) = send_req("[1, 2]").await;
        let err: Error = serde_json::from_value(body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.error.starts_with("Json deserialize error"));
    }

    #[actix_web::test]
    async fn test_malformed_data() {
        let (status, body) = send_req("{ \"email\": }").await;
        let err: Error = serde_json::from_value(body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.error,
            "Json deserialize error: expected value at line 1 column 12"
        );
    }

    #[actix_web::test]
    async fn test_wrong_content_type() {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload("{}")
            .insert_header(ContentType::plaintext())
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
