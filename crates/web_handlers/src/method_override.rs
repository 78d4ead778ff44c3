use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use std::{
    future::{Ready, ready},
    rc::Rc,
};

/// Middleware that lets HTML forms issue PUT, PATCH and DELETE requests.
///
/// A `POST` carrying `_method=<verb>` in its query string is rewritten to
/// that verb before routing. Every other request passes through untouched.
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MethodOverrideService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService {
            service: Rc::new(service),
        }))
    }
}

/// Service that implements the method override logic
pub struct MethodOverrideService<S> {
    service: Rc<S>,
}

#[derive(Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if *req.method() == Method::POST {
            if let Some(method) = override_method(req.query_string()) {
                log::debug!("Overriding POST {} as {}", req.path(), method);
                req.head_mut().method = method;
            }
        }

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}

/// Reads the `_method` query parameter and maps it to an allowed verb.
fn override_method(query: &str) -> Option<Method> {
    let query = web::Query::<OverrideQuery>::from_query(query).ok()?;
    match query.method.as_deref()?.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_and_read_body, init_service};
    use actix_web::{App, HttpRequest, HttpResponse};

    async fn echo_method(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(req.method().to_string())
    }

    #[test]
    fn test_override_method_parsing() {
        assert_eq!(override_method("_method=PUT"), Some(Method::PUT));
        assert_eq!(override_method("_method=delete"), Some(Method::DELETE));
        assert_eq!(override_method("a=1&_method=Patch"), Some(Method::PATCH));
        assert_eq!(override_method("_method=GET"), None);
        assert_eq!(override_method("_method=TRACE"), None);
        assert_eq!(override_method(""), None);
    }

    #[actix_web::test]
    async fn test_post_is_rewritten_before_routing() {
        let app = init_service(
            App::new()
                .wrap(MethodOverride)
                .default_service(web::to(echo_method)),
        )
        .await;

        let req = TestRequest::post()
            .uri("/campgrounds/1?_method=DELETE")
            .to_request();
        let body = call_and_read_body(&app, req).await;
        assert_eq!(body, "DELETE");
    }

    #[actix_web::test]
    async fn test_only_post_is_rewritten() {
        let app = init_service(
            App::new()
                .wrap(MethodOverride)
                .default_service(web::to(echo_method)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/campgrounds/1?_method=DELETE")
            .to_request();
        let body = call_and_read_body(&app, req).await;
        assert_eq!(body, "GET");

        let req = TestRequest::post().uri("/campgrounds").to_request();
        let body = call_and_read_body(&app, req).await;
        assert_eq!(body, "POST");
    }
}
