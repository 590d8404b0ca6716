use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Host the client addressed, taken verbatim from the `Host` header, or from
/// the request URI authority when the header is absent (HTTP/2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost(pub String);

impl<S> FromRequestParts<S> for RequestHost
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|authority| authority.to_string()))
            .unwrap_or_default();

        Ok(RequestHost(host))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> RequestHost {
        let (mut parts, _) = request.into_parts();
        RequestHost::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn prefers_host_header() {
        let request = Request::builder()
            .uri("http://internal:8080/")
            .header(header::HOST, "saves.example.com")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await, RequestHost("saves.example.com".to_string()));
    }

    #[tokio::test]
    async fn falls_back_to_uri_authority() {
        let request = Request::builder()
            .uri("https://saves.example.com:8443/")
            .body(())
            .unwrap();

        assert_eq!(
            extract(request).await,
            RequestHost("saves.example.com:8443".to_string())
        );
    }

    #[tokio::test]
    async fn empty_when_unknown() {
        let request = Request::builder().uri("/").body(()).unwrap();
        assert_eq!(extract(request).await, RequestHost(String::new()));
    }
}
