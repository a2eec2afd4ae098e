use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use reqwest::Request;
use reqwest::header::HeaderValue;
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// An interceptor that logs request timing and status
///
/// Each request gets an `x-request-id` header (unless the caller already set
/// one) so client and server logs can be correlated.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, mut request: Request, next: Next) -> InterceptorResult {
        let request_id = match request.headers().get(REQUEST_ID_HEADER) {
            Some(existing) => existing.to_str().unwrap_or_default().to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                if let Ok(value) = HeaderValue::from_str(&id) {
                    request.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                id
            }
        };

        let method = request.method().clone();
        let url = request.url().clone();
        let start = Instant::now();

        tracing::debug!(%request_id, %method, %url, "-->");

        match next.run(request).await {
            Ok(response) => {
                tracing::debug!(
                    %request_id,
                    %method,
                    %url,
                    status = %response.status(),
                    elapsed = ?start.elapsed(),
                    "<--"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::debug!(
                    %request_id,
                    %method,
                    %url,
                    error = %e,
                    elapsed = ?start.elapsed(),
                    "<-- failed"
                );
                Err(e)
            }
        }
    }
}
