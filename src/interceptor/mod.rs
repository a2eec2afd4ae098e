use crate::error::{ClientError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, Request, StatusCode};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub mod logging;

pub use logging::LoggingInterceptor;

/// A 2xx answer whose body has already been read in full.
///
/// Buffering happens inside the chain, so a body that fails to arrive is a
/// failure every interceptor observes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    url: String,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// standard return type for Interceptors
pub type InterceptorResult = Result<HttpResponse>;

type BoxFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// Represents the next handler in the chain
pub struct Next {
    run: Box<dyn FnOnce(Request) -> BoxFuture + Send>,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request) -> BoxFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors see every outgoing request before it is sent, and every
/// response (or failure) on the way back.
///
/// # Example
/// ```
/// use tienda_client::interceptor::{Interceptor, InterceptorResult, Next};
/// use tienda_client::async_trait;
/// use reqwest::Request;
///
/// struct TraceInterceptor;
///
/// #[async_trait]
/// impl Interceptor for TraceInterceptor {
///     async fn intercept(&self, request: Request, next: Next) -> InterceptorResult {
///         tracing::info!(url = %request.url(), "sending");
///         next.run(request).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request, next: Next) -> InterceptorResult;
}

/// Ordered list of interceptors wrapped around the HTTP transport.
///
/// The first interceptor is the outermost one: it sees the request first and
/// the response last.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorChain {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run `request` through every interceptor and finally the transport.
    pub async fn dispatch(&self, http: Client, request: Request) -> InterceptorResult {
        let mut chain = Next::new(move |req| Box::pin(send(http, req)) as BoxFuture);

        for interceptor in self.interceptors.iter().rev() {
            let interceptor = Arc::clone(interceptor);
            let next = chain;
            chain = Next::new(move |req| {
                Box::pin(async move { interceptor.intercept(req, next).await }) as BoxFuture
            });
        }

        chain.run(request).await
    }
}

/// Terminal handler: executes the request, reads the whole body and turns
/// non-2xx answers into [`ClientError::Status`] so interceptors observe them
/// as failures.
async fn send(http: Client, request: Request) -> InterceptorResult {
    let method = request.method().clone();
    let response = http.execute(request).await?;

    let status = response.status();
    let url = response.url().to_string();
    let headers = response.headers().clone();

    if status.is_success() {
        let body = response.bytes().await?;
        return Ok(HttpResponse {
            status,
            url,
            headers,
            body,
        });
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                %method,
                %url,
                %status,
                error = %e,
                "Failed to read error response body"
            );
            String::new()
        }
    };
    Err(ClientError::Status {
        method,
        url,
        status,
        body,
    })
}
