use crate::error::{ClientError, Result};
use crate::interceptor::{HttpResponse, Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use reqwest::Request;
use std::sync::Arc;

pub mod builtins;

pub use builtins::{BearerAuthAspect, ErrorLogAspect};

/// Result type for Aspect hooks.
pub type AspectResult = Result<()>;

/// # Aspect
///
/// Defines cross-cutting concerns with simple `before` and `after` hooks.
/// Aspects are easier to implement than Interceptors when you don't need
/// to control the full execution flow.
///
/// ### Example
///
/// ```rust
/// use tienda_client::aspect::{Aspect, AspectResult};
/// use tienda_client::{ClientError, async_trait};
/// use reqwest::Request;
///
/// pub struct RequireJson;
///
/// #[async_trait]
/// impl Aspect for RequireJson {
///     async fn before(&self, req: &mut Request) -> AspectResult {
///         if req.url().path().starts_with("/api/") {
///             Ok(())
///         } else {
///             Err(ClientError::rejected("not an API path"))
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Aspect: Send + Sync + 'static {
    /// Executed before the request is sent.
    async fn before(&self, _request: &mut Request) -> AspectResult {
        Ok(())
    }

    /// Executed after a successful (2xx) response arrives.
    async fn after(&self, _response: &HttpResponse) -> AspectResult {
        Ok(())
    }

    /// Executed when the request fails. The error is re-raised unchanged
    /// after this hook returns.
    async fn on_error(&self, _error: &ClientError) {}
}

/// Adapter that wraps an [`Aspect`] to work within the [`Interceptor`] system.
pub struct AspectInterceptor<A: Aspect> {
    aspect: Arc<A>,
}

impl<A: Aspect> AspectInterceptor<A> {
    /// Creates a new adapter for the given aspect.
    pub fn new(aspect: A) -> Self {
        Self {
            aspect: Arc::new(aspect),
        }
    }
}

#[async_trait]
impl<A: Aspect> Interceptor for AspectInterceptor<A> {
    async fn intercept(&self, mut request: Request, next: Next) -> InterceptorResult {
        self.aspect.before(&mut request).await?;

        match next.run(request).await {
            Ok(response) => {
                self.aspect.after(&response).await?;
                Ok(response)
            }
            Err(e) => {
                self.aspect.on_error(&e).await;
                Err(e)
            }
        }
    }
}
