use crate::aspect::{Aspect, AspectResult};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// Outbound hook that attaches `Authorization: Bearer <token>`.
///
/// Without a token it passes every request through untouched.
#[derive(Clone, Default)]
pub struct BearerAuthAspect {
    token: Option<String>,
}

impl BearerAuthAspect {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn pass_through() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Aspect for BearerAuthAspect {
    async fn before(&self, request: &mut Request) -> AspectResult {
        let Some(token) = &self.token else {
            return Ok(());
        };
        if request.headers().contains_key(AUTHORIZATION) {
            return Ok(());
        }

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ClientError::config("auth token is not a valid header value"))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Inbound hook: logs the message of every failed request once at ERROR
/// level. The error itself flows back to the caller unchanged.
#[derive(Clone, Default)]
pub struct ErrorLogAspect;

#[async_trait]
impl Aspect for ErrorLogAspect {
    async fn on_error(&self, error: &ClientError) {
        tracing::error!(error = %error, "API error");
    }
}
