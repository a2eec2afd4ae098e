use crate::aspect::{Aspect, AspectInterceptor, BearerAuthAspect, ErrorLogAspect};
use crate::common::Envelope;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::interceptor::{Interceptor, InterceptorChain};
use crate::model::{FilterPage, Product};
use crate::query::FilterParams;
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use url::Url;

const RESOURCE: [&str; 2] = ["api", "productos"];

/// Async client for the `/api/productos` REST resource.
///
/// Every call goes through the interceptor chain the client was built with.
/// The client is cheap to clone; clones share the connection pool and the
/// chain.
#[derive(Clone)]
pub struct ProductClient {
    http: Client,
    base_url: Url,
    chain: InterceptorChain,
}

impl ProductClient {
    /// Create a client with exactly the given interceptors, outermost first.
    pub fn new(config: ClientConfig, interceptors: Vec<Arc<dyn Interceptor>>) -> Result<Self> {
        let http = Client::builder().user_agent(config.user_agent.as_str()).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
            chain: InterceptorChain::new(interceptors),
        })
    }

    /// Create a client with the default hooks (error logging + auth).
    pub fn with_defaults(config: ClientConfig) -> Result<Self> {
        ProductClientBuilder::new(config).build()
    }

    pub fn builder(config: ClientConfig) -> ProductClientBuilder {
        ProductClientBuilder::new(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/productos/filtrar`. The body is returned as sent.
    pub async fn filter_products(&self, params: &FilterParams) -> Result<FilterPage> {
        let url = self.endpoint_with_query(&["filtrar"], &params.to_query_string()?)?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `GET /api/productos/buscar?termino=...`. The body is returned as sent.
    pub async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
        let query = serde_urlencoded::to_string([("termino", term)])?;
        let url = self.endpoint_with_query(&["buscar"], &query)?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `GET /api/productos`, unwrapped from its `{status, message, data}`
    /// envelope.
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let url = self.endpoint(&[])?;
        let envelope: Envelope<Vec<Product>> = self.send_json(Method::GET, url, None::<&()>).await?;
        Ok(envelope.into_data())
    }

    /// Alias of [`ProductClient::get_products`].
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.get_products().await
    }

    /// `GET /api/productos/:id`
    pub async fn get_product(&self, id: impl Display) -> Result<Product> {
        let url = self.endpoint(&[&id.to_string()])?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `POST /api/productos`
    pub async fn create_product<P>(&self, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(&[])?;
        self.send_json(Method::POST, url, Some(payload)).await
    }

    /// `PUT /api/productos/:id`
    pub async fn update_product<P>(&self, id: impl Display, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(&[&id.to_string()])?;
        self.send_json(Method::PUT, url, Some(payload)).await
    }

    /// `DELETE /api/productos/:id`
    pub async fn delete_product(&self, id: impl Display) -> Result<Value> {
        let url = self.endpoint(&[&id.to_string()])?;
        self.send_json(Method::DELETE, url, None::<&()>).await
    }

    /// `DELETE /api/productos/filtrar` with the same query rules as
    /// [`ProductClient::filter_products`].
    pub async fn delete_filtered_products(&self, params: &FilterParams) -> Result<Value> {
        let url = self.endpoint_with_query(&["filtrar"], &params.to_query_string()?)?;
        self.send_json(Method::DELETE, url, None::<&()>).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::config("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(RESOURCE)
            .extend(segments);
        Ok(url)
    }

    fn endpoint_with_query(&self, segments: &[&str], query: &str) -> Result<Url> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    async fn send_json<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build()?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.chain.dispatch(self.http.clone(), request).await?;
        serde_json::from_slice(response.body()).map_err(|source| ClientError::Decode {
            url: response.url().to_string(),
            source,
        })
    }
}

/// Builder for [`ProductClient`]
///
/// Starts with the default hooks: [`ErrorLogAspect`] outermost, then
/// [`BearerAuthAspect`] fed from [`ClientConfig::auth_token`]. Interceptors
/// added here run inside those, in the order they were added.
///
/// # Example
/// ```
/// use tienda_client::{ClientConfig, LoggingInterceptor, ProductClient};
///
/// let config = ClientConfig::new("http://localhost:5000").unwrap();
/// let client = ProductClient::builder(config)
///     .interceptor(LoggingInterceptor)
///     .build()
///     .unwrap();
/// ```
pub struct ProductClientBuilder {
    config: ClientConfig,
    interceptors: Vec<Arc<dyn Interceptor>>,
    default_hooks: bool,
}

impl ProductClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            interceptors: Vec::new(),
            default_hooks: true,
        }
    }

    /// Append an interceptor to the chain
    pub fn interceptor<I: Interceptor>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append an aspect, adapted into an interceptor
    pub fn aspect<A: Aspect>(self, aspect: A) -> Self {
        self.interceptor(AspectInterceptor::new(aspect))
    }

    /// Do not install the error-logging and auth hooks.
    pub fn without_default_hooks(mut self) -> Self {
        self.default_hooks = false;
        self
    }

    pub fn build(self) -> Result<ProductClient> {
        let mut interceptors: Vec<Arc<dyn Interceptor>> = Vec::new();
        if self.default_hooks {
            interceptors.push(Arc::new(AspectInterceptor::new(ErrorLogAspect)));
            interceptors.push(Arc::new(AspectInterceptor::new(BearerAuthAspect::new(
                self.config.auth_token.clone(),
            ))));
        }
        interceptors.extend(self.interceptors);

        ProductClient::new(self.config, interceptors)
    }
}
