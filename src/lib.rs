//! # tienda-client
//!
//! Async client for the tienda forestal product inventory REST API
//! (`/api/productos`).
//!
//! ## Features
//!
//! - **CRUD + search**: filter, search, list, create, update and delete products
//! - **Interceptor chain**: outbound/inbound hooks passed in at construction time
//! - **Aspects**: `before` / `after` / `on_error` hooks adapted onto the chain
//! - **Per-endpoint payloads**: envelope-wrapped endpoints are unwrapped, the
//!   rest are returned as the server sent them
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tienda_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ProductClient::with_defaults(ClientConfig::from_env()?)?;
//!
//!     let params = FilterParams::new()
//!         .with("tipo", "semilla")
//!         .with("precio_min", "")
//!         .with("pagina", 2);
//!     let page = client.filter_products(&params).await?;
//!     println!("{} results", page.total_resultados);
//!
//!     for product in client.list_all().await? {
//!         println!("{:?}", product.id());
//!     }
//!     Ok(())
//! }
//! ```

pub mod aspect;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod model;
pub mod query;

// Re-export core types
pub use client::{ProductClient, ProductClientBuilder};
pub use common::Envelope;
pub use config::{ClientConfig, ConfigService};
pub use error::{ClientError, Result};
pub use interceptor::{HttpResponse, Interceptor, InterceptorChain, LoggingInterceptor, Next};
pub use model::{FilterPage, Product};
pub use query::{FilterParams, ParamValue, ProductFilter, SortOrder};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;

/// Prelude module for convenient imports
///
/// ```
/// use tienda_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aspect::{
        Aspect, AspectInterceptor, AspectResult, BearerAuthAspect, ErrorLogAspect,
    };
    pub use crate::client::{ProductClient, ProductClientBuilder};
    pub use crate::common::Envelope;
    pub use crate::config::{ClientConfig, ConfigService};
    pub use crate::error::{ClientError, Result};
    pub use crate::interceptor::{
        HttpResponse, Interceptor, InterceptorChain, InterceptorResult, LoggingInterceptor, Next,
    };
    pub use crate::model::{FilterPage, Product};
    pub use crate::query::{FilterParams, ParamValue, ProductFilter, SortOrder};
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
