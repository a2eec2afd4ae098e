//! Filter parameters and query-string encoding.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Null and empty-string values are never transmitted.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => Ok(()),
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u8, u16, u32);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

/// Insertion-ordered filter criteria.
///
/// Setting a key that already exists replaces its value without moving it,
/// so every key is sent at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    entries: Vec<(String, ParamValue)>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Form-encode the non-empty entries in insertion order.
    pub fn to_query_string(&self) -> Result<String> {
        let pairs: Vec<(&str, String)> = self
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FilterParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Price ordering accepted by the filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Typed view over the filter keys the backend understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub tipo: Option<String>,
    pub marca: Option<String>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    pub ordenar: Option<SortOrder>,
    pub pagina: Option<u32>,
    pub por_pagina: Option<u32>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = Some(tipo.into());
        self
    }

    pub fn marca(mut self, marca: impl Into<String>) -> Self {
        self.marca = Some(marca.into());
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.precio_min = min;
        self.precio_max = max;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.ordenar = Some(order);
        self
    }

    pub fn page(mut self, pagina: u32, por_pagina: u32) -> Self {
        self.pagina = Some(pagina);
        self.por_pagina = Some(por_pagina);
        self
    }
}

impl From<ProductFilter> for FilterParams {
    fn from(filter: ProductFilter) -> Self {
        FilterParams::new()
            .with("tipo", filter.tipo)
            .with("marca", filter.marca)
            .with("precio_min", filter.precio_min)
            .with("precio_max", filter.precio_max)
            .with("ordenar", filter.ordenar.map(|o| o.to_string()))
            .with("pagina", filter.pagina)
            .with("por_pagina", filter.por_pagina)
    }
}

impl From<&ProductFilter> for FilterParams {
    fn from(filter: &ProductFilter) -> Self {
        filter.clone().into()
    }
}
