use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product record exactly as the server sent it.
///
/// The client does not validate fields; only `id` is looked at, and only on
/// request of the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Product {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Body of `GET /api/productos/filtrar`, returned without unwrapping.
///
/// Top-level keys besides the paging fields land in `extra`, so the body
/// serializes back to what the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPage {
    pub productos: Vec<Product>,
    pub total_resultados: u64,
    pub pagina_actual: u64,
    pub total_paginas: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_keeps_unknown_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "nombre": "Motosierra",
            "precio": 349.9,
            "color": "naranja"
        }))
        .unwrap();

        assert_eq!(product.id(), Some(&json!(3)));
        assert_eq!(product.get("color"), Some(&json!("naranja")));
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 3, "nombre": "Motosierra", "precio": 349.9, "color": "naranja"})
        );
    }

    #[test]
    fn test_filter_page_keeps_extra_keys() {
        let body = json!({
            "mensaje": "No se encontraron productos con esos criterios",
            "productos": [],
            "total_resultados": 0,
            "pagina_actual": 1,
            "total_paginas": 0
        });
        let page: FilterPage = serde_json::from_value(body.clone()).unwrap();

        assert!(page.productos.is_empty());
        assert_eq!(page.pagina_actual, 1);
        assert_eq!(
            page.extra.get("mensaje"),
            Some(&json!("No se encontraron productos con esos criterios"))
        );
        assert_eq!(page.extra.len(), 1);
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn test_product_from_fields() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(9));
        fields.insert("stock".to_string(), json!(40));

        let product = Product::from(fields.clone());
        assert_eq!(product.fields(), &fields);
        assert_eq!(product.id(), Some(&json!(9)));
        assert_eq!(product.into_inner(), fields);
    }
}
