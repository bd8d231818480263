//! Catalog snapshot and product records.
//!
//! The catalog is a plain ordered collection owned by whoever loads it. Search
//! borrows it per call; insertion order is the order the exact phase returns.

use crate::error::Result;
use crate::normalize::{normalize, NormalizedText};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product as the shop stores it.
///
/// Only `name`, `description`, `category` and `material` take part in search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Product ID (UUID string)
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Decimal price as text, e.g. "12.99"
    #[serde(default)]
    pub price: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Category label
    pub category: String,
    /// Main material
    #[serde(default)]
    pub material: Option<String>,
    /// Certification label
    #[serde(default)]
    pub certification: Option<String>,
    /// Units in stock
    #[serde(default)]
    pub in_stock: Option<i32>,
}

impl CatalogRecord {
    /// Name, description, category and material joined by spaces.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.description,
            self.category,
            self.material.as_deref().unwrap_or("")
        )
    }
}

/// Product data before an ID is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub in_stock: Option<i32>,
}

impl NewProduct {
    /// Minimal product with the searchable fields set.
    pub fn new(name: impl Into<String>, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Set the material.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    fn into_record(self, id: String) -> CatalogRecord {
        CatalogRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            category: self.category,
            material: self.material,
            certification: self.certification,
            in_stock: self.in_stock,
        }
    }
}

/// Ordered in-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing records, keeping their order.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records. Records without an `id` get a fresh one.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        for record in records.iter_mut().filter(|r| r.id.is_empty()) {
            record.id = Uuid::new_v4().to_string();
        }
        Ok(Self { records })
    }

    /// Add a product, assigning it a new ID.
    pub fn insert(&mut self, product: NewProduct) -> &CatalogRecord {
        let id = Uuid::new_v4().to_string();
        self.records.push(product.into_record(id));
        &self.records[self.records.len() - 1]
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The shop's demo catalog.
    pub fn seed() -> Self {
        let products = [
            NewProduct {
                name: "Champú Sólido Natural".into(),
                description: "Champú ecológico sin envases plásticos, formulado con ingredientes naturales.".into(),
                price: "12.99".into(),
                image: "https://images.unsplash.com/photo-1556228578-8c89e6adf883?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Cosmética".into(),
                material: Some("Ingredientes naturales".into()),
                certification: Some("100% Sostenible".into()),
                in_stock: Some(50),
            },
            NewProduct {
                name: "Cepillo de Bambú".into(),
                description: "Cepillo de dientes biodegradable hecho de bambú sostenible.".into(),
                price: "4.50".into(),
                image: "https://images.unsplash.com/photo-1607613009820-a29f7bb81c04?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Higiene".into(),
                material: Some("Bambú Orgánico".into()),
                certification: Some("100% Biodegradable".into()),
                in_stock: Some(100),
            },
            NewProduct {
                name: "Bolsas Reutilizables".into(),
                description: "Set de 5 bolsas de algodón orgánico para compras sin residuos.".into(),
                price: "15.99".into(),
                image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Hogar Ecológico".into(),
                material: Some("Algodón Orgánico".into()),
                certification: Some("Comercio Justo".into()),
                in_stock: Some(75),
            },
            NewProduct {
                name: "Jabón Artesanal".into(),
                description: "Jabón natural hecho a mano con aceites esenciales orgánicos.".into(),
                price: "8.75".into(),
                image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Cosmética".into(),
                material: Some("Aceites Esenciales".into()),
                certification: Some("Artesanal".into()),
                in_stock: Some(30),
            },
            NewProduct {
                name: "Vela de Soja".into(),
                description: "Vela aromática hecha con cera de soja natural en contenedor reciclado.".into(),
                price: "18.50".into(),
                image: "https://images.unsplash.com/photo-1602143407151-7111542de6e8?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Hogar Ecológico".into(),
                material: Some("Cera de Soja".into()),
                certification: Some("100% Natural".into()),
                in_stock: Some(25),
            },
            NewProduct {
                name: "Termo de Acero".into(),
                description: "Termo reutilizable de acero inoxidable, mantiene la temperatura 12h.".into(),
                price: "24.99".into(),
                image: "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300".into(),
                category: "Hogar Ecológico".into(),
                material: Some("Acero Inoxidable".into()),
                certification: Some("Libre de BPA".into()),
                in_stock: Some(40),
            },
        ];

        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }
}

/// Normalized searchable fields of one record, computed once per call.
#[derive(Debug)]
pub(crate) struct RecordText<'a> {
    pub record: &'a CatalogRecord,
    pub name: NormalizedText,
    pub description: NormalizedText,
    pub category: NormalizedText,
    pub material: Option<NormalizedText>,
}

impl<'a> RecordText<'a> {
    pub fn new(record: &'a CatalogRecord) -> Self {
        Self {
            record,
            name: normalize(&record.name),
            description: normalize(&record.description),
            category: normalize(&record.category),
            material: record.material.as_deref().map(normalize),
        }
    }

    /// Fields the query is compared against.
    pub fn query_fields(&self) -> impl Iterator<Item = &str> {
        [Some(&self.name), Some(&self.description), self.material.as_ref()]
            .into_iter()
            .flatten()
            .map(NormalizedText::as_str)
    }
}
