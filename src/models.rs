use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Ids of the toppings selectable for this product.
    #[serde(default, rename = "toppings")]
    pub topping_ids: Vec<String>,
    #[serde(default, rename = "max_order")]
    pub max_order: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topping {
    pub id: String,
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default, rename = "whatsapp")]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

/// Marketing copy for the landing page. Every field is optional; absent
/// fields leave the corresponding page region on its built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandingContent {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, rename = "buttonText")]
    pub button_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Topping name and price frozen at add-to-cart time. Later catalog edits
/// must not change items already in the cart, so this is a copy, not an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToppingSnapshot {
    pub name: String,
    pub price: i64,
}

impl From<&Topping> for ToppingSnapshot {
    fn from(topping: &Topping) -> Self {
        Self {
            name: topping.name.clone(),
            price: topping.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: Uuid,
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    #[serde(default)]
    pub image: String,
    pub qty: u32,
    #[serde(default)]
    pub toppings: Vec<ToppingSnapshot>,
    pub created_at: DateTime<Utc>,
}

impl CartLineItem {
    pub fn toppings_price(&self) -> i64 {
        self.toppings.iter().map(|t| t.price).sum()
    }

    /// `(unit price + toppings) * qty`, in minor currency units.
    pub fn line_total(&self) -> i64 {
        (self.unit_price + self.toppings_price()) * i64::from(self.qty)
    }
}
