//! Request payloads and declared response types for every API operation.
//!
//! DESIGN
//! ======
//! Request shapes are fully typed: they are what the client sends. Responses
//! belong to the backend, so most are transparent wrappers around the JSON
//! body, returned verbatim but still distinct per operation at the call
//! site. `LoginResponse` is the exception because the login flow needs
//! `user_id`.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub login_id: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "user_id_from_number_or_string")]
    pub user_id: i64,
    /// Every other field of the response body.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn user_id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_i64().ok_or_else(|| D::Error::custom("user_id out of range")),
        serde_json::Value::String(s) => s.trim().parse().map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("invalid user_id: {other}"))),
    }
}

// =============================================================================
// RECEIPTS
// =============================================================================

/// Receipt photo to upload for OCR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ReceiptImage {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).map(str::to_owned);
        Self { file_name, content_type, bytes }
    }

    /// Read an image from disk, naming the part after the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "receipt".to_owned(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Catalog entry confirmed from OCR results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub item_name: String,
    pub category: String,
    pub basic_expiration_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryEntry {
    pub item_name: String,
    pub quantity: f64,
    /// `YYYY-MM-DD`, or `None` when the item does not expire.
    pub expiration_date: Option<String>,
}

// =============================================================================
// RECIPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecipe {
    pub menu: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipeItem {
    pub recipe_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub ingredient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

// =============================================================================
// HEALTH
// =============================================================================

/// Unknown values are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthProfile {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age_years: Option<u32>,
    pub sex: Option<String>,
    pub calorie_goal_kcal_per_day: Option<f64>,
}

// =============================================================================
// OPAQUE RESPONSES
// =============================================================================

macro_rules! opaque_response {
    ($($(#[$meta:meta])* $name:ident;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub serde_json::Value);

        impl $name {
            #[must_use]
            pub fn as_value(&self) -> &serde_json::Value {
                &self.0
            }

            #[must_use]
            pub fn into_inner(self) -> serde_json::Value {
                self.0
            }
        }
    )+};
}

opaque_response! {
    /// Body of `POST /auth/register`.
    Registration;
    /// Body of `POST /receipts/upload`, including the new receipt id.
    UploadedReceipt;
    /// Items recognized on one receipt.
    OcrItems;
    CatalogUpsertResult;
    InventoryAddResult;
    /// Current user's inventory.
    InventoryList;
    InventoryDeletion;
    /// Global item catalog.
    ItemCatalog;
    /// Crawled recipes matching a set of ingredients.
    RecipeSearchResults;
    /// Crawled detail page for one recipe URL.
    CrawledRecipeDetail;
    RecipeList;
    RecipeDetail;
    CreatedRecipe;
    CreatedRecipeItem;
    RecipeDeletion;
    /// Stored recipes ranked for the current user's inventory.
    RecommendedRecipes;
    /// Nutrition summary for one recipe URL.
    RecipeHealthInfo;
    SavedHealthProfile;
    StoredHealthProfile;
}
