use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A stored campground listing
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Campground {
    /// Unique identifier assigned by the store on creation
    pub id: Uuid,
    /// Display name of the campground
    pub title: String,
    /// Free-form "city, region" location
    pub location: String,
    /// URL of a picture of the campground
    pub image: Option<String>,
    /// Longer description shown on the detail page
    pub description: Option<String>,
    /// Nightly price, never negative
    pub price: f64,
}

/// Candidate campground fields exactly as submitted, before validation.
///
/// Every field is optional so the same record serves both creation, where
/// `title`, `location` and `price` must be present, and partial updates.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CampgroundFields {
    /// Submitted title
    #[validate(length(min = 1, message = "\"title\" is not allowed to be empty"))]
    pub title: Option<String>,

    /// Submitted location
    #[validate(length(min = 1, message = "\"location\" is not allowed to be empty"))]
    pub location: Option<String>,

    /// Submitted image URL
    pub image: Option<String>,

    /// Submitted description
    pub description: Option<String>,

    /// Submitted price, still in its textual form
    #[validate(custom(function = "validate_price"))]
    pub price: Option<String>,
}

/// Validated input for creating a campground
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampground {
    /// Display name of the campground
    pub title: String,
    /// Free-form "city, region" location
    pub location: String,
    /// URL of a picture of the campground
    pub image: Option<String>,
    /// Longer description shown on the detail page
    pub description: Option<String>,
    /// Nightly price, never negative
    pub price: f64,
}

/// Validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampgroundChanges {
    /// New title
    pub title: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New image URL
    pub image: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New price
    pub price: Option<f64>,
}

impl CampgroundChanges {
    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.price.is_none()
    }

    /// Overwrites the fields of `campground` that are present in this update.
    pub fn apply_to(self, campground: &mut Campground) {
        if let Some(title) = self.title {
            campground.title = title;
        }
        if let Some(location) = self.location {
            campground.location = location;
        }
        if let Some(image) = self.image {
            campground.image = Some(image);
        }
        if let Some(description) = self.description {
            campground.description = Some(description);
        }
        if let Some(price) = self.price {
            campground.price = price;
        }
    }
}

/// Custom error type for campground operations
#[derive(Debug, thiserror::Error)]
pub enum CampgroundError {
    /// One or more submitted fields broke a rule
    #[error("{0}")]
    Validation(String),

    /// No campground has the requested identifier
    #[error("Campground not found")]
    NotFound,

    /// The requested identifier is not a valid UUID
    #[error("Invalid campground id: {0}")]
    InvalidIdentifier(String),

    /// The underlying database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Parses a campground identifier taken from a request path.
pub fn parse_campground_id(id: &str) -> Result<Uuid, CampgroundError> {
    Uuid::parse_str(id).map_err(|_| CampgroundError::InvalidIdentifier(id.to_string()))
}

/// Parses a submitted price into a number, without range checks.
///
/// `-0` is read as `0` so it never reaches storage with its sign.
pub(crate) fn parse_price(price: &str) -> Option<f64> {
    price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .map(|p| if p == 0.0 { 0.0 } else { p })
}

/// Custom validation function for campground prices
fn validate_price(price: &str) -> Result<(), ValidationError> {
    match parse_price(price) {
        None => Err(ValidationError::new("price_not_a_number")
            .with_message(Cow::Borrowed("\"price\" must be a number"))),
        Some(p) if p < 0.0 => Err(ValidationError::new("price_negative").with_message(
            Cow::Borrowed("\"price\" must be greater than or equal to 0"),
        )),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Campground {
        Campground {
            id: Uuid::new_v4(),
            title: "Hilltop".to_string(),
            location: "Asheville, NC".to_string(),
            image: None,
            description: Some("Quiet".to_string()),
            price: 25.0,
        }
    }

    #[test]
    fn test_parse_campground_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_campground_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_campground_id("5f2b1c"),
            Err(CampgroundError::InvalidIdentifier(raw)) if raw == "5f2b1c"
        ));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("25"), Some(25.0));
        assert_eq!(parse_price(" 12.5 "), Some(12.5));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_negative_zero_price_is_unsigned() {
        let price = parse_price("-0").unwrap();
        assert_eq!(price, 0.0);
        assert!(price.is_sign_positive());
        assert!(validate_price("-0.0").is_ok());
    }

    #[test]
    fn test_apply_changes_only_touches_present_fields() {
        let mut campground = sample();
        let before = campground.clone();

        CampgroundChanges {
            price: Some(15.0),
            ..Default::default()
        }
        .apply_to(&mut campground);

        assert_eq!(campground.price, 15.0);
        assert_eq!(campground.title, before.title);
        assert_eq!(campground.location, before.location);
        assert_eq!(campground.description, before.description);
        assert_eq!(campground.id, before.id);
    }

    #[test]
    fn test_empty_changes() {
        assert!(CampgroundChanges::default().is_empty());
        let changes = CampgroundChanges {
            image: Some(String::new()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
