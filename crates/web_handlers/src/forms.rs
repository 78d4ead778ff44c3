use actix_web::{HttpRequest, error, web};
use campground_services::CampgroundFields;
use serde::Deserialize;

use crate::error_page::AppError;

/// Campground form body, with fields nested under `campground[...]`
#[derive(Debug, Default, Deserialize)]
pub struct CampgroundForm {
    /// `campground[title]`
    #[serde(rename = "campground[title]")]
    pub title: Option<String>,

    /// `campground[location]`
    #[serde(rename = "campground[location]")]
    pub location: Option<String>,

    /// `campground[image]`
    #[serde(rename = "campground[image]")]
    pub image: Option<String>,

    /// `campground[description]`
    #[serde(rename = "campground[description]")]
    pub description: Option<String>,

    /// `campground[price]`
    #[serde(rename = "campground[price]")]
    pub price: Option<String>,
}

impl From<CampgroundForm> for CampgroundFields {
    fn from(form: CampgroundForm) -> Self {
        CampgroundFields {
            title: form.title,
            location: form.location,
            image: form.image,
            description: form.description,
            price: form.price,
        }
    }
}

/// Form extractor configuration that routes decode failures through `AppError`.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(form_error_handler)
}

fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid form data: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_names_are_decoded() {
        let form: CampgroundForm = serde_urlencoded_from(
            "campground%5Btitle%5D=Hilltop&campground%5Blocation%5D=Asheville%2C+NC&campground%5Bprice%5D=25&_method=PUT",
        );
        let fields = CampgroundFields::from(form);
        assert_eq!(fields.title.as_deref(), Some("Hilltop"));
        assert_eq!(fields.location.as_deref(), Some("Asheville, NC"));
        assert_eq!(fields.price.as_deref(), Some("25"));
        assert_eq!(fields.image, None);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn test_empty_body_has_no_fields() {
        let fields = CampgroundFields::from(serde_urlencoded_from::<CampgroundForm>(""));
        assert!(fields.title.is_none());
        assert!(fields.price.is_none());
    }

    // Query strings and form bodies share the same urlencoded decoder.
    fn serde_urlencoded_from<T: serde::de::DeserializeOwned>(body: &str) -> T {
        web::Query::<T>::from_query(body).unwrap().into_inner()
    }
}
