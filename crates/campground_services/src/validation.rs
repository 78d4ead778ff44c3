use validator::{Validate, ValidationErrors};

use crate::types::{CampgroundChanges, CampgroundError, CampgroundFields, NewCampground, parse_price};

/// Field order used when reporting errors.
const FIELD_ORDER: [&str; 5] = ["title", "location", "price", "image", "description"];

/// Validates a candidate record for creation.
///
/// `title`, `location` and `price` must be present; every present field must
/// satisfy its rule. All violations are reported at once, joined with `,`.
pub fn validate_new(fields: &CampgroundFields) -> Result<NewCampground, CampgroundError> {
    let errors = fields.validate().err();
    let missing = |field: &str| match field {
        "title" => fields.title.is_none(),
        "location" => fields.location.is_none(),
        "price" => fields.price.is_none(),
        _ => false,
    };

    let messages: Vec<String> = FIELD_ORDER
        .iter()
        .flat_map(|field| {
            if missing(*field) {
                vec![format!("\"{}\" is required", field)]
            } else {
                errors
                    .as_ref()
                    .map(|errors| field_messages(errors, *field))
                    .unwrap_or_default()
            }
        })
        .collect();

    // `validate_price` has already rejected anything `parse_price` cannot read.
    let price = fields.price.as_deref().and_then(parse_price);
    match (&fields.title, &fields.location, price) {
        (Some(title), Some(location), Some(price)) if messages.is_empty() => {
            Ok(NewCampground {
                title: title.clone(),
                location: location.clone(),
                image: fields.image.clone(),
                description: fields.description.clone(),
                price,
            })
        }
        _ => Err(CampgroundError::Validation(messages.join(","))),
    }
}

/// Validates a partial update. Missing fields are allowed and left untouched.
pub fn validate_changes(fields: &CampgroundFields) -> Result<CampgroundChanges, CampgroundError> {
    if let Err(errors) = fields.validate() {
        let messages: Vec<String> = FIELD_ORDER
            .iter()
            .flat_map(|field| field_messages(&errors, *field))
            .collect();
        return Err(CampgroundError::Validation(messages.join(",")));
    }

    Ok(CampgroundChanges {
        title: fields.title.clone(),
        location: fields.location.clone(),
        image: fields.image.clone(),
        description: fields.description.clone(),
        price: fields.price.as_deref().and_then(parse_price),
    })
}

/// Messages for every rule `field` violated, falling back to a generic one.
fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|errs| {
            errs.iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("\"{}\" is invalid", field),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, location: &str, price: &str) -> CampgroundFields {
        CampgroundFields {
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            price: Some(price.to_string()),
            ..Default::default()
        }
    }

    fn validation_message(err: CampgroundError) -> String {
        match err {
            CampgroundError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_fields_produce_new_campground() {
        let mut input = fields("Hilltop", "Asheville, NC", "25");
        input.image = Some("https://example.com/hilltop.jpg".to_string());

        let campground = validate_new(&input).unwrap();
        assert_eq!(campground.title, "Hilltop");
        assert_eq!(campground.location, "Asheville, NC");
        assert_eq!(campground.price, 25.0);
        assert_eq!(
            campground.image.as_deref(),
            Some("https://example.com/hilltop.jpg")
        );
        assert_eq!(campground.description, None);
    }

    #[test]
    fn test_zero_price_is_allowed() {
        assert_eq!(validate_new(&fields("Free Site", "X", "0")).unwrap().price, 0.0);
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let created = validate_new(&fields("Free Site", "X", "-0")).unwrap();
        assert!(created.price.is_sign_positive());

        let changes = validate_changes(&CampgroundFields {
            price: Some("-0.0".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.price.map(f64::is_sign_positive), Some(true));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let msg = validation_message(validate_new(&fields("", "X", "10")).unwrap_err());
        assert!(msg.contains("title"));
        assert!(!msg.contains("location"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let msg = validation_message(validate_new(&CampgroundFields::default()).unwrap_err());
        assert_eq!(
            msg,
            "\"title\" is required,\"location\" is required,\"price\" is required"
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let msg = validation_message(validate_new(&fields("A", "B", "-5")).unwrap_err());
        assert_eq!(msg, "\"price\" must be greater than or equal to 0");
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let msg = validation_message(validate_new(&fields("A", "B", "cheap")).unwrap_err());
        assert_eq!(msg, "\"price\" must be a number");
    }

    #[test]
    fn test_messages_follow_field_order() {
        let msg = validation_message(validate_new(&fields("", "", "-1")).unwrap_err());
        assert_eq!(
            msg,
            "\"title\" is not allowed to be empty,\"location\" is not allowed to be empty,\"price\" must be greater than or equal to 0"
        );
    }

    #[test]
    fn test_changes_allow_missing_fields() {
        let changes = validate_changes(&CampgroundFields {
            price: Some("15".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            changes,
            CampgroundChanges {
                price: Some(15.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_changes_still_apply_field_rules() {
        let err = validate_changes(&CampgroundFields {
            title: Some(String::new()),
            price: Some("-2".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        let msg = validation_message(err);
        assert!(msg.starts_with("\"title\""));
        assert!(msg.contains("price"));
    }
}
