//! Validation capability applied before a product is sent upstream.

use validator::Validate;

use crate::models::Product;

/// Checks a product and reports every rule it breaks.
///
/// An empty vector means the product is valid. Messages are ordered so that
/// joining them gives a stable, user-facing sentence.
#[cfg_attr(test, mockall::automock)]
pub trait ProductValidator: Send + Sync {
    fn validate(&self, product: &Product) -> Vec<String>;
}

/// Default validator backed by the `validator` rules declared on [`Product`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl ProductValidator for RuleValidator {
    fn validate(&self, product: &Product) -> Vec<String> {
        let Err(errors) = Validate::validate(product) else {
            return Vec::new();
        };

        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_product_has_no_messages() {
        let messages = RuleValidator.validate(&Product::new("Notebook", json!({})));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let messages = RuleValidator.validate(&Product::new("", json!(null)));
        assert_eq!(messages, vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let messages = RuleValidator.validate(&Product::new(" \t\n", json!(null)));
        assert_eq!(messages, vec!["Name is required".to_string()]);
    }
}
