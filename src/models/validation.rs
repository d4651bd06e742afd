use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Course, NewMenuItem, ValidationError, ValidationResult};

/// Trait for validating input models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MAX_DISH_NAME_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::from_parts(9999999, 0, 0, false, 2); // 99999.99
pub const DEFAULT_PRICE_DECIMAL_PLACES: u32 = 2;

/// Limits applied to prices entered on the dish form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePolicy {
    pub max_price: Decimal,
    pub decimal_places: u32,
}

impl Default for PricePolicy {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            decimal_places: DEFAULT_PRICE_DECIMAL_PLACES,
        }
    }
}

/// Raw input of the "add a new dish" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishForm {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl Default for DishForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            course: Course::Starter,
            price: String::new(),
        }
    }
}

impl DishForm {
    /// Whether both required fields hold something other than whitespace
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }

    /// Check the form and turn it into a request for the store. Text fields are trimmed.
    pub fn validate(&self, policy: &PricePolicy) -> ValidationResult<NewMenuItem> {
        validate_dish_name(&self.name)?;
        validate_description(&self.description)?;
        validate_course(self.course)?;
        let price = parse_price(&self.price)?;
        validate_price(&price, policy)?;

        Ok(NewMenuItem {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            course: self.course,
            price,
        })
    }

    /// Reset every field, leaving the course picker on starters
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl NewMenuItem {
    /// Check the request against the given price limits
    pub fn validate_with_policy(&self, policy: &PricePolicy) -> ValidationResult<()> {
        validate_dish_name(&self.name)?;
        validate_description(&self.description)?;
        validate_course(self.course)?;
        validate_price(&self.price, policy)?;
        Ok(())
    }
}

/// Checks against `PricePolicy::default()`; use
/// [`NewMenuItem::validate_with_policy`] when prices are configured.
impl Validate for NewMenuItem {
    fn validate(&self) -> ValidationResult<()> {
        self.validate_with_policy(&PricePolicy::default())
    }
}

/// Validate dish name
pub fn validate_dish_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "dish_name".to_string(),
        });
    }

    let length = trimmed.chars().count();
    if length > MAX_DISH_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "dish_name".to_string(),
            max_length: MAX_DISH_NAME_LENGTH,
            actual_length: length,
        });
    }

    if trimmed
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\t')
    {
        return Err(ValidationError::InvalidValue {
            field: "dish_name".to_string(),
            value: name.to_string(),
            reason: "Contains invalid control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate dish description. An empty description is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let length = description.trim().chars().count();

    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max_length: MAX_DESCRIPTION_LENGTH,
            actual_length: length,
        });
    }

    Ok(())
}

/// Only the three menu courses can be picked for a new dish
pub fn validate_course(course: Course) -> ValidationResult<()> {
    if course == Course::Other {
        return Err(ValidationError::InvalidValue {
            field: "course".to_string(),
            value: course.to_string(),
            reason: "Course must be starter, main or dessert".to_string(),
        });
    }

    Ok(())
}

/// Parse a price typed into the form.
///
/// Accepts a comma as the decimal separator when no dot is present
/// ("12,50"). Trailing text is rejected.
pub fn parse_price(input: &str) -> ValidationResult<Decimal> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "price".to_string(),
        });
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized).map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        expected: "decimal number such as 49.99".to_string(),
    })
}

/// Validate a parsed price against the policy
pub fn validate_price(price: &Decimal, policy: &PricePolicy) -> ValidationResult<()> {
    if *price <= Decimal::ZERO || *price > policy.max_price {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0 (exclusive)".to_string(),
            max: policy.max_price.to_string(),
            value: price.to_string(),
        });
    }

    // Trailing zeros do not count against the precision limit
    if price.normalize().scale() > policy.decimal_places {
        return Err(ValidationError::InvalidValue {
            field: "price".to_string(),
            value: price.to_string(),
            reason: format!(
                "Price cannot have more than {} decimal places",
                policy.decimal_places
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_valid_form() -> DishForm {
        DishForm {
            name: "  Bunny Chow ".to_string(),
            description: " Curry in a hollowed loaf ".to_string(),
            course: Course::Main,
            price: "89.90".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let request = create_valid_form()
            .validate(&PricePolicy::default())
            .unwrap();

        assert_eq!(request.name, "Bunny Chow");
        assert_eq!(request.description, "Curry in a hollowed loaf");
        assert_eq!(request.course, Course::Main);
        assert_eq!(request.price, dec!(89.90));
    }

    #[test]
    fn test_form_missing_name() {
        let mut form = create_valid_form();
        form.name = "   ".to_string();

        let err = form.validate(&PricePolicy::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RequiredField {
                field: "dish_name".to_string()
            }
        );
    }

    #[test]
    fn test_form_missing_price() {
        let mut form = create_valid_form();
        form.price = "".to_string();

        let err = form.validate(&PricePolicy::default()).unwrap_err();
        assert_eq!(err.field(), "price");
        assert!(matches!(err, ValidationError::RequiredField { .. }));
    }

    #[test]
    fn test_form_rejects_other_course() {
        let mut form = create_valid_form();
        form.course = Course::Other;

        let err = form.validate(&PricePolicy::default()).unwrap_err();
        assert_eq!(err.field(), "course");
    }

    #[test]
    fn test_is_submittable_and_clear() {
        let mut form = create_valid_form();
        assert!(form.is_submittable());

        form.clear();
        assert!(!form.is_submittable());
        assert_eq!(form, DishForm::default());
        assert_eq!(form.course, Course::Starter);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_price(" 7 ").unwrap(), dec!(7));
        assert_eq!(parse_price("12,50").unwrap(), dec!(12.50));

        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("12abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("1,000.50"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("  "),
            Err(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_validate_price_bounds() {
        let policy = PricePolicy::default();

        assert!(validate_price(&dec!(0.01), &policy).is_ok());
        assert!(validate_price(&dec!(99999.99), &policy).is_ok());

        assert!(matches!(
            validate_price(&Decimal::ZERO, &policy),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_price(&dec!(-5), &policy),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_price(&dec!(100000), &policy),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price_precision() {
        let policy = PricePolicy::default();

        assert!(validate_price(&dec!(12.500), &policy).is_ok());
        assert!(matches!(
            validate_price(&dec!(12.505), &policy),
            Err(ValidationError::InvalidValue { .. })
        ));

        let whole_rands = PricePolicy {
            decimal_places: 0,
            ..PricePolicy::default()
        };
        assert!(validate_price(&dec!(12.00), &whole_rands).is_ok());
        assert!(validate_price(&dec!(12.50), &whole_rands).is_err());
    }

    #[test]
    fn test_dish_name_boundaries() {
        assert!(validate_dish_name("a").is_ok());
        assert!(validate_dish_name(&"a".repeat(200)).is_ok());
        assert!(validate_dish_name(&"a".repeat(201)).is_err());
        assert!(validate_dish_name("Pap\nen vleis").is_ok());
        assert!(validate_dish_name("Pap\ten vleis").is_ok());
        assert!(validate_dish_name("Pap\ren vleis").is_err());
        assert!(validate_dish_name("Pap\x00").is_err());
    }

    #[test]
    fn test_description_may_be_empty() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(1000)).is_ok());
        assert!(validate_description(&"d".repeat(1001)).is_err());
    }

    #[test]
    fn test_new_menu_item_validate() {
        let request = NewMenuItem::new("Koeksister", "", Course::Dessert, dec!(18.00));
        assert!(request.validate().is_ok());

        let request = NewMenuItem::new("", "", Course::Dessert, dec!(18.00));
        assert!(request.validate().is_err());

        let request = NewMenuItem::new("Koeksister", "", Course::Dessert, dec!(0));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_new_menu_item_validate_with_policy() {
        let generous = PricePolicy {
            max_price: dec!(250000),
            decimal_places: 3,
        };
        let request = NewMenuItem::new("Seafood Tower", "", Course::Main, dec!(150000.125));

        assert!(request.validate().is_err());
        assert!(request.validate_with_policy(&generous).is_ok());

        let strict = PricePolicy {
            max_price: dec!(100),
            ..PricePolicy::default()
        };
        let request = NewMenuItem::new("Koeksister", "", Course::Dessert, dec!(180.00));
        assert!(request.validate().is_ok());
        assert!(matches!(
            request.validate_with_policy(&strict),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
