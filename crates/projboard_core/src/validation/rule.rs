//! Per-field validation rules.

/// Value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Text(String),
    Number(f64),
}

impl RuleValue {
    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Constraints for one input value.
///
/// Length bounds only apply to `RuleValue::Text`; numeric bounds only apply
/// to `RuleValue::Number`. A constraint that does not apply to the value's
/// kind is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    pub value: RuleValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValidationRule {
    fn with_value(value: RuleValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(RuleValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::with_value(RuleValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates `rule` and returns whether its value satisfies every present
/// constraint.
///
/// - `required`: trimmed text form is non-empty. A number's text form is
///   never empty, so `required` always holds for numbers.
/// - `min_length` / `max_length`: character count strictly greater / less
///   than the bound.
/// - `min` / `max`: value strictly greater / less than the bound. `NaN`
///   fails both.
pub fn validate(rule: &ValidationRule) -> bool {
    let mut valid = true;

    if rule.required {
        valid = valid && !rule.value.as_text().trim().is_empty();
    }

    if let RuleValue::Text(text) = &rule.value {
        let length = text.chars().count();
        if let Some(bound) = rule.min_length {
            valid = valid && length > bound;
        }
        if let Some(bound) = rule.max_length {
            valid = valid && length < bound;
        }
    }

    if let RuleValue::Number(number) = rule.value {
        if let Some(bound) = rule.min {
            valid = valid && number > bound;
        }
        if let Some(bound) = rule.max {
            valid = valid && number < bound;
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::{validate, ValidationRule};

    #[test]
    fn rule_without_constraints_passes() {
        assert!(validate(&ValidationRule::text("")));
        assert!(validate(&ValidationRule::number(f64::NAN)));
    }

    #[test]
    fn required_rejects_whitespace_only_text() {
        assert!(!validate(&ValidationRule::text("   \t").required()));
        assert!(validate(&ValidationRule::text(" x ").required()));
    }

    #[test]
    fn required_holds_for_any_number() {
        assert!(validate(&ValidationRule::number(0.0).required()));
        assert!(validate(&ValidationRule::number(f64::NAN).required()));
    }

    #[test]
    fn max_length_is_exclusive() {
        assert!(validate(&ValidationRule::text("abcd").max_length(5)));
        assert!(!validate(&ValidationRule::text("abcde").max_length(5)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes.
        assert!(validate(&ValidationRule::text("ßßßß").max_length(5)));
        assert!(!validate(&ValidationRule::text("ßßßß").min_length(4)));
    }

    #[test]
    fn numeric_bounds_skip_text_values() {
        assert!(validate(&ValidationRule::text("3").min(5.0).max(1.0)));
    }

    #[test]
    fn length_bounds_skip_numeric_values() {
        assert!(validate(&ValidationRule::number(12345.0).max_length(2)));
    }

    #[test]
    fn nan_fails_numeric_bounds() {
        assert!(!validate(&ValidationRule::number(f64::NAN).min(0.0)));
        assert!(!validate(&ValidationRule::number(f64::NAN).max(10.0)));
    }
}
