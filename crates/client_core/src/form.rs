//! Plain form state, decoupled from any rendering layer: a control is a
//! field value plus the validation predicates that apply to it.

pub type Validator = fn(&str) -> bool;

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, Default)]
pub struct Control {
    value: String,
    validators: Vec<Validator>,
}

impl Control {
    pub fn new(initial: impl Into<String>, validators: Vec<Validator>) -> Self {
        Self {
            value: initial.into(),
            validators,
        }
    }

    /// An empty control that rejects blank input.
    pub fn required() -> Self {
        Self::new("", vec![required])
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|validator| validator(&self.value))
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }
}
