//! Form decoding and the per-entity validation pipelines.
//!
//! Browsers submit `application/x-www-form-urlencoded` bodies where a key
//! may repeat (multi-select checkboxes). Handlers extract the raw pairs,
//! wrap them in [`FormData`], and build one of the `*Form` structs below.
//!
//! Each form struct holds the trimmed submitted values so a failed
//! submission can be re-rendered exactly as the user typed it. `validate()`
//! checks the field rules against the trimmed values and, on success,
//! escapes them into the corresponding `New*` DTO for persistence.

use std::str::FromStr;

use wildpreserve_core::forms::{escape_html, is_alphanumeric, parse_iso_date, FieldError};
use wildpreserve_core::types::DbId;
use wildpreserve_db::models::{
    AnimalDetail, NewAnimal, NewClass, NewOrder, NewPreserveStatus, PreserveState, PreserveStatus,
};
use wildpreserve_db::models::{Class, Order};

/// Decoded form body with multi-value access.
#[derive(Debug, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`, or the empty string when absent.
    pub fn value(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Every value submitted under `key`, normalized to a list whether the
    /// field arrived zero, one, or many times.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Class
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ClassForm {
    pub name: String,
}

impl ClassForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.value("name").trim().to_string(),
        }
    }

    pub fn from_record(class: &Class) -> Self {
        Self {
            name: class.name.clone(),
        }
    }

    /// Create rule set: non-empty and alphanumeric-only.
    pub fn validate_create(&self) -> Result<NewClass, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Class must be specified."));
        }
        if !is_alphanumeric(&self.name) {
            errors.push(FieldError::new(
                "name",
                "Class has non-alphanumeric characters.",
            ));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewClass {
            name: escape_html(&self.name),
        })
    }

    /// Update rule set: non-empty only.
    pub fn validate_update(&self) -> Result<NewClass, Vec<FieldError>> {
        if self.name.is_empty() {
            return Err(vec![FieldError::new(
                "name",
                "Class name must not be empty.",
            )]);
        }
        Ok(NewClass {
            name: escape_html(&self.name),
        })
    }
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub name: String,
}

impl OrderForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.value("name").trim().to_string(),
        }
    }

    pub fn from_record(order: &Order) -> Self {
        Self {
            name: order.name.clone(),
        }
    }

    pub fn validate_create(&self) -> Result<NewOrder, Vec<FieldError>> {
        if self.name.is_empty() {
            return Err(vec![FieldError::new("name", "Order name required")]);
        }
        Ok(NewOrder {
            name: escape_html(&self.name),
        })
    }

    pub fn validate_update(&self) -> Result<NewOrder, Vec<FieldError>> {
        if self.name.is_empty() {
            return Err(vec![FieldError::new(
                "name",
                "Order name must not be empty.",
            )]);
        }
        Ok(NewOrder {
            name: escape_html(&self.name),
        })
    }
}

// ---------------------------------------------------------------------------
// Animal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AnimalForm {
    pub name: String,
    pub binomial: String,
    pub description: String,
    /// Submitted class id, kept as text so bad input can be echoed back.
    pub animalclass: String,
    /// Submitted order ids, normalized to a list.
    pub order: Vec<String>,
    pub img: String,
}

impl AnimalForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.value("name").trim().to_string(),
            binomial: form.value("binomial").trim().to_string(),
            description: form.value("description").trim().to_string(),
            animalclass: form.value("animalclass").trim().to_string(),
            order: form
                .values("order")
                .into_iter()
                .map(|v| v.trim().to_string())
                .collect(),
            img: form.value("img").trim().to_string(),
        }
    }

    /// Prefill for the update form from a populated record.
    pub fn from_detail(detail: &AnimalDetail) -> Self {
        Self {
            name: detail.animal.name.clone(),
            binomial: detail.animal.binomial.clone(),
            description: detail.animal.description.clone(),
            animalclass: detail.animal.class_id.to_string(),
            order: detail.orders.iter().map(|o| o.id.to_string()).collect(),
            img: detail.animal.img.clone(),
        }
    }

    /// Whether a given class option should be marked selected.
    pub fn has_class(&self, id: DbId) -> bool {
        self.animalclass == id.to_string()
    }

    /// Whether a given order option should be marked checked.
    pub fn has_order(&self, id: DbId) -> bool {
        let id = id.to_string();
        self.order.iter().any(|o| *o == id)
    }

    pub fn validate(&self) -> Result<NewAnimal, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Name must not be empty."));
        }
        if self.binomial.is_empty() {
            errors.push(FieldError::new("binomial", "Binomial must not be empty."));
        }
        if self.description.is_empty() {
            errors.push(FieldError::new(
                "description",
                "Description must not be empty.",
            ));
        }

        let class_id = if self.animalclass.is_empty() {
            errors.push(FieldError::new("animalclass", "Class must not be empty"));
            None
        } else {
            match self.animalclass.parse::<DbId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(FieldError::new("animalclass", "Invalid class reference."));
                    None
                }
            }
        };

        let mut order_ids = Vec::with_capacity(self.order.len());
        for raw in &self.order {
            match raw.parse::<DbId>() {
                Ok(id) => order_ids.push(id),
                Err(_) => errors.push(FieldError::new("order", "Invalid order reference.")),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewAnimal {
            name: escape_html(&self.name),
            binomial: escape_html(&self.binomial),
            description: escape_html(&self.description),
            img: escape_html(&self.img),
            // Checked above; empty class_id always produces an error.
            class_id: class_id.expect("class_id validated"),
            order_ids,
        })
    }
}

// ---------------------------------------------------------------------------
// PreserveStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PreserveStatusForm {
    /// Submitted animal id, kept as text so bad input can be echoed back.
    pub animal: String,
    pub name: String,
    pub status: String,
    pub expected_back: String,
}

impl PreserveStatusForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            animal: form.value("animal").trim().to_string(),
            name: form.value("name").trim().to_string(),
            status: form.value("status").trim().to_string(),
            expected_back: form.value("expected_back").trim().to_string(),
        }
    }

    /// Prefill for the update form from an existing record.
    pub fn from_record(status: &PreserveStatus) -> Self {
        Self {
            animal: status.animal_id.to_string(),
            name: status.name.clone(),
            status: status.status.as_str().to_string(),
            expected_back: status.expected_back.format("%Y-%m-%d").to_string(),
        }
    }

    /// Whether a given animal option should be marked selected.
    pub fn has_animal(&self, id: DbId) -> bool {
        self.animal == id.to_string()
    }

    /// Whether a given status option should be marked selected.
    pub fn has_status(&self, state: PreserveState) -> bool {
        self.status == state.as_str()
    }

    pub fn validate(&self) -> Result<NewPreserveStatus, Vec<FieldError>> {
        let mut errors = Vec::new();

        let animal_id = if self.animal.is_empty() {
            errors.push(FieldError::new("animal", "Animal must be specified"));
            None
        } else {
            match self.animal.parse::<DbId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(FieldError::new("animal", "Invalid animal reference."));
                    None
                }
            }
        };

        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Name must be specified"));
        }

        // An omitted status falls back to the default.
        let status = if self.status.is_empty() {
            PreserveState::default()
        } else {
            match PreserveState::from_str(&self.status) {
                Ok(state) => state,
                Err(()) => {
                    errors.push(FieldError::new("status", "Invalid status."));
                    PreserveState::default()
                }
            }
        };

        // An omitted date lets the store default (now) apply.
        let expected_back = if self.expected_back.is_empty() {
            None
        } else {
            match parse_iso_date(&self.expected_back) {
                Some(ts) => Some(ts),
                None => {
                    errors.push(FieldError::new("expected_back", "Invalid date"));
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPreserveStatus {
            animal_id: animal_id.expect("animal_id validated"),
            name: escape_html(&self.name),
            status,
            expected_back,
        })
    }
}
