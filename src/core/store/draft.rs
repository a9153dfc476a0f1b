//! Form-bound staging copy of one entity

use crate::core::models::Entity;
use crate::utils::error::Result;

/// Editable copy of an entity, independent of the collection
///
/// An id of 0 means create-intent, any positive id update-intent.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<E: Entity> {
    value: E,
    touched: bool,
}

impl<E: Entity> FormDraft<E> {
    /// Empty draft for "add"
    pub fn create() -> Self {
        let mut value = E::default();
        value.set_id(0);
        Self {
            value,
            touched: false,
        }
    }

    /// Draft copied from a collection entry for "edit"
    pub fn edit(source: &E) -> Self {
        let mut value = source.clone();
        value.set_delete_loader(false);
        Self {
            value,
            touched: false,
        }
    }

    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }

    pub fn id(&self) -> i64 {
        self.value.id()
    }

    pub fn is_create(&self) -> bool {
        self.value.id() <= 0
    }

    /// Set once validation has failed so every field shows its message
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Validate, marking all fields touched on failure
    pub fn validate(&mut self) -> Result<()> {
        let result = self.value.validate();
        if result.is_err() {
            self.touched = true;
        }
        result
    }

    /// Copy to send, with submit-time normalization applied
    pub fn to_submission(&self) -> E {
        let mut submission = self.value.clone();
        if submission.id() < 0 {
            submission.set_id(0);
        }
        submission.prepare_for_submit();
        submission
    }
}
