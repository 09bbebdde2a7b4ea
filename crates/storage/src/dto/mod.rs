use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub mod exercise;
pub mod progress_log;
pub mod user;
pub mod workout;
pub mod workout_exercise;

/// Validate `parent` and report the errors of `child` under `field`, so the
/// caller sees paths like `measurements.chest` or `exercises[1].reps`.
pub(crate) fn validate_nested(
    parent: &impl Validate,
    field: &'static str,
    child: Option<ValidationErrorsKind>,
) -> Result<(), ValidationErrors> {
    let mut errors = parent.validate().err().unwrap_or_else(ValidationErrors::new);

    if let Some(kind) = child {
        errors.errors_mut().insert(field, kind);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub(crate) fn struct_errors<T: Validate>(item: Option<&T>) -> Option<ValidationErrorsKind> {
    item?.validate().err().map(|e| ValidationErrorsKind::Struct(Box::new(e)))
}

pub(crate) fn list_errors<'a, T: Validate + 'a>(
    items: impl IntoIterator<Item = &'a T>,
) -> Option<ValidationErrorsKind> {
    let failed: BTreeMap<usize, Box<ValidationErrors>> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| item.validate().err().map(|e| (index, Box::new(e))))
        .collect();

    (!failed.is_empty()).then_some(ValidationErrorsKind::List(failed))
}
