use super::error::TodoValidationError;
use super::requests::CreateTodoRequest;
use super::types::TodoUpdate;

fn validate_name(name: &str) -> Result<(), TodoValidationError> {
    if name.trim().is_empty() {
        return Err(TodoValidationError::EmptyName);
    }
    Ok(())
}

fn validate_due_date(due_date: &str) -> Result<(), TodoValidationError> {
    if due_date.trim().is_empty() {
        return Err(TodoValidationError::EmptyDueDate);
    }
    Ok(())
}

/// Validates a create request: both name and due date are required.
pub fn validate_create(request: &CreateTodoRequest) -> Result<(), TodoValidationError> {
    validate_name(&request.name)?;
    validate_due_date(&request.due_date)
}

/// Validates a partial update. Only fields that are present are checked.
pub fn validate_update(update: &TodoUpdate) -> Result<(), TodoValidationError> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(due_date) = &update.due_date {
        validate_due_date(due_date)?;
    }
    Ok(())
}
