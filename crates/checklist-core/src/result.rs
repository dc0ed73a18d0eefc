use crate::error::ChecklistError;

pub type ChecklistResult<T> = Result<T, ChecklistError>;
