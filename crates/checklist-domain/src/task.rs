use serde::{Deserialize, Serialize};

/// One checklist entry as it is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "desc", alias = "description", default)]
    pub description: String,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
            description: String::new(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert!(!task.has_description());
    }

    #[test]
    fn test_description_is_stored_as_desc() {
        let mut task = Task::new("Buy milk");
        task.description = "2% please".to_string();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Buy milk", "done": false, "desc": "2% please" })
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let task: Task = serde_json::from_value(json!({ "title": "Walk dog" })).unwrap();
        assert_eq!(task, Task::new("Walk dog"));
    }

    #[test]
    fn test_description_alias_accepted() {
        let task: Task = serde_json::from_value(json!({
            "title": "Call mum",
            "done": true,
            "description": "after lunch"
        }))
        .unwrap();
        assert!(task.done);
        assert_eq!(task.description, "after lunch");
    }

    #[test]
    fn test_missing_title_rejected() {
        let result: Result<Task, _> = serde_json::from_value(json!({ "done": true }));
        assert!(result.is_err());
    }
}
