//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Todo record (mirrors the backend document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Server-owned fields (owner, timestamps, version) sent back untouched on update
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    /// Same record with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Body of POST /todo/create
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct TodoListResponse {
    #[serde(default)]
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedTodoResponse {
    #[serde(rename = "newTodo")]
    pub new_todo: Todo,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedTodoResponse {
    pub todo: Todo,
}

/// Body of POST /user/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of POST /user/signup
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Login/signup success body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body; `errors` is either a single string or a list of strings
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        let text = match self.errors.as_ref()? {
            Value::String(s) => s.trim().to_string(),
            Value::Array(list) => list
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.trim()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_keeps_server_fields_on_toggle() {
        let raw = json!({
            "_id": "65f0c1",
            "text": "buy milk",
            "completed": false,
            "user": "u1",
            "__v": 0
        });
        let todo: Todo = serde_json::from_value(raw).unwrap();
        assert_eq!(todo.id, "65f0c1");
        assert_eq!(todo.extra.len(), 2);

        let body = serde_json::to_value(todo.toggled()).unwrap();
        assert_eq!(body, json!({
            "_id": "65f0c1",
            "text": "buy milk",
            "completed": true,
            "user": "u1",
            "__v": 0
        }));
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_value(json!({"_id": "a", "text": "t"})).unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn test_envelopes() {
        let list: TodoListResponse = serde_json::from_value(json!({
            "message": "ok",
            "todos": [{"_id": "1", "text": "a", "completed": true}]
        })).unwrap();
        assert_eq!(list.todos.len(), 1);
        assert!(list.todos[0].completed);

        let created: CreatedTodoResponse = serde_json::from_value(json!({
            "newTodo": {"_id": "2", "text": "b", "completed": false}
        })).unwrap();
        assert_eq!(created.new_todo.text, "b");

        let auth: AuthResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
        assert_eq!(auth.token.as_deref(), Some("abc"));
        assert_eq!(auth.message, None);
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(NewTodo { text: "write", completed: false }).unwrap();
        assert_eq!(body, json!({"text": "write", "completed": false}));

        let body = serde_json::to_value(SignupRequest {
            username: "ann",
            email: "ann@example.com",
            password: "pw",
        }).unwrap();
        assert_eq!(body, json!({"username": "ann", "email": "ann@example.com", "password": "pw"}));
    }

    #[test]
    fn test_error_body_message() {
        let single: ErrorBody = serde_json::from_value(json!({"errors": "Invalid email or password"})).unwrap();
        assert_eq!(single.message().as_deref(), Some("Invalid email or password"));

        let many: ErrorBody = serde_json::from_value(json!({"errors": ["Email required", "", "Password too short"]})).unwrap();
        assert_eq!(many.message().as_deref(), Some("Email required, Password too short"));

        let none: ErrorBody = serde_json::from_value(json!({"message": "nope"})).unwrap();
        assert_eq!(none.message(), None);

        let blank: ErrorBody = serde_json::from_value(json!({"errors": "  "})).unwrap();
        assert_eq!(blank.message(), None);
    }
}
