//! Todo Endpoints

use crate::error::ApiError;
use crate::models::{CreatedTodoResponse, NewTodo, Todo, TodoListResponse, UpdatedTodoResponse};
use super::{check, id_path, read_json, ApiClient};

pub async fn fetch_todos(api: &ApiClient) -> Result<Vec<Todo>, ApiError> {
    log::debug!("[API] GET /todo/fetch");
    let response = api.get("/todo/fetch").send().await?;
    let body: TodoListResponse = read_json(response).await?;
    Ok(body.todos)
}

pub async fn create_todo(api: &ApiClient, text: &str) -> Result<Todo, ApiError> {
    log::debug!("[API] POST /todo/create");
    let request = api
        .post("/todo/create")
        .json(&NewTodo { text, completed: false })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let body: CreatedTodoResponse = read_json(request.send().await?).await?;
    Ok(body.new_todo)
}

/// PUT the whole record back with `completed` flipped
pub async fn toggle_todo(api: &ApiClient, todo: &Todo) -> Result<Todo, ApiError> {
    let path = id_path("/todo/update", &todo.id);
    log::debug!("[API] PUT {}", path);
    let request = api
        .put(&path)
        .json(&todo.toggled())
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let body: UpdatedTodoResponse = read_json(request.send().await?).await?;
    Ok(body.todo)
}

pub async fn delete_todo(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let path = id_path("/todo/delete", id);
    log::debug!("[API] DELETE {}", path);
    check(api.delete(&path).send().await?).await?;
    Ok(())
}
