//! Backend Client
//!
//! REST bindings for the `todos` resource.

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::AppConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::{Item, ItemId, NewItem};

/// Backend operations on the `todos` resource.
///
/// `?Send` so browser fetch futures qualify.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn get_todos(&self) -> TodoResult<Vec<Item>>;
    async fn add_todo(&self, todo: &NewItem) -> TodoResult<Item>;
    async fn update_todo(&self, todo: &Item) -> TodoResult<Item>;
    async fn delete_todo(&self, id: &ItemId) -> TodoResult<()>;
}

/// `reqwest` implementation against `{api_base}/todos`
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    todos_url: String,
}

impl RestClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            todos_url: config.todos_url(),
        }
    }

    fn todo_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.todos_url, id)
    }
}

fn check(method: &'static str, path: &str, response: Response) -> TodoResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TodoError::Status {
            method,
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for RestClient {
    async fn get_todos(&self) -> TodoResult<Vec<Item>> {
        let response = self.http.get(&self.todos_url).send().await?;
        let todos: Vec<Item> = check("GET", &self.todos_url, response)?.json().await?;
        log::debug!("fetched {} todos", todos.len());
        Ok(todos)
    }

    async fn add_todo(&self, todo: &NewItem) -> TodoResult<Item> {
        let response = self.http.post(&self.todos_url).json(todo).send().await?;
        let created: Item = check("POST", &self.todos_url, response)?.json().await?;
        log::info!("created todo {}", created.id);
        Ok(created)
    }

    async fn update_todo(&self, todo: &Item) -> TodoResult<Item> {
        let url = self.todo_url(&todo.id);
        let response = self.http.patch(&url).json(todo).send().await?;
        Ok(check("PATCH", &url, response)?.json().await?)
    }

    async fn delete_todo(&self, id: &ItemId) -> TodoResult<()> {
        let url = self.todo_url(id);
        let response = self.http.delete(&url).send().await?;
        check("DELETE", &url, response)?;
        log::info!("deleted todo {}", id);
        Ok(())
    }
}
