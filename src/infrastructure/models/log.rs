use chrono::Utc;
use serde::Serialize;
use surrealdb::sql::Datetime;

#[derive(Serialize)]
pub struct SurrealErrorLogCreate {
    stack: String,
    date: Datetime,
}

impl SurrealErrorLogCreate {
    pub fn now(stack: &str) -> Self {
        SurrealErrorLogCreate {
            stack: stack.to_owned(),
            date: Datetime::from(Utc::now()),
        }
    }
}
