use crate::domain::models::account::Account;
use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let query = format!(
        r#"
        LET $account = (CREATE account CONTENT {{
            name: '{}',
            email: '{}',
            password: crypto::argon2::generate('{}')
        }});
        RETURN $account[0].id;
        "#,
        "Test Account", "test_account@email.com", "valid_password"
    );

    let thing: Option<Thing> = conn.query(query).await.unwrap().take(1).unwrap();

    Account {
        id: thing.unwrap().id.to_raw(),
        name: "Test Account".to_string(),
        email: "test_account@email.com".to_string(),
        password: "valid_password".to_string(),
    }
}
