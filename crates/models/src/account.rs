use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set, SqlErr};

use crate::errors::ModelError;

pub const DEFAULT_ROLE: &str = "employee";
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Basic shape check: one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("invalid email".into());
    if email.is_empty() || email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ModelError::Validation(format!("username longer than {MAX_USERNAME_LEN} characters")));
    }
    Ok(())
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert a new active account with the default role.
///
/// A unique-index violation is reported as [`ModelError::UniqueViolation`]
/// carrying the driver message, which names the offending column or index.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    email: &str,
    username: &str,
    password_hash: String,
) -> Result<Model, ModelError> {
    validate_email(email)?;
    validate_username(username)?;
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        email: Set(email.to_string()),
        username: Set(username.to_string()),
        password_hash: Set(password_hash),
        is_active: Set(true),
        role: Set(DEFAULT_ROLE.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::UniqueViolation(msg),
        _ => ModelError::Db(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("jane.doe@example.com").is_ok());
        assert!(validate_email("a+b@hr.example.co.in").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "no-at-sign", "@example.com", "a@", "a@b", "a@@b.com", "a b@c.com", "a@b..com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
        let long = format!("{}@example.com", "x".repeat(MAX_EMAIL_LEN));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("jane").is_ok());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"u".repeat(MAX_USERNAME_LEN + 1)).is_err());
    }
}
