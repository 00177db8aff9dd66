use chrono::Utc;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::core::error::Error;
use crate::types::user::User;

#[derive(Clone, Debug)]
pub(crate) struct UserController {
    pool: PgPool,
}

impl UserController {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get_by_id(&self, id: &str) -> Result<Option<User>, Error> {
        match sqlx::query(
            "SELECT
                id,
                phone_number,
                full_name,
                password_hash,
                salt
            FROM users
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn get_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<User>, Error> {
        match sqlx::query(
            "SELECT
                id,
                phone_number,
                full_name,
                password_hash,
                salt
            FROM users
            WHERE phone_number = $1;",
        )
        .bind(phone_number)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// Inserts a new user under a fresh UUID and returns the id. A duplicate
    /// phone number surfaces as the conflict error through the unique
    /// constraint.
    pub(crate) async fn insert(
        &self,
        phone_number: &str,
        full_name: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<String, Error> {
        let id = Uuid::new_v4().to_string();

        match sqlx::query(
            "INSERT INTO users (id, phone_number, full_name, password_hash, salt)
            VALUES ($1, $2, $3, $4, $5);",
        )
        .bind(&id)
        .bind(phone_number)
        .bind(full_name)
        .bind(password_hash)
        .bind(salt)
        .execute(&self.pool)
        .await
        {
            Ok(_) => Ok(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::PhoneNumberTaken)
            }
            Err(e) => Err(Error::Sql(e)),
        }
    }

    pub(crate) async fn update(&self, user: &User) -> Result<(), Error> {
        sqlx::query(
            "UPDATE users
            SET
                updated_at = $2,
                phone_number = $3,
                full_name = $4
            WHERE id = $1;",
        )
        .bind(&user.id)
        .bind(Utc::now())
        .bind(&user.phone_number)
        .bind(&user.full_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub(crate) async fn increment_login_count(&self, user: &User) -> Result<(), Error> {
        sqlx::query(
            "UPDATE users
            SET
                updated_at = $2,
                login_count = login_count + 1
            WHERE id = $1;",
        )
        .bind(&user.id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_user(row: PgRow) -> User {
    User {
        id: row.get("id"),
        phone_number: row.get("phone_number"),
        full_name: row.get("full_name"),
        password_hash: row.get("password_hash"),
        salt: row.get("salt"),
    }
}
