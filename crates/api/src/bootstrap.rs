//! First-run seeding of the in-memory store.
//!
//! Creates the studio admin account and the two resident teachers so a fresh
//! dev server is immediately usable.

use studio_db::models::user::CreateUser;
use studio_db::repositories::{TeacherRepo, UserRepo};
use studio_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Email of the seeded admin account.
pub const ADMIN_EMAIL: &str = "yoga@studio.com";
/// Password of the seeded admin account.
pub const ADMIN_PASSWORD: &str = "test!1234";

/// Teachers created on first start, in id order.
const TEACHERS: [(&str, &str); 2] = [("Margot", "DELAHAYE"), ("Hélène", "THIERCELIN")];

/// Seed the admin account and teachers unless an admin already exists.
///
/// Returns `true` when data was created.
pub async fn seed_demo_data(pool: &DbPool) -> AppResult<bool> {
    if UserRepo::exists_by_email(pool, ADMIN_EMAIL).await {
        return Ok(false);
    }

    let password_hash = hash_password(ADMIN_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let admin = UserRepo::create(
        pool,
        &CreateUser {
            email: ADMIN_EMAIL.to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            password_hash,
            admin: true,
        },
    )
    .await?;

    for (first_name, last_name) in TEACHERS {
        TeacherRepo::create(pool, first_name, last_name).await;
    }

    tracing::info!(admin_id = admin.id, teachers = TEACHERS.len(), "Seeded demo data");
    Ok(true)
}
