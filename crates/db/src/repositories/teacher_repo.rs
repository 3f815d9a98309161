//! Repository for the `teachers` table.

use studio_core::models::teacher::Teacher;
use studio_core::types::DbId;

use crate::{now, DbPool};

pub struct TeacherRepo;

impl TeacherRepo {
    pub async fn create(pool: &DbPool, first_name: &str, last_name: &str) -> Teacher {
        let mut tables = pool.tables.write().await;
        let id = tables.teacher_seq.advance();
        let stamp = now();
        let teacher = Teacher {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            created_at: Some(stamp),
            updated_at: Some(stamp),
        };
        tables.teachers.insert(id, teacher.clone());
        teacher
    }

    /// All teachers ordered by id.
    pub async fn list(pool: &DbPool) -> Vec<Teacher> {
        pool.tables.read().await.teachers.values().cloned().collect()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Teacher> {
        pool.tables.read().await.teachers.get(&id).cloned()
    }

    pub async fn exists(pool: &DbPool, id: DbId) -> bool {
        pool.tables.read().await.teachers.contains_key(&id)
    }
}
