use diesel::prelude::*;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::models::application_models::{NewSchoolApplication, SchoolApplication};
use crate::schema::school_applications;
use crate::DbPool;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error(transparent)]
    Database(#[from] DieselError),
}

const SETUP_SQL: &str = "\
CREATE TABLE IF NOT EXISTS school_applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    number TEXT NOT NULL,
    designation TEXT NOT NULL,
    school_name TEXT NOT NULL,
    message TEXT NOT NULL DEFAULT '',
    created_at INTEGER NOT NULL
)";

/// Idempotent schema setup, run once at startup.
pub fn ensure_schema(pool: &DbPool) -> Result<(), RepositoryError> {
    let mut conn = pool.get()?;
    diesel::sql_query(SETUP_SQL).execute(&mut conn)?;
    Ok(())
}

pub struct ApplicationRepository {
    pool: DbPool,
}

impl ApplicationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn insert(&self, mut new_application: NewSchoolApplication) -> Result<(), RepositoryError> {
        new_application.email = new_application.email.trim().to_lowercase();
        let mut conn = self.pool.get()?;
        diesel::insert_into(school_applications::table)
            .values(&new_application)
            .execute(&mut conn)?;
        Ok(())
    }

    /// Emails are stored lowercased, so the lookup stays
    /// case-insensitive without SQL-side folding.
    pub fn exists_for_school(&self, email: &str, school_name: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get()?;
        let found = school_applications::table
            .filter(school_applications::email.eq(email.trim().to_lowercase()))
            .filter(school_applications::school_name.eq(school_name.trim()))
            .first::<SchoolApplication>(&mut conn)
            .optional()?;
        Ok(found.is_some())
    }

    pub fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        let total = school_applications::table.count().get_result(&mut conn)?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::r2d2::{self, ConnectionManager};

    fn test_pool() -> DbPool {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        // One connection keeps the in-memory database alive for the
        // whole test.
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("Failed to create pool");
        ensure_schema(&pool).expect("Failed to set up schema");
        pool
    }

    fn application(email: &str, school_name: &str) -> NewSchoolApplication {
        NewSchoolApplication {
            name: "Asha Verma".to_string(),
            email: email.to_string(),
            number: "+91 98765 43210".to_string(),
            designation: "Principal".to_string(),
            school_name: school_name.to_string(),
            message: String::new(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn insert_then_lookup_finds_the_row() {
        let repository = ApplicationRepository::new(test_pool());
        repository
            .insert(application("asha@school.edu", "Sunrise Public School"))
            .unwrap();

        assert!(repository
            .exists_for_school("asha@school.edu", "Sunrise Public School")
            .unwrap());
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive_on_email() {
        let repository = ApplicationRepository::new(test_pool());
        repository
            .insert(application("Asha@School.EDU", "Sunrise Public School"))
            .unwrap();

        assert!(repository
            .exists_for_school("asha@school.edu", "Sunrise Public School")
            .unwrap());
        assert!(repository
            .exists_for_school("ASHA@SCHOOL.EDU", "Sunrise Public School")
            .unwrap());
    }

    #[test]
    fn lookup_distinguishes_schools() {
        let repository = ApplicationRepository::new(test_pool());
        repository
            .insert(application("asha@school.edu", "Sunrise Public School"))
            .unwrap();

        assert!(!repository
            .exists_for_school("asha@school.edu", "Another School")
            .unwrap());
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let pool = test_pool();
        ensure_schema(&pool).unwrap();
        ensure_schema(&pool).unwrap();
    }
}
