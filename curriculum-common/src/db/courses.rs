//! Course persistence and tag-membership queries

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use super::models::{Course, CourseSummary};
use crate::Result;

/// Result ordering for [`CourseStore::find_by_any_tag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Store default: the order rows were inserted in
    Insertion,
    /// Ascending by description, byte-wise (case-sensitive)
    DescriptionAsc,
}

/// Row counts from a [`CourseStore::replace_all`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub removed: u64,
    pub inserted: u64,
}

/// Owner of the persisted course collection
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CourseStore {
    pool: SqlitePool,
}

impl CourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Delete every course, returning how many rows were removed
    pub async fn clear_all(&self) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        delete_all(&mut conn).await
    }

    /// Insert the whole batch in a single transaction
    ///
    /// Either every course is written or none is.
    pub async fn insert_many(&self, courses: &[Course]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let inserted = insert_all(&mut tx, courses).await?;
        tx.commit().await?;
        Ok(inserted)
    }

    /// Clear the collection and insert `courses` atomically
    ///
    /// If any insert fails the transaction rolls back and the previous
    /// contents survive untouched.
    pub async fn replace_all(&self, courses: &[Course]) -> Result<ReplaceOutcome> {
        let mut tx = self.pool.begin().await?;
        let removed = delete_all(&mut tx).await?;
        let inserted = insert_all(&mut tx, courses).await?;
        tx.commit().await?;

        Ok(ReplaceOutcome { removed, inserted })
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Courses whose tags contain at least one of `tags`, projected to
    /// description and tags
    pub async fn find_by_any_tag(
        &self,
        tags: &[&str],
        order: SortOrder,
    ) -> Result<Vec<CourseSummary>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; tags.len()].join(", ");
        let order_by = match order {
            SortOrder::Insertion => "c.id ASC",
            SortOrder::DescriptionAsc => "c.description ASC, c.id ASC",
        };

        let sql = format!(
            r#"
            SELECT c.description, c.tags
            FROM courses c
            WHERE EXISTS (
                SELECT 1 FROM json_each(c.tags) AS t
                WHERE t.value IN ({placeholders})
            )
            ORDER BY {order_by}
            "#
        );

        let mut query = sqlx::query_as::<_, (String, String)>(&sql);
        for tag in tags {
            query = query.bind(*tag);
        }

        let rows = query.fetch_all(&self.pool).await?;
        debug!("Tag query {:?} matched {} courses", tags, rows.len());

        rows.into_iter()
            .map(|(description, tags)| -> Result<CourseSummary> {
                Ok(CourseSummary {
                    description,
                    tags: serde_json::from_str(&tags)?,
                })
            })
            .collect()
    }

    /// Close the pool; pending queries finish first
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn delete_all(conn: &mut SqliteConnection) -> Result<u64> {
    let result = sqlx::query("DELETE FROM courses").execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

async fn insert_all(conn: &mut SqliteConnection, courses: &[Course]) -> Result<u64> {
    let mut inserted = 0;

    for course in courses {
        let tags_json = serde_json::to_string(&course.tags)?;

        sqlx::query("INSERT INTO courses (code, description, units, tags) VALUES (?, ?, ?, ?)")
            .bind(&course.code)
            .bind(&course.description)
            .bind(course.units)
            .bind(tags_json)
            .execute(&mut *conn)
            .await?;

        inserted += 1;
    }

    Ok(inserted)
}
