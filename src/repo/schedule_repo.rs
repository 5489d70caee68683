use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::CardSchedule;
use crate::schema::card_schedules;

/// Returns the `(user_id, card_id)` schedule row, creating it if absent.
///
/// Must be called from inside the caller's write transaction (see
/// `crate::db::with_immediate_transaction`) — that transaction is what
/// stands in for the per-row lock a multi-row-lockable store would give via
/// `SELECT ... FOR UPDATE`. Tolerates a concurrent insert of the same key: if
/// the insert hits the `(user_id, card_id)` uniqueness constraint, the
/// conflict is swallowed and the existing row is fetched instead.
pub fn get_or_create_schedule_for_update(
    conn: &mut SqliteConnection,
    user_id: &str,
    card_id: &str,
    now: DateTime<Utc>,
) -> Result<CardSchedule> {
    if let Some(existing) = find_schedule(conn, user_id, card_id)? {
        return Ok(existing);
    }

    let fresh = CardSchedule::new(user_id.to_string(), card_id.to_string(), now);
    let insert_result = diesel::insert_into(card_schedules::table)
        .values(&fresh)
        .execute(conn);

    match insert_result {
        Ok(_) => Ok(fresh),
        Err(diesel::result::Error::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _)) => {
            find_schedule(conn, user_id, card_id)?
                .ok_or_else(|| anyhow::anyhow!("schedule row vanished after a unique-constraint conflict on insert"))
        }
        Err(err) => Err(err.into()),
    }
}

fn find_schedule(conn: &mut SqliteConnection, user_id: &str, card_id: &str) -> Result<Option<CardSchedule>> {
    let row = card_schedules::table
        .filter(card_schedules::user_id.eq(user_id))
        .filter(card_schedules::card_id.eq(card_id))
        .first::<CardSchedule>(conn)
        .optional()?;
    Ok(row)
}

/// Persists a schedule's `last_interval_seconds`, `next_review_at`, and
/// `streak` fields. Partial update: no other column is touched.
pub fn save_schedule(conn: &mut SqliteConnection, sched: &CardSchedule) -> Result<()> {
    diesel::update(
        card_schedules::table
            .filter(card_schedules::user_id.eq(sched.user_id()))
            .filter(card_schedules::card_id.eq(sched.card_id())),
    )
    .set((
        card_schedules::last_interval_seconds.eq(sched.last_interval_seconds()),
        card_schedules::next_review_at.eq(sched.next_review_at().naive_utc()),
        card_schedules::streak.eq(sched.streak()),
    ))
    .execute(conn)?;
    Ok(())
}

/// Lists the ids of every card due for `user_id` by `until`, i.e. every row
/// with `next_review_at <= until`. Ordering is unspecified.
pub fn list_due_card_ids(conn: &mut SqliteConnection, user_id: &str, until: DateTime<Utc>) -> Result<Vec<String>> {
    let ids = card_schedules::table
        .filter(card_schedules::user_id.eq(user_id))
        .filter(card_schedules::next_review_at.le(until.naive_utc()))
        .select(card_schedules::card_id)
        .load::<String>(conn)?;
    Ok(ids)
}
