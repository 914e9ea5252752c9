// src/db/rentals.rs
use rusqlite::{params, Connection};

use crate::db::houses::find_house;
use crate::domain::{HouseStatus, RentalApplication};
use crate::errors::{RentError, ServerError};

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RentalRow {
    pub id: i64,
    pub house_id: i64,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub movein: String,
    pub message: Option<String>,
}

/// Mark the house rented and record the application, as one transaction.
///
/// The status flip is conditional on the house still being "For Rent", so two
/// concurrent submissions cannot both succeed: the loser sees zero rows updated
/// and gets `AlreadyRented`. Nothing is written unless both statements commit.
pub fn submit_rental(
    conn: &mut Connection,
    house_id: i64,
    app: &RentalApplication,
    now: i64,
) -> Result<i64, RentError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let updated = tx
        .execute(
            "update houses set status = ? where id = ? and status = ?",
            params![HouseStatus::Rented, house_id, HouseStatus::ForRent],
        )
        .map_err(|e| ServerError::DbError(format!("mark house rented failed: {e}")))?;

    if updated != 1 {
        tx.rollback().ok();
        return Err(RentError::AlreadyRented);
    }

    tx.execute(
        "insert into rentals (house_id, user_name, email, phone, movein, message, created_at)
         values (?, ?, ?, ?, ?, ?, ?)",
        params![
            house_id,
            app.name,
            app.email,
            app.phone,
            app.movein,
            app.message,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert rental failed: {e}")))?;
    let rental_id = tx.last_insert_rowid();

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(rental_id)
}

/// Pre-write checks, in order: the house must exist and must not be rented.
pub fn ensure_rentable(conn: &Connection, house_id: i64) -> Result<(), RentError> {
    let house = find_house(conn, house_id)?.ok_or(RentError::NotFound)?;
    if house.is_rented() {
        return Err(RentError::AlreadyRented);
    }
    Ok(())
}

#[cfg(test)]
pub fn rentals_for_house(conn: &Connection, house_id: i64) -> Result<Vec<RentalRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, house_id, user_name, email, phone, movein, message
             from rentals where house_id = ? order by id",
        )
        .map_err(|e| ServerError::DbError(format!("prepare rentals query failed: {e}")))?;

    let rows = stmt
        .query_map(params![house_id], |r| {
            Ok(RentalRow {
                id: r.get(0)?,
                house_id: r.get(1)?,
                user_name: r.get(2)?,
                email: r.get(3)?,
                phone: r.get(4)?,
                movein: r.get(5)?,
                message: r.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("rentals query failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read rental row failed: {e}")))
}

#[cfg(test)]
pub fn count_rentals(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from rentals", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count rentals failed: {e}")))
}
