// src/db/houses.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{House, HouseStatus, ListingPage};
use crate::errors::ServerError;

const SEED_HOUSES: [(&str, &str, &str); 8] = [
    ("Sampaguita Cottage", "Purok 1, Bulosan", "₱6,500 / month"),
    ("Narra Bungalow", "Purok 2, Bulosan", "₱8,000 / month"),
    ("Acacia Townhouse", "Purok 2, Bulosan", "₱9,500 / month"),
    ("Mango Grove House", "Purok 3, Bulosan", "₱7,200 / month"),
    ("Riverside Apartment", "Purok 4, Bulosan", "₱5,800 / month"),
    ("Bamboo Loft", "Purok 5, Bulosan", "₱6,000 / month"),
    ("Coconut Villa", "Purok 6, Bulosan", "₱12,000 / month"),
    ("Hillside Duplex", "Purok 7, Bulosan", "₱10,500 / month"),
];

fn house_from_row(r: &Row<'_>) -> rusqlite::Result<House> {
    Ok(House {
        id: r.get(0)?,
        name: r.get(1)?,
        location: r.get(2)?,
        price: r.get(3)?,
        status: r.get(4)?,
    })
}

/// Insert the fixed listings if the table is empty. Returns how many were added.
pub fn seed_if_empty(conn: &Connection) -> Result<usize, ServerError> {
    let existing: i64 = conn
        .query_row("select count(*) from houses", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count houses failed: {e}")))?;
    if existing > 0 {
        return Ok(0);
    }

    for (name, location, price) in SEED_HOUSES {
        insert_house(conn, name, location, price)?;
    }
    Ok(SEED_HOUSES.len())
}

pub fn insert_house(
    conn: &Connection,
    name: &str,
    location: &str,
    price: &str,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into houses (name, location, price, status) values (?, ?, ?, ?)",
        params![name, location, price, HouseStatus::ForRent],
    )
    .map_err(|e| ServerError::DbError(format!("insert house failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_all(conn: &Connection) -> Result<Vec<House>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name, location, price, status from houses order by id")
        .map_err(|e| ServerError::DbError(format!("prepare list houses failed: {e}")))?;

    let rows = stmt
        .query_map([], house_from_row)
        .map_err(|e| ServerError::DbError(format!("list houses failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read house row failed: {e}")))
}

/// Houses whose id falls inside the page's window, ascending.
pub fn list_for_page(conn: &Connection, page: &ListingPage) -> Result<Vec<House>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, location, price, status
             from houses
             where id between ? and ?
             order by id",
        )
        .map_err(|e| ServerError::DbError(format!("prepare page query failed: {e}")))?;

    let rows = stmt
        .query_map(params![page.first_id, page.last_id], house_from_row)
        .map_err(|e| ServerError::DbError(format!("page query failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read house row failed: {e}")))
}

pub fn find_house(conn: &Connection, id: i64) -> Result<Option<House>, ServerError> {
    conn.query_row(
        "select id, name, location, price, status from houses where id = ?",
        params![id],
        house_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select house failed: {e}")))
}

/// Flip For Rent <-> Rented regardless of rentals. `None` if the house is missing.
pub fn toggle_status(conn: &Connection, id: i64) -> Result<Option<HouseStatus>, ServerError> {
    let Some(house) = find_house(conn, id)? else {
        return Ok(None);
    };

    let next = house.status.toggled();
    conn.execute(
        "update houses set status = ? where id = ?",
        params![next, id],
    )
    .map_err(|e| ServerError::DbError(format!("update house status failed: {e}")))?;

    Ok(Some(next))
}
