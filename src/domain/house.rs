use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseStatus {
    ForRent,
    Rented,
}

impl HouseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HouseStatus::ForRent => "For Rent",
            HouseStatus::Rented => "Rented",
        }
    }

    /// The status an admin toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            HouseStatus::ForRent => HouseStatus::Rented,
            HouseStatus::Rented => HouseStatus::ForRent,
        }
    }
}

impl fmt::Display for HouseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Rent" => Ok(HouseStatus::ForRent),
            "Rented" => Ok(HouseStatus::Rented),
            other => Err(format!("unknown house status {other:?}")),
        }
    }
}

impl ToSql for HouseStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for HouseStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        s.parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone)]
pub struct House {
    pub id: i64,
    pub name: String,
    pub location: String,
    // Display string, e.g. "₱8,500 / month"
    pub price: String,
    pub status: HouseStatus,
}

impl House {
    pub fn is_rented(&self) -> bool {
        self.status == HouseStatus::Rented
    }
}
