//! Default player pool used to populate a fresh database

use super::schema::PlayerDatabase;
use crate::{roster::PlayerListing, Category, Result};
use tracing::info;

const DEFAULT_PLAYERS: &[(&str, Category, u32)] = &[
    ("Virat Kohli", Category::BAT, 10),
    ("Rohit Sharma", Category::BAT, 10),
    ("KL Rahul", Category::BAT, 9),
    ("Suryakumar Yadav", Category::BAT, 9),
    ("Ishan Kishan", Category::BAT, 8),
    ("Shreyas Iyer", Category::BAT, 8),
    ("Manish Pandey", Category::BAT, 7),
    ("Shubman Gill", Category::BAT, 8),
    ("Prithvi Shaw", Category::BAT, 7),
    ("Ajinkya Rahane", Category::BAT, 6),
    ("Jasprit Bumrah", Category::BWL, 10),
    ("Bhuvneshwar Kumar", Category::BWL, 9),
    ("Yuzvendra Chahal", Category::BWL, 8),
    ("Ravichandran Ashwin", Category::BWL, 9),
    ("Axar Patel", Category::BWL, 8),
    ("Siraj Mohammed", Category::BWL, 8),
    ("Umran Malik", Category::BWL, 7),
    ("Deepak Chahar", Category::BWL, 8),
    ("Navdeep Saini", Category::BWL, 7),
    ("Prasidh Krishna", Category::BWL, 7),
    ("MS Dhoni", Category::WK, 10),
    ("Rishabh Pant", Category::WK, 9),
    ("Dinesh Karthik", Category::WK, 8),
    ("Wriddhiman Saha", Category::WK, 7),
    ("Samson Sanju", Category::WK, 8),
    ("KS Bharat", Category::WK, 7),
    ("Hardik Pandya", Category::AR, 9),
    ("Ravindra Jadeja", Category::AR, 9),
    ("Mitchell Marsh", Category::AR, 8),
    ("Washington Sundar", Category::AR, 7),
    ("Venkatesh Iyer", Category::AR, 7),
    ("Krunal Pandya", Category::AR, 7),
    ("Shardul Thakur", Category::AR, 7),
    ("Sikandar Raza", Category::AR, 8),
    ("Chris Woakes", Category::AR, 8),
];

/// The built-in player pool.
pub fn default_listings() -> Vec<PlayerListing> {
    DEFAULT_PLAYERS
        .iter()
        .map(|(name, category, value)| PlayerListing::new(*name, *category, *value))
        .collect()
}

impl PlayerDatabase {
    /// Insert the default player pool when no players exist yet.
    /// Returns how many players were inserted.
    pub fn seed_default_players(&mut self) -> Result<usize> {
        if self.count_listings()? > 0 {
            return Ok(0);
        }

        let listings = default_listings();
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO players (name, category, value) VALUES (?, ?, ?)")?;
            for listing in &listings {
                stmt.execute(rusqlite::params![
                    listing.name,
                    listing.category.code(),
                    listing.value.as_u32()
                ])?;
            }
        }
        tx.commit()?;

        info!(count = listings.len(), "seeded default players");
        Ok(listings.len())
    }
}
