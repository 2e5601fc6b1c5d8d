//! The resort table: CSV loading and derived rank columns
//!
//! The dataset is a single read-only CSV file (ISO-8859-1 encoded, as
//! shipped) loaded once at startup. Four rank columns are derived at
//! load time: per-country ordinal rankings of elevation, ticket price,
//! slope count and snow-cannon count, descending (rank 1 = largest).
//! Ties receive the average of the rank positions they span, so ranks
//! are fractional in general.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),
}

/// One row of the input dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resort {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Resort")]
    pub resort: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Price")]
    pub price: u32,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Highest point")]
    pub highest_point: u32,
    #[serde(rename = "Lowest point")]
    pub lowest_point: u32,
    #[serde(rename = "Beginner slopes")]
    pub beginner_slopes: u32,
    #[serde(rename = "Intermediate slopes")]
    pub intermediate_slopes: u32,
    #[serde(rename = "Difficult slopes")]
    pub difficult_slopes: u32,
    #[serde(rename = "Total slopes")]
    pub total_slopes: u32,
    #[serde(rename = "Longest run")]
    pub longest_run: u32,
    #[serde(rename = "Snow cannons")]
    pub snow_cannons: u32,
    #[serde(rename = "Surface lifts")]
    pub surface_lifts: u32,
    #[serde(rename = "Chair lifts")]
    pub chair_lifts: u32,
    #[serde(rename = "Gondola lifts")]
    pub gondola_lifts: u32,
    #[serde(rename = "Total lifts")]
    pub total_lifts: u32,
    #[serde(rename = "Lift capacity")]
    pub lift_capacity: u32,
    #[serde(rename = "Child friendly", deserialize_with = "yes_no")]
    pub child_friendly: bool,
    #[serde(rename = "Snowparks", deserialize_with = "yes_no")]
    pub snowparks: bool,
    #[serde(rename = "Nightskiing", deserialize_with = "yes_no")]
    pub nightskiing: bool,
    #[serde(rename = "Summer skiing", deserialize_with = "yes_no")]
    pub summer_skiing: bool,
}

/// Deserialize the dataset's Yes/No flags into booleans
fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.eq_ignore_ascii_case("yes"))
}

/// Per-country rank columns for one resort (1 = largest in country)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryRanks {
    pub elevation: f64,
    pub price: f64,
    pub slope: f64,
    pub cannon: f64,
}

/// The read-only resort table with derived rank columns
///
/// Rows are immutable for the lifetime of the process; indices into
/// `resorts` and `ranks` are aligned.
#[derive(Debug, Clone)]
pub struct ResortTable {
    resorts: Vec<Resort>,
    ranks: Vec<CountryRanks>,
}

impl ResortTable {
    /// Load the table from a CSV file on disk
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_latin1_csv(&bytes)
    }

    /// Load the table from raw ISO-8859-1 CSV bytes
    pub fn from_latin1_csv(bytes: &[u8]) -> Result<Self, DatasetError> {
        // Latin-1 maps each byte to the identical code point.
        let text: String = bytes.iter().map(|&b| b as char).collect();

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let resorts = reader
            .deserialize()
            .collect::<Result<Vec<Resort>, _>>()?;

        let ranks = compute_ranks(&resorts);
        Ok(Self { resorts, ranks })
    }

    /// All rows, in file order
    pub fn resorts(&self) -> &[Resort] {
        &self.resorts
    }

    /// Rank columns for the row at `index`
    pub fn ranks(&self, index: usize) -> &CountryRanks {
        &self.ranks[index]
    }

    /// Find a resort by exact name, with its rank columns
    pub fn find(&self, name: &str) -> Option<(&Resort, &CountryRanks)> {
        self.resorts
            .iter()
            .position(|r| r.resort == name)
            .map(|i| (&self.resorts[i], &self.ranks[i]))
    }

    /// Distinct continents, in first-appearance order
    pub fn continents(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for r in &self.resorts {
            if seen.insert(r.continent.as_str()) {
                out.push(r.continent.clone());
            }
        }
        out
    }
}

/// Compute all four rank columns for the loaded rows
fn compute_ranks(resorts: &[Resort]) -> Vec<CountryRanks> {
    let elevation = rank_by(resorts, |r| r.highest_point as f64);
    let price = rank_by(resorts, |r| r.price as f64);
    let slope = rank_by(resorts, |r| r.total_slopes as f64);
    let cannon = rank_by(resorts, |r| r.snow_cannons as f64);

    (0..resorts.len())
        .map(|i| CountryRanks {
            elevation: elevation[i],
            price: price[i],
            slope: slope[i],
            cannon: cannon[i],
        })
        .collect()
}

/// Per-country descending average rank of `value` over all rows
///
/// Rows are grouped by country; within each group the largest value
/// gets rank 1. Rows with equal values all receive the mean of the
/// rank positions the run occupies.
fn rank_by(resorts: &[Resort], value: impl Fn(&Resort) -> f64) -> Vec<f64> {
    let mut ranks = vec![0.0; resorts.len()];

    let countries: BTreeSet<&str> = resorts.iter().map(|r| r.country.as_str()).collect();
    for country in countries {
        let mut group: Vec<(usize, f64)> = resorts
            .iter()
            .enumerate()
            .filter(|(_, r)| r.country == country)
            .map(|(i, r)| (i, value(r)))
            .collect();
        group.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut start = 0;
        while start < group.len() {
            let mut end = start;
            while end + 1 < group.len() && group[end + 1].1 == group[start].1 {
                end += 1;
            }
            // Positions start..=end share the average of their 1-based ranks.
            let avg = (start + end) as f64 / 2.0 + 1.0;
            for &(row, _) in &group[start..=end] {
                ranks[row] = avg;
            }
            start = end + 1;
        }
    }

    ranks
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = "\
ID,Resort,Latitude,Longitude,Country,Continent,Price,Season,Highest point,Lowest point,Beginner slopes,Intermediate slopes,Difficult slopes,Total slopes,Longest run,Snow cannons,Surface lifts,Chair lifts,Gondola lifts,Total lifts,Lift capacity,Child friendly,Snowparks,Nightskiing,Summer skiing
1,Hemsedal,60.86,8.55,Norway,Europe,46,November - May,1450,620,9,15,10,34,6,320,13,4,2,19,26000,Yes,Yes,Yes,No
2,Trysil,61.29,12.26,Norway,Europe,44,November - April,1100,350,22,32,13,67,4,520,22,6,3,31,50000,Yes,Yes,Yes,No
3,Geilo,60.53,8.20,Norway,Europe,44,November - April,1178,800,18,14,7,39,3,140,14,5,1,20,25000,Yes,Yes,Yes,No
4,Zermatt,46.02,7.74,Switzerland,Europe,79,November - April,3899,1620,74,220,66,360,25,900,18,10,24,52,106000,Yes,Yes,No,Yes
5,Verbier,46.09,7.22,Switzerland,Europe,72,November - April,3330,821,46,122,42,210,15,350,17,12,12,41,70000,Yes,Yes,No,No
6,Whistler,50.11,-122.95,Canada,North America,104,November - May,2284,675,38,110,52,200,11,270,4,17,4,25,65000,Yes,Yes,No,No
7,Banff,51.18,-115.57,Canada,North America,85,November - May,2730,1630,30,80,52,162,8,150,6,12,2,20,43000,Yes,Yes,No,No
";

    pub(crate) fn table() -> ResortTable {
        ResortTable::from_latin1_csv(FIXTURE.as_bytes()).unwrap()
    }

    #[test]
    fn loads_all_rows() {
        let table = table();
        assert_eq!(table.resorts().len(), 7);
        assert_eq!(table.resorts()[0].resort, "Hemsedal");
        assert_eq!(table.resorts()[0].price, 46);
        assert!(table.resorts()[0].nightskiing);
        assert!(!table.resorts()[0].summer_skiing);
    }

    #[test]
    fn latin1_bytes_decode() {
        // 0xE5 is "å" in ISO-8859-1; must survive the decode.
        let csv = FIXTURE.replace("Trysil", "Tr\u{e5}sil");
        let bytes: Vec<u8> = csv
            .chars()
            .map(|c| {
                let cp = c as u32;
                assert!(cp < 256);
                cp as u8
            })
            .collect();
        let table = ResortTable::from_latin1_csv(&bytes).unwrap();
        assert_eq!(table.resorts()[1].resort, "Tråsil");
    }

    #[test]
    fn malformed_row_fails_load() {
        let broken = FIXTURE.replace("46,November", "not-a-price,November");
        assert!(matches!(
            ResortTable::from_latin1_csv(broken.as_bytes()),
            Err(DatasetError::Malformed(_))
        ));
    }

    #[test]
    fn elevation_ranks_are_per_country() {
        let table = table();
        // Norway by highest point: Hemsedal 1450 > Geilo 1178 > Trysil 1100.
        let (_, hemsedal) = table.find("Hemsedal").unwrap();
        let (_, geilo) = table.find("Geilo").unwrap();
        let (_, trysil) = table.find("Trysil").unwrap();
        assert_eq!(hemsedal.elevation, 1.0);
        assert_eq!(geilo.elevation, 2.0);
        assert_eq!(trysil.elevation, 3.0);

        // Switzerland is ranked independently of Norway.
        let (_, zermatt) = table.find("Zermatt").unwrap();
        assert_eq!(zermatt.elevation, 1.0);
    }

    #[test]
    fn tied_values_share_the_average_rank() {
        let table = table();
        // Trysil and Geilo both cost 44; Hemsedal 46 is rank 1, the
        // tie spans ranks 2 and 3 so both get 2.5.
        let (_, hemsedal) = table.find("Hemsedal").unwrap();
        let (_, trysil) = table.find("Trysil").unwrap();
        let (_, geilo) = table.find("Geilo").unwrap();
        assert_eq!(hemsedal.price, 1.0);
        assert_eq!(trysil.price, 2.5);
        assert_eq!(geilo.price, 2.5);
    }

    #[test]
    fn rank_multiset_sums_to_triangular_number() {
        let table = table();
        let norway_sum: f64 = table
            .resorts()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.country == "Norway")
            .map(|(i, _)| table.ranks(i).price)
            .sum();
        // n = 3 resorts -> 1 + 2 + 3.
        assert_eq!(norway_sum, 6.0);
    }

    #[test]
    fn single_resort_country_ranks_first() {
        let mut csv = FIXTURE.to_string();
        csv.push_str("8,Niseko,42.80,140.68,Japan,Asia,62,December - April,1200,300,13,9,8,30,5,0,5,9,3,17,28000,Yes,Yes,Yes,No\n");
        let table = ResortTable::from_latin1_csv(csv.as_bytes()).unwrap();
        let (_, ranks) = table.find("Niseko").unwrap();
        assert_eq!(ranks.elevation, 1.0);
        assert_eq!(ranks.price, 1.0);
        assert_eq!(ranks.slope, 1.0);
        assert_eq!(ranks.cannon, 1.0);
    }

    #[test]
    fn continents_in_first_appearance_order() {
        let table = table();
        assert_eq!(table.continents(), vec!["Europe", "North America"]);
    }

    #[test]
    fn find_unknown_resort_is_none() {
        assert!(table().find("Atlantis").is_none());
    }
}
