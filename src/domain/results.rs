// src/domain/results.rs

use crate::domain::listing::Listing;
use crate::scraper::ScraperError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Columns of the results table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Price,
    #[serde(rename = "type")]
    Type,
    Address,
    Url,
    AgentUrl,
    FloorplanUrl,
    Postcode,
    FullPostcode,
    NumberBedrooms,
    SearchDate,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Price,
        Column::Type,
        Column::Address,
        Column::Url,
        Column::AgentUrl,
        Column::FloorplanUrl,
        Column::Postcode,
        Column::FullPostcode,
        Column::NumberBedrooms,
        Column::SearchDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Price => "price",
            Column::Type => "type",
            Column::Address => "address",
            Column::Url => "url",
            Column::AgentUrl => "agent_url",
            Column::FloorplanUrl => "floorplan_url",
            Column::Postcode => "postcode",
            Column::FullPostcode => "full_postcode",
            Column::NumberBedrooms => "number_bedrooms",
            Column::SearchDate => "search_date",
        }
    }

    /// The cell of `listing` in this column, as a grouping key.
    pub fn key_of(self, listing: &Listing) -> Option<GroupKey> {
        let text = |v: &Option<String>| v.clone().map(GroupKey::Text);
        match self {
            Column::Price => listing.price.map(|p| GroupKey::Text(p.to_string())),
            Column::Type => text(&listing.type_label),
            Column::Address => Some(GroupKey::Text(listing.address.clone())),
            Column::Url => text(&listing.url),
            Column::AgentUrl => text(&listing.agent_url),
            Column::FloorplanUrl => text(&listing.floorplan_url),
            Column::Postcode => text(&listing.postcode),
            Column::FullPostcode => text(&listing.full_postcode),
            Column::NumberBedrooms => listing.number_bedrooms.map(GroupKey::Int),
            Column::SearchDate => Some(GroupKey::Text(listing.search_date.to_string())),
        }
    }
}

impl FromStr for Column {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ScraperError::Schema(s.to_string()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Int(n) => write!(f, "{n}"),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub group_key: GroupKey,
    pub count: usize,
    pub price_mean: f64,
}

/// Count and mean price per value of `column`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub column: Column,
    pub rows: Vec<SummaryRow>,
}

/// All listings of one search, in page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    listings: Vec<Listing>,
}

impl ResultSet {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Sum of known prices over the number of rows, priced or not.
    /// An empty table averages to 0.0.
    pub fn average_price(&self) -> f64 {
        if self.listings.is_empty() {
            return 0.0;
        }
        let total: f64 = self.listings.iter().filter_map(|l| l.price).sum();
        total / self.listings.len() as f64
    }

    /// Groups priced listings by `by`.
    ///
    /// Bedroom groups come back in ascending bedroom order; every other
    /// column is ordered by descending group size.
    pub fn summary(&self, by: &str) -> Result<Summary, ScraperError> {
        let column: Column = by.parse()?;

        let mut groups: BTreeMap<GroupKey, (usize, f64)> = BTreeMap::new();
        for listing in &self.listings {
            let Some(price) = listing.price else {
                continue;
            };
            let Some(key) = column.key_of(listing) else {
                continue;
            };
            let entry = groups.entry(key).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += price;
        }

        let mut rows: Vec<SummaryRow> = groups
            .into_iter()
            .map(|(group_key, (count, total))| SummaryRow {
                group_key,
                count,
                price_mean: total / count as f64,
            })
            .collect();

        if column != Column::NumberBedrooms {
            rows.sort_by(|a, b| b.count.cmp(&a.count));
        }

        Ok(Summary { column, rows })
    }
}
