//! # Product Types
//!
//! Priced products for ticket-booth. Movies are the only product sold and
//! are loaded from `config/movies.toml`.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Ticket currency (ISO 4217). Tickets are sold in Hong Kong dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    HKD,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::HKD => "hkd",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::HKD => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit (cents)
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }

    fn symbol(&self) -> &'static str {
        match self {
            Currency::HKD => "HK$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (cents for HKD)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// Create a Hong Kong dollar price from decimal amount
    pub fn hkd(amount: f64) -> Self {
        Self::new(amount, Currency::HKD)
    }

    /// Create a price from smallest unit (cents)
    pub fn from_cents(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.amount)
    }

    /// Multiply by a quantity, rejecting overflow
    pub fn times(&self, quantity: u32) -> PaymentResult<Price> {
        let amount = self
            .amount
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| PaymentError::InvalidPrice {
                message: format!("{} x {} overflows", self.display(), quantity),
            })?;
        Ok(Price::from_cents(amount, self.currency))
    }

    /// Reject negative amounts
    pub fn validate(&self) -> PaymentResult<()> {
        if self.amount < 0 {
            return Err(PaymentError::InvalidPrice {
                message: format!("negative amount {}", self.amount),
            });
        }
        Ok(())
    }

    /// Format for display (e.g., "HK$95.00")
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.as_decimal())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Anything that can be put in a ticket order
pub trait Product {
    /// Display name
    fn name(&self) -> &str;

    /// Unit price
    fn price(&self) -> &Price;
}

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique movie identifier (e.g., "spirited-away")
    pub id: String,

    /// Display title
    pub title: String,

    /// Short synopsis
    #[serde(default)]
    pub description: String,

    /// Running time
    #[serde(default)]
    pub duration_minutes: u32,

    /// Ticket price
    pub price: Price,

    /// Whether tickets are on sale
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Movie {
    /// Create a new movie on sale
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            duration_minutes: 0,
            price,
            active: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set running time
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Builder: take the movie off sale
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Product for Movie {
    fn name(&self) -> &str {
        &self.title
    }

    fn price(&self) -> &Price {
        &self.price
    }
}

// Movies are identified by id alone.
impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Validated title search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub const MAX_CHARS: usize = 12;

    /// Accepts 1 to 12 characters after trimming
    pub fn parse(text: &str) -> PaymentResult<Self> {
        let trimmed = text.trim();
        let chars = trimmed.chars().count();
        if chars == 0 || chars > Self::MAX_CHARS {
            return Err(PaymentError::InvalidSearch);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.0)
    }
}

/// Movie catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieCatalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Add a movie to the catalog
    pub fn add(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Builder: add a movie
    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.add(movie);
        self
    }

    /// Find a movie by ID
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Get all movies on sale
    pub fn active_movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter().filter(|m| m.active)
    }

    /// Movies on sale whose title contains the query (case-insensitive)
    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Movie> {
        self.active_movies().filter(move |m| query.matches(&m.title))
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> PaymentResult<Self> {
        let catalog: MovieCatalog = toml::from_str(toml_str)?;
        for movie in &catalog.movies {
            movie.price.validate()?;
        }
        Ok(catalog)
    }
}
