use std::fmt;

use config::{Config, Environment, File, FileFormat};
use serde::{
    de::{self, SeqAccess, Unexpected, Visitor},
    Deserialize, Deserializer,
};
use stock::Channel;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "STOCK";
const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub channels: Vec<Channel>,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "deserialize_prices")]
    pub prices: Vec<f64>,
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a price")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

struct Price(f64);

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor).map(Price)
    }
}

/// Environment overrides holding a single price arrive as a scalar rather
/// than a one-element list.
struct PricesVisitor;

impl<'de> Visitor<'de> for PricesVisitor {
    type Value = Vec<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a price or a list of prices")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Vec<f64>, E> {
        PriceVisitor.visit_f64(value).map(|price| vec![price])
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Vec<f64>, E> {
        PriceVisitor.visit_i64(value).map(|price| vec![price])
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Vec<f64>, E> {
        PriceVisitor.visit_u64(value).map(|price| vec![price])
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Vec<f64>, E> {
        PriceVisitor.visit_str(value).map(|price| vec![price])
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Vec<f64>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut prices = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Price(price)) = seq.next_element()? {
            prices.push(price);
        }
        Ok(prices)
    }
}

fn deserialize_prices<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PricesVisitor)
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                    .try_parsing(true)
                    .list_separator(LIST_SEPARATOR)
                    .with_list_parse_key("channels")
                    .with_list_parse_key("prices"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
