// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Raw upstream flight records and their in-process normalization.

use crate::EngineError;
use chrono::{DateTime, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

/// A price as it arrives on the wire: a number, a formatted string such as
/// `"$1,234.50"`, or nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl PriceValue {
    /// Numeric value if one can be read. Sign and magnitude are not checked.
    pub fn amount(&self) -> Option<f64> {
        match self {
            PriceValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            PriceValue::Text(s) => parse_price_text(s),
            PriceValue::Missing => None,
        }
    }

    /// Positive, finite amount; anything else is treated as "no price".
    pub fn valid_amount(&self) -> Option<f64> {
        self.amount().filter(|n| *n > 0.0)
    }
}

impl From<f64> for PriceValue {
    fn from(n: f64) -> Self {
        PriceValue::Number(n)
    }
}

impl From<&str> for PriceValue {
    fn from(s: &str) -> Self {
        PriceValue::Text(s.to_string())
    }
}

/// Strips currency symbols and thousands separators: `"$1,234.50"` → 1234.5.
///
/// Either `.` or `,` may be the decimal mark. When both appear the later one
/// is, so `"1.234,50 €"` → 1234.5. A lone comma followed by one or two
/// trailing digits is decimal (`"89,99"`); other commas group thousands.
fn parse_price_text(text: &str) -> Option<f64> {
    let kept: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if kept.is_empty() {
        return None;
    }

    let cleaned = match (kept.rfind('.'), kept.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => kept.replace('.', "").replace(',', "."),
        (_, Some(_)) if kept.contains('.') => kept.replace(',', ""),
        (None, Some(comma)) => {
            let decimals = kept.len() - comma - 1;
            if kept.matches(',').count() == 1 && (1..=2).contains(&decimals) {
                kept.replace(',', ".")
            } else {
                kept.replace(',', "")
            }
        }
        // "1.234.567": repeated dots can only group thousands.
        (Some(_), None) if kept.matches('.').count() > 1 => kept.replace('.', ""),
        _ => kept,
    };
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Flight duration: minutes as a number, or `"2h 35m"`, `"PT2H35M"`, `"02:35"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Minutes(f64),
    Text(String),
}

impl DurationValue {
    pub fn minutes(&self) -> Option<u32> {
        match self {
            DurationValue::Minutes(m) if m.is_finite() && *m >= 0.0 && *m <= u32::MAX as f64 => {
                Some(m.round() as u32)
            }
            DurationValue::Minutes(_) => None,
            DurationValue::Text(s) => parse_duration_text(s),
        }
    }
}

fn duration_regexes() -> &'static [Regex; 3] {
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            // ISO 8601: PT2H35M, PT45M, P0DT2H
            Regex::new(r"(?i)^P(?:\d+D)?T?(?:(\d+)H)?(?:(\d+)M)?$").expect("valid regex"),
            // Human: 2h 35m, 2 h, 35 min
            Regex::new(r"(?i)^(?:(\d+)\s*h(?:ours?|rs?)?)?\s*(?:(\d+)\s*m(?:in(?:utes?)?)?)?$")
                .expect("valid regex"),
            // Clock: 02:35
            Regex::new(r"^(\d+):(\d{2})$").expect("valid regex"),
        ]
    })
}

fn parse_duration_text(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(minutes) = text.parse::<u32>() {
        return Some(minutes);
    }
    for re in duration_regexes() {
        if let Some(caps) = re.captures(text) {
            let hours = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let minutes = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
            if hours.is_none() && minutes.is_none() {
                continue;
            }
            // Out-of-range durations are treated as unparseable.
            return hours
                .unwrap_or(0)
                .checked_mul(60)
                .and_then(|m| m.checked_add(minutes.unwrap_or(0)));
        }
    }
    None
}

/// Parses `"14:05"`, `"14:05:00"`, RFC 3339 or `"2026-03-01T14:05"` into a
/// time of day.
pub fn parse_departure_clock(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in ["%H:%M", "%H:%M:%S"] {
        if let Ok(t) = NaiveTime::parse_from_str(text, fmt) {
            return Some(t);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.time());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.time());
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub price: PriceValue,
    #[serde(default)]
    pub duration: Option<DurationValue>,
    #[serde(default)]
    pub airline: String,
    #[serde(default)]
    pub stops: u32,
    #[serde(default, alias = "departure_time")]
    pub departure_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFlight {
    pub from: String,
    pub to: String,
    pub airline: String,
    pub stops: u32,
    pub is_direct: bool,
    /// Positive price, `None` when the record had no usable price.
    pub amount: Option<f64>,
    /// Rounded integer price, `""` when `amount` is `None`.
    pub price: String,
    pub duration_minutes: Option<u32>,
    pub departure_clock: Option<NaiveTime>,
    pub weekly_frequency: u32,
}

/// Normalizes a batch. Weekly frequency assumes a daily schedule: each
/// distinct departure time seen for the same `(from, to, airline)` counts
/// as seven flights a week.
pub fn normalize_batch(records: &[FlightRecord]) -> Vec<NormalizedFlight> {
    let mut flights: Vec<NormalizedFlight> = records.iter().map(normalize_record).collect();

    let mut clocks: HashMap<(String, String, String), BTreeSet<NaiveTime>> = HashMap::new();
    for f in &flights {
        let entry = clocks
            .entry((f.from.clone(), f.to.clone(), f.airline.clone()))
            .or_default();
        if let Some(clock) = f.departure_clock {
            entry.insert(clock);
        }
    }

    for f in &mut flights {
        let distinct = clocks
            .get(&(f.from.clone(), f.to.clone(), f.airline.clone()))
            .map(|set| set.len() as u32)
            .unwrap_or(0);
        f.weekly_frequency = distinct * 7;
    }

    flights
}

fn normalize_record(record: &FlightRecord) -> NormalizedFlight {
    let amount = record.price.valid_amount();
    NormalizedFlight {
        from: record.from.trim().to_uppercase(),
        to: record.to.trim().to_uppercase(),
        airline: record.airline.trim().to_string(),
        stops: record.stops,
        is_direct: record.stops == 0,
        amount,
        price: amount
            .map(|a| format!("{:.0}", a.round()))
            .unwrap_or_default(),
        duration_minutes: record.duration.as_ref().and_then(DurationValue::minutes),
        departure_clock: record
            .departure_time
            .as_deref()
            .and_then(parse_departure_clock),
        weekly_frequency: 0,
    }
}

/// One named point of an upstream price curve (a weekday or a month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub name: String,
    #[serde(default)]
    pub price: PriceValue,
}

/// Day/month price curves supplied by upstream alongside the flights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceAggregates {
    #[serde(default)]
    pub weekdays: Vec<PricePoint>,
    #[serde(default)]
    pub months: Vec<PricePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightBatch {
    #[serde(default)]
    pub flights: Vec<FlightRecord>,
    #[serde(default)]
    pub aggregates: Option<PriceAggregates>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BatchWire {
    Full(FlightBatch),
    Bare(Vec<FlightRecord>),
}

/// Flat CSV row; `price` and `duration` are parsed like their JSON forms.
#[derive(Debug, Deserialize)]
struct CsvRow {
    from: String,
    to: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    airline: String,
    #[serde(default)]
    stops: Option<u32>,
    #[serde(default, alias = "departureTime")]
    departure_time: String,
}

impl From<CsvRow> for FlightRecord {
    fn from(row: CsvRow) -> Self {
        let price = if row.price.trim().is_empty() {
            PriceValue::Missing
        } else {
            PriceValue::Text(row.price)
        };
        let duration = (!row.duration.trim().is_empty()).then(|| DurationValue::Text(row.duration));
        let departure_time =
            (!row.departure_time.trim().is_empty()).then_some(row.departure_time);
        FlightRecord {
            from: row.from,
            to: row.to,
            price,
            duration,
            airline: row.airline,
            stops: row.stops.unwrap_or(0),
            departure_time,
        }
    }
}

impl FlightBatch {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self {
            flights,
            aggregates: None,
        }
    }

    pub fn with_aggregates(mut self, aggregates: PriceAggregates) -> Self {
        self.aggregates = Some(aggregates);
        self
    }

    /// Accepts either `{"flights": [...], "aggregates": {...}}` or a bare
    /// array of records.
    pub fn from_json(content: &str) -> Result<Self, EngineError> {
        let wire: BatchWire = serde_json::from_str(content)?;
        Ok(match wire {
            BatchWire::Full(batch) => batch,
            BatchWire::Bare(flights) => FlightBatch::new(flights),
        })
    }

    /// Reads a headed CSV with columns `from,to,price,duration,airline,stops,departure_time`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, EngineError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut flights = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            flights.push(row?.into());
        }
        Ok(FlightBatch::new(flights))
    }

    /// Loads a `.json` or `.csv` file by extension.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv {
            let file = std::fs::File::open(path)?;
            Self::from_csv_reader(file)
        } else {
            let content = std::fs::read_to_string(path)?;
            Self::from_json(&content)
        }
    }

    pub fn normalized(&self) -> Vec<NormalizedFlight> {
        normalize_batch(&self.flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, price: PriceValue, airline: &str, time: Option<&str>) -> FlightRecord {
        FlightRecord {
            from: from.to_string(),
            to: to.to_string(),
            price,
            duration: None,
            airline: airline.to_string(),
            stops: 0,
            departure_time: time.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_price_text_parsing() {
        assert_eq!(PriceValue::from("$1,234.50").amount(), Some(1234.5));
        assert_eq!(PriceValue::from(" 89 EUR ").amount(), Some(89.0));
        assert_eq!(PriceValue::from("free").amount(), None);
        assert_eq!(PriceValue::from("-10").valid_amount(), None);
        assert_eq!(PriceValue::Number(f64::NAN).amount(), None);
        assert_eq!(PriceValue::Missing.amount(), None);
    }

    #[test]
    fn test_price_decimal_comma() {
        let cases = [
            ("89,99 €", Some(89.99)),
            ("89,9", Some(89.9)),
            ("1.234,50 €", Some(1234.5)),
            ("1 234,50 ₽", Some(1234.5)),
            ("1,234", Some(1234.0)),
            ("1,234,567", Some(1234567.0)),
            ("1.234.567", Some(1234567.0)),
            ("€ 1,234.50", Some(1234.5)),
            ("89.99", Some(89.99)),
        ];
        for (text, expected) in cases {
            assert_eq!(PriceValue::from(text).amount(), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_duration_parsing() {
        let cases = [
            ("2h 35m", Some(155)),
            ("PT2H35M", Some(155)),
            ("PT45M", Some(45)),
            ("3 hours", Some(180)),
            ("50 min", Some(50)),
            ("02:35", Some(155)),
            ("155", Some(155)),
            ("", None),
            ("soon", None),
        ];
        for (text, expected) in cases {
            assert_eq!(
                DurationValue::Text(text.to_string()).minutes(),
                expected,
                "{:?}",
                text
            );
        }
        assert_eq!(DurationValue::Minutes(154.6).minutes(), Some(155));
        assert_eq!(DurationValue::Minutes(-1.0).minutes(), None);
    }

    #[test]
    fn test_oversized_duration_is_unparseable() {
        assert_eq!(DurationValue::Text("99999999h".to_string()).minutes(), None);
        assert_eq!(DurationValue::Text("PT99999999H30M".to_string()).minutes(), None);
        assert_eq!(DurationValue::Text("71582789:00".to_string()).minutes(), None);
        assert_eq!(DurationValue::Text("99999999999".to_string()).minutes(), None);
        assert_eq!(DurationValue::Minutes(1e12).minutes(), None);
        assert_eq!(DurationValue::Text("1000h".to_string()).minutes(), Some(60_000));
    }

    #[test]
    fn test_departure_clock_formats() {
        let expected = NaiveTime::from_hms_opt(14, 5, 0);
        assert_eq!(parse_departure_clock("14:05"), expected);
        assert_eq!(parse_departure_clock("14:05:00"), expected);
        assert_eq!(parse_departure_clock("2026-03-01T14:05:00+01:00"), expected);
        assert_eq!(parse_departure_clock("2026-03-01T14:05"), expected);
        assert_eq!(parse_departure_clock("2026-03-01 14:05"), expected);
        assert_eq!(parse_departure_clock("afternoon"), None);
    }

    #[test]
    fn test_normalize_direct_and_price() {
        let mut r = record("jfk", "agp", PriceValue::from("$412.60"), "Iberia", None);
        r.stops = 1;
        let flights = normalize_batch(&[r, record("JFK", "AGP", PriceValue::Missing, "Delta", None)]);

        assert_eq!(flights[0].from, "JFK");
        assert!(!flights[0].is_direct);
        assert_eq!(flights[0].price, "413");
        assert!(flights[1].is_direct);
        assert_eq!(flights[1].amount, None);
        assert_eq!(flights[1].price, "");
    }

    #[test]
    fn test_weekly_frequency_counts_distinct_times() {
        let records = vec![
            record("JFK", "AGP", 300.0.into(), "Iberia", Some("08:00")),
            record("JFK", "AGP", 310.0.into(), "Iberia", Some("08:00")),
            record("JFK", "AGP", 320.0.into(), "Iberia", Some("19:30")),
            record("JFK", "AGP", 330.0.into(), "Delta", Some("10:15")),
            record("JFK", "AGP", 340.0.into(), "TAP", None),
        ];
        let flights = normalize_batch(&records);
        assert_eq!(flights[0].weekly_frequency, 14);
        assert_eq!(flights[2].weekly_frequency, 14);
        assert_eq!(flights[3].weekly_frequency, 7);
        assert_eq!(flights[4].weekly_frequency, 0);
    }

    #[test]
    fn test_batch_from_json_shapes() {
        let bare = r#"[{"from":"JFK","to":"AGP","price":"$250","airline":"Iberia"}]"#;
        let batch = FlightBatch::from_json(bare).unwrap();
        assert_eq!(batch.flights.len(), 1);
        assert!(batch.aggregates.is_none());

        let full = r#"{
            "flights": [{"from":"JFK","to":"AGP","price":250,"duration":"PT8H","stops":0,"departureTime":"21:40"}],
            "aggregates": {"weekdays": [{"name":"Tuesday","price":199}], "months": []}
        }"#;
        let batch = FlightBatch::from_json(full).unwrap();
        assert_eq!(batch.flights[0].departure_time.as_deref(), Some("21:40"));
        assert_eq!(batch.aggregates.unwrap().weekdays[0].name, "Tuesday");
    }

    #[test]
    fn test_batch_from_json_rejects_garbage() {
        assert!(matches!(
            FlightBatch::from_json("{not json"),
            Err(EngineError::Json(_))
        ));
    }

    #[test]
    fn test_batch_from_csv() {
        let data = "from,to,price,duration,airline,stops,departure_time\n\
                    JFK,AGP,\"$1,020\",8h 10m,Iberia,0,08:00\n\
                    JFK,AGP,,PT9H,Delta,,\n";
        let batch = FlightBatch::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(batch.flights.len(), 2);
        assert_eq!(batch.flights[0].price.amount(), Some(1020.0));
        assert_eq!(batch.flights[1].price, PriceValue::Missing);
        assert_eq!(batch.flights[1].stops, 0);

        let flights = batch.normalized();
        assert_eq!(flights[0].duration_minutes, Some(490));
        assert_eq!(flights[1].duration_minutes, Some(540));
        assert_eq!(flights[1].departure_clock, None);
    }
}
