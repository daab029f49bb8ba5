// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::{AirlineEntry, AirportEntry};

pub fn get_all_airports() -> Vec<AirportEntry> {
    serde_json::from_str(include_str!("airports.json")).expect("Failed to parse airports.json")
}

pub fn get_all_airlines() -> Vec<AirlineEntry> {
    serde_json::from_str(include_str!("airlines.json")).expect("Failed to parse airlines.json")
}
