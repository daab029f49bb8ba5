// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::slug::{EntityType, Namespace, RouteDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content shape and presentation template for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Flight,
    Airport,
    Hotel,
    Airline,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Flight,
        TemplateKind::Airport,
        TemplateKind::Hotel,
        TemplateKind::Airline,
    ];

    /// Classifies a route. `None` means the page renders nothing.
    ///
    /// Depends only on the namespace, the entity tag and which codes or slugs
    /// are present; no state is carried between calls.
    pub fn select(route: &RouteDescriptor) -> Option<TemplateKind> {
        let has_slug = route
            .entity_slug
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        let has_departure = route
            .departure_code
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());
        let has_arrival = route
            .arrival_code
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());

        match (route.namespace, route.entity_type) {
            (Namespace::Hotels, EntityType::Hotel) if has_slug => Some(TemplateKind::Hotel),
            // An airline route needs both ends or neither.
            (Namespace::Airlines, EntityType::Airline) if has_slug && has_departure == has_arrival => {
                Some(TemplateKind::Airline)
            }
            (Namespace::Flights | Namespace::Airports, EntityType::Flight)
                if has_departure && has_arrival =>
            {
                Some(TemplateKind::Flight)
            }
            (Namespace::Flights | Namespace::Airports, EntityType::Airport)
                if has_departure && !has_arrival =>
            {
                Some(TemplateKind::Airport)
            }
            _ => None,
        }
    }

    /// Presentation template id.
    pub fn template_name(self) -> &'static str {
        match self {
            TemplateKind::Flight => "flight-route",
            TemplateKind::Airport => "airport",
            TemplateKind::Hotel => "hotel",
            TemplateKind::Airline => "airline",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}
