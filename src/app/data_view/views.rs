//! Eingebaute Ansichten: Haltestellen und Fahrten.

use super::view_config::{Column, FilterOption, ViewConfig};
use crate::app::search::SearchContext;
use crate::core::{StopPlace, TransportMode, Trip, TripStatus};

/// Haltestellen-Tabelle, filterbar nach Verkehrsmittel.
pub fn stop_places_view() -> ViewConfig<StopPlace> {
    ViewConfig {
        id: "stop-places",
        title: "Haltestellen",
        search_context: SearchContext::Data,
        columns: vec![
            Column {
                key: "name",
                label: "Name",
                sortable: true,
            },
            Column {
                key: "id",
                label: "ID",
                sortable: true,
            },
            Column {
                key: "transportMode",
                label: "Verkehrsmittel",
                sortable: true,
            },
        ],
        filter_options: TransportMode::ALL
            .iter()
            .map(|mode| FilterOption {
                key: mode.as_key(),
                label: mode.label(),
            })
            .collect(),
        default_order_by: "name",
        get_id: |s| s.id.clone(),
        get_name: |s| s.name.clone(),
        get_filter_key: |s| s.transport_mode.as_key().to_string(),
        get_sort_value: |s, key| match key {
            "id" => s.id.clone(),
            "transportMode" => s.transport_mode.label().to_string(),
            _ => s.name.clone(),
        },
        get_coordinates: |s| s.location,
    }
}

/// Fahrten-Tabelle, filterbar nach Status.
pub fn trips_view() -> ViewConfig<Trip> {
    ViewConfig {
        id: "trips",
        title: "Fahrten",
        search_context: SearchContext::Data,
        columns: vec![
            Column {
                key: "name",
                label: "Fahrt",
                sortable: true,
            },
            Column {
                key: "departureTime",
                label: "Abfahrt",
                sortable: true,
            },
            Column {
                key: "seats",
                label: "Plätze",
                sortable: true,
            },
            Column {
                key: "status",
                label: "Status",
                sortable: false,
            },
        ],
        filter_options: TripStatus::ALL
            .iter()
            .map(|status| FilterOption {
                key: status.as_key(),
                label: status.label(),
            })
            .collect(),
        default_order_by: "departureTime",
        get_id: |t| t.id.clone(),
        get_name: |t| t.name.clone(),
        get_filter_key: |t| t.status.as_key().to_string(),
        get_sort_value: |t, key| match key {
            "name" => t.name.clone(),
            // Nullen vorne, damit die String-Sortierung numerisch bleibt
            "seats" => format!("{:05}", t.seats),
            "status" => t.status.as_key().to_string(),
            _ => t.departure_time.clone(),
        },
        get_coordinates: |t| {
            t.stops
                .departure_stop
                .as_ref()
                .and_then(|f| f.polygon_bounds())
                .map(|b| b.center())
        },
    }
}
