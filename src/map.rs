//! Marker data for the map views and the marker selection contract.
//!
//! The map widget itself lives in the web view. It gets a flat list of
//! markers and calls back with a record id when one is clicked.

use serde::Serialize;

use crate::models::{
    geo::RIYADH, Coordinates, Incident, IncidentType, Personnel, PersonnelStatus, Team, TeamType,
};
use crate::filter::{dashboard_view, Choice};
use crate::module_log;

const ENABLE_LOGS: bool = true;

/// Zoom used when a marker is focused.
pub const MARKER_ZOOM: u8 = 16;
/// Zoom of the city-wide team overview.
pub const OVERVIEW_ZOOM: u8 = 12;

/// Called with the record id when a marker is clicked.
pub type SelectionCallback = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker<T> {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub category: T,
    pub title: String,
}

impl<T> MapMarker<T> {
    pub fn position(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Anything that can be drawn as one marker.
pub trait Mappable {
    type Tag: Copy + Serialize;

    fn marker_id(&self) -> &str;
    fn position(&self) -> Option<Coordinates>;
    fn tag(&self) -> Self::Tag;
    fn title(&self) -> String;

    fn marker(&self) -> Option<MapMarker<Self::Tag>> {
        let position = self.position()?;
        Some(MapMarker {
            id: self.marker_id().to_string(),
            lat: position.lat,
            lng: position.lng,
            category: self.tag(),
            title: self.title(),
        })
    }
}

impl Mappable for Incident {
    type Tag = IncidentType;

    fn marker_id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn tag(&self) -> IncidentType {
        self.kind
    }

    fn title(&self) -> String {
        format!("{} ({})", self.report_number, self.personnel_name)
    }
}

// Personnel markers are coloured by status on the live dashboard.
impl Mappable for Personnel {
    type Tag = PersonnelStatus;

    fn marker_id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<Coordinates> {
        Some(self.location)
    }

    fn tag(&self) -> PersonnelStatus {
        self.status
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Mappable for Team {
    type Tag = TeamType;

    fn marker_id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<Coordinates> {
        Some(self.coordinates)
    }

    fn tag(&self) -> TeamType {
        self.kind
    }

    fn title(&self) -> String {
        format!("{} - {}", self.name, crate::filter::teams::team_badge(self))
    }
}

/// One marker per record that has a position, in input order.
pub fn markers<'a, M, I>(records: I) -> Vec<MapMarker<M::Tag>>
where
    M: Mappable + 'a,
    I: IntoIterator<Item = &'a M>,
{
    records.into_iter().filter_map(Mappable::marker).collect()
}

/// Live dashboard markers: the personnel the status filter admits, in the
/// same danger-first order as the side list.
pub fn personnel_markers(
    personnel: &[Personnel],
    filter: Choice<PersonnelStatus>,
) -> Vec<MapMarker<PersonnelStatus>> {
    markers(dashboard_view(personnel, filter))
}

/// Where the map should move after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapFocus {
    pub center: Coordinates,
    pub zoom: u8,
}

impl MapFocus {
    pub fn overview() -> Self {
        Self {
            center: RIYADH,
            zoom: OVERVIEW_ZOOM,
        }
    }
}

/// A set of markers plus the selection callback the rest of the UI listens on.
pub struct MarkerLayer<T> {
    markers: Vec<MapMarker<T>>,
    on_select: Option<SelectionCallback>,
    selected: Option<String>,
}

impl<T> MarkerLayer<T> {
    pub fn new(markers: Vec<MapMarker<T>>) -> Self {
        Self {
            markers,
            on_select: None,
            selected: None,
        }
    }

    pub fn on_select(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn markers(&self) -> &[MapMarker<T>] {
        &self.markers
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Marker interaction. Unknown ids change nothing and do not reach the
    /// callback.
    pub fn click(&mut self, id: &str) -> Option<MapFocus> {
        let Some(marker) = self.markers.iter().find(|marker| marker.id == id) else {
            module_log!(warn, "click on unknown marker {id}");
            return None;
        };

        let focus = MapFocus {
            center: marker.position(),
            zoom: MARKER_ZOOM,
        };
        self.selected = Some(id.to_string());
        if let Some(callback) = &self.on_select {
            callback(id);
        }
        Some(focus)
    }
}

/// Focus for a record id without a live layer, as the desktop shell needs.
pub fn focus_on<'a, M, I>(records: I, id: &str) -> Option<MapFocus>
where
    M: Mappable + 'a,
    I: IntoIterator<Item = &'a M>,
{
    records
        .into_iter()
        .find(|record| record.marker_id() == id)
        .and_then(Mappable::position)
        .map(|center| MapFocus {
            center,
            zoom: MARKER_ZOOM,
        })
}
