//! Response models.

use serde::Serialize;

use crate::airtable::UpstreamRecord;

/// A place as exposed to the website.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceView {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "GoogleMapsLink")]
    pub google_maps_link: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "AddedBy")]
    pub added_by: String,
    #[serde(rename = "Photo")]
    pub photo: Option<String>,
}

impl From<UpstreamRecord> for PlaceView {
    fn from(record: UpstreamRecord) -> Self {
        let fields = record.fields;
        Self {
            id: record.id,
            name: fields.name,
            kind: clean_type_label(&fields.kind),
            city: fields.city,
            description: fields.description,
            google_maps_link: fields.google_maps_link,
            notes: fields.notes,
            added_by: fields.added_by,
            photo: fields.photo,
        }
    }
}

/// Successful response payload.
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub places: Vec<PlaceView>,
}

/// Error response payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

fn is_emoji(c: char) -> bool {
    matches!(c, '\u{1F300}'..='\u{1F9FF}' | '\u{2600}'..='\u{26FF}' | '\u{2700}'..='\u{27BF}')
}

/// Strip emoji from a single-select label, keeping only the text.
pub fn clean_type_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !is_emoji(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Keep approved records, in upstream order, as places.
pub fn approved_places(records: Vec<UpstreamRecord>) -> Vec<PlaceView> {
    records
        .into_iter()
        .filter(|record| record.fields.approved)
        .map(PlaceView::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<UpstreamRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_clean_type_label() {
        assert_eq!(clean_type_label("🍜 Restaurant"), "Restaurant");
        assert_eq!(clean_type_label("☕ Café ✨"), "Café");
        assert_eq!(clean_type_label("  Bar  "), "Bar");
        assert_eq!(clean_type_label(""), "");
    }

    #[test]
    fn test_clean_type_label_is_idempotent() {
        for label in ["🍜 Restaurant", "🏛️ Museum ", "☀ Beach", "Plain", " 🌳🌳 "] {
            let once = clean_type_label(label);
            assert_eq!(clean_type_label(&once), once);
        }
    }

    #[test]
    fn test_only_strictly_approved_records_survive() {
        let input = records(json!([
            {"id": "rec1", "fields": {"Name": "A", "Approved": true}},
            {"id": "rec2", "fields": {"Name": "B", "Approved": "true"}},
            {"id": "rec3", "fields": {"Name": "C", "Approved": 1}},
            {"id": "rec4", "fields": {"Name": "D"}},
            {"id": "rec5", "fields": {"Name": "E", "Approved": false}},
            {"id": "rec6", "fields": {"Name": "F", "Approved": true}}
        ]));

        let places = approved_places(input);
        let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["rec1", "rec6"]);
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let input = records(json!([{"id": "recEmpty", "fields": {"Approved": true}}]));
        let place = &approved_places(input)[0];

        assert_eq!(place.id, "recEmpty");
        assert_eq!(place.name, "");
        assert_eq!(place.kind, "");
        assert_eq!(place.city, "");
        assert_eq!(place.description, "");
        assert_eq!(place.google_maps_link, "");
        assert_eq!(place.notes, "");
        assert_eq!(place.added_by, "");
        assert_eq!(place.photo, None);
    }

    #[test]
    fn test_full_record_mapping() {
        let input = records(json!([{
            "id": "recFull",
            "fields": {
                "Name": "Noodle Bar",
                "Type": {"id": "sel1", "name": "🍜 Restaurant", "color": "blue"},
                "City": "Lisbon",
                "Description": "Hand-pulled noodles",
                "Google Maps Link": "https://maps.example/noodle",
                "Notes": "Cash only",
                "Added By": "Sam",
                "Approved": true,
                "Photo": [{"url": "https://x/y.png"}, {"url": "https://x/z.png"}]
            }
        }]));

        let place = approved_places(input).remove(0);
        assert_eq!(
            place,
            PlaceView {
                id: "recFull".to_string(),
                name: "Noodle Bar".to_string(),
                kind: "Restaurant".to_string(),
                city: "Lisbon".to_string(),
                description: "Hand-pulled noodles".to_string(),
                google_maps_link: "https://maps.example/noodle".to_string(),
                notes: "Cash only".to_string(),
                added_by: "Sam".to_string(),
                photo: Some("https://x/y.png".to_string()),
            }
        );
    }

    #[test]
    fn test_serialized_keys() {
        let input = records(json!([{"id": "rec1", "fields": {"Approved": true, "Name": "A"}}]));
        let value = serde_json::to_value(PlacesResponse {
            places: approved_places(input),
        })
        .unwrap();

        assert_eq!(
            value,
            json!({"places": [{
                "id": "rec1",
                "Name": "A",
                "Type": "",
                "City": "",
                "Description": "",
                "GoogleMapsLink": "",
                "Notes": "",
                "AddedBy": "",
                "Photo": null
            }]})
        );
    }
}
