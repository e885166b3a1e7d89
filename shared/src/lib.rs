use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Discriminator value that marks a shelter application on the wire
pub const SHELTER_APPLICATION_TYPE: &str = "Animal Shelter";

/// Label shown when a single document slot is empty
pub const NO_FILE_CHOSEN: &str = "No file chosen";

/// Label shown when a multi-file slot is empty
pub const NO_FILES_CHOSEN: &str = "No files chosen";

/// Reference to an uploaded file: either a server-side path or a full URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name after the last `/` or `\` separator
    pub fn label(&self) -> &str {
        self.0
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(&self.0)
    }

    /// True when the reference is already an absolute http(s) URL
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// True when there is no file name to show, e.g. `""` or `"C:\\uploads\\"`
    pub fn is_empty(&self) -> bool {
        self.label().trim().is_empty()
    }
}

impl From<&str> for DocumentRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display label for an optional document slot
pub fn document_label(document: Option<&DocumentRef>) -> &str {
    match document {
        Some(doc) if !doc.is_empty() => doc.label(),
        _ => NO_FILE_CHOSEN,
    }
}

/// Summary text for the facility photo slot of a shelter application
pub fn facility_photo_summary(photos: &[DocumentRef]) -> String {
    match photos.len() {
        0 => NO_FILES_CHOSEN.to_string(),
        1 => "1 file selected".to_string(),
        n => format!("{} files selected", n),
    }
}

/// Builds retrieval URLs for uploaded documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadUrlBuilder {
    base_url: String,
}

impl UploadUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/uploads/<label>`; remote references are returned untouched
    pub fn document_url(&self, document: &DocumentRef) -> String {
        if document.is_remote() {
            return document.as_str().to_string();
        }
        format!("{}/uploads/{}", self.base_url, document.label())
    }
}

/// Pet owner verification request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerApplication {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub government_id: Option<DocumentRef>,
    pub proof_of_residence: Option<DocumentRef>,
    pub pet_experience: Option<String>,
    /// Submission time as sent by the API (RFC 3339 or plain date)
    pub created_at: Option<String>,
}

/// Animal shelter verification request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShelterApplication {
    pub id: Option<String>,
    pub organization_name: Option<String>,
    pub registration_number: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub registration_document: Option<DocumentRef>,
    pub tax_document: Option<DocumentRef>,
    pub facility_photos: Vec<DocumentRef>,
    pub background: Option<String>,
    pub created_at: Option<String>,
}

/// A submitted verification request awaiting a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ApplicationRecord", into = "ApplicationRecord")]
pub enum Application {
    Owner(OwnerApplication),
    Shelter(ShelterApplication),
}

impl Application {
    pub fn id(&self) -> Option<&str> {
        match self {
            Application::Owner(owner) => owner.id.as_deref(),
            Application::Shelter(shelter) => shelter.id.as_deref(),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Application::Owner(_) => "Pet Owner",
            Application::Shelter(_) => SHELTER_APPLICATION_TYPE,
        }
    }

    /// Name of the applicant or organization, for list rows and titles
    pub fn display_name(&self) -> &str {
        let name = match self {
            Application::Owner(owner) => owner.full_name.as_deref(),
            Application::Shelter(shelter) => shelter.organization_name.as_deref(),
        };
        name.filter(|n| !n.trim().is_empty()).unwrap_or("Unnamed applicant")
    }

    pub fn created_at(&self) -> Option<&str> {
        match self {
            Application::Owner(owner) => owner.created_at.as_deref(),
            Application::Shelter(shelter) => shelter.created_at.as_deref(),
        }
    }
}

/// Flat wire shape of an application as the API returns it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    registration_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    emergency_contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    emergency_contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    emergency_contact_relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    government_id: Option<DocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proof_of_residence: Option<DocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    registration_document: Option<DocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tax_document: Option<DocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    facility_photos: Option<Vec<DocumentRef>>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pet_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

/// Reads a scalar field as text: numbers and booleans are stringified,
/// anything else (null, arrays, objects) counts as missing.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// Parse a JSON array of application records one record at a time.
///
/// Records that still fail to convert are skipped and reported with their index;
/// only a document that is not an array at all is an error.
pub fn parse_application_list(
    raw: &str,
) -> Result<(Vec<Application>, Vec<(usize, serde_json::Error)>), serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let mut applications = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Application>(record) {
            Ok(application) => applications.push(application),
            Err(e) => skipped.push((index, e)),
        }
    }
    Ok((applications, skipped))
}

impl From<ApplicationRecord> for Application {
    fn from(record: ApplicationRecord) -> Self {
        if record.kind.as_deref() == Some(SHELTER_APPLICATION_TYPE) {
            Application::Shelter(ShelterApplication {
                id: record.id,
                organization_name: record.organization_name,
                registration_number: record.registration_number,
                contact_person: record.contact_person,
                email: record.email,
                phone: record.phone,
                address: record.address,
                website: record.website,
                registration_document: record.registration_document,
                tax_document: record.tax_document,
                facility_photos: record.facility_photos.unwrap_or_default(),
                background: record.background,
                created_at: record.created_at,
            })
        } else {
            Application::Owner(OwnerApplication {
                id: record.id,
                full_name: record.full_name,
                email: record.email,
                phone: record.phone,
                address: record.address,
                city: record.city,
                state: record.state,
                zip_code: record.zip_code,
                emergency_contact_name: record.emergency_contact_name,
                emergency_contact_phone: record.emergency_contact_phone,
                emergency_contact_relationship: record.emergency_contact_relationship,
                government_id: record.government_id,
                proof_of_residence: record.proof_of_residence,
                pet_experience: record.pet_experience,
                created_at: record.created_at,
            })
        }
    }
}

impl From<Application> for ApplicationRecord {
    fn from(application: Application) -> Self {
        match application {
            Application::Owner(owner) => ApplicationRecord {
                id: owner.id,
                kind: Some("Pet Owner".to_string()),
                full_name: owner.full_name,
                email: owner.email,
                phone: owner.phone,
                address: owner.address,
                city: owner.city,
                state: owner.state,
                zip_code: owner.zip_code,
                emergency_contact_name: owner.emergency_contact_name,
                emergency_contact_phone: owner.emergency_contact_phone,
                emergency_contact_relationship: owner.emergency_contact_relationship,
                government_id: owner.government_id,
                proof_of_residence: owner.proof_of_residence,
                pet_experience: owner.pet_experience,
                created_at: owner.created_at,
                ..ApplicationRecord::default()
            },
            Application::Shelter(shelter) => ApplicationRecord {
                id: shelter.id,
                kind: Some(SHELTER_APPLICATION_TYPE.to_string()),
                organization_name: shelter.organization_name,
                registration_number: shelter.registration_number,
                contact_person: shelter.contact_person,
                email: shelter.email,
                phone: shelter.phone,
                address: shelter.address,
                website: shelter.website,
                registration_document: shelter.registration_document,
                tax_document: shelter.tax_document,
                facility_photos: Some(shelter.facility_photos),
                background: shelter.background,
                created_at: shelter.created_at,
                ..ApplicationRecord::default()
            },
        }
    }
}

/// Submission time of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAt(DateTime<Utc>);

impl SubmittedAt {
    /// Accepts RFC 3339, a naive ISO date-time (taken as UTC) or a plain date
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TimestampError::Empty);
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(naive.and_utc()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(midnight.and_utc()));
            }
        }
        Err(TimestampError::Unrecognized(raw.to_string()))
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,
    #[error("unrecognized timestamp: {0}")]
    Unrecognized(String),
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast success",
            Severity::Error => "toast error",
            Severity::Info => "toast info",
        }
    }
}

/// Outcome chosen by a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Approvals are reported as success, rejections as error
    pub fn severity(&self) -> Severity {
        match self {
            ReviewDecision::Approve => Severity::Success,
            ReviewDecision::Reject => Severity::Error,
        }
    }

    pub fn notification_message(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Application approved successfully!",
            ReviewDecision::Reject => "Application rejected.",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        }
    }
}

/// Body sent to the review endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
}

/// Response from the review endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub application_id: String,
    pub decision: ReviewDecision,
    pub success_message: Option<String>,
}

/// Failures talking to the review API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("application has no id")]
    MissingApplicationId,
    #[error("failed to serialize request: {0}")]
    Serialization(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER_JSON: &str = r#"{
        "_id": "65f1c0a2",
        "fullName": "Dana Reyes",
        "email": "dana@example.com",
        "phone": "555-0101",
        "address": "12 Elm St",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62701",
        "emergencyContactName": "Sam Reyes",
        "emergencyContactPhone": "555-0102",
        "emergencyContactRelationship": "Sibling",
        "governmentId": "C:\\uploads\\gov_id.png",
        "proofOfResidence": "uploads/utility_bill.jpg",
        "petExperience": "Two dogs over ten years",
        "createdAt": "2024-03-13T15:04:05.000Z"
    }"#;

    const SHELTER_JSON: &str = r#"{
        "_id": "65f1c0b7",
        "type": "Animal Shelter",
        "organizationName": "Happy Tails Rescue",
        "registrationNumber": "REG-4411",
        "contactPerson": "Lee Park",
        "registrationDocument": "/srv/uploads/registration.pdf",
        "facilityPhotos": ["a.jpg", "b.jpg", "c.jpg"],
        "background": "Founded in 2010"
    }"#;

    #[test]
    fn test_document_label_strips_windows_path() {
        assert_eq!(DocumentRef::from("C:\\docs\\id.png").label(), "id.png");
    }

    #[test]
    fn test_document_label_strips_unix_path() {
        assert_eq!(DocumentRef::from("/srv/uploads/id.png").label(), "id.png");
    }

    #[test]
    fn test_document_label_without_separator_is_unchanged() {
        assert_eq!(DocumentRef::from("id.png").label(), "id.png");
    }

    #[test]
    fn test_document_label_placeholder_for_missing_document() {
        assert_eq!(document_label(None), NO_FILE_CHOSEN);
        let empty = DocumentRef::from("  ");
        assert_eq!(document_label(Some(&empty)), NO_FILE_CHOSEN);
        let doc = DocumentRef::from("a/b/tax.pdf");
        assert_eq!(document_label(Some(&doc)), "tax.pdf");
    }

    #[test]
    fn test_document_label_placeholder_for_trailing_separator() {
        let folder = DocumentRef::from("C:\\uploads\\");
        assert!(folder.is_empty());
        assert_eq!(document_label(Some(&folder)), NO_FILE_CHOSEN);
        let unix_folder = DocumentRef::from("/srv/uploads/");
        assert_eq!(document_label(Some(&unix_folder)), NO_FILE_CHOSEN);
    }

    #[test]
    fn test_numeric_fields_are_read_as_text() {
        let application: Application = serde_json::from_str(
            r#"{"_id": 42, "fullName": "X", "zipCode": 62701, "phone": 5550101, "city": ["bad"]}"#,
        )
        .unwrap();
        let Application::Owner(owner) = application else {
            panic!("expected an owner application");
        };
        assert_eq!(owner.id.as_deref(), Some("42"));
        assert_eq!(owner.zip_code.as_deref(), Some("62701"));
        assert_eq!(owner.phone.as_deref(), Some("5550101"));
        assert_eq!(owner.city, None);
    }

    #[test]
    fn test_application_list_skips_only_bad_records() {
        let raw = r#"[
            {"_id": "a", "fullName": "Dana Reyes", "zipCode": 62701},
            {"_id": "b", "type": "Animal Shelter", "facilityPhotos": "not-a-list"},
            {"_id": "c", "type": "Animal Shelter", "organizationName": "Happy Tails Rescue"}
        ]"#;
        let (applications, skipped) = parse_application_list(raw).unwrap();
        let ids: Vec<Option<&str>> = applications.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("c")]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].0, 1);
    }

    #[test]
    fn test_application_list_rejects_non_array() {
        assert!(parse_application_list(r#"{"_id": "a"}"#).is_err());
    }

    #[test]
    fn test_upload_url_from_windows_path() {
        let builder = UploadUrlBuilder::new("http://localhost:5000");
        let doc = DocumentRef::from("C:\\uploads\\gov_id.png");
        assert_eq!(builder.document_url(&doc), "http://localhost:5000/uploads/gov_id.png");
    }

    #[test]
    fn test_upload_url_trims_trailing_slash() {
        let builder = UploadUrlBuilder::new("https://files.example.org/");
        assert_eq!(builder.base_url(), "https://files.example.org");
        let doc = DocumentRef::from("id.png");
        assert_eq!(builder.document_url(&doc), "https://files.example.org/uploads/id.png");
    }

    #[test]
    fn test_upload_url_keeps_remote_reference() {
        let builder = UploadUrlBuilder::new("http://localhost:5000");
        let doc = DocumentRef::from("https://cdn.example.org/docs/id.png");
        assert_eq!(builder.document_url(&doc), "https://cdn.example.org/docs/id.png");
    }

    #[test]
    fn test_facility_photo_summary() {
        assert_eq!(facility_photo_summary(&[]), "No files chosen");
        let one = vec![DocumentRef::from("a.jpg")];
        assert_eq!(facility_photo_summary(&one), "1 file selected");
        let three = vec![
            DocumentRef::from("a.jpg"),
            DocumentRef::from("b.jpg"),
            DocumentRef::from("c.jpg"),
        ];
        assert_eq!(facility_photo_summary(&three), "3 files selected");
    }

    #[test]
    fn test_owner_record_without_type_is_owner() {
        let application: Application = serde_json::from_str(OWNER_JSON).unwrap();
        match &application {
            Application::Owner(owner) => {
                assert_eq!(owner.full_name.as_deref(), Some("Dana Reyes"));
                assert_eq!(owner.zip_code.as_deref(), Some("62701"));
                assert_eq!(owner.government_id.as_ref().map(|d| d.label()), Some("gov_id.png"));
            }
            Application::Shelter(_) => panic!("expected an owner application"),
        }
        assert_eq!(application.id(), Some("65f1c0a2"));
        assert_eq!(application.kind_label(), "Pet Owner");
    }

    #[test]
    fn test_unknown_type_is_owner() {
        let application: Application =
            serde_json::from_str(r#"{"_id": "x", "type": "Individual"}"#).unwrap();
        assert!(matches!(application, Application::Owner(_)));
        assert_eq!(application.display_name(), "Unnamed applicant");
    }

    #[test]
    fn test_shelter_record() {
        let application: Application = serde_json::from_str(SHELTER_JSON).unwrap();
        let Application::Shelter(shelter) = &application else {
            panic!("expected a shelter application");
        };
        assert_eq!(shelter.facility_photos.len(), 3);
        assert_eq!(document_label(shelter.registration_document.as_ref()), "registration.pdf");
        assert_eq!(document_label(shelter.tax_document.as_ref()), NO_FILE_CHOSEN);
        assert_eq!(application.display_name(), "Happy Tails Rescue");
    }

    #[test]
    fn test_shelter_without_photos_has_empty_list() {
        let application: Application =
            serde_json::from_str(r#"{"type": "Animal Shelter", "facilityPhotos": null}"#).unwrap();
        let Application::Shelter(shelter) = application else {
            panic!("expected a shelter application");
        };
        assert_eq!(facility_photo_summary(&shelter.facility_photos), NO_FILES_CHOSEN);
    }

    #[test]
    fn test_shelter_serializes_with_discriminator() {
        let application: Application = serde_json::from_str(SHELTER_JSON).unwrap();
        let value = serde_json::to_value(&application).unwrap();
        assert_eq!(value["type"], "Animal Shelter");
        assert_eq!(value["_id"], "65f1c0b7");
        assert!(value.get("fullName").is_none());
    }

    #[test]
    fn test_submitted_at_parses_rfc3339() {
        let submitted = SubmittedAt::parse("2024-03-13T15:04:05.000Z").unwrap();
        assert_eq!(submitted.epoch_millis(), 1_710_342_245_000);
    }

    #[test]
    fn test_submitted_at_parses_naive_and_date_only() {
        let naive = SubmittedAt::parse("2024-03-13T15:04:05").unwrap();
        assert_eq!(naive.epoch_millis(), 1_710_342_245_000);
        let date = SubmittedAt::parse("2024-03-13").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-13T00:00:00+00:00");
    }

    #[test]
    fn test_submitted_at_rejects_garbage() {
        assert_eq!(SubmittedAt::parse(""), Err(TimestampError::Empty));
        assert!(matches!(
            SubmittedAt::parse("yesterday"),
            Err(TimestampError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_review_decision_notifications() {
        assert_eq!(ReviewDecision::Approve.severity(), Severity::Success);
        assert_eq!(ReviewDecision::Reject.severity(), Severity::Error);
        let body = serde_json::to_string(&ReviewRequest { decision: ReviewDecision::Reject }).unwrap();
        assert_eq!(body, r#"{"decision":"reject"}"#);
    }

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::Server { status: 503, message: "busy".to_string() };
        assert_eq!(err.to_string(), "server error 503: busy");
    }
}
