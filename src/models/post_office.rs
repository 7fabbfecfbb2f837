use serde::{Deserialize, Serialize};

/// One post office as returned by the lookup service.
///
/// The service returns more fields than these; everything beyond the five we
/// display is ignored during deserialization. Fields occasionally come back
/// absent for minor branches, so all of them default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOfficeRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "BranchType", default)]
    pub branch_type: String,
    #[serde(rename = "DeliveryStatus", default)]
    pub delivery_status: String,
    #[serde(rename = "District", default)]
    pub district: String,
    #[serde(rename = "Division", default)]
    pub division: String,
}

/// First element of the service's JSON response array.
///
/// `status` is `"Success"` for known pincodes and `"Error"` for unknown ones.
/// `post_office` may be missing or `null` even on success.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "PostOffice", default)]
    pub post_office: Option<Vec<PostOfficeRecord>>,
}
