//! Shared test utilities for integration tests
#![allow(dead_code)]

use pincode_lookup::models::PostOfficeRecord;

/// Builder for one post-office record in a fixture response
pub struct RecordBuilder {
    name: String,
    branch_type: String,
    delivery_status: String,
    district: String,
    division: String,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            branch_type: "Sub Post Office".to_string(),
            delivery_status: "Delivery".to_string(),
            district: "Mumbai".to_string(),
            division: "Mumbai City".to_string(),
        }
    }

    pub fn branch_type(mut self, value: &str) -> Self {
        self.branch_type = value.to_string();
        self
    }

    pub fn delivery_status(mut self, value: &str) -> Self {
        self.delivery_status = value.to_string();
        self
    }

    pub fn district(mut self, value: &str) -> Self {
        self.district = value.to_string();
        self
    }

    pub fn division(mut self, value: &str) -> Self {
        self.division = value.to_string();
        self
    }

    pub fn build(&self) -> PostOfficeRecord {
        PostOfficeRecord {
            name: self.name.clone(),
            branch_type: self.branch_type.clone(),
            delivery_status: self.delivery_status.clone(),
            district: self.district.clone(),
            division: self.division.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        format!(
            r#"{{"Name":"{}","BranchType":"{}","DeliveryStatus":"{}","District":"{}","Division":"{}"}}"#,
            self.name, self.branch_type, self.delivery_status, self.district, self.division
        )
    }
}

/// Builder for a raw lookup-service response body
pub struct ResponseBuilder {
    status: String,
    message: String,
    post_office: Option<Vec<String>>,
}

impl ResponseBuilder {
    /// A success response with an empty record list
    pub fn success() -> Self {
        Self {
            status: "Success".to_string(),
            message: "Number of pincode(s) found:0".to_string(),
            post_office: Some(vec![]),
        }
    }

    /// A domain not-found response (`Status: "Error"`, `PostOffice: null`)
    pub fn not_found() -> Self {
        Self {
            status: "Error".to_string(),
            message: "No records found".to_string(),
            post_office: None,
        }
    }

    pub fn with_records(mut self, records: &[RecordBuilder]) -> Self {
        self.message = format!("Number of pincode(s) found:{}", records.len());
        self.post_office = Some(records.iter().map(|r| r.to_json()).collect());
        self
    }

    /// Drop the PostOffice field entirely
    pub fn without_post_office(mut self) -> Self {
        self.post_office = None;
        self
    }

    /// Serialize to the one-element JSON array the service returns
    pub fn body(&self) -> String {
        let post_office = match &self.post_office {
            Some(records) => format!("[{}]", records.join(",")),
            None => "null".to_string(),
        };
        format!(
            r#"[{{"Message":"{}","Status":"{}","PostOffice":{}}}]"#,
            self.message, self.status, post_office
        )
    }
}
