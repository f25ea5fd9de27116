//! Backend Cloud Firestore (API REST v1) con cliente `reqwest` bloqueante.

use super::{RosterStore, StudentDraft, StudentRecord};
use crate::error::RosterError;
use reqwest::blocking::{Client, Response};
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const API_ROOT: &str = "https://firestore.googleapis.com/v1";
const FIELD_PATHS: [&str; 4] = ["firstName", "middleName", "lastName", "img"];

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
}

#[derive(Deserialize, Debug)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Serialize, Debug)]
struct DocumentBody {
    fields: HashMap<String, FirestoreValue>,
}

impl From<reqwest::Error> for RosterError {
    fn from(e: reqwest::Error) -> Self {
        RosterError::Http(e.to_string())
    }
}

pub struct FirestoreRoster {
    client: Client,
    collection_url: String,
    api_key: String,
}

impl FirestoreRoster {
    pub fn new(project_id: &str, api_key: &str, collection: &str) -> Self {
        Self {
            client: Client::new(),
            collection_url: format!(
                "{API_ROOT}/projects/{project_id}/databases/(default)/documents/{collection}"
            ),
            api_key: api_key.to_string(),
        }
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn key_query(&self) -> Vec<(&'static str, String)> {
        if self.api_key.is_empty() {
            vec![]
        } else {
            vec![("key", self.api_key.clone())]
        }
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, RosterError> {
        let resp = request
            .query(&self.key_query())
            .header(USER_AGENT, "KinderQuest-Roster/1.0")
            .send()?;
        check_status(resp)
    }
}

fn check_status(resp: Response) -> Result<Response, RosterError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(RosterError::Status {
        status: status.as_u16(),
        body,
    })
}

fn draft_to_fields(draft: &StudentDraft) -> HashMap<String, FirestoreValue> {
    let values = [&draft.first_name, &draft.middle_name, &draft.last_name, &draft.img];
    FIELD_PATHS
        .iter()
        .zip(values)
        .map(|(path, value)| {
            (
                path.to_string(),
                FirestoreValue {
                    string_value: Some(value.clone()),
                },
            )
        })
        .collect()
}

/// El id del documento es el último segmento de `name`.
fn document_id(name: &str) -> Option<&str> {
    name.rsplit('/').next().filter(|id| !id.is_empty())
}

fn document_to_record(doc: &FirestoreDocument) -> Result<StudentRecord, RosterError> {
    let id = document_id(&doc.name)
        .ok_or_else(|| RosterError::Decode(format!("document without id: {:?}", doc.name)))?;
    let field = |key: &str| {
        doc.fields
            .get(key)
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default()
    };
    Ok(StudentRecord {
        id: id.to_string(),
        data: StudentDraft {
            first_name: field("firstName"),
            middle_name: field("middleName"),
            last_name: field("lastName"),
            img: field("img"),
        },
    })
}

impl RosterStore for FirestoreRoster {
    fn list(&self) -> Result<Vec<StudentRecord>, RosterError> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.client.get(&self.collection_url);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let page: ListResponse = self
                .send(request)?
                .json()
                .map_err(|e| RosterError::Decode(e.to_string()))?;
            for doc in &page.documents {
                records.push(document_to_record(doc)?);
            }
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        log::debug!("listed {} students", records.len());
        Ok(records)
    }

    fn create(&self, draft: &StudentDraft) -> Result<String, RosterError> {
        draft.validate()?;
        let body = DocumentBody {
            fields: draft_to_fields(draft),
        };
        let doc: FirestoreDocument = self
            .send(self.client.post(&self.collection_url).json(&body))?
            .json()
            .map_err(|e| RosterError::Decode(e.to_string()))?;
        let record = document_to_record(&doc)?;
        log::info!("document written with id {}", record.id);
        Ok(record.id)
    }

    fn update(&self, id: &str, draft: &StudentDraft) -> Result<(), RosterError> {
        draft.validate()?;
        let body = DocumentBody {
            fields: draft_to_fields(draft),
        };
        let mask: Vec<(&str, &str)> = FIELD_PATHS
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();
        // PATCH sobre un id inexistente crearía el documento: exigir que exista
        let request = self
            .client
            .patch(self.document_url(id))
            .query(&mask)
            .query(&[("currentDocument.exists", "true")])
            .json(&body);
        match self.send(request) {
            Err(RosterError::Status { status: 404, .. }) => Err(RosterError::NotFound(id.to_string())),
            Err(e) => Err(e),
            Ok(_) => {
                log::info!("document updated: {id}");
                Ok(())
            }
        }
    }

    fn delete(&self, id: &str) -> Result<(), RosterError> {
        self.send(self.client.delete(self.document_url(id)))?;
        log::info!("document deleted: {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> StudentDraft {
        StudentDraft {
            first_name: "Ana".into(),
            middle_name: String::new(),
            last_name: "Reyes".into(),
            img: "https://example.org/ana.png".into(),
        }
    }

    #[test]
    fn urls_follow_firestore_layout() {
        let roster = FirestoreRoster::new("demo", "", "students");
        assert_eq!(
            roster.document_url("abc"),
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/students/abc"
        );
        assert!(roster.key_query().is_empty());
    }

    #[test]
    fn fields_are_string_values() {
        let body = DocumentBody {
            fields: draft_to_fields(&sample_draft()),
        };
        let json = serde_json::to_value(&body).expect("json ok");
        assert_eq!(json["fields"]["firstName"]["stringValue"], "Ana");
        assert_eq!(json["fields"]["middleName"]["stringValue"], "");
        assert_eq!(json["fields"].as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn documents_decode_into_records() {
        let json = r#"{
            "documents": [{
                "name": "projects/demo/databases/(default)/documents/students/xyz",
                "fields": {
                    "firstName": {"stringValue": "Ana"},
                    "lastName": {"stringValue": "Reyes"}
                }
            }]
        }"#;
        let page: ListResponse = serde_json::from_str(json).expect("json ok");
        assert!(page.next_page_token.is_none());
        let record = document_to_record(&page.documents[0]).expect("record");
        assert_eq!(record.id, "xyz");
        assert_eq!(record.data.first_name, "Ana");
        assert_eq!(record.data.middle_name, "");
    }

    #[test]
    fn empty_collection_has_no_documents_key() {
        let page: ListResponse = serde_json::from_str("{}").expect("json ok");
        assert!(page.documents.is_empty());
    }

    #[test]
    fn document_name_without_id_is_rejected() {
        let doc = FirestoreDocument {
            name: "projects/demo/documents/students/".into(),
            fields: HashMap::new(),
        };
        assert!(matches!(document_to_record(&doc), Err(RosterError::Decode(_))));
    }
}
