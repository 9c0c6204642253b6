use crate::strapi::models::{ContactSubmission, SubmissionRecord};
use crate::strapi::{StrapiClient, StrapiError};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

const SUBMISSIONS_ENDPOINT: &str = "contact-submissions";
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

#[derive(Serialize)]
struct Payload<'a> {
    data: &'a SubmissionRecord,
}

impl SubmissionRecord {
    /// Record for a validated submission, stamped with the current time.
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        Self {
            name: submission.name.clone().unwrap_or_default(),
            email: submission.email.clone().unwrap_or_default(),
            phone: submission.phone.clone().unwrap_or_default(),
            subject: submission
                .subject
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            message: submission.message.clone().unwrap_or_default(),
            status_email: "new".to_string(),
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl StrapiClient {
    /// Store a contact-form submission in the `contact-submissions`
    /// collection.
    pub async fn create_contact_submission(
        &self,
        record: &SubmissionRecord,
    ) -> Result<(), StrapiError> {
        let url = self.url(SUBMISSIONS_ENDPOINT, &[])?;
        let key = url.to_string();
        debug!("POST {}", key);

        let response = self
            .authorize(self.http.post(url))
            .json(&Payload { data: record })
            .send()
            .await
            .map_err(|source| StrapiError::Transport {
                url: key.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StrapiError::Api {
                status: status.as_u16(),
                url: key,
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FetchCache;
    use chrono::DateTime;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            phone: None,
            subject: None,
            message: Some("I'd like a cake".to_string()),
        }
    }

    #[test]
    fn test_record_defaults() {
        let record = SubmissionRecord::from_submission(&submission());
        assert_eq!(record.phone, "");
        assert_eq!(record.subject, DEFAULT_SUBJECT);
        assert_eq!(record.status_email, "new");
        assert!(DateTime::parse_from_rfc3339(&record.submitted_at).is_ok());
        assert!(record.submitted_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_create_contact_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact-submissions"))
            .and(header("Authorization", "Bearer token"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "name": "Ana",
                    "subject": "General Inquiry",
                    "statusEmail": "new"
                }
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = StrapiClient::with_client(
            reqwest::Client::new(),
            &server.uri(),
            Some("token".to_string()),
            Arc::new(FetchCache::new()),
            Duration::from_secs(60),
        )
        .unwrap();

        let record = SubmissionRecord::from_submission(&submission());
        client.create_contact_submission(&record).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_contact_submission_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("ValidationError"))
            .mount(&server)
            .await;

        let client = StrapiClient::with_client(
            reqwest::Client::new(),
            &server.uri(),
            None,
            Arc::new(FetchCache::new()),
            Duration::from_secs(60),
        )
        .unwrap();

        let record = SubmissionRecord::from_submission(&submission());
        let err = client.create_contact_submission(&record).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("ValidationError"));
    }
}
