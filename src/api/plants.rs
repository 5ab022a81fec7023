use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::{ApiError, Session, decode, expect_ok, local_timestamp};

/// One recorded disease check for a plant. `notes` is lightly marked-up
/// text meant for [`crate::format_message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: String,
    pub result: String,
    pub confidence: f64,
    pub notes: String,
    pub photo_url: String,
    pub checked_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub diagnosis: Vec<Diagnosis>,
}

#[derive(Debug, Serialize)]
struct PlantUpsert<'a> {
    name: &'a str,
    description: &'a str,
}

impl Session {
    /// Fetch the full plant inventory.
    pub async fn plants(&self) -> Result<Vec<Plant>, ApiError> {
        let resp = self
            .http
            .get(self.url("/plants"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn add_plant(&self, name: &str, description: &str) -> Result<Plant, ApiError> {
        tracing::debug!(name, "adding plant");
        let resp = self
            .http
            .post(self.url("/plants"))
            .bearer_auth(self.bearer()?)
            .json(&PlantUpsert { name, description })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update_plant(
        &self,
        plant_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Plant, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/plants/{plant_id}")))
            .bearer_auth(self.bearer()?)
            .json(&PlantUpsert { name, description })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete_plant(&self, plant_id: &str) -> Result<(), ApiError> {
        tracing::debug!(plant_id, "deleting plant");
        let resp = self
            .http
            .delete(self.url(&format!("/plants/{plant_id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Upload a photo for diagnosis, recorded against a plant. The check
    /// timestamp is taken from the local clock.
    pub async fn diagnose(
        &self,
        plant_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Diagnosis, ApiError> {
        tracing::debug!(plant_id, file_name, "uploading diagnosis photo");
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()))
            .text("checked_at", local_timestamp());
        let resp = self
            .http
            .post(self.url(&format!("/diagnose/{plant_id}")))
            .bearer_auth(self.bearer()?)
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    /// Diagnose a photo without attaching the result to a plant.
    pub async fn quick_diagnose(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Diagnosis, ApiError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let resp = self
            .http
            .post(self.url("/diagnose/quick"))
            .bearer_auth(self.bearer()?)
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete_diagnosis(
        &self,
        plant_id: &str,
        diagnosis_id: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/diagnose/{plant_id}/{diagnosis_id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        expect_ok(resp).await
    }
}
