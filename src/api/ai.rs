use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiError, Session, decode};

#[derive(Debug, Serialize)]
struct Question<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatAnswer {
    answer: String,
}

#[derive(Debug, Deserialize)]
struct WeatherAnalysis {
    analysis: String,
}

impl Session {
    /// Ask the plant-care assistant a question. The answer is lightly
    /// marked-up text meant for [`crate::format_message`].
    pub async fn ask(&self, question: &str) -> Result<String, ApiError> {
        tracing::debug!("sending chatbot question");
        let resp = self
            .http
            .post(self.url("/ai/chatbot"))
            .bearer_auth(self.bearer()?)
            .json(&Question { question })
            .send()
            .await?;
        let answer: ChatAnswer = decode(resp).await?;
        Ok(answer.answer)
    }

    /// Submit a weather snapshot for analysis. The snapshot shape (location,
    /// current conditions, forecast days) is produced by the caller; gathering
    /// it from geolocation and forecast services is outside this client.
    pub async fn analyze_weather(&self, report: &Value) -> Result<String, ApiError> {
        tracing::debug!("requesting weather analysis");
        let resp = self
            .http
            .post(self.url("/ai/weather/analyze"))
            .bearer_auth(self.bearer()?)
            .json(report)
            .send()
            .await?;
        let analysis: WeatherAnalysis = decode(resp).await?;
        Ok(analysis.analysis)
    }
}
