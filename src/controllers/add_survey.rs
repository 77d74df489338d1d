// POST /api/surveys - create a survey (admin only, gated by the auth middleware)

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::{respond, string_fields, Controller};
use crate::domain::{AddSurvey, AddSurveyModel, SurveyAnswerModel};
use crate::error::HttpError;
use crate::http::{bad_request, no_content, HttpRequest, HttpResponse};
use crate::validation::Validation;

pub struct AddSurveyController {
    validation: Arc<dyn Validation>,
    add_survey: Arc<dyn AddSurvey>,
}

impl AddSurveyController {
    pub fn new(validation: Arc<dyn Validation>, add_survey: Arc<dyn AddSurvey>) -> Self {
        Self {
            validation,
            add_survey,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> anyhow::Result<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let [question] = match string_fields(&request.body, ["question"]) {
            Ok(fields) => fields,
            Err(error) => return Ok(bad_request(error)),
        };

        let answers = request.body.get("answers").cloned().unwrap_or_default();
        let answers: Vec<SurveyAnswerModel> = match serde_json::from_value(answers) {
            Ok(answers) => answers,
            Err(e) => {
                tracing::debug!("Rejecting malformed survey answers: {}", e);
                return Ok(bad_request(HttpError::invalid_param("answers")));
            }
        };

        tracing::debug!("Adding survey for account {:?}", request.account_id);
        self.add_survey
            .add(AddSurveyModel {
                question,
                answers,
                date: Utc::now(),
            })
            .await?;

        Ok(no_content())
    }
}

#[async_trait]
impl Controller for AddSurveyController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond("add survey", self.try_handle(&request).await)
    }
}
