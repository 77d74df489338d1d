use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::AddSurveyRepository;
use crate::domain::{AddSurvey, AddSurveyModel};

pub struct DbAddSurvey {
    add_survey_repository: Arc<dyn AddSurveyRepository>,
}

impl DbAddSurvey {
    pub fn new(add_survey_repository: Arc<dyn AddSurveyRepository>) -> Self {
        Self {
            add_survey_repository,
        }
    }
}

#[async_trait]
impl AddSurvey for DbAddSurvey {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()> {
        self.add_survey_repository.add(survey).await
    }
}
