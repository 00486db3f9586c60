use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An investor contributing capital to projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct Investor {
    #[schema(example = 30)]
    pub id: i64,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Investor A")]
    pub name: String,
    /// Contributed amount
    #[validate(range(min = 0.0))]
    #[schema(example = 15000.0)]
    pub contributions: f64,
    pub contribution_date: NaiveDate,
    /// Share of the project, 0-100
    #[validate(range(min = 0, max = 100))]
    #[schema(example = 25)]
    pub percentage: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateInvestor {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub contributions: f64,
    #[serde(default)]
    pub contribution_date: NaiveDate,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub percentage: i32,
}

impl From<CreateInvestor> for Investor {
    fn from(input: CreateInvestor) -> Self {
        Self {
            id: 0,
            name: input.name,
            contributions: input.contributions,
            contribution_date: input.contribution_date,
            percentage: input.percentage,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateInvestor {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub contributions: Option<f64>,
    pub contribution_date: Option<NaiveDate>,
    #[validate(range(min = 0, max = 100))]
    pub percentage: Option<i32>,
}

impl Investor {
    pub fn apply_update(&mut self, update: UpdateInvestor) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(contributions) = update.contributions {
            self.contributions = contributions;
        }
        if let Some(date) = update.contribution_date {
            self.contribution_date = date;
        }
        if let Some(percentage) = update.percentage {
            self.percentage = percentage;
        }
    }
}
