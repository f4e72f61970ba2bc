use serde::{Deserialize, Serialize};

use pentaledger_companies::Company;
use pentaledger_gambling::GamblingLog;

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub tax_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl From<Vec<Company>> for Items<Company> {
    fn from(items: Vec<Company>) -> Self {
        Self { items }
    }
}

impl From<Vec<GamblingLog>> for Items<GamblingLog> {
    fn from(items: Vec<GamblingLog>) -> Self {
        Self { items }
    }
}

#[derive(Debug, Deserialize)]
pub struct NiitQuery {
    pub magi: f64,
    pub investment_income: f64,
    #[serde(default)]
    pub filing_status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NiitResponse {
    pub magi: f64,
    pub investment_income: f64,
    pub threshold: f64,
    pub rate: f64,
    pub niit: f64,
}

#[derive(Debug, Deserialize)]
pub struct MileageQuery {
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub miles: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MileageResponse {
    pub date: chrono::NaiveDate,
    pub category: pentaledger_transportation::MileageCategory,
    pub rate_per_mile: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction: Option<f64>,
}
