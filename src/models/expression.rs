//! Learned expression and user-relationship models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `style` or `grammar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionType {
    #[default]
    Style,
    Grammar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expression {
    pub id: i64,
    pub situation: String,
    pub style: String,
    pub count: f64,
    pub last_active_time: f64,
    pub chat_id: String,
    pub chat_name: String,
    #[serde(rename = "type")]
    pub expression_type: ExpressionType,
    pub create_date: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionList {
    pub expressions: Vec<Expression>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpressionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub expression_type: Option<ExpressionType>,
    /// `count`, `last_active_time` or `create_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

/// Body for creating or replacing an expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionInput {
    pub situation: String,
    pub style: String,
    pub chat_id: String,
    #[serde(rename = "type")]
    pub expression_type: ExpressionType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatShare {
    pub count: u32,
    pub chat_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionStatistics {
    pub total_count: u32,
    pub style_count: u32,
    pub grammar_count: u32,
    pub top_used: Vec<Expression>,
    pub recent_added: Vec<Expression>,
    pub chat_distribution: HashMap<String, ChatShare>,
}

/// Person row in `relationship/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCard {
    pub person_id: String,
    pub person_name: String,
    pub nickname: Option<String>,
    pub relationship_score: f64,
    pub relationship_text: Option<String>,
    pub short_impression: Option<String>,
    pub know_times: u32,
    pub last_know: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonList {
    pub persons: Vec<PersonCard>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryPoint {
    pub content: String,
    pub weight: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonDetail {
    pub basic_info: PersonCard,
    pub impression: String,
    pub short_impression: String,
    pub memory_points: Vec<MemoryPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipReport {
    pub person_id: String,
    pub report: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipUpdate {
    pub relationship_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_text: Option<String>,
}
