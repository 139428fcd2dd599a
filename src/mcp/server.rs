//! Macroplan MCP Server Implementation
//!
//! Exposes the calculator tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::config::CalculatorConfig;
use crate::models::Macros;
use crate::tools::plans::{self, ProfileInput};
use crate::tools::status::StatusTracker;
use crate::tools::{body, templates};

/// Macroplan MCP Service
#[derive(Clone)]
pub struct MacroplanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: CalculatorConfig,
    tool_router: ToolRouter<MacroplanService>,
}

impl MacroplanService {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Report a rejected input back to the caller
fn invalid_params(message: String) -> McpError {
    warn!("Rejected tool input: {}", message);
    McpError::invalid_params(message, None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// "male" or "female"
    pub gender: String,
    /// Body weight in kg (30-250)
    pub weight: f64,
    /// Height in cm (100-250)
    pub height: f64,
    /// Age in years (10-100)
    pub age: u32,
    /// sedentary, light, moderate, active or extreme
    pub activity_level: String,
    /// lose, maintain, gain or performance
    pub goal: String,
}

impl ProfileParams {
    fn as_input(&self) -> ProfileInput<'_> {
        ProfileInput {
            gender: &self.gender,
            weight: self.weight,
            height: self.height,
            age: self.age,
            activity_level: &self.activity_level,
            goal: &self.goal,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculatePlanParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// Number of meals per day (3-6, default 5)
    pub meals: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DistributeMealsParams {
    pub daily_calories: i64,
    /// Grams per day
    pub protein: i64,
    /// Grams per day
    pub carbs: i64,
    /// Grams per day
    pub fat: i64,
    /// Number of meals per day (3-6, default 5)
    pub meals: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssessBodyParams {
    /// Body weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// "male" or "female"
    pub gender: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDietTemplateParams {
    /// lose, maintain, gain or performance
    pub goal: String,
    /// none, vegetarian, vegan, gluten or lactose
    pub restriction: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateDietParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// none, vegetarian, vegan, gluten or lactose
    pub restriction: Option<String>,
    /// Number of meals per day (3-6, default 5)
    pub meals: Option<u32>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl MacroplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the Macroplan service including build info, calculator policies, and process information")]
    async fn macroplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get instructions for building nutrition plans: inputs, formulas, and which tool to use when. Call this before the first calculation in a session.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Plans ---

    #[tool(description = "Calculate a client's BMR, TDEE, daily calories, macros, reference values and BMI, and split the budget across meals")]
    fn calculate_nutrition_plan(&self, Parameters(p): Parameters<CalculatePlanParams>) -> Result<CallToolResult, McpError> {
        let result = plans::calculate_plan(&self.config, &p.profile.as_input(), p.meals)
            .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Split an existing daily calorie and macro budget across 3-6 meals")]
    fn distribute_meals(&self, Parameters(p): Parameters<DistributeMealsParams>) -> Result<CallToolResult, McpError> {
        let macros = Macros { protein: p.protein, carbs: p.carbs, fat: p.fat };
        let result = plans::distribute_budget(&self.config, p.daily_calories, macros, p.meals)
            .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate BMI, BMI category and ideal weight range")]
    fn assess_body(&self, Parameters(p): Parameters<AssessBodyParams>) -> Result<CallToolResult, McpError> {
        let result = body::assess(p.weight, p.height, &p.gender).map_err(invalid_params)?;
        json_result(&result)
    }

    // --- Templates ---

    #[tool(description = "Get the unscaled diet template for a goal; a dietary restriction overrides the goal template")]
    fn get_diet_template(&self, Parameters(p): Parameters<GetDietTemplateParams>) -> Result<CallToolResult, McpError> {
        let result = templates::get_template(&p.goal, p.restriction.as_deref()).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate a plan and rescale the matching diet template to the client's daily calories")]
    fn generate_diet(&self, Parameters(p): Parameters<GenerateDietParams>) -> Result<CallToolResult, McpError> {
        let result = plans::generate_diet(
            &self.config,
            &p.profile.as_input(),
            p.restriction.as_deref(),
            p.meals,
        )
        .map_err(invalid_params)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macroplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macroplan Nutrition Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macroplan - nutrition plans for personal-trainer clients. \
                 IMPORTANT: Call calculator_instructions before the first calculation. \
                 Plans: calculate_nutrition_plan (BMR, TDEE, calories, macros, BMI, meal split), \
                 distribute_meals (split an existing budget). \
                 Body: assess_body (BMI, ideal weight). \
                 Diets: get_diet_template, generate_diet (template scaled to the plan). \
                 Status: macroplan_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_params_flatten() {
        let params: CalculatePlanParams = serde_json::from_value(serde_json::json!({
            "gender": "female",
            "weight": 60.0,
            "height": 165.0,
            "age": 28,
            "activity_level": "light",
            "goal": "lose",
            "meals": 4
        }))
        .unwrap();
        assert_eq!(params.profile.gender, "female");
        assert_eq!(params.meals, Some(4));
        assert_eq!(params.profile.as_input().age, 28);
    }

    #[test]
    fn test_server_info() {
        let service = MacroplanService::new(CalculatorConfig::default());
        let info = service.get_info();
        assert_eq!(info.server_info.name, "macroplan");
        assert!(info.instructions.unwrap().contains("calculator_instructions"));
    }
}
