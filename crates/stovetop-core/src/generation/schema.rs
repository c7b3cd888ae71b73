//! Response schema declared to the generative service.

use serde_json::{json, Value};

/// JSON schema (Gemini `responseSchema` dialect) of a [`crate::CookingPlan`].
pub fn cooking_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "totalTime": {
                "type": "NUMBER",
                "description": "Total minutes from start to finish"
            },
            "prepSummary": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A few high-level prep steps to do before starting anything else"
            },
            "timeline": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timeStart": { "type": "NUMBER" },
                        "timeEnd": { "type": "NUMBER" },
                        "action": { "type": "STRING" },
                        "dishName": { "type": "STRING" },
                        "isStoveActive": { "type": "BOOLEAN" },
                        "stoveNumber": {
                            "type": "NUMBER",
                            "description": "1, 2, or 3 if stove is used"
                        }
                    },
                    "required": ["timeStart", "timeEnd", "action", "dishName", "isStoveActive"]
                }
            }
        },
        "required": ["totalTime", "timeline", "prepSummary"]
    })
}
