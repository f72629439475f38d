use axum::Json;
use serde_json::{json, Value};

/// GET / — landing view-data with the navigation targets
pub async fn index() -> Json<Value> {
    Json(json!({
        "title": "Home",
        "links": [
            { "label": "Meals", "href": "/meals" },
            { "label": "Exercises", "href": "/exercises" },
            { "label": "Reports", "href": "/reports" },
        ]
    }))
}
