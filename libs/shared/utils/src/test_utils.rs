use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Point the config at a mock server, e.g. `MockServer::uri()`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            port: 3000,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn availability_window_response(
        professional_id: &Uuid,
        day_of_week: u8,
        start_time: &str,
        end_time: &str,
    ) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "professional_id": professional_id,
            "day_of_week": day_of_week,
            "start_time": start_time,
            "end_time": end_time,
            "is_recurring": true,
            "is_available": true,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn one_off_window_response(
        professional_id: &Uuid,
        day_of_week: u8,
        start_time: &str,
        end_time: &str,
        created_at: &str,
    ) -> serde_json::Value {
        let mut window = Self::availability_window_response(professional_id, day_of_week, start_time, end_time);
        window["is_recurring"] = json!(false);
        window["created_at"] = json!(created_at);
        window
    }

    pub fn appointment_response(
        professional_id: &Uuid,
        date: &str,
        start_time: &str,
        end_time: &str,
        status: &str,
    ) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "professional_id": professional_id,
            "date": date,
            "start_time": start_time,
            "end_time": end_time,
            "status": status
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
