use serde::Serialize;

// Failure body shared by every error path
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self { hello: "World" }
    }
}
