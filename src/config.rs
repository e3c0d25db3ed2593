pub const DEFAULT_FORM_ID: &str = "blogForm";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Blog post submitted successfully!";

/// Runtime settings, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub form_id: String,
    pub success_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let form_id = match std::env::var("BLOG_FORM_ID") {
            Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
            Ok(_) => {
                log::warn!("BLOG_FORM_ID is blank, using '{}'", defaults.form_id);
                defaults.form_id
            }
            Err(_) => defaults.form_id,
        };

        let success_message = std::env::var("BLOG_SUCCESS_MESSAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.success_message);

        Self { form_id, success_message }
    }
}
