//! Contact email delivery through a hosted transactional email API.
//!
//! [`EmailDelivery`] posts a template send request (EmailJS REST dialect)
//! carrying the visitor's name, address and message. Credentials are read
//! at startup but only checked at send time, so the site still serves
//! without them and the contact form reports the gap instead.

use serde::Serialize;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// One or more required credentials are absent. Raised before any
    /// network call.
    #[error("Email delivery is not configured: missing {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The email API answered with a non-2xx status.
    #[error("Email API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Default API origin when `EMAIL_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://api.emailjs.com";

/// Default display name of the site owner in outgoing mail.
const DEFAULT_RECIPIENT_NAME: &str = "Kevin";

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// Optional private key for accounts that require it.
    pub private_key: Option<String>,
    pub recipient_name: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                 | Required      | Default                   |
    /// |--------------------------|---------------|---------------------------|
    /// | `EMAIL_API_URL`          | no            | `https://api.emailjs.com` |
    /// | `EMAIL_SERVICE_ID`       | at send time  | —                         |
    /// | `EMAIL_TEMPLATE_ID`      | at send time  | —                         |
    /// | `EMAIL_PUBLIC_KEY`       | at send time  | —                         |
    /// | `EMAIL_PRIVATE_KEY`      | no            | —                         |
    /// | `CONTACT_RECIPIENT_NAME` | no            | `Kevin`                   |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            api_url: var("EMAIL_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            service_id: var("EMAIL_SERVICE_ID"),
            template_id: var("EMAIL_TEMPLATE_ID"),
            public_key: var("EMAIL_PUBLIC_KEY"),
            private_key: var("EMAIL_PRIVATE_KEY"),
            recipient_name: var("CONTACT_RECIPIENT_NAME")
                .unwrap_or_else(|| DEFAULT_RECIPIENT_NAME.to_string()),
        }
    }

    /// Names of the required variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("EMAIL_SERVICE_ID", &self.service_id),
            ("EMAIL_TEMPLATE_ID", &self.template_id),
            ("EMAIL_PUBLIC_KEY", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

/// What the visitor typed into the contact form.
#[derive(Debug, Clone)]
pub struct ContactEmail {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_name: &'a str,
}

/// Sends contact emails via the transactional email API.
pub struct EmailDelivery {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Send one contact email. No retry.
    pub async fn send(&self, email: &ContactEmail) -> Result<(), EmailError> {
        let (Some(service_id), Some(template_id), Some(public_key)) = (
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
            self.config.public_key.as_deref(),
        ) else {
            return Err(EmailError::MissingConfig(self.config.missing()));
        };

        let request = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: TemplateParams {
                from_name: &email.from_name,
                from_email: &email.from_email,
                message: &email.message,
                to_name: &self.config.recipient_name,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/v1.0/email/send", self.config.api_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EmailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(from = %email.from_email, "Contact email sent");
        Ok(())
    }
}
