use tracing::info;

use crate::{
    config::ValidatorConfig,
    domain::models::MessageEventName,
    presentation::http::{
        requests::{MessageEvent, MessageIndex, MessageOutstanding, MessageReceive, MessageSend},
        validators::{
            FieldErrors,
            rules::{Rule, apply},
        },
    },
};

const PHONE_NUMBER_RULES: &[Rule] = &[Rule::Required, Rule::PhoneNumber];

/// Validates the payloads accepted by the message endpoints.
///
/// Holds only immutable limits, so one instance can be shared across handlers.
#[derive(Debug, Clone)]
pub struct MessageHandlerValidator {
    config: ValidatorConfig,
}

impl Default for MessageHandlerValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageHandlerValidator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        info!(
            service = std::any::type_name::<Self>(),
            content_max_length = config.content_max_length,
            page_max_limit = config.page_max_limit,
            query_max_length = config.query_max_length,
            "message handler validator created"
        );
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate_message_receive(&self, request: &MessageReceive) -> FieldErrors {
        self.validate_exchange(&request.to, &request.from, &request.content)
    }

    pub fn validate_message_send(&self, request: &MessageSend) -> FieldErrors {
        self.validate_exchange(&request.to, &request.from, &request.content)
    }

    pub fn validate_message_outstanding(&self, request: &MessageOutstanding) -> FieldErrors {
        let mut errors = FieldErrors::new();
        apply(&mut errors, "limit", &request.limit, &self.limit_rules());
        errors
    }

    pub fn validate_message_index(&self, request: &MessageIndex) -> FieldErrors {
        let mut errors = FieldErrors::new();
        apply(&mut errors, "limit", &request.limit, &self.limit_rules());
        apply(
            &mut errors,
            "skip",
            &request.skip,
            &[Rule::Required, Rule::Numeric, Rule::Min(0)],
        );
        apply(
            &mut errors,
            "from",
            &request.from,
            &[Rule::Required, Rule::MinLength(1)],
        );
        apply(
            &mut errors,
            "query",
            &request.query,
            &[Rule::MaxLength(self.config.query_max_length)],
        );
        apply(&mut errors, "to", &request.to, PHONE_NUMBER_RULES);
        errors
    }

    pub fn validate_message_event(&self, request: &MessageEvent) -> FieldErrors {
        let mut errors = FieldErrors::new();
        apply(
            &mut errors,
            "event_name",
            &request.event_name,
            &[Rule::Required, Rule::OneOf(MessageEventName::NAMES)],
        );
        apply(
            &mut errors,
            "messageID",
            &request.message_id,
            &[Rule::Required, Rule::Uuid],
        );
        errors
    }

    fn validate_exchange(&self, to: &str, from: &str, content: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        apply(&mut errors, "to", to, PHONE_NUMBER_RULES);
        apply(&mut errors, "from", from, PHONE_NUMBER_RULES);
        apply(
            &mut errors,
            "content",
            content,
            &[
                Rule::Required,
                Rule::MinLength(1),
                Rule::MaxLength(self.config.content_max_length),
            ],
        );
        errors
    }

    fn limit_rules(&self) -> [Rule; 4] {
        [
            Rule::Required,
            Rule::Numeric,
            Rule::Min(1),
            Rule::Max(self.config.page_max_limit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::MessageHandlerValidator;
    use crate::{
        config::ValidatorConfig,
        presentation::http::requests::{MessageIndex, MessageSend},
    };

    fn index(limit: &str) -> MessageIndex {
        MessageIndex {
            skip: "0".to_string(),
            limit: limit.to_string(),
            query: String::new(),
            from: "+18005550199".to_string(),
            to: "+14155552671".to_string(),
        }
    }

    #[test]
    fn custom_limits_replace_defaults() {
        let validator = MessageHandlerValidator::with_config(ValidatorConfig {
            content_max_length: 160,
            page_max_limit: 50,
            query_max_length: 10,
        });

        assert!(validator.validate_message_index(&index("50")).is_empty());
        assert_eq!(
            validator
                .validate_message_index(&index("51"))
                .get("limit")
                .map(|m| m.to_vec()),
            Some(vec!["The limit field must be maximum 50".to_string()])
        );

        let send = MessageSend {
            from: "+18005550199".to_string(),
            to: "+14155552671".to_string(),
            content: "x".repeat(161),
        };
        assert_eq!(
            validator
                .validate_message_send(&send)
                .get("content")
                .map(|m| m.to_vec()),
            Some(vec!["The content field must be maximum 160 char".to_string()])
        );
    }

    #[test]
    fn default_validator_uses_default_config() {
        let validator = MessageHandlerValidator::default();
        assert_eq!(validator.config(), &ValidatorConfig::default());
    }

    #[test]
    fn reports_every_invalid_field_of_an_index_request() {
        let validator = MessageHandlerValidator::new();
        let errors = validator.validate_message_index(&MessageIndex {
            skip: "-1".to_string(),
            limit: "abc".to_string(),
            query: "q".repeat(101),
            from: String::new(),
            to: "14155552671".to_string(),
        });

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, vec!["from", "limit", "query", "skip", "to"]);
        assert_eq!(errors.get("skip").map(<[String]>::len), Some(1));
    }
}
