//! Generate Word use case.
//!
//! Turns three emotional words into a [`GenerationResult`]: checks the
//! preconditions, renders the prompt, calls the completion gateway under the
//! retry policy and parses the reply.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::retry_executor::execute_with_retry_and_progress;
use imaginario_domain::{
    DomainError, GenerationErrorKind, GenerationResult, PromptTemplate, ResponseParseError,
    ValidWords, WordTriple, classify_failure, parse_generation_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during word generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateWordError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Invalid words: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Unusable response: {0}")]
    Response(#[from] ResponseParseError),
}

impl GenerateWordError {
    /// Category used to pick the user-facing message
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            Self::MissingCredential => GenerationErrorKind::MissingCredential,
            Self::InvalidInput(_) => GenerationErrorKind::Validation,
            Self::Gateway(GatewayError::InvalidResponse(_)) => {
                GenerationErrorKind::MalformedResponse
            }
            Self::Gateway(e) => classify_failure(&e.failure()),
            Self::Response(ResponseParseError::Empty) => GenerationErrorKind::EmptyResponse,
            Self::Response(ResponseParseError::NotJson(_)) => {
                GenerationErrorKind::MalformedResponse
            }
            Self::Response(ResponseParseError::MissingField(_)) => {
                GenerationErrorKind::IncompleteResponse
            }
        }
    }

    /// Spanish message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => format!(
                "{} Define la variable de entorno OPENAI_API_KEY, usa --api-key o añade \
                 api_key en la sección [provider] del archivo de configuración.",
                GenerationErrorKind::MissingCredential.user_message()
            ),
            Self::InvalidInput(DomainError::WrongWordCount(n)) => format!(
                "Se necesitan exactamente tres palabras (recibidas: {}).",
                n
            ),
            Self::InvalidInput(DomainError::WordTooLong { position, max }) => format!(
                "La palabra {} es demasiado larga (máximo {} caracteres).",
                position, max
            ),
            other => other.kind().user_message(),
        }
    }
}

/// Use case for generating an emotional word.
pub struct GenerateWordUseCase {
    gateway: Arc<dyn CompletionGateway>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateWordUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: GenerationParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set a conversation logger for structured event logging.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, words: &[String]) -> Result<GenerationResult, GenerateWordError> {
        self.execute_with_progress(words, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        words: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerationResult, GenerateWordError> {
        let (api_key, words) = self.check_preconditions(words)?;

        progress.on_request_start(&words);
        let result = self.generate(api_key, &words, progress).await;
        progress.on_complete(result.is_ok());

        if let Err(e) = &result {
            warn!("Generation failed: {}", e);
            self.conversation_logger.log(ConversationEvent::new(
                "generation_error",
                serde_json::json!({
                    "words": words.as_slice(),
                    "kind": format!("{:?}", e.kind()),
                    "error": e.to_string(),
                }),
            ));
        }
        result
    }

    /// Synchronous checks done before any network activity, in order:
    /// credential, word count, blank words.
    fn check_preconditions(
        &self,
        words: &[String],
    ) -> Result<(String, ValidWords), GenerateWordError> {
        let api_key = self
            .params
            .credential()
            .ok_or(GenerateWordError::MissingCredential)?
            .to_string();

        let valid = WordTriple::try_from_vec(words.to_vec())?.validate()?;
        Ok((api_key, valid))
    }

    async fn generate(
        &self,
        api_key: String,
        words: &ValidWords,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerationResult, GenerateWordError> {
        let request = CompletionRequest {
            model: self.params.model.clone(),
            prompt: PromptTemplate::render(self.params.prompt_variant, words),
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            api_key,
        };

        info!(
            "Generating word for [{}] with {} ({} prompt)",
            words, request.model, self.params.prompt_variant
        );
        self.conversation_logger.log(ConversationEvent::new(
            "generation_request",
            serde_json::json!({
                "model": request.model,
                "prompt_variant": self.params.prompt_variant.as_str(),
                "words": words.as_slice(),
                "prompt": request.prompt,
            }),
        ));

        let gateway = &self.gateway;
        let request = &request;
        let content =
            execute_with_retry_and_progress(&self.params.retry, progress, || gateway.complete(request))
                .await?;

        let content = content.unwrap_or_default();
        debug!("Model replied with {} bytes", content.len());
        let result = parse_generation_response(&content)?;

        let variant = self.params.prompt_variant;
        let definition_names_word = result.definition_mentions_word();
        if variant
            .definition_names_word()
            .is_some_and(|expected| expected != definition_names_word)
        {
            debug!(
                "Definition {} '{}' against the {} prompt",
                if definition_names_word { "mentions" } else { "omits" },
                result.word(),
                variant
            );
        }
        if !result.advice_mentions_word() {
            debug!("Advice does not mention '{}'", result.word());
        }

        self.conversation_logger.log(ConversationEvent::new(
            "generation_response",
            serde_json::json!({
                "model": request.model,
                "raw": content,
                "word": result.word(),
                "definition": result.definition(),
                "advice": result.advice(),
                "definition_names_word": definition_names_word,
            }),
        ));
        info!("Generated word '{}'", result.word());
        Ok(result)
    }
}
