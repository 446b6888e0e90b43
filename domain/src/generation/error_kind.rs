//! User-facing classification of generation failures

use crate::retry::ServiceFailure;

/// Link shown when the account ran out of quota
pub const BILLING_URL: &str = "https://platform.openai.com/account/billing";

/// Category of a failed generation, each with its own message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// Empty/missing words, caught before any network call
    Validation,
    /// No credential could be resolved
    MissingCredential,
    /// The service rejected the credential
    InvalidCredential,
    /// Rate limit tied to billing, never retried
    QuotaExceeded,
    /// Rate limit still present after retries
    RateLimited,
    /// 5xx still present after retries
    TransientService,
    /// Connectivity failure
    Network,
    /// The reply had no content
    EmptyResponse,
    /// The reply was not the expected JSON object
    MalformedResponse,
    /// The JSON object lacked one of the required fields
    IncompleteResponse,
    /// Anything else
    Unknown,
}

impl GenerationErrorKind {
    /// Message shown inline in the express screen
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => {
                "Por favor, completa las tres palabras antes de generar.".to_string()
            }
            Self::MissingCredential => {
                "Servicio no disponible: la API key de OpenAI no está configurada.".to_string()
            }
            Self::InvalidCredential => {
                "Configuración de API incompleta. Verifica tu clave de OpenAI.".to_string()
            }
            Self::QuotaExceeded => format!(
                "Has excedido el límite de uso de tu cuenta de OpenAI. Revisa tu plan de facturación en {}",
                BILLING_URL
            ),
            Self::RateLimited => {
                "Demasiadas solicitudes. Espera unos minutos antes de intentar nuevamente."
                    .to_string()
            }
            Self::Network => {
                "Error de conexión. Verifica tu conexión a internet e intenta nuevamente."
                    .to_string()
            }
            Self::EmptyResponse => "No se recibió respuesta del servicio de IA.".to_string(),
            Self::MalformedResponse => {
                "La respuesta del servicio no tiene el formato esperado.".to_string()
            }
            Self::IncompleteResponse => {
                "La respuesta no contiene toda la información requerida.".to_string()
            }
            Self::TransientService | Self::Unknown => {
                "No se pudo generar la palabra emocional. Por favor, intenta de nuevo.".to_string()
            }
        }
    }
}

/// Classify a service failure that survived the retry loop.
///
/// Priority order: quota exhaustion, generic rate limit, credential
/// problems, connectivity, then server errors and everything else.
pub fn classify_failure(failure: &ServiceFailure) -> GenerationErrorKind {
    let lower = failure.message.to_lowercase();

    let rate_limited = failure.is_rate_limited()
        || lower.contains("429")
        || lower.contains("ratelimiterror")
        || lower.contains("rate limit");
    if rate_limited {
        return if failure.mentions_quota() {
            GenerationErrorKind::QuotaExceeded
        } else {
            GenerationErrorKind::RateLimited
        };
    }

    if matches!(failure.status, Some(401 | 403)) || lower.contains("api key") {
        return GenerationErrorKind::InvalidCredential;
    }

    const NETWORK_MARKERS: [&str; 6] = ["network", "fetch", "connect", "timed out", "timeout", "dns"];
    if NETWORK_MARKERS.iter().any(|m| lower.contains(m)) {
        return GenerationErrorKind::Network;
    }

    if failure.is_server_error() {
        return GenerationErrorKind::TransientService;
    }

    GenerationErrorKind::Unknown
}
