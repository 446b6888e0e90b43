//! Prompt templates for word generation

use crate::core::error::DomainError;
use crate::words::ValidWords;
use serde::{Deserialize, Serialize};

/// Which prompt wording to send.
///
/// The variants disagree on one point: `Neutral` forbids the invented word
/// inside the definition while `Condensed` requires it. Neither rule is
/// checked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptVariant {
    /// Short instruction, no constraints on the definition
    Basic,
    /// The definition must describe the state without naming the word
    Neutral,
    /// Long-form guidance on how to condense meaning into the word;
    /// the definition must use the word
    #[default]
    Condensed,
}

impl PromptVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Neutral => "neutral",
            Self::Condensed => "condensed",
        }
    }

    pub fn all() -> [PromptVariant; 3] {
        [Self::Basic, Self::Neutral, Self::Condensed]
    }

    /// Whether the definition is asked to contain the invented word.
    ///
    /// `None` when the variant does not say.
    pub fn definition_names_word(&self) -> Option<bool> {
        match self {
            Self::Basic => None,
            Self::Neutral => Some(false),
            Self::Condensed => Some(true),
        }
    }
}

impl std::fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "neutral" => Ok(Self::Neutral),
            "condensed" => Ok(Self::Condensed),
            other => Err(DomainError::UnknownPromptVariant(other.to_string())),
        }
    }
}

/// Templates for generating the prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// Campaign context shared by every variant
    fn context() -> &'static str {
        r#"Eres un asistente creativo y empático que ayuda a las personas a ponerle nombre a estados emocionales complejos.
Esta herramienta forma parte de una campaña de salud mental: #TodosSomosAliens #HablemosdeSaludMental."#
    }

    /// The words block, quoted verbatim
    fn words_block(words: &ValidWords) -> String {
        format!(
            r#"La persona escribió estas tres palabras para describir cómo se siente:
"{}", "{}", "{}""#,
            words.first(),
            words.second(),
            words.third()
        )
    }

    /// Closing instruction describing the JSON shape
    fn json_instruction(definition_hint: &str) -> String {
        format!(
            r#"Responde ÚNICAMENTE con un objeto JSON válido, sin texto adicional:
{{
  "word": "palabra_inventada",
  "definition": "{}",
  "advice": "reflexión_que_usa_la_palabra"
}}"#,
            definition_hint
        )
    }

    /// Render the prompt for the given variant
    pub fn render(variant: PromptVariant, words: &ValidWords) -> String {
        match variant {
            PromptVariant::Basic => Self::basic(words),
            PromptVariant::Neutral => Self::neutral(words),
            PromptVariant::Condensed => Self::condensed(words),
        }
    }

    fn basic(words: &ValidWords) -> String {
        format!(
            r#"{}

{}

Inventa una palabra nueva que nombre ese estado emocional combinado.
Escribe una definición breve y neutral, sin diagnosticar ni dar soluciones.
Escribe una reflexión empática que mencione la palabra inventada.

{}"#,
            Self::context(),
            Self::words_block(words),
            Self::json_instruction("definición_neutral")
        )
    }

    fn neutral(words: &ValidWords) -> String {
        format!(
            r#"{}

{}

PALABRA:
- Inventa una palabra nueva que condense el significado emocional de las tres palabras
- Debe ser pronunciable y sentirse coherente con las palabras de origen

DEFINICIÓN:
- Describe la experiencia emocional con un tono neutral y claro
- No diagnostiques, no patologices, no propongas soluciones
- NUNCA menciones la palabra inventada dentro de la definición

REFLEXIÓN:
- Valida la experiencia sin imponer acciones
- Menciona la palabra inventada al menos una vez

{}"#,
            Self::context(),
            Self::words_block(words),
            Self::json_instruction("definición_sin_la_palabra")
        )
    }

    fn condensed(words: &ValidWords) -> String {
        format!(
            r#"{}

{}

Tu tarea es crear una palabra inventada que nombre este estado emocional combinado.

CÓMO CREAR LA PALABRA:
- No es una simple suma de sonidos: es una condensación de significado, sensación y carga emocional
- Puede nacer de fragmentos de significado, sílabas con peso emocional, contracciones intuitivas o pequeñas alteraciones de palabras reales
- Puede sonar áspera, suave, rota o incompleta; no tiene que ser bonita, tiene que sentirse verdadera
- Debe poder pronunciarse y sentirse coherente con las palabras de origen

DEFINICIÓN:
- Explica qué nombra la palabra y describe la experiencia emocional
- No diagnostiques, no patologices, no des soluciones
- Tono neutral, claro y descriptivo
- OBLIGATORIO: usa la palabra inventada dentro de la definición (por ejemplo: "[palabra] nombra un estado en el que...")

REFLEXIÓN:
- OBLIGATORIO: usa la palabra inventada al menos una vez
- Valida la experiencia e invita a observarla, no a actuar de inmediato
- Sugiere cuidado sin imponerlo; evita imperativos fuertes, frases de coaching y promesas de mejora

FILOSOFÍA:
- No das respuestas ni corriges emociones
- Solo pones nombre a lo que ya estaba ahí

{}"#,
            Self::context(),
            Self::words_block(words),
            Self::json_instruction("definición_que_usa_la_palabra")
        )
    }
}
