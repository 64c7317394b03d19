//! Prompt construction for the executive summary request.
//!
//! The restructurer depends on the model following these instructions to
//! the letter (bold-only topic headers, non-bold sub-bullets), so the
//! wording here is a fixed contract, not tunable copy.

/// Fixed persona for the summarization call.
pub const SYSTEM_PROMPT: &str = "Eres un asistente experto en analizar documentos gubernamentales \
                                 y generar resúmenes ejecutivos claros en formato Markdown.";

/// How the summary bullets should be organized. A fixed construction-time
/// choice, never input-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    /// Bold topic headers with non-bold sub-bullets (default).
    #[default]
    Grouped,
    /// One bullet per input title, no grouping.
    PerTitle,
}

const GROUPED_RULE: &str = "3.  **Agrupa por Tema**: Agrupa los títulos relacionados bajo un \
                            punto principal en negrita (`**Tema Principal**`) y luego detalla con \
                            sub-puntos. Los subpuntos NO deben estar en negrita.";

const PER_TITLE_RULE: &str = "3.  **Un Punto por Título**: Genera exactamente un bullet point \
                              por cada título, en el mismo orden, sin agrupar ni anidar.";

/// Build the user prompt embedding every title as a dash-prefixed line.
///
/// Pure function; no title is ever truncated.
pub fn build_summary_prompt(titles: &[String], style: PromptStyle) -> String {
    let listed = titles
        .iter()
        .map(|title| format!("- {}", title))
        .collect::<Vec<_>>()
        .join("\n");

    let grouping_rule = match style {
        PromptStyle::Grouped => GROUPED_RULE,
        PromptStyle::PerTitle => PER_TITLE_RULE,
    };

    format!(
        "Tu tarea es analizar la siguiente lista de títulos de publicaciones del Diario Oficial \
         de la Federación y generar un resumen ejecutivo.\n\
         Sigue estas reglas ESTRICTAMENTE:\n\
         1.  **Formato de Salida**: Tu respuesta debe ser ÚNICAMENTE una lista de puntos \
         (bullet points) en formato Markdown.\n\
         2.  **Sin Introducción ni Conclusión**: Tu respuesta debe empezar directamente con el \
         primer bullet point (`-`).\n\
         {}\n\
         4.  **Lenguaje Claro**: Explica cada punto de forma clara y concisa.\n\
         Ahora, genera el resumen para la siguiente lista de publicaciones:\n\
         {}",
        grouping_rule, listed
    )
}
