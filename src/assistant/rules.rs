use crate::error::AssistantError;
use serde::{Deserialize, Serialize};

/// What the assistant understood a message to be about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Services,
    JobPostings,
    Registration,
    JobNotifications,
    PostJob,
    PostService,
    EditJob,
    EditService,
    ViewJobDetails,
    ViewServiceDetails,
    JobSearchFilters,
    ServiceSearchFilters,
    CommonQuestions,
    Testimonials,
    SubmitRating,
    Commenting,
    Replying,
    /// Nothing matched
    Fallback,
}

impl Intent {
    /// The canned answer for this intent
    pub fn reply(self) -> &'static str {
        match self {
            Intent::Greeting => "¡Hola! ¿Cómo puedo asistirte hoy?",
            Intent::Services => "Ofrecemos una variedad de servicios: carpintería, plomería, electricidad, programación, y más. ¿En cuál estás interesado?",
            Intent::JobPostings => "Puedes buscar empleos en nuestra plataforma navegando a la sección de búsqueda de empleos. ¿Te gustaría recibir notificaciones de nuevos empleos?",
            Intent::Registration => "Para registrarte, por favor visita nuestra página de registro y completa el formulario.",
            Intent::JobNotifications => "Para suscribirte a las notificaciones de nuevos empleos, ve a la página del empleo de tu interés y haz clic en 'Suscribirse a notificaciones'.",
            Intent::PostJob => "Para publicar un empleo, navega a la página 'Ofrecer Empleo' y completa el formulario con la información del empleo.",
            Intent::PostService => "Para ofrecer un servicio, navega a la página 'Ofrecer Servicio' y completa el formulario con la información del servicio.",
            Intent::EditJob => "Para editar un empleo, ve a la sección 'Tus Empleos', selecciona el empleo que deseas editar y realiza los cambios necesarios.",
            Intent::EditService => "Para editar un servicio, ve a la sección 'Tus Servicios', selecciona el servicio que deseas editar y realiza los cambios necesarios.",
            Intent::ViewJobDetails => "Para ver los detalles de un empleo, haz clic en el título del empleo en la lista de empleos disponibles.",
            Intent::ViewServiceDetails => "Para ver los detalles de un servicio, haz clic en el título del servicio en la lista de servicios disponibles.",
            Intent::JobSearchFilters => "Para filtrar la búsqueda de empleos, usa los filtros disponibles como empresa, rango de salarios, disponibilidad y ubicación.",
            Intent::ServiceSearchFilters => "Para filtrar la búsqueda de servicios, usa los filtros disponibles como tipo de servicio, costo, disponibilidad y ubicación.",
            Intent::CommonQuestions => "En la sección de Preguntas Frecuentes puedes encontrar respuestas a las preguntas más comunes.",
            Intent::Testimonials => "Puedes leer testimonios de otros usuarios en la sección de Testimonios.",
            Intent::SubmitRating => "Para calificar un servicio o empleo, navega a la página de detalles y selecciona la calificación que deseas dar.",
            Intent::Commenting => "Para comentar en un servicio, navega a la página de detalles del servicio y escribe tu comentario en la sección de comentarios.",
            Intent::Replying => "Para responder a un comentario, haz clic en el botón de responder debajo del comentario y escribe tu respuesta.",
            Intent::Fallback => "Lo siento, no entiendo tu pregunta. ¿Podrías reformularla?",
        }
    }
}

/// Keyword triggers of the built-in table, in resolution order.
///
/// Order is behaviour: a message that hits several rows gets the first one.
const STANDARD_RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hola", "hi", "hello"]),
    (Intent::Services, &["servicios"]),
    (Intent::JobPostings, &["empleos", "trabajos"]),
    (Intent::Registration, &["registrar", "registro"]),
    (Intent::JobNotifications, &["notificaciones"]),
    (Intent::PostJob, &["publicar empleo"]),
    (Intent::PostService, &["ofrecer servicio"]),
    (Intent::EditJob, &["editar empleo"]),
    (Intent::EditService, &["editar servicio"]),
    (Intent::ViewJobDetails, &["detalles del empleo"]),
    (Intent::ViewServiceDetails, &["detalles del servicio"]),
    (Intent::JobSearchFilters, &["filtros de búsqueda de empleos"]),
    (Intent::ServiceSearchFilters, &["filtros de búsqueda de servicios"]),
    (Intent::CommonQuestions, &["preguntas frecuentes"]),
    (Intent::Testimonials, &["testimonios"]),
    (Intent::SubmitRating, &["calificar", "rating"]),
    (Intent::Commenting, &["comentar", "comentarios"]),
    (Intent::Replying, &["responder"]),
];

/// A keyword set and the intent it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    intent: Intent,
    triggers: Vec<String>,
}

impl IntentRule {
    /// Keywords are stored lower-cased; at least one non-empty keyword is required.
    pub fn new<I, S>(intent: Intent, triggers: I) -> Result<Self, AssistantError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let triggers: Vec<String> = triggers
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();

        if triggers.is_empty() || triggers.iter().any(|t| t.is_empty()) {
            return Err(AssistantError::EmptyTrigger(format!("{intent:?}")));
        }

        Ok(Self { intent, triggers })
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// True when the already lower-cased text contains any trigger
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}

/// Ordered rules, fixed at construction, with an implicit final fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRuleTable {
    rules: Vec<IntentRule>,
}

impl IntentRuleTable {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// The marketplace assistant's table
    pub fn standard() -> Self {
        let rules = STANDARD_RULES
            .iter()
            .map(|(intent, triggers)| IntentRule {
                intent: *intent,
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// First rule in table order wins; no match falls back.
    pub fn resolve(&self, normalized: &str) -> Intent {
        self.rules
            .iter()
            .find(|rule| rule.matches(normalized))
            .map(IntentRule::intent)
            .unwrap_or(Intent::Fallback)
    }
}

impl Default for IntentRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_keeps_declared_order() {
        let order: Vec<Intent> = IntentRuleTable::standard().rules().iter().map(|r| r.intent()).collect();
        assert_eq!(
            order,
            vec![
                Intent::Greeting,
                Intent::Services,
                Intent::JobPostings,
                Intent::Registration,
                Intent::JobNotifications,
                Intent::PostJob,
                Intent::PostService,
                Intent::EditJob,
                Intent::EditService,
                Intent::ViewJobDetails,
                Intent::ViewServiceDetails,
                Intent::JobSearchFilters,
                Intent::ServiceSearchFilters,
                Intent::CommonQuestions,
                Intent::Testimonials,
                Intent::SubmitRating,
                Intent::Commenting,
                Intent::Replying,
            ]
        );
    }

    #[test]
    fn rules_need_keywords() {
        let none: [&str; 0] = [];
        assert_eq!(
            IntentRule::new(Intent::Greeting, none),
            Err(AssistantError::EmptyTrigger("Greeting".to_string()))
        );
        assert!(IntentRule::new(Intent::Greeting, ["hola", ""]).is_err());
        assert_eq!(
            IntentRule::new(Intent::Greeting, ["HOLA"]).unwrap().triggers(),
            &["hola".to_string()]
        );
    }

    #[test]
    fn earlier_rule_shadows_later_one() {
        let table = IntentRuleTable::new(vec![
            IntentRule::new(Intent::Greeting, ["hola"]).unwrap(),
            IntentRule::new(Intent::JobPostings, ["empleos"]).unwrap(),
        ]);
        assert_eq!(table.resolve("hola, busco empleos"), Intent::Greeting);
        assert_eq!(table.resolve("busco empleos"), Intent::JobPostings);

        let swapped = IntentRuleTable::new(table.rules().iter().rev().cloned().collect());
        assert_eq!(swapped.resolve("hola, busco empleos"), Intent::JobPostings);
    }

    #[test]
    fn empty_table_always_falls_back() {
        assert_eq!(IntentRuleTable::new(Vec::new()).resolve("hola"), Intent::Fallback);
    }
}
