//! Prompt text sent to the content generator.

use biolab_games::TopicId;

pub(super) const SYSTEM_PROMPT: &str = "Eres un profesor de ciencias naturales que prepara \
material educativo en español para estudiantes de secundaria. Responde únicamente con JSON \
válido, sin texto adicional ni bloques de código.";

pub(super) fn definitions(topic: TopicId) -> String {
    format!(
        "Genera 10 definiciones clave e importantes sobre el tema: \"{}\". \
         Deben ser precisas y educativas para estudiantes de ciencias naturales. \
         Formato: un arreglo JSON de objetos {{\"term\": \"...\", \"definition\": \"...\"}}.",
        topic.subject()
    )
}

pub(super) fn quiz(topic: TopicId) -> String {
    format!(
        "Genera 20 preguntas de opción múltiple tipo quiz sobre: \"{}\". \
         Cada pregunta debe tener 4 opciones y una explicación educativa. \
         Formato: un arreglo JSON de objetos {{\"id\": 1, \"question\": \"...\", \
         \"options\": [\"...\", \"...\", \"...\", \"...\"], \"correctAnswer\": 0, \
         \"explanation\": \"...\"}} donde correctAnswer es el índice 0-3 de la opción correcta.",
        topic.subject()
    )
}

pub(super) fn jeopardy_board() -> String {
    "Genera un tablero de Jeopardy con 5 categorías basadas en reproducción humana \
     (Feto, Menstruación, Masculino, Femenino, General). Para cada categoría genera 3 \
     preguntas con dificultad creciente (100, 200, 300 puntos) y respuestas cortas. \
     Formato: un arreglo JSON de objetos {\"category\": \"...\", \"questions\": \
     [{\"points\": 100, \"question\": \"...\", \"answer\": \"...\"}]}."
        .to_string()
}

pub(super) fn feud_question() -> String {
    "Genera una pregunta estilo \"100 Latinos Dicen\" relacionada con la reproducción \
     humana o la anatomía, por ejemplo \"Menciona un síntoma común del embarazo\". \
     Provee 5 respuestas populares de una o dos palabras con puntajes simulados cuya suma \
     se acerque a 100. Formato: {\"question\": \"...\", \"answers\": \
     [{\"answer\": \"...\", \"points\": 40}]}."
        .to_string()
}

pub(super) fn trivia_pair() -> String {
    "Genera una pregunta de trivia sobre reproducción humana cuya respuesta sea una sola \
     palabra. Formato: {\"question\": \"...\", \"answer\": \"...\"}."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_prompts_name_the_subject() {
        assert!(definitions(TopicId::Menstrual).contains("Ciclo menstrual"));
        assert!(quiz(TopicId::FetalDev).contains("Etapas de desarrollo del feto"));
    }
}
