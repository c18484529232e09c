//! Fixed-content provider for offline play and tests.

use super::ContentProvider;
use async_trait::async_trait;
use biolab_games::{
    Definition, FeudAnswer, FeudQuestion, JeopardyCategory, JeopardyClue, QuizQuestion, TopicId,
    TriviaPair,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, instrument};

/// Serves the same prepared content every time.
///
/// Feud questions and trivia pairs rotate through their lists so repeated
/// rounds see different material. Every fetch is counted.
#[derive(Debug, Default)]
pub struct ScriptedContentProvider {
    definitions: Vec<Definition>,
    quiz: Vec<QuizQuestion>,
    board: Vec<JeopardyCategory>,
    feud: Vec<FeudQuestion>,
    trivia: Vec<TriviaPair>,
    feud_cursor: AtomicUsize,
    trivia_cursor: AtomicUsize,
    fetches: AtomicUsize,
}

impl ScriptedContentProvider {
    /// A provider with nothing to serve; every fetch comes back empty.
    #[instrument]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the definitions list.
    pub fn with_definitions(mut self, definitions: Vec<Definition>) -> Self {
        self.definitions = definitions;
        self
    }

    /// Replaces the quiz.
    pub fn with_quiz(mut self, quiz: Vec<QuizQuestion>) -> Self {
        self.quiz = quiz;
        self
    }

    /// Replaces the Jeopardy board.
    pub fn with_board(mut self, board: Vec<JeopardyCategory>) -> Self {
        self.board = board;
        self
    }

    /// Replaces the feud questions.
    pub fn with_feud(mut self, feud: Vec<FeudQuestion>) -> Self {
        self.feud = feud;
        self
    }

    /// Replaces the trivia pairs.
    pub fn with_trivia(mut self, trivia: Vec<TriviaPair>) -> Self {
        self.trivia = trivia;
        self
    }

    /// Number of fetches served so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    fn next_of<T: Clone>(&self, items: &[T], cursor: &AtomicUsize) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = cursor.fetch_add(1, Ordering::Relaxed) % items.len();
        items.get(i).cloned()
    }

    fn count(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Built-in sample content, used by `--offline`.
    #[instrument]
    pub fn sample() -> Self {
        let definitions = vec![
            Definition::new("Gameto", "Célula sexual haploide: óvulo en la mujer, espermatozoide en el hombre."),
            Definition::new("Fecundación", "Unión del óvulo y el espermatozoide que forma el cigoto."),
            Definition::new("Cigoto", "Primera célula diploide del nuevo individuo."),
            Definition::new("Placenta", "Órgano que permite el intercambio de nutrientes y gases entre madre y feto."),
            Definition::new("Ovulacion", "Liberación de un óvulo maduro desde el ovario."),
            Definition::new("Testiculo", "Glándula masculina que produce espermatozoides y testosterona."),
            Definition::new("Endometrio", "Capa interna del útero que se engrosa cada ciclo."),
            Definition::new("Menstruacion", "Descamación del endometrio cuando no hay embarazo."),
            Definition::new("Embrion", "Etapa del desarrollo desde la fecundación hasta la octava semana."),
            Definition::new("Feto", "Ser en desarrollo desde la novena semana hasta el nacimiento."),
        ];

        let quiz = vec![
            QuizQuestion::new(
                1,
                "¿Dónde ocurre normalmente la fecundación?",
                vec!["Útero".into(), "Trompa de Falopio".into(), "Ovario".into(), "Vagina".into()],
                1,
                Some("La fecundación suele ocurrir en el tercio externo de la trompa.".into()),
            ),
            QuizQuestion::new(
                2,
                "¿Qué hormona mantiene el endometrio tras la ovulación?",
                vec!["FSH".into(), "Testosterona".into(), "Progesterona".into(), "Oxitocina".into()],
                2,
                Some("El cuerpo lúteo secreta progesterona.".into()),
            ),
            QuizQuestion::new(
                3,
                "¿Dónde se producen los espermatozoides?",
                vec!["Próstata".into(), "Epidídimo".into(), "Uretra".into(), "Túbulos seminíferos".into()],
                3,
                Some("La espermatogénesis ocurre en los túbulos seminíferos del testículo.".into()),
            ),
            QuizQuestion::new(
                4,
                "¿Cuánto dura en promedio un ciclo menstrual?",
                vec!["28 días".into(), "14 días".into(), "40 días".into(), "7 días".into()],
                0,
                None,
            ),
        ];

        let clue = |points, question: &str, answer: &str| JeopardyClue::new(points, question, answer);
        let board = vec![
            JeopardyCategory::new("Feto", vec![
                clue(100, "Órgano que nutre al feto", "Placenta"),
                clue(200, "Cordón que une feto y placenta", "Umbilical"),
                clue(300, "Líquido que rodea al feto", "Amniótico"),
            ]),
            JeopardyCategory::new("Menstruación", vec![
                clue(100, "Duración típica del ciclo en días", "28"),
                clue(200, "Liberación del óvulo", "Ovulación"),
                clue(300, "Hormona que dispara la ovulación", "LH"),
            ]),
            JeopardyCategory::new("Masculino", vec![
                clue(100, "Gameto masculino", "Espermatozoide"),
                clue(200, "Glándula que aporta líquido seminal bajo la vejiga", "Próstata"),
                clue(300, "Conducto donde maduran los espermatozoides", "Epidídimo"),
            ]),
            JeopardyCategory::new("Femenino", vec![
                clue(100, "Órgano donde se implanta el embrión", "Útero"),
                clue(200, "Glándula que produce óvulos", "Ovario"),
                clue(300, "Capa interna del útero", "Endometrio"),
            ]),
            JeopardyCategory::new("General", vec![
                clue(100, "Célula resultante de la fecundación", "Cigoto"),
                clue(200, "Número de cromosomas de un gameto humano", "23"),
                clue(300, "Semanas de un embarazo a término", "40"),
            ]),
        ];

        let feud = vec![
            FeudQuestion::new(
                "Menciona un síntoma común del embarazo",
                vec![
                    FeudAnswer::new("Náuseas", 38),
                    FeudAnswer::new("Cansancio", 24),
                    FeudAnswer::new("Antojos", 18),
                    FeudAnswer::new("Mareos", 12),
                    FeudAnswer::new("Dolor de espalda", 8),
                ],
            ),
            FeudQuestion::new(
                "Menciona una parte del aparato reproductor femenino",
                vec![
                    FeudAnswer::new("Útero", 35),
                    FeudAnswer::new("Ovarios", 30),
                    FeudAnswer::new("Vagina", 18),
                    FeudAnswer::new("Trompas", 12),
                    FeudAnswer::new("Cérvix", 5),
                ],
            ),
        ];

        let trivia = vec![
            TriviaPair::new("¿Qué órgano produce los óvulos?", "Ovario"),
            TriviaPair::new("¿Cómo se llama la célula formada tras la fecundación?", "Cigoto"),
            TriviaPair::new("¿Qué hormona masculina producen los testículos?", "Testosterona"),
            TriviaPair::new("¿En qué órgano se desarrolla el feto?", "Útero"),
        ];

        Self::empty()
            .with_definitions(definitions)
            .with_quiz(quiz)
            .with_board(board)
            .with_feud(feud)
            .with_trivia(trivia)
    }
}

#[async_trait]
impl ContentProvider for ScriptedContentProvider {
    async fn fetch_definitions(&self, topic: TopicId) -> Vec<Definition> {
        self.count();
        debug!(%topic, count = self.definitions.len(), "Serving scripted definitions");
        self.definitions.clone()
    }

    async fn fetch_quiz(&self, topic: TopicId) -> Vec<QuizQuestion> {
        self.count();
        debug!(%topic, count = self.quiz.len(), "Serving scripted quiz");
        self.quiz.clone()
    }

    async fn fetch_jeopardy_board(&self) -> Vec<JeopardyCategory> {
        self.count();
        self.board.clone()
    }

    async fn fetch_feud_question(&self) -> Option<FeudQuestion> {
        self.count();
        self.next_of(&self.feud, &self.feud_cursor)
    }

    async fn fetch_trivia_pair(&self) -> Option<TriviaPair> {
        self.count();
        self.next_of(&self.trivia, &self.trivia_cursor)
    }
}
