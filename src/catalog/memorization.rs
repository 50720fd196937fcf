use chrono::TimeZone;
use chrono::Utc;

use crate::models::{Expected, MemorizationVerse, QuizItem, QuizKind};

fn words(values: &[&str]) -> Vec<String> {
    values.iter().map(|w| w.to_string()).collect()
}

/// The verses seeded into a session's memorization list.
pub fn memorization_verses() -> Vec<MemorizationVerse> {
    vec![
        MemorizationVerse {
            id: "verse1".into(),
            reference: "João 3:16".into(),
            text: "Porque Deus amou o mundo de tal maneira que deu o seu Filho \
                   unigênito, para que todo aquele que nele crê não pereça, mas \
                   tenha a vida eterna."
                .into(),
            progress: 80,
            last_practiced: Utc.with_ymd_and_hms(2025, 4, 15, 0, 0, 0).single(),
        },
        MemorizationVerse {
            id: "verse2".into(),
            reference: "Salmos 23:1".into(),
            text: "O Senhor é o meu pastor, nada me faltará.".into(),
            progress: 60,
            last_practiced: Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).single(),
        },
        MemorizationVerse {
            id: "verse3".into(),
            reference: "Filipenses 4:13".into(),
            text: "Posso todas as coisas naquele que me fortalece.".into(),
            progress: 40,
            last_practiced: Utc.with_ymd_and_hms(2025, 4, 5, 0, 0, 0).single(),
        },
    ]
}

/// The quiz pool. Many items may reference the same verse; one is picked
/// at random when a quiz starts.
pub fn quiz_pool() -> Vec<QuizItem> {
    vec![
        QuizItem {
            id: "quiz1".into(),
            verse_id: "verse1".into(),
            kind: QuizKind::FillBlank,
            prompt: "Porque Deus amou o mundo de tal maneira que deu o seu _____ \
                     unigênito, para que todo aquele que nele crê não pereça, mas \
                     tenha a vida eterna."
                .into(),
            options: Vec::new(),
            expected: Expected::Text("Filho".into()),
        },
        QuizItem {
            id: "quiz2".into(),
            verse_id: "verse1".into(),
            kind: QuizKind::MultipleChoice,
            prompt: "Complete a frase: 'Porque Deus amou o mundo de tal maneira \
                     que...'"
                .into(),
            options: vec![
                "deu o seu Filho unigênito, para que todo aquele que nele crê não \
                 pereça, mas tenha a vida eterna."
                    .into(),
                "enviou seu único Filho, para que todos tenham salvação.".into(),
                "entregou seu Filho amado, para que os pecadores sejam salvos.".into(),
                "mandou seu Filho, para que todos sejam redimidos.".into(),
            ],
            expected: Expected::Text(
                "deu o seu Filho unigênito, para que todo aquele que nele crê não \
                 pereça, mas tenha a vida eterna."
                    .into(),
            ),
        },
        QuizItem {
            id: "quiz3".into(),
            verse_id: "verse2".into(),
            kind: QuizKind::Arrange,
            prompt: "Arrange as palavras na ordem correta:".into(),
            options: words(&[
                "nada", "O", "pastor,", "é", "me", "faltará.", "Senhor", "o", "meu",
            ]),
            expected: Expected::Sequence(words(&[
                "O", "Senhor", "é", "o", "meu", "pastor,", "nada", "me", "faltará.",
            ])),
        },
    ]
}
