use chrono::NaiveDate;

use crate::models::{ContentItem, ContentKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid catalog date")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The curated content library.
pub fn content_library() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".into(),
            title: "A Interpretação Bíblica através dos Séculos".into(),
            kind: ContentKind::Article,
            description: "Uma análise histórica dos métodos de interpretação \
                          bíblica desde os pais da igreja até os dias atuais."
                .into(),
            source: "Revista Teológica Brasileira".into(),
            url: None,
            published: date(2023, 3, 15),
            tags: tags(&["hermenêutica", "história", "interpretação"]),
        },
        ContentItem {
            id: "2".into(),
            title: "Reflexão sobre Salmos 23".into(),
            kind: ContentKind::Reflection,
            description: "Uma meditação profunda sobre as metáforas e aplicações \
                          do Salmo do Pastor para a vida contemporânea."
                .into(),
            source: "Pastor João Silva".into(),
            url: None,
            published: date(2023, 5, 22),
            tags: tags(&["salmos", "devoção", "conforto"]),
        },
        ContentItem {
            id: "3".into(),
            title: "As Parábolas de Jesus - Contexto Histórico".into(),
            kind: ContentKind::Video,
            description: "Série de vídeos explicando o contexto histórico-cultural \
                          das parábolas de Jesus e suas implicações."
                .into(),
            source: "Canal Teologia Prática".into(),
            url: Some("#".into()),
            published: date(2023, 2, 10),
            tags: tags(&["parábolas", "jesus", "novo testamento", "vídeo"]),
        },
        ContentItem {
            id: "4".into(),
            title: "Recursos para Estudo do Grego Bíblico".into(),
            kind: ContentKind::Link,
            description: "Compilação de ferramentas online e livros para o estudo \
                          do grego koiné do Novo Testamento."
                .into(),
            source: "Seminário Teológico".into(),
            url: Some("#".into()),
            published: date(2023, 4, 30),
            tags: tags(&["grego", "estudo bíblico", "recursos"]),
        },
        ContentItem {
            id: "5".into(),
            title: "A Teologia Paulina da Justificação".into(),
            kind: ContentKind::Article,
            description: "Um estudo aprofundado sobre o conceito de justificação \
                          nos escritos do apóstolo Paulo."
                .into(),
            source: "Revista Teológica Perspectivas".into(),
            url: None,
            published: date(2023, 1, 18),
            tags: tags(&["paulo", "justificação", "novo testamento", "teologia"]),
        },
    ]
}
