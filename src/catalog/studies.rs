use crate::models::{BibleStudy, StudyQuestion};

fn question(id: &str, text: &str, reflection: &str) -> StudyQuestion {
    StudyQuestion {
        id: id.into(),
        text: text.into(),
        reflection: reflection.into(),
        answered: false,
        user_answer: None,
    }
}

/// The guided studies seeded into a session.
pub fn bible_studies() -> Vec<BibleStudy> {
    vec![
        BibleStudy {
            id: "1".into(),
            title: "As Bem-Aventuranças".into(),
            description: "Um estudo sobre Mateus 5 e as bênçãos prometidas por Jesus."
                .into(),
            for_groups: false,
            questions: vec![
                question(
                    "q1",
                    "O que significa ser 'pobre de espírito'?",
                    "Considere como a humildade se relaciona com a vida espiritual.",
                ),
                question(
                    "q2",
                    "Como podemos ser 'pacificadores' em nosso contexto atual?",
                    "Pense em exemplos práticos para promover a paz em seu círculo \
                     de influência.",
                ),
                question(
                    "q3",
                    "De que maneira as bem-aventuranças contrastam com os valores da \
                     sociedade?",
                    "Compare os valores exaltados por Jesus com aqueles celebrados \
                     pela cultura contemporânea.",
                ),
            ],
        },
        BibleStudy {
            id: "2".into(),
            title: "Os Frutos do Espírito".into(),
            description: "Explorando Gálatas 5 e as características produzidas pelo \
                          Espírito Santo."
                .into(),
            for_groups: true,
            questions: vec![
                question(
                    "q1",
                    "Como o amor é demonstrado como fruto do Espírito em ações \
                     práticas?",
                    "Pense em exemplos concretos de como este fruto se manifesta no \
                     dia a dia.",
                ),
                question(
                    "q2",
                    "Qual a diferença entre alegria como fruto do Espírito e \
                     felicidade mundana?",
                    "Reflita sobre a natureza permanente da alegria espiritual versus \
                     os altos e baixos emocionais.",
                ),
                question(
                    "q3",
                    "De que maneira o domínio próprio nos ajuda a crescer nos outros \
                     frutos?",
                    "Considere como a disciplina espiritual favorece o \
                     desenvolvimento do caráter cristão.",
                ),
            ],
        },
    ]
}
