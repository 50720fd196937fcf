//! Canned assistant payloads.
//!
//! Example content standing in for a real generation backend. The lookup
//! rules (which query hits which payload) live here next to the payloads
//! themselves.

use crate::models::{
    Devotional, ExegesisReport, OriginalText, Profile, SearchKind, SearchResult, SermonOutline,
    SermonPoint,
};

fn result(
    verse: &str,
    reference: &str,
    context: Option<&str>,
    application: Option<&str>,
) -> SearchResult {
    SearchResult {
        verse: verse.into(),
        reference: reference.into(),
        context: context.map(Into::into),
        application: application.map(Into::into),
    }
}

/// Results per search mode. Each mode recognizes one query substring; any
/// other query falls back to the default verse.
pub fn search_results(query: &str, kind: SearchKind) -> Vec<SearchResult> {
    let lowered = query.to_lowercase();
    match kind {
        SearchKind::Keyword if lowered.contains("amor") => vec![
            result(
                "Porque Deus amou o mundo de tal maneira que deu o seu Filho \
                 unigênito, para que todo aquele que nele crê não pereça, mas \
                 tenha a vida eterna.",
                "João 3:16",
                Some("Jesus falando a Nicodemos sobre a salvação e o novo nascimento."),
                Some(
                    "Nos lembra do imenso amor de Deus e o sacrifício que Ele fez \
                     por nós.",
                ),
            ),
            result(
                "O amor é paciente, o amor é bondoso. Não inveja, não se \
                 vangloria, não se orgulha.",
                "1 Coríntios 13:4",
                Some("Paulo descreve as características do amor verdadeiro aos coríntios."),
                Some(
                    "Nos ensina como deve ser o amor cristão genuíno em nossas \
                     relações.",
                ),
            ),
        ],
        SearchKind::Theme if lowered.contains("paz") => vec![result(
            "Deixo-vos a paz, a minha paz vos dou. Não vo-la dou como o mundo a \
             dá. Não se turbe o vosso coração, nem se atemorize.",
            "João 14:27",
            Some("Jesus consola seus discípulos antes de sua crucificação."),
            Some(
                "A paz de Cristo é diferente da paz do mundo e permanece mesmo em \
                 tempos difíceis.",
            ),
        )],
        SearchKind::Question if lowered.contains("perdão") => vec![result(
            "Porque, se perdoardes aos homens as suas ofensas, também vosso Pai \
             celestial vos perdoará.",
            "Mateus 6:14",
            Some("Parte do Sermão do Monte, ensinando sobre a oração."),
            Some(
                "O perdão que oferecemos aos outros está conectado ao perdão que \
                 recebemos de Deus.",
            ),
        )],
        _ => vec![result(
            "Toda Escritura é inspirada por Deus e útil para o ensino, para a \
             repreensão, para a correção, para a educação na justiça.",
            "2 Timóteo 3:16",
            None,
            Some("A Bíblia é nossa fonte de verdade e orientação para a vida cristã."),
        )],
    }
}

/// Profile-specific devotionals. Adult, family and elderly profiles share
/// the default.
pub fn devotional_for(profile: Profile) -> Devotional {
    match profile {
        Profile::Young => Devotional {
            title: "Encontrando Propósito".into(),
            verse: "Não se deixem influenciar pelo padrão deste mundo, mas deixem \
                    que Deus os transforme pela renovação da sua mente."
                .into(),
            reference: "Romanos 12:2".into(),
            message: "Na era das redes sociais e pressão dos colegas, é fácil se \
                      comparar com outros e seguir tendências. Deus te convida a \
                      uma transformação mais profunda: a renovação da sua mente. \
                      Isso significa desenvolver uma perspectiva baseada nas \
                      verdades de Deus, não nas expectativas dos outros. Quando \
                      permitimos que Deus renove nossos pensamentos, descobrimos o \
                      propósito único que Ele tem para nossas vidas."
                .into(),
            prayer: "Senhor, ajuda-me a não seguir cegamente o que o mundo diz que \
                     devo ser. Renova minha mente para que eu possa discernir Tua \
                     vontade e viver no propósito que planejaste para mim. Amém."
                .into(),
            challenge: "Esta semana, identifique uma área onde você está sendo \
                        excessivamente influenciado pelas opiniões dos outros. \
                        Tire um tempo para buscar a perspectiva de Deus sobre isso \
                        na Bíblia."
                .into(),
        },
        Profile::Leader => Devotional {
            title: "Liderança Servidora".into(),
            verse: "O maior entre vocês deverá ser servo.".into(),
            reference: "Mateus 23:11".into(),
            message: "A verdadeira grandeza na liderança não está em títulos ou \
                      posições, mas na disposição de servir. Jesus virou o modelo \
                      de liderança do mundo de cabeça para baixo, ensinando que os \
                      maiores líderes são aqueles que servem mais. Como líder, seu \
                      impacto é mais profundo quando sua autoridade está \
                      alicerçada em humildade e seu foco está em elevar aqueles ao \
                      seu redor."
                .into(),
            prayer: "Pai, guarda-me do orgulho e da autoimportância em minha \
                     posição de liderança. Ensina-me a liderar como Jesus, \
                     priorizando as necessidades daqueles que lidero antes das \
                     minhas próprias. Amém."
                .into(),
            challenge: "Faça algo prático esta semana para servir alguém que você \
                        lidera, algo que normalmente poderia ser considerado \
                        'abaixo' da sua posição."
                .into(),
        },
        Profile::Couple => Devotional {
            title: "Crescendo Juntos em Graça".into(),
            verse: "Acima de tudo, amem-se profundamente uns aos outros, pois o \
                    amor cobre multidão de pecados."
                .into(),
            reference: "1 Pedro 4:8".into(),
            message: "No casamento, conhecemos tanto as melhores qualidades quanto \
                      as imperfeições um do outro. O amor verdadeiro não é cego a \
                      essas falhas, mas escolhe cobri-las com graça. Isto não \
                      significa ignorar problemas, mas abordar os desafios com um \
                      espírito de paciência e perdão. Quando vocês permitem que o \
                      amor supere as ofensas, criam um relacionamento onde ambos \
                      podem ser autênticos e crescer juntos."
                .into(),
            prayer: "Senhor, ajuda-nos a refletir Teu amor perdoador em nosso \
                     casamento. Quando nos magoamos, dá-nos a graça para escolher \
                     o amor acima do ressentimento. Amém."
                .into(),
            challenge: "Esta semana, conversem sobre algo que tem causado tensão \
                        no relacionamento, com o compromisso de ouvir \
                        completamente e responder com graça, não com defesa."
                .into(),
        },
        Profile::Adult | Profile::Family | Profile::Elderly => Devotional {
            title: "Paz nas Tempestades".into(),
            verse: "Deixo-vos a paz, a minha paz vos dou. Não vo-la dou como o \
                    mundo a dá. Não se turbe o vosso coração, nem se atemorize."
                .into(),
            reference: "João 14:27".into(),
            message: "A paz que Jesus oferece não depende das circunstâncias \
                      externas estarem calmas. É uma paz interior que permanece \
                      mesmo quando as tempestades da vida surgem. O mundo busca \
                      paz na ausência de problemas, mas Jesus promete paz em meio \
                      às dificuldades. Esta paz vem da confiança em que Ele está \
                      no controle e que Seu propósito prevalecerá além do que \
                      conseguimos enxergar no momento."
                .into(),
            prayer: "Senhor Jesus, recebo a paz que só Tu podes dar. Quando as \
                     circunstâncias ao meu redor parecem caóticas, ajuda-me a \
                     ancorar meu coração na Tua presença e nas Tuas promessas. \
                     Amém."
                .into(),
            challenge: "Identifique uma situação que está tirando sua paz \
                        atualmente. Escreva três verdades da Palavra de Deus que \
                        você pode lembrar quando se sentir ansioso sobre essa \
                        situação."
                .into(),
        },
    }
}

/// Outline template with the theme interpolated into the title.
pub fn sermon_for(theme: &str) -> SermonOutline {
    SermonOutline {
        title: format!("{theme}: Caminhando na Verdade"),
        introduction: "Vivemos em um mundo onde a verdade é frequentemente \
                       relativizada. As escrituras nos chamam a viver de acordo \
                       com a verdade de Deus, que é imutável e eterna. Hoje vamos \
                       explorar como podemos entender e aplicar esta verdade em \
                       nossas vidas diárias."
            .into(),
        main_points: vec![
            SermonPoint {
                title: "Conhecendo a Verdade".into(),
                verses: "João 8:32 - 'E conhecereis a verdade, e a verdade vos \
                         libertará.'"
                    .into(),
                application: "A verdade de Deus nos liberta das mentiras que nos \
                              prendem. Precisamos estudar as escrituras \
                              diariamente para conhecer esta verdade."
                    .into(),
            },
            SermonPoint {
                title: "Vivendo na Verdade".into(),
                verses: "Efésios 4:25 - 'Por isso, deixai a mentira e falai a \
                         verdade cada um com o seu próximo, porque somos membros \
                         uns dos outros.'"
                    .into(),
                application: "Viver na verdade significa ser honesto em todas as \
                              áreas de nossa vida, reconhecendo que somos parte \
                              de um corpo e nossas ações afetam uns aos outros."
                    .into(),
            },
            SermonPoint {
                title: "Defendendo a Verdade".into(),
                verses: "1 Pedro 3:15 - 'Antes, santificai a Cristo como Senhor \
                         em vossos corações; e estai sempre preparados para \
                         responder com mansidão e temor a todo aquele que vos \
                         pedir a razão da esperança que há em vós.'"
                    .into(),
                application: "Devemos estar prontos para defender a verdade com \
                              amor e respeito, sempre preparados para explicar no \
                              que cremos e por quê."
                    .into(),
            },
        ],
        conclusion: "A verdade de Deus não é apenas um conjunto de fatos para \
                     acreditarmos, mas um caminho para seguirmos. Ao conhecer, \
                     viver e defender a verdade, nos tornamos testemunhas \
                     eficazes do evangelho em um mundo confuso. Que possamos ser \
                     pessoas comprometidas com a verdade em tudo o que fazemos."
            .into(),
    }
}

/// Full reports exist for two references; everything else gets the
/// placeholder asking for a valid reference.
pub fn exegesis_for(reference: &str) -> ExegesisReport {
    let lowered = reference.to_lowercase();
    if lowered.contains("joão 3:16") {
        ExegesisReport {
            original: OriginalText {
                text: "Οὕτως γὰρ ἠγάπησεν ὁ θεὸς τὸν κόσμον, ὥστε τὸν υἱὸν τὸν \
                       μονογενῆ ἔδωκεν, ἵνα πᾶς ὁ πιστεύων εἰς αὐτὸν μὴ ἀπόληται \
                       ἀλλ' ἔχῃ ζωὴν αἰώνιον."
                    .into(),
                translation: "Porque Deus amou o mundo de tal maneira que deu o \
                              seu Filho unigênito, para que todo aquele que nele \
                              crê não pereça, mas tenha a vida eterna."
                    .into(),
            },
            historical: "Este versículo se encontra no contexto da conversa de \
                         Jesus com Nicodemos, um líder religioso judeu que visitou \
                         Jesus à noite. No contexto do primeiro século, a ideia de \
                         um Messias que morreria pelos pecados do mundo era \
                         revolucionária e contrária às expectativas messiânicas \
                         judaicas da época."
                .into(),
            theological: "A palavra grega 'ἠγάπησεν' (ēgapēsen) indica um amor \
                          sacrificial, não simplesmente emocional. O termo \
                          'μονογενῆ' (monogenē) significa 'único' ou 'um de um \
                          tipo', enfatizando a singularidade de Jesus. O conceito \
                          de 'vida eterna' (ζωὴν αἰώνιον) não se refere apenas à \
                          duração infinita, mas à qualidade divina de vida."
                .into(),
            application: "Este versículo é central para a compreensão do evangelho \
                          cristão e revela o caráter amoroso de Deus. A resposta \
                          apropriada é a fé (πιστεύων - 'crer' no sentido de \
                          confiar plenamente) em Cristo, resultando em salvação da \
                          destruição espiritual e obtenção da vida eterna."
                .into(),
        }
    } else if lowered.contains("romanos 8:28") {
        ExegesisReport {
            original: OriginalText {
                text: "οἴδαμεν δὲ ὅτι τοῖς ἀγαπῶσιν τὸν θεὸν πάντα συνεργεῖ εἰς \
                       ἀγαθόν, τοῖς κατὰ πρόθεσιν κλητοῖς οὖσιν."
                    .into(),
                translation: "Sabemos que todas as coisas cooperam para o bem \
                              daqueles que amam a Deus, daqueles que são chamados \
                              segundo o seu propósito."
                    .into(),
            },
            historical: "Paulo escreveu esta carta aos cristãos em Roma por volta \
                         de 57 d.C., em um período de crescente perseguição. \
                         Muitos cristãos enfrentavam dificuldades e questionavam o \
                         propósito de Deus em meio ao sofrimento."
                .into(),
            theological: "O verbo 'συνεργεῖ' (synergei) significa 'trabalhar \
                          junto' e está no presente contínuo, indicando uma ação \
                          divina constante. A expressão 'κατὰ πρόθεσιν' (kata \
                          prothesin) refere-se ao propósito soberano e \
                          predeterminado de Deus."
                .into(),
            application: "Este versículo oferece conforto aos crentes em tempos de \
                          tribulação, assegurando que Deus está no controle mesmo \
                          nas circunstâncias adversas. Não promete ausência de \
                          dificuldades, mas garante que Deus pode usar todas as \
                          situações para realizar seus propósitos de bem na vida \
                          dos que o amam."
                .into(),
        }
    } else {
        ExegesisReport {
            original: OriginalText {
                text: "[Texto original aparecerá aqui]".into(),
                translation: "[Tradução aparecerá aqui]".into(),
            },
            historical: "Para receber análise histórica detalhada, por favor \
                         especifique uma referência bíblica válida."
                .into(),
            theological: "Para receber análise teológica detalhada, por favor \
                          especifique uma referência bíblica válida."
                .into(),
            application: "Para receber aplicações práticas detalhadas, por favor \
                          especifique uma referência bíblica válida."
                .into(),
        }
    }
}
