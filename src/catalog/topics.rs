use crate::models::{TheologicalTopic, TopicView};

/// The theological topic index.
pub fn theological_topics() -> Vec<TheologicalTopic> {
    vec![
        TheologicalTopic {
            id: "grace".into(),
            name: "Graça".into(),
            description: "A graça é o favor imerecido de Deus para com a humanidade. \
                          Em Efésios 2:8-9, Paulo escreve: 'Porque pela graça sois \
                          salvos, por meio da fé; e isto não vem de vós, é dom de \
                          Deus. Não vem das obras, para que ninguém se glorie.' A \
                          graça é um conceito fundamental no cristianismo, \
                          representando o amor e a misericórdia de Deus oferecidos \
                          livremente, não com base em mérito humano."
                .into(),
            alternate_views: Vec::new(),
        },
        TheologicalTopic {
            id: "faith".into(),
            name: "Fé".into(),
            description: "A fé é descrita em Hebreus 11:1 como 'o firme fundamento \
                          das coisas que se esperam e a prova das coisas que não se \
                          veem'. É a confiança em Deus e em Suas promessas, mesmo \
                          quando não podemos ver ou entender completamente. A fé não \
                          é simplesmente conhecimento intelectual, mas confiança \
                          ativa que resulta em obediência."
                .into(),
            alternate_views: Vec::new(),
        },
        TheologicalTopic {
            id: "sin".into(),
            name: "Pecado".into(),
            description: "O pecado é definido como a transgressão da lei de Deus \
                          (1 João 3:4) e a falha em viver segundo o padrão divino \
                          (Romanos 3:23). O pecado entrou no mundo através de Adão e \
                          Eva (Gênesis 3) e afeta toda a humanidade (Romanos 5:12). \
                          A Bíblia ensina que o pecado separa as pessoas de Deus, \
                          mas através de Cristo, há redenção e reconciliação."
                .into(),
            alternate_views: Vec::new(),
        },
        TheologicalTopic {
            id: "salvation".into(),
            name: "Salvação".into(),
            description: "A salvação refere-se à libertação do pecado e suas \
                          consequências através da obra redentora de Jesus Cristo. \
                          Inclui justificação (ser declarado justo diante de Deus), \
                          santificação (processo de crescimento na semelhança com \
                          Cristo) e glorificação (estado final de perfeição com \
                          Deus). A salvação é pela graça, mediante a fé em Cristo \
                          (Efésios 2:8-9)."
                .into(),
            alternate_views: vec![
                TopicView {
                    title: "Visão Arminiana".into(),
                    description: "Enfatiza o livre-arbítrio humano na aceitação da \
                                  salvação. Sustenta que a graça de Deus pode ser \
                                  resistida e que a salvação pode ser perdida se a \
                                  pessoa se afastar da fé."
                        .into(),
                },
                TopicView {
                    title: "Visão Calvinista".into(),
                    description: "Enfatiza a soberania de Deus na eleição. Sustenta \
                                  que Deus predestina quem será salvo, e que a graça \
                                  é irresistível para os eleitos. A salvação, uma vez \
                                  recebida, não pode ser perdida."
                        .into(),
                },
            ],
        },
        TheologicalTopic {
            id: "eschatology".into(),
            name: "Escatologia".into(),
            description: "Escatologia é o estudo das últimas coisas, incluindo a \
                          segunda vinda de Cristo, ressurreição, julgamento final e o \
                          estado eterno. As profecias sobre estes eventos são \
                          encontradas em vários livros bíblicos, incluindo Daniel, os \
                          evangelhos e Apocalipse."
                .into(),
            alternate_views: vec![
                TopicView {
                    title: "Pré-Milenismo".into(),
                    description: "Cristo retornará antes do milênio (período de mil \
                                  anos de seu reinado na Terra). O arrebatamento da \
                                  igreja ocorrerá antes da grande tribulação."
                        .into(),
                },
                TopicView {
                    title: "Pós-Milenismo".into(),
                    description: "Cristo retornará após o milênio, que é visto como \
                                  um período de prosperidade e domínio cristão \
                                  gradual no mundo."
                        .into(),
                },
                TopicView {
                    title: "Amilenismo".into(),
                    description: "O milênio é simbólico, representando o reino atual \
                                  de Cristo na igreja. Não haverá um reinado literal \
                                  de mil anos na Terra."
                        .into(),
                },
            ],
        },
    ]
}
