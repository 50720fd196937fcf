//! Question answering over a small keyword rulebook.
//!
//! The first rule whose keyword group hits the lowercased question wins;
//! later groups are never consulted. Questions that hit nothing get the
//! generic encouragement answer.

use crate::error::{Error, Result};

pub const FORGIVENESS_ANSWER: &str = "O perdão é um tema central no cristianismo. \
     Jesus nos ensina em Mateus 6:14-15: 'Porque, se perdoardes aos homens as suas \
     ofensas, também vosso Pai celestial vos perdoará a vós; se, porém, não \
     perdoardes aos homens as suas ofensas, tampouco vosso Pai vos perdoará as \
     vossas ofensas.' Perdoar não significa esquecer ou aceitar o erro, mas \
     liberar o ressentimento e confiar a justiça a Deus.";

pub const PRAYER_ANSWER: &str = "A oração é a nossa comunicação com Deus. Em \
     1 Tessalonicenses 5:17, Paulo nos exorta a 'orar sem cessar'. A oração não \
     precisa de fórmulas: fale com Deus com sinceridade, apresente gratidão, \
     confissão, e interceda pelos outros. Jesus nos deixou o Pai Nosso (Mateus \
     6:9-13) como modelo.";

pub const SUFFERING_ANSWER: &str = "O sofrimento é uma realidade que a Bíblia não \
     ignora. Romanos 8:18 diz: 'Porque para mim tenho por certo que as aflições \
     deste tempo presente não são para comparar com a glória que em nós há de ser \
     revelada.' Jesus também afirmou em João 16:33: 'No mundo tereis aflições, mas \
     tende bom ânimo; eu venci o mundo.' Deus não promete ausência de dor, mas \
     promete presença e propósito em meio a ela.";

pub const DEFAULT_ANSWER: &str = "Essa é uma excelente pergunta para aprofundar na \
     Palavra. A Bíblia nos convida a buscar: 'Pedi, e dar-se-vos-á; buscai e \
     encontrareis; batei, e abrir-se-vos-á' (Mateus 7:7). Recomendo estudar as \
     Escrituras sobre esse tema e conversar com líderes da sua comunidade de fé.";

/// Keyword groups in priority order. The first group with a hit decides.
const RULES: &[(&[&str], &str)] = &[
    (&["perdão", "perdoar"], FORGIVENESS_ANSWER),
    (&["oração", "rezar", "orar"], PRAYER_ANSWER),
    (&["sofrimento", "dor", "problema"], SUFFERING_ANSWER),
];

/// Answer a question. Rejects a question that is blank after trimming.
pub fn respond(question: &str) -> Result<&'static str> {
    let question = question.trim();
    if question.is_empty() {
        return Err(Error::validation("question must not be blank"));
    }
    let lowered = question.to_lowercase();
    for (keywords, answer) in RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return Ok(answer);
        }
    }
    Ok(DEFAULT_ANSWER)
}
