//! The memorization quiz engine.
//!
//! A quiz moves through three states: idle (no quiz on screen), presented
//! (waiting for an answer) and answered (feedback shown). The store owns at
//! most one [`ActiveQuiz`] per session; `None` is the idle state.
//!
//! Randomness (quiz selection, word-pool shuffling) comes through an
//! injected [`Rng`] so tests can pin outcomes with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Expected, MemorizationVerse, QuizItem, QuizKind};

/// How much a correct answer advances the verse, and the ceiling.
const PROGRESS_STEP: u8 = 10;
const PROGRESS_MAX: u8 = 100;

/// A quiz in the presented or answered state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveQuiz {
    pub quiz: QuizItem,
    pub input: QuizInput,
    /// `Some` once the answer has been checked.
    pub feedback: Option<Feedback>,
}

/// The user's in-progress answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizInput {
    /// Free text (fill-blank) or a chosen option (multiple choice).
    Text { answer: String },
    /// Word-arrangement: a shuffled pool of one-shot tokens and the
    /// sequence built so far.
    Arrange {
        pool: Vec<ArrangeToken>,
        picked: Vec<String>,
    },
}

/// One selectable word in an arrangement pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangeToken {
    pub word: String,
    pub used: bool,
}

/// The result of checking an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
    /// Shown after an incorrect answer so the user can study it.
    pub expected: String,
}

/// Pick one of the verse's quizzes at random and present it.
///
/// Returns `None` when the verse has no quizzes — the session stays idle.
pub fn start(pool: &[QuizItem], verse_id: &str, rng: &mut impl Rng) -> Option<ActiveQuiz> {
    let candidates: Vec<&QuizItem> = pool.iter().filter(|q| q.verse_id == verse_id).collect();
    let quiz = (*candidates.choose(rng)?).clone();
    let input = fresh_input(&quiz, rng);
    Some(ActiveQuiz {
        quiz,
        input,
        feedback: None,
    })
}

fn fresh_input(quiz: &QuizItem, rng: &mut impl Rng) -> QuizInput {
    match quiz.kind {
        QuizKind::Arrange => {
            let mut words = quiz.options.clone();
            words.shuffle(rng);
            QuizInput::Arrange {
                pool: words
                    .into_iter()
                    .map(|word| ArrangeToken { word, used: false })
                    .collect(),
                picked: Vec::new(),
            }
        }
        QuizKind::FillBlank | QuizKind::MultipleChoice => QuizInput::Text {
            answer: String::new(),
        },
    }
}

impl ActiveQuiz {
    /// Replace the free-text or chosen-option answer.
    pub fn set_answer(&mut self, answer: &str) -> Result<()> {
        self.ensure_unanswered()?;
        match &mut self.input {
            QuizInput::Text { answer: current } => {
                *current = answer.to_string();
                Ok(())
            }
            QuizInput::Arrange { .. } => Err(Error::validation(
                "arrangement quizzes take tokens, not text",
            )),
        }
    }

    /// Move an unused pool token to the end of the picked sequence.
    pub fn pick_token(&mut self, index: usize) -> Result<()> {
        self.ensure_unanswered()?;
        match &mut self.input {
            QuizInput::Arrange { pool, picked } => {
                let token = pool
                    .get_mut(index)
                    .ok_or_else(|| Error::not_found("no such token"))?;
                if token.used {
                    return Err(Error::validation("token already used"));
                }
                token.used = true;
                picked.push(token.word.clone());
                Ok(())
            }
            QuizInput::Text { .. } => Err(Error::validation("quiz has no token pool")),
        }
    }

    /// Remove a picked word, returning its token to the pool.
    pub fn unpick_token(&mut self, index: usize) -> Result<()> {
        self.ensure_unanswered()?;
        match &mut self.input {
            QuizInput::Arrange { pool, picked } => {
                if index >= picked.len() {
                    return Err(Error::not_found("no such picked word"));
                }
                let word = picked.remove(index);
                if let Some(token) = pool.iter_mut().find(|t| t.word == word && t.used) {
                    token.used = false;
                }
                Ok(())
            }
            QuizInput::Text { .. } => Err(Error::validation("quiz has no token pool")),
        }
    }

    /// Check the answer, record feedback, and on success bump the verse.
    ///
    /// Text answers compare case-insensitively; arrangement answers compare
    /// their space-joined form exactly. A correct answer moves the verse's
    /// progress up one step (capped) and stamps the practice time.
    pub fn submit(&mut self, verse: &mut MemorizationVerse) -> Result<Feedback> {
        self.ensure_unanswered()?;

        let feedback = match (&self.input, &self.quiz.expected) {
            (QuizInput::Text { answer }, Expected::Text(expected)) => {
                if answer.is_empty() {
                    return Err(Error::validation("answer must not be empty"));
                }
                let correct = answer.to_lowercase() == expected.to_lowercase();
                Feedback {
                    correct,
                    message: if correct {
                        "Correto! Muito bem!".into()
                    } else {
                        "Não foi dessa vez. Tente novamente!".into()
                    },
                    expected: expected.clone(),
                }
            }
            (QuizInput::Arrange { picked, .. }, Expected::Sequence(expected)) => {
                if picked.is_empty() {
                    return Err(Error::validation("pick at least one word"));
                }
                let correct = picked.join(" ") == expected.join(" ");
                Feedback {
                    correct,
                    message: if correct {
                        "Sequência correta! Parabéns!".into()
                    } else {
                        "Sequência incorreta. Tente outra vez!".into()
                    },
                    expected: expected.join(" "),
                }
            }
            _ => {
                return Err(Error::validation(
                    "quiz input does not match its expected answer shape",
                ))
            }
        };

        if feedback.correct {
            verse.progress = verse.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
            verse.last_practiced = Some(chrono::Utc::now());
        }

        self.feedback = Some(feedback.clone());
        Ok(feedback)
    }

    /// Clear feedback and input for another attempt. Arrangement pools are
    /// reshuffled.
    pub fn retry(&mut self, rng: &mut impl Rng) {
        self.feedback = None;
        self.input = fresh_input(&self.quiz, rng);
    }

    fn ensure_unanswered(&self) -> Result<()> {
        if self.feedback.is_some() {
            return Err(Error::validation("quiz already answered; retry or close"));
        }
        Ok(())
    }
}

/// Ladder label for the session's average verse progress.
pub fn level_for(verses: &[MemorizationVerse]) -> &'static str {
    if verses.is_empty() {
        return "Iniciante";
    }
    let avg = verses.iter().map(|v| v.progress as u32).sum::<u32>() / verses.len() as u32;
    match avg {
        90.. => "Mestre da Palavra",
        70..=89 => "Avançado",
        50..=69 => "Intermediário",
        30..=49 => "Aprendiz",
        _ => "Iniciante",
    }
}

/// Sum of all verse progress values.
pub fn total_points(verses: &[MemorizationVerse]) -> u32 {
    verses.iter().map(|v| v.progress as u32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{memorization_verses, quiz_pool};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn start_returns_none_for_verse_without_quizzes() {
        let mut rng = rng();
        assert!(start(&quiz_pool(), "verse3", &mut rng).is_none());
    }

    #[test]
    fn start_only_picks_quizzes_for_the_verse() {
        let pool = quiz_pool();
        let mut rng = rng();
        for _ in 0..20 {
            let active = start(&pool, "verse1", &mut rng).unwrap();
            assert_eq!(active.quiz.verse_id, "verse1");
        }
    }

    #[test]
    fn text_answers_compare_case_insensitively() {
        let pool = quiz_pool();
        let mut verse = memorization_verses().remove(0);
        let quiz = pool.iter().find(|q| q.id == "quiz1").unwrap().clone();
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz,
            feedback: None,
        };
        active.set_answer("fILHO").unwrap();
        let feedback = active.submit(&mut verse).unwrap();
        assert!(feedback.correct);
    }

    #[test]
    fn arrangement_is_case_and_order_sensitive() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz3").unwrap().clone();
        let mut verse = memorization_verses().remove(1);
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz: quiz.clone(),
            feedback: None,
        };

        // Pick every token in expected order by locating it in the pool.
        let expected = match &quiz.expected {
            Expected::Sequence(words) => words.clone(),
            _ => unreachable!(),
        };
        for word in &expected {
            let index = match &active.input {
                QuizInput::Arrange { pool, .. } => {
                    pool.iter().position(|t| !t.used && t.word == *word).unwrap()
                }
                _ => unreachable!(),
            };
            active.pick_token(index).unwrap();
        }

        let feedback = active.submit(&mut verse).unwrap();
        assert!(feedback.correct);
    }

    #[test]
    fn wrong_order_is_incorrect_and_leaves_progress_alone() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz3").unwrap().clone();
        let mut verse = memorization_verses().remove(1);
        let before = verse.progress;
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz,
            feedback: None,
        };
        active.pick_token(0).unwrap();
        active.pick_token(1).unwrap();
        let feedback = active.submit(&mut verse).unwrap();
        assert!(!feedback.correct);
        assert_eq!(verse.progress, before);
    }

    #[test]
    fn correct_answer_adds_ten_capped_at_hundred() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz1").unwrap().clone();
        let mut verse = memorization_verses().remove(0);
        verse.progress = 95;
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz,
            feedback: None,
        };
        active.set_answer("Filho").unwrap();
        active.submit(&mut verse).unwrap();
        assert_eq!(verse.progress, 100);
        assert!(verse.last_practiced.is_some());
    }

    #[test]
    fn unpick_returns_the_token_to_the_pool() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz3").unwrap().clone();
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz,
            feedback: None,
        };
        active.pick_token(2).unwrap();
        assert!(active.pick_token(2).is_err());
        active.unpick_token(0).unwrap();
        active.pick_token(2).unwrap();
    }

    #[test]
    fn retry_clears_feedback_and_reshuffles() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz3").unwrap().clone();
        let mut verse = memorization_verses().remove(1);
        let mut rng = rng();
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng),
            quiz,
            feedback: None,
        };
        active.pick_token(0).unwrap();
        active.submit(&mut verse).unwrap();
        assert!(active.feedback.is_some());

        active.retry(&mut rng);
        assert!(active.feedback.is_none());
        match &active.input {
            QuizInput::Arrange { pool, picked } => {
                assert!(picked.is_empty());
                assert!(pool.iter().all(|t| !t.used));
            }
            _ => panic!("expected arrangement input"),
        }
    }

    #[test]
    fn submitting_twice_is_rejected() {
        let pool = quiz_pool();
        let quiz = pool.iter().find(|q| q.id == "quiz1").unwrap().clone();
        let mut verse = memorization_verses().remove(0);
        let mut active = ActiveQuiz {
            input: fresh_input(&quiz, &mut rng()),
            quiz,
            feedback: None,
        };
        active.set_answer("Filho").unwrap();
        active.submit(&mut verse).unwrap();
        assert!(active.submit(&mut verse).is_err());
    }

    #[test]
    fn level_ladder_matches_average_progress() {
        let mut verses = memorization_verses();
        // Seeded averages: (80 + 60 + 40) / 3 = 60.
        assert_eq!(level_for(&verses), "Intermediário");
        for v in &mut verses {
            v.progress = 95;
        }
        assert_eq!(level_for(&verses), "Mestre da Palavra");
        assert_eq!(total_points(&verses), 285);
    }
}
