//! Reading plan transitions.
//!
//! Pure functions over [`ReadingPlan`]; the store wraps them with lookup
//! and locking. Durations and initial readings are fixed per plan kind.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{PlanKind, ReadingPlan};

const TIME_PLAN_DAYS: u32 = 365;
const THEME_PLAN_DAYS: u32 = 14;

/// Create a plan from user input. Rejects a name that is blank after
/// trimming.
pub fn create(name: &str, kind: PlanKind) -> Result<ReadingPlan> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("plan name must not be blank"));
    }

    let (total_days, current, next) = match kind {
        PlanKind::Time => (TIME_PLAN_DAYS, "Gênesis 1", "Gênesis 2-3"),
        PlanKind::Theme => (THEME_PLAN_DAYS, "Introdução ao tema", "Versículos principais"),
    };

    Ok(ReadingPlan {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        progress_percent: 0,
        current_reading: current.to_string(),
        next_reading: next.to_string(),
        days_completed: 0,
        total_days,
        created_at: Utc::now(),
    })
}

/// Mark the current reading as done and advance the pointers.
///
/// `days_completed` deliberately keeps counting past `total_days`; capping
/// it is a product decision that has not been made (see DESIGN.md).
pub fn advance(plan: &mut ReadingPlan) {
    plan.days_completed += 1;
    plan.progress_percent = progress_percent(plan.days_completed, plan.total_days);
    plan.current_reading = std::mem::replace(
        &mut plan.next_reading,
        match plan.kind {
            PlanKind::Time => "Próximo capítulo".to_string(),
            PlanKind::Theme => "Próximo estudo".to_string(),
        },
    );
}

/// `round(days_completed / total_days * 100)`.
pub fn progress_percent(days_completed: u32, total_days: u32) -> u32 {
    ((days_completed as f64 / total_days as f64) * 100.0).round() as u32
}

/// The two example plans every session starts with.
pub fn seed_plans() -> Vec<ReadingPlan> {
    let now = Utc::now();
    vec![
        ReadingPlan {
            id: Uuid::new_v4(),
            name: "Novo Testamento em 3 meses".into(),
            kind: PlanKind::Time,
            progress_percent: 35,
            current_reading: "Mateus 12".into(),
            next_reading: "Mateus 13-14".into(),
            days_completed: 15,
            total_days: 90,
            created_at: now,
        },
        ReadingPlan {
            id: Uuid::new_v4(),
            name: "Estudo sobre Graça".into(),
            kind: PlanKind::Theme,
            progress_percent: 50,
            current_reading: "Efésios 2".into(),
            next_reading: "Romanos 5-6".into(),
            days_completed: 7,
            total_days: 14,
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_blank_name() {
        assert!(create("   ", PlanKind::Time).is_err());
        assert!(create("", PlanKind::Theme).is_err());
    }

    #[test]
    fn create_trims_the_name() {
        let plan = create("  Teste  ", PlanKind::Time).unwrap();
        assert_eq!(plan.name, "Teste");
    }

    #[test]
    fn time_plans_run_a_year_theme_plans_two_weeks() {
        let time = create("Ano", PlanKind::Time).unwrap();
        assert_eq!(time.total_days, 365);
        assert_eq!(time.current_reading, "Gênesis 1");

        let theme = create("Graça", PlanKind::Theme).unwrap();
        assert_eq!(theme.total_days, 14);
        assert_eq!(theme.current_reading, "Introdução ao tema");
    }

    #[test]
    fn advance_moves_next_into_current() {
        let mut plan = create("Teste", PlanKind::Time).unwrap();
        advance(&mut plan);
        assert_eq!(plan.days_completed, 1);
        assert_eq!(plan.current_reading, "Gênesis 2-3");
        assert_eq!(plan.next_reading, "Próximo capítulo");
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(progress_percent(1, 365), 0);
        assert_eq!(progress_percent(37, 365), 10);
        assert_eq!(progress_percent(7, 14), 50);
        assert_eq!(progress_percent(365, 365), 100);
    }

    #[test]
    fn advance_does_not_cap_at_total() {
        let mut plan = create("Curto", PlanKind::Theme).unwrap();
        for _ in 0..20 {
            advance(&mut plan);
        }
        assert_eq!(plan.days_completed, 20);
        assert_eq!(plan.progress_percent, progress_percent(20, 14));
    }

    #[test]
    fn percent_tracks_a_long_overrun() {
        let mut plan = create("Longo", PlanKind::Theme).unwrap();
        for _ in 0..36 {
            advance(&mut plan);
        }
        // 36/14 rounds to 257; nothing clamps or wraps it.
        assert_eq!(plan.progress_percent, 257);
        assert_eq!(progress_percent(36, 14), 257);
    }
}
