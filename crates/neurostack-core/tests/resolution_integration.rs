//! Integration tests for schedule resolution.
//!
//! Walks the reference protocol through representative days and hours and
//! checks the due list, mode flags and advisories end to end.

use neurostack_core::engine::{SATURDAY, SUNDAY};
use neurostack_core::{
    resolve, Catalog, CoreError, CycleState, ExclusionReason, InvalidInputError, PhaseTitle,
    ResolutionContext, ResolutionEngine,
};

const MONDAY: i32 = 0;
const TUESDAY: i32 = 1;
const WEDNESDAY: i32 = 2;
const FRIDAY: i32 = 4;

fn due_names(ctx: &ResolutionContext) -> Vec<String> {
    resolve(ctx)
        .unwrap()
        .due_items
        .into_iter()
        .map(|d| d.item.name)
        .collect()
}

#[test]
fn weekday_morning_with_all_cycles_on() {
    let ctx = ResolutionContext::new(9, WEDNESDAY, CycleState::new(true, true));
    let result = resolve(&ctx).unwrap();

    assert_eq!(result.active_phases, vec![PhaseTitle::Foundation, PhaseTitle::Learn]);
    assert!(!result.is_washout());
    assert!(result.is_due("Boron"));

    let learn = Catalog::reference().phase(PhaseTitle::Learn).unwrap();
    let due_learn: Vec<_> = result.due_in(PhaseTitle::Learn).collect();
    assert_eq!(due_learn.len(), learn.items.len());
    assert!(result.excluded.is_empty());
}

#[test]
fn saturday_morning_keeps_only_weekend_safe_items() {
    let ctx = ResolutionContext::new(9, SATURDAY, CycleState::new(true, true));
    let result = resolve(&ctx).unwrap();

    assert!(result.is_washout());
    assert!(result.due_items.iter().all(|d| d.item.safe_on_weekend));

    let due = due_names(&ctx);
    for survivor in [
        "Zinc",
        "B-Complex",
        "Tongkat Ali",
        "Boron",
        "Creatine",
        "ALCAR",
        "Lion's Mane",
        "Uridine",
    ] {
        assert!(due.iter().any(|n| n == survivor), "{survivor} should survive washout");
    }
    for paused in ["Alpha-GPC", "L-Tyrosine", "L-Theanine", "Caffeine"] {
        assert!(!due.iter().any(|n| n == paused), "{paused} should be paused");
        assert!(result
            .excluded
            .iter()
            .any(|e| e.item.name == paused && e.reason == ExclusionReason::Washout));
    }
}

#[test]
fn weekday_afternoon_warns_about_tyrosine_and_sabroxy() {
    let ctx = ResolutionContext::new(15, TUESDAY, CycleState::new(true, true));
    let result = resolve(&ctx).unwrap();

    assert_eq!(result.active_phases, vec![PhaseTitle::Perform]);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Tyrosine") && w.contains("Sabroxy")));
    assert_eq!(due_names(&ctx), vec!["Sabroxy", "Cordyceps", "Rhodiola"]);
}

#[test]
fn friday_evening_ashwagandha_override_off() {
    let ctx = ResolutionContext::new(21, FRIDAY, CycleState::new(true, false));
    let result = resolve(&ctx).unwrap();

    assert_eq!(result.active_phases, vec![PhaseTitle::Recover]);
    assert!(!result.is_washout());
    assert!(!result.is_due("Ashwagandha"));
    let held = result
        .excluded
        .iter()
        .find(|e| e.item.name == "Ashwagandha")
        .unwrap();
    assert_eq!(held.reason, ExclusionReason::AshwagandhaCycleOff);
}

#[test]
fn out_of_range_hours_are_rejected() {
    for hour in [24, -1] {
        let ctx = ResolutionContext::new(hour, MONDAY, CycleState::new(true, true));
        let err = resolve(&ctx).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(InvalidInputError::Hour(h)) if h == hour
        ));
    }
}

#[test]
fn out_of_range_weekday_is_rejected() {
    let ctx = ResolutionContext::new(9, 7, CycleState::new(true, true));
    assert!(matches!(
        resolve(&ctx).unwrap_err(),
        CoreError::InvalidInput(InvalidInputError::Weekday(7))
    ));
}

#[test]
fn weekend_afternoon_has_nothing_due_and_no_perform_warning() {
    let ctx = ResolutionContext::new(14, SUNDAY, CycleState::new(true, false));
    let result = resolve(&ctx).unwrap();
    assert!(result.due_items.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn weekday_defaults_match_the_five_on_two_off_rhythm() {
    let weekday = CycleState::for_weekday(FRIDAY, true).unwrap();
    assert!(
        due_names(&ResolutionContext::new(21, FRIDAY, weekday)).contains(&"Ashwagandha".into())
    );

    let weekend = CycleState::for_weekday(SATURDAY, true).unwrap();
    let result = resolve(&ResolutionContext::new(21, SATURDAY, weekend)).unwrap();
    // washout wins over the cycle rule when both apply
    let held = result.excluded.iter().find(|e| e.item.name == "Ashwagandha").unwrap();
    assert_eq!(held.reason, ExclusionReason::Washout);
}

#[test]
fn resolution_is_deterministic() {
    let engine = ResolutionEngine::default();
    for hour in 0..24 {
        for weekday in 0..7 {
            let cycles = CycleState::new(hour % 2 == 0, weekday % 3 == 0);
            let ctx = ResolutionContext::new(hour, weekday, cycles);
            assert_eq!(engine.resolve(&ctx).unwrap(), engine.resolve(&ctx).unwrap());
        }
    }
}

#[test]
fn parallel_callers_agree() {
    let engine = ResolutionEngine::default();
    let ctx = ResolutionContext::new(9, WEDNESDAY, CycleState::new(true, true));
    let expected = engine.resolve(&ctx).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.resolve(&ctx).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn custom_catalog_from_toml() {
    let text = r#"
        [[phases]]
        title = "Foundation"
        start_hour = 0
        end_hour = 12

        [[phases.items]]
        name = "Zinc"
        dosage = "15mg"
        safe_on_weekend = true

        [[phases]]
        title = "Recover"
        start_hour = 12
        end_hour = 24

        [[phases.items]]
        name = "Ashwagandha"
        dosage = "300mg"
        special_cycle = "ashwagandha"
    "#;
    let catalog = Catalog::from_toml_str(text).unwrap();
    let engine = ResolutionEngine::new(&catalog);

    let morning = engine
        .resolve(&ResolutionContext::new(11, MONDAY, CycleState::new(false, true)))
        .unwrap();
    assert_eq!(morning.active_phases, vec![PhaseTitle::Foundation]);
    assert!(morning.warnings.is_empty());

    let evening = engine
        .resolve(&ResolutionContext::new(12, MONDAY, CycleState::new(false, false)))
        .unwrap();
    assert!(evening.due_items.is_empty());
}
