//! End-to-end tests for the combat engine
//!
//! These drive a full match the way a presentation layer would: build a
//! duel from catalog data, resolve actions with scripted or seeded dice,
//! advance turns, and read the notification log.

use duel_arena::catalog;
use duel_arena::combat::{
    Archetype, ArchetypeDef, CombatEvent, Duel, DuelState, EffectKind, EffectSpec, EventLog,
    ScriptedDice, SeededDice, SkillDef, TargetMode, TurnResult,
};
use duel_arena::core::{EngineError, PlayerId};
use std::sync::Arc;

/// Route the engine's debug output through the test harness. Safe to call
/// from every test; only the first call installs the subscriber.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("duel_arena=debug")
        .with_test_writer()
        .try_init();
}

fn skill(name: &str, damage_min: u32, damage_max: u32, hit_bonus: u32) -> SkillDef {
    SkillDef {
        name: name.into(),
        damage_min,
        damage_max,
        hit_bonus,
        charges: None,
        target: TargetMode::Enemy,
        effect: None,
        icon: String::new(),
        description: String::new(),
    }
}

/// Unarmored test class so defense rolls equal the raw die
fn dueler() -> Arc<Archetype> {
    let def = ArchetypeDef {
        name: "Dueler".into(),
        max_health: 100,
        base_armor: 0,
        skills: vec![
            skill("Jab", 10, 20, 5),
            skill("Wild Swing", 0, 100, 0),
            SkillDef {
                charges: Some(3),
                ..skill("Trick", 15, 15, 20)
            },
            SkillDef {
                charges: Some(2),
                effect: Some(EffectSpec {
                    kind: EffectKind::Stun,
                    duration: 1,
                }),
                ..skill("Pommel", 5, 5, 20)
            },
            SkillDef {
                charges: Some(2),
                effect: Some(EffectSpec {
                    kind: EffectKind::Riposte,
                    duration: 1,
                }),
                ..skill("Parry Stance", 5, 5, 20)
            },
            SkillDef {
                charges: Some(2),
                effect: Some(EffectSpec {
                    kind: EffectKind::Burn,
                    duration: 2,
                }),
                ..skill("Torch", 5, 90, 20)
            },
        ],
        icon: String::new(),
        style: String::new(),
    };
    Arc::new(Archetype::new(def).unwrap())
}

/// Fresh match with the first turn already handed to Player One
fn started_duel(log: &mut EventLog) -> Duel {
    let mut duel = Duel::new(dueler(), "Anna", dueler(), "Bertil").unwrap();
    duel.advance_turn(log).unwrap();
    duel
}

#[test]
fn test_name_validation_at_construction() {
    let err = Duel::new(dueler(), "A", dueler(), "Bertil").unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    let err = Duel::new(dueler(), "Anna", dueler(), "this name is far too long").unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));
}

#[test]
fn test_first_turn_goes_to_player_one() {
    let mut log = EventLog::new();
    let mut duel = Duel::new(dueler(), "Anna", dueler(), "Bertil").unwrap();
    assert_eq!(duel.state(), DuelState::AwaitingFirstTurn);
    assert!(duel.current_actor().is_none());

    let result = duel.advance_turn(&mut log).unwrap();
    assert_eq!(
        result,
        TurnResult::TurnStarted {
            actor: PlayerId::One,
            round: 1
        }
    );
    assert_eq!(duel.current_actor().unwrap().name(), "Anna");
    assert_eq!(duel.opponent().unwrap().name(), "Bertil");
}

#[test]
fn test_resolve_before_first_turn_fails() {
    let mut log = EventLog::new();
    let mut dice = ScriptedDice::new([10, 10, 10]);
    let mut duel = Duel::new(dueler(), "Anna", dueler(), "Bertil").unwrap();
    assert!(matches!(
        duel.resolve_action("Jab", &mut dice, &mut log),
        Err(EngineError::NoActiveTurn)
    ));
}

#[test]
fn test_hit_when_attack_roll_meets_defense() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // damage 20, attack die 15 (+5 -> 20), defense die 18 (+0) -> hit
    let mut dice = ScriptedDice::new([20, 15, 18]);
    let outcome = duel.resolve_action("Jab", &mut dice, &mut log).unwrap();

    assert!(!outcome.missed);
    assert_eq!(outcome.applied, Some(20));
    let rolls = outcome.rolls.unwrap();
    assert_eq!(rolls.attack, 20);
    assert_eq!(rolls.defense, 18);
    assert_eq!(duel.combatant(PlayerId::Two).health(), 80);
}

#[test]
fn test_miss_when_defense_roll_wins() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // damage 20 is drawn but discarded: attack die 10 (+0) vs defense 12
    let mut dice = ScriptedDice::new([20, 10, 12]);
    let outcome = duel
        .resolve_action("Wild Swing", &mut dice, &mut log)
        .unwrap();

    assert!(outcome.missed);
    assert_eq!(outcome.applied, None);
    assert_eq!(duel.combatant(PlayerId::Two).health(), 100);
    assert!(duel.combatant(PlayerId::Two).status_effects().is_empty());
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, CombatEvent::Miss { attack_roll: 10, defense_roll: 12, .. })));
}

#[test]
fn test_charges_exhaust_after_three_uses() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    for expected_health in [85, 70, 55] {
        let mut dice = ScriptedDice::new([15, 20, 1]);
        let outcome = duel.resolve_action("Trick", &mut dice, &mut log).unwrap();
        assert_eq!(outcome.applied, Some(15));
        assert_eq!(duel.combatant(PlayerId::Two).health(), expected_health);
    }

    let mut dice = ScriptedDice::new([15, 20, 1]);
    let err = duel.resolve_action("Trick", &mut dice, &mut log).unwrap_err();
    assert!(matches!(err, EngineError::ChargeExhausted(name) if name == "Trick"));
    // Failed use mutates nothing
    assert_eq!(duel.combatant(PlayerId::Two).health(), 55);
}

#[test]
fn test_unknown_skill_rejected() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);
    let mut dice = ScriptedDice::new([1, 1, 1]);
    assert!(matches!(
        duel.resolve_action("Fireball", &mut dice, &mut log),
        Err(EngineError::UnknownSkill(_))
    ));
}

#[test]
fn test_riposte_retaliates_within_one_resolution() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // Anna lands Parry Stance, arming Riposte on herself (the attacker)
    let mut dice = ScriptedDice::new([5, 20, 1]);
    duel.resolve_action("Parry Stance", &mut dice, &mut log)
        .unwrap();
    assert!(duel
        .combatant(PlayerId::One)
        .has_status_effect(EffectKind::Riposte));

    // Bertil's counterattack lands for 20 and eats 15 retaliation
    duel.advance_turn(&mut log).unwrap();
    let mut dice = ScriptedDice::new([20, 20, 1]);
    let outcome = duel.resolve_action("Jab", &mut dice, &mut log).unwrap();

    assert_eq!(outcome.applied, Some(20));
    assert_eq!(duel.combatant(PlayerId::One).health(), 100 - 20);
    assert_eq!(duel.combatant(PlayerId::Two).health(), 95 - 15);
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, CombatEvent::Riposted { amount: 15, .. })));
}

#[test]
fn test_stun_skips_turn_and_decays() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // Anna stuns Bertil for 1 round
    let mut dice = ScriptedDice::new([5, 20, 1]);
    duel.resolve_action("Pommel", &mut dice, &mut log).unwrap();
    assert!(duel
        .combatant(PlayerId::Two)
        .has_status_effect(EffectKind::Stun));

    // Bertil's turn is skipped entirely; play returns to Anna
    let result = duel.advance_turn(&mut log).unwrap();
    assert!(matches!(
        result,
        TurnResult::TurnStarted {
            actor: PlayerId::One,
            ..
        }
    ));
    assert_eq!(duel.current_actor().unwrap().name(), "Anna");
    assert!(!duel
        .combatant(PlayerId::Two)
        .has_status_effect(EffectKind::Stun));
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, CombatEvent::TurnSkipped { .. })));
    // The skipped player still took their (lost) turn
    assert_eq!(duel.combatant(PlayerId::Two).turns_taken(), 1);
}

#[test]
fn test_knockout_freezes_the_match() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // Bring Bertil to 10, then land 15 - health clamps at 0, not below
    let mut dice = ScriptedDice::new([90, 20, 1]);
    duel.resolve_action("Wild Swing", &mut dice, &mut log)
        .unwrap();
    assert_eq!(duel.combatant(PlayerId::Two).health(), 10);

    duel.advance_turn(&mut log).unwrap(); // Bertil (passes)
    duel.advance_turn(&mut log).unwrap(); // Anna
    let mut dice = ScriptedDice::new([15, 20, 1]);
    let outcome = duel
        .resolve_action("Wild Swing", &mut dice, &mut log)
        .unwrap();
    assert_eq!(outcome.applied, Some(10));
    assert_eq!(duel.combatant(PlayerId::Two).health(), 0);

    let result = duel.advance_turn(&mut log).unwrap();
    assert_eq!(
        result,
        TurnResult::GameOver {
            winner: PlayerId::One
        }
    );
    assert_eq!(duel.winner(), Some(PlayerId::One));
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, CombatEvent::GameOver { .. })));

    // Frozen: every further command fails
    let mut dice = ScriptedDice::new([1, 1, 1]);
    assert!(matches!(
        duel.resolve_action("Jab", &mut dice, &mut log),
        Err(EngineError::MatchAlreadyEnded)
    ));
    assert!(matches!(
        duel.advance_turn(&mut log),
        Err(EngineError::MatchAlreadyEnded)
    ));
}

#[test]
fn test_burn_tick_can_decide_the_match() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    // Torch brings Bertil to 15 with a 2-round burn
    let mut dice = ScriptedDice::new([85, 20, 1]);
    duel.resolve_action("Torch", &mut dice, &mut log).unwrap();
    assert_eq!(duel.combatant(PlayerId::Two).health(), 15);

    // Bertil's turn: burn ticks to 5. He whiffs an attack.
    duel.advance_turn(&mut log).unwrap();
    assert_eq!(duel.combatant(PlayerId::Two).health(), 5);
    let mut dice = ScriptedDice::new([10, 1, 20]);
    duel.resolve_action("Jab", &mut dice, &mut log).unwrap();

    // Anna passes; Bertil's next burn tick finishes him during advance
    duel.advance_turn(&mut log).unwrap();
    let result = duel.advance_turn(&mut log).unwrap();
    assert_eq!(
        result,
        TurnResult::GameOver {
            winner: PlayerId::One
        }
    );
    assert_eq!(duel.combatant(PlayerId::Two).health(), 0);
}

#[test]
fn test_round_counter_increments_when_both_have_acted() {
    let mut log = EventLog::new();
    let mut duel = Duel::new(dueler(), "Anna", dueler(), "Bertil").unwrap();

    assert_eq!(duel.round(), 0);
    duel.advance_turn(&mut log).unwrap(); // Anna, round 1
    assert_eq!(duel.round(), 1);
    duel.advance_turn(&mut log).unwrap(); // Bertil, still round 1
    assert_eq!(duel.round(), 1);
    duel.advance_turn(&mut log).unwrap(); // Anna again, round 2
    assert_eq!(duel.round(), 2);
}

#[test]
fn test_usable_skills_shrink_as_charges_spend() {
    let mut log = EventLog::new();
    let mut duel = started_duel(&mut log);

    assert_eq!(
        duel.current_actor().unwrap().usable_skills().unwrap().len(),
        6
    );
    for _ in 0..2 {
        let mut dice = ScriptedDice::new([5, 20, 1]);
        duel.resolve_action("Pommel", &mut dice, &mut log).unwrap();
    }
    let usable = duel.current_actor().unwrap().usable_skills().unwrap();
    assert_eq!(usable.len(), 5);
    assert!(!usable.iter().any(|s| s.name() == "Pommel"));
}

#[test]
fn test_self_heal_reports_post_cap_amount() {
    let rogue = catalog::by_name("Rogue").unwrap().unwrap();
    let mut duel = Duel::new(Arc::clone(&rogue), "Anna", rogue, "Bertil").unwrap();
    let mut log = EventLog::new();
    duel.advance_turn(&mut log).unwrap();

    // At full health a 30-35 potion applies 0; the roll is still drawn
    let mut dice = ScriptedDice::new([32]);
    let outcome = duel.resolve_action("Potion", &mut dice, &mut log).unwrap();
    assert_eq!(outcome.applied, Some(0));
    assert!(!outcome.missed);
    assert!(duel
        .combatant(PlayerId::One)
        .has_status_effect(EffectKind::Heal));
}

#[test]
fn test_builtin_catalog_match_runs_to_completion() {
    init_tracing();
    let warrior = catalog::by_name("Warrior").unwrap().unwrap();
    let rogue = catalog::by_name("Rogue").unwrap().unwrap();
    let mut duel = Duel::new(warrior, "Kristoffer", rogue, "Yasir").unwrap();

    let mut log = EventLog::new();
    let mut dice = SeededDice::from_seed(2024);

    // Both sides spam their first usable skill; a knockout must arrive
    // well within the turn budget.
    let mut finished = false;
    for _ in 0..400 {
        match duel.advance_turn(&mut log).unwrap() {
            TurnResult::GameOver { winner } => {
                assert_eq!(duel.winner(), Some(winner));
                finished = true;
                break;
            }
            TurnResult::TurnStarted { .. } => {
                let skill_name = duel.current_actor().unwrap().usable_skills().unwrap()[0]
                    .name()
                    .to_string();
                duel.resolve_action(&skill_name, &mut dice, &mut log)
                    .unwrap();
            }
        }
        for side in [PlayerId::One, PlayerId::Two] {
            let combatant = duel.combatant(side);
            assert!(combatant.health() <= combatant.max_health());
        }
    }
    assert!(finished, "match should reach a knockout");

    // Ordered log sanity: opens with the first turn, ends with the knockout
    assert!(matches!(
        log.events().first(),
        Some(CombatEvent::TurnStarted { round: 1, .. })
    ));
    assert!(matches!(
        log.events().last(),
        Some(CombatEvent::GameOver { .. })
    ));
}
