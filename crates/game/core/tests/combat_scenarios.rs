mod support;

use combat_core::{
    ActionRejection, CombatConfig, CombatEngine, CombatEvent, CombatOutcome, FixedRng, PcgRng,
    PlayerAction, ProviderError, ScriptedProvider, Side, SkillId, SpellDefinition, SpellEffect,
    SpellId, SpellTarget, StatusKind, resolve_combat,
};

use support::{brawler, catalog, env, goblin_scout, hero};

fn count(events: &[CombatEvent], pred: impl Fn(&CombatEvent) -> bool) -> usize {
    events.iter().filter(|event| pred(event)).count()
}

#[test]
fn one_exchange_stays_within_roll_bounds() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;

    for seed in 0..64 {
        let mut player = hero();
        let enemy = brawler(40, 2, 5).spawn();
        let mut provider = ScriptedProvider::new([PlayerAction::Attack]);

        let report = CombatEngine::new(env(&catalog, &rng, &config, seed), &mut player, enemy)
            .run(&mut provider);

        // The script runs dry at the start of round 2.
        assert_eq!(report.outcome, CombatOutcome::Error);
        assert_eq!(report.failure, Some(ProviderError::ScriptExhausted { round: 2 }));
        assert!((25..=28).contains(&player.health), "seed {seed}: {}", player.health);

        let critical = report
            .events
            .iter()
            .find_map(|event| match event {
                CombatEvent::Attack { critical, .. } => Some(*critical),
                _ => None,
            })
            .expect("attack event");
        let bounds = if critical { 31..=39 } else { 34..=39 };
        assert!(bounds.contains(&report.enemy_health), "seed {seed}: {}", report.enemy_health);
    }
}

#[test]
fn power_attack_without_momentum_keeps_the_turn() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero();
    let mut provider = ScriptedProvider::new([PlayerAction::PowerAttack, PlayerAction::Attack]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 7),
        &mut player,
        brawler(500, 1, 1).spawn(),
    )
    .run(&mut provider);

    assert!(report.events.contains(&CombatEvent::Rejected(
        ActionRejection::NotEnoughMomentum {
            required: 3,
            available: 0
        }
    )));
    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::Attack { .. })), 1);
    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::EnemyAttack { .. })), 1);
    assert_eq!(player.health, 29);
}

#[test]
fn skill_cooldown_blocks_reuse_until_it_runs_out() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let skill = SkillId::from("power_attack");
    let mut player = hero().with_skill("power_attack");
    let mut provider = ScriptedProvider::new([
        PlayerAction::UseSkill(skill.clone()),
        PlayerAction::UseSkill(skill.clone()),
        PlayerAction::Attack,
        PlayerAction::UseSkill(skill.clone()),
    ]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 11),
        &mut player,
        brawler(500, 1, 1).spawn(),
    )
    .run(&mut provider);

    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::SkillUsed { .. })), 2);
    assert!(report.events.contains(&CombatEvent::Rejected(
        ActionRejection::SkillOnCooldown {
            skill: skill.clone(),
            turns: 1
        }
    )));
    // Used in round 3 and ticked once at its end.
    assert_eq!(player.skill_cooldown(&skill), 1);
    assert_eq!(report.rounds, 4);
}

#[test]
fn shield_bash_stun_costs_the_enemy_its_turn() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = FixedRng(0);
    let mut player = hero().with_shield("wooden_shield").with_skill("shield_bash");
    let mut provider = ScriptedProvider::new([PlayerAction::UseSkill("shield_bash".into())]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 0),
        &mut player,
        brawler(20, 3, 3).spawn(),
    )
    .run(&mut provider);

    assert!(report.events.contains(&CombatEvent::Stunned {
        side: Side::Enemy,
        turns: 1
    }));
    assert!(report.events.contains(&CombatEvent::TurnSkipped { side: Side::Enemy }));
    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::EnemyAttack { .. })), 0);
    assert_eq!(player.health, 30);
    assert_eq!(player.skill_cooldown(&SkillId::from("shield_bash")), 2);
}

#[test]
fn shield_bash_needs_a_shield() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero().with_skill("shield_bash");
    let mut provider = ScriptedProvider::new([PlayerAction::UseSkill("shield_bash".into())]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 3),
        &mut player,
        brawler(20, 3, 3).spawn(),
    )
    .run(&mut provider);

    assert!(report.events.iter().any(|event| matches!(
        event,
        CombatEvent::Rejected(ActionRejection::MissingEquipment { .. })
    )));
    assert_eq!(report.rounds, 1);
    assert_eq!(player.health, 30);
}

#[test]
fn discounted_spell_cost_is_paid() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero().with_spell("mend");
    player.magic_efficiency = 1;
    let mut provider = ScriptedProvider::new([PlayerAction::CastSpell {
        spell: SpellId::from("mend"),
        target: None,
    }]);

    CombatEngine::new(env(&catalog, &rng, &config, 5), &mut player, brawler(20, 1, 1).spawn())
        .run(&mut provider);

    assert_eq!(player.mana, 8);
}

#[test]
fn unaffordable_spells_are_rejected() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero().with_spell("firebolt");
    player.mana = 4;
    let mut provider = ScriptedProvider::new([PlayerAction::CastSpell {
        spell: SpellId::from("firebolt"),
        target: None,
    }]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 5),
        &mut player,
        brawler(20, 1, 1).spawn(),
    )
    .run(&mut provider);

    assert!(report.events.contains(&CombatEvent::Rejected(ActionRejection::NoCastableSpell)));
    assert_eq!(player.mana, 4);
    assert_eq!(report.enemy_health, 20);
}

#[test]
fn potion_heals_and_is_consumed() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero().with_item("health_potion", 2);
    player.health = 15;
    let mut provider = ScriptedProvider::new([PlayerAction::UseItem("health_potion".into())]);

    CombatEngine::new(env(&catalog, &rng, &config, 9), &mut player, brawler(20, 1, 1).spawn())
        .run(&mut provider);

    assert_eq!(player.health, 24);
    assert_eq!(player.item_count(&"health_potion".into()), 1);
}

#[test]
fn unrecognized_item_still_spends_turn_and_unit() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero().with_item("odd_charm", 1);
    let mut provider = ScriptedProvider::new([PlayerAction::UseItem("odd_charm".into())]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 9),
        &mut player,
        brawler(20, 1, 1).spawn(),
    )
    .run(&mut provider);

    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::ItemHadNoEffect { .. })), 1);
    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::EnemyAttack { .. })), 1);
    assert!(player.inventory.is_empty());
}

#[test]
fn smoke_bomb_escape_ends_combat_as_fled() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = FixedRng(0);
    let mut player = hero().with_item("smoke_bomb", 1);
    let mut provider = ScriptedProvider::new([PlayerAction::UseItem("smoke_bomb".into())]);

    let outcome = resolve_combat(
        env(&catalog, &rng, &config, 0),
        &mut player,
        brawler(20, 1, 1).spawn(),
        &mut provider,
    );

    assert_eq!(outcome, CombatOutcome::Fled);
    assert!(player.inventory.is_empty());
}

#[test]
fn successful_flee_ends_combat() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = FixedRng(0);
    let mut player = hero();
    let mut provider = ScriptedProvider::new([PlayerAction::Flee]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 0),
        &mut player,
        brawler(20, 5, 5).spawn(),
    )
    .run(&mut provider);

    assert_eq!(report.outcome, CombatOutcome::Fled);
    assert_eq!(report.rounds, 1);
    assert_eq!(player.health, 30);
    assert!(report.loot.is_none());
}

#[test]
fn free_actions_do_not_spend_the_turn() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero();
    let mut provider = ScriptedProvider::new([
        PlayerAction::Analyze,
        PlayerAction::ChangeStance(combat_core::Stance::Defensive),
        PlayerAction::Attack,
    ]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 21),
        &mut player,
        brawler(50, 3, 3).spawn(),
    )
    .run(&mut provider);

    assert_eq!(report.rounds, 2);
    assert_eq!(count(&report.events, |e| matches!(e, CombatEvent::EnemyAnalyzed(_))), 1);
    // Defensive stance: 3 raw - 2 defense.
    assert_eq!(player.health, 29);
}

#[test]
fn victory_pays_out_experience() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero();
    let mut template = brawler(1, 1, 1);
    template.xp_value = 60;
    let mut provider = ScriptedProvider::new([PlayerAction::Attack]);

    let report = CombatEngine::new(env(&catalog, &rng, &config, 1), &mut player, template.spawn())
        .run(&mut provider);

    assert_eq!(report.outcome, CombatOutcome::Won);
    assert_eq!(report.enemy_health, 0);
    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 10);
    assert_eq!(player.xp_to_next_level, 75);
    assert_eq!(player.max_health, 40);
    assert_eq!(player.health, 40);
    assert_eq!(player.skill_points, 1);

    let progression = report.progression.expect("progression on a win");
    assert_eq!(progression.xp_gained, 60);
    assert_eq!(progression.level_ups.len(), 1);
    assert!(report.events.contains(&CombatEvent::NothingOfInterest));
}

#[test]
fn dropping_to_zero_health_loses() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero();
    player.health = 1;
    let mut provider = ScriptedProvider::repeat(PlayerAction::Attack, 5);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 2),
        &mut player,
        brawler(100, 5, 5).spawn(),
    )
    .run(&mut provider);

    assert_eq!(report.outcome, CombatOutcome::Lost);
    assert_eq!(player.health, 0);
    assert!(report.events.contains(&CombatEvent::PlayerDefeated));
    assert!(report.progression.is_none());
}

#[test]
fn same_seed_replays_identically() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;

    let play = || {
        let mut player = hero();
        let mut provider = ScriptedProvider::repeat(PlayerAction::Attack, 40);
        let report = CombatEngine::new(
            env(&catalog, &rng, &config, 4242),
            &mut player,
            goblin_scout().spawn(),
        )
        .run(&mut provider);
        (player, report)
    };

    let (first_player, first) = play();
    let (second_player, second) = play();
    assert_eq!(first, second);
    assert_eq!(first_player, second_player);
}

#[test]
fn provider_sees_every_event_in_order() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;
    let mut player = hero();
    let mut provider = ScriptedProvider::repeat(PlayerAction::Attack, 40);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 77),
        &mut player,
        goblin_scout().spawn(),
    )
    .run(&mut provider);

    assert_eq!(provider.seen(), report.events.as_slice());
    assert!(matches!(report.events.first(), Some(CombatEvent::CombatStarted { .. })));
}

#[test]
fn final_health_is_always_within_bounds() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let rng = PcgRng;

    for seed in 0..100 {
        let mut player = hero();
        let mut provider = ScriptedProvider::repeat(PlayerAction::Attack, 100);
        let report = CombatEngine::new(
            env(&catalog, &rng, &config, seed),
            &mut player,
            brawler(25, 2, 6).spawn(),
        )
        .run(&mut provider);

        assert!(player.health <= player.max_health);
        assert_eq!(report.enemy_health == 0, report.outcome == CombatOutcome::Won, "seed {seed}");
        assert_ne!(report.outcome, CombatOutcome::Error, "seed {seed}");
    }
}

#[test]
fn damage_over_time_finishes_the_enemy_at_round_start() {
    let catalog = catalog().with_spell(SpellDefinition {
        id: "venom_dart".into(),
        name: "Venom Dart".into(),
        description: String::new(),
        target: SpellTarget::Enemy,
        mana_cost: 2,
        effect: SpellEffect::OffenseDot {
            per_turn: 3,
            duration: 3,
        },
    });
    let config = CombatConfig::default();
    let rng = FixedRng(0);
    let mut player = hero().with_spell("venom_dart");
    let mut provider = ScriptedProvider::new([PlayerAction::CastSpell {
        spell: SpellId::from("venom_dart"),
        target: None,
    }]);

    let report = CombatEngine::new(
        env(&catalog, &rng, &config, 0),
        &mut player,
        brawler(3, 1, 1).spawn(),
    )
    .run(&mut provider);

    // The only scripted action is spent in round 1; round 2 never asks for one.
    assert_eq!(report.outcome, CombatOutcome::Won);
    assert_eq!(report.rounds, 2);
    assert_eq!(report.enemy_health, 0);
    assert_eq!(report.failure, None);
    assert_eq!(provider.remaining(), 0);
    assert_eq!(player.health, 29);
    assert!(report.events.contains(&CombatEvent::StatusTicked {
        side: Side::Enemy,
        status: "Venom Dart".into(),
        kind: StatusKind::DamageOverTime,
        amount: 3,
    }));
}
