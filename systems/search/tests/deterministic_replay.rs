use quoridor_core::{AgentConfig, Command, Controller, Event, GameConfig, PlayerId};
use quoridor_game::{self as game, query, Game};
use quoridor_system_search::{Agent, SeededSampler};

const TURNS: usize = 60;

#[test]
fn self_play_replays_identically_for_a_seed() {
    let first = self_play(0x00c0_ffee);
    let second = self_play(0x00c0_ffee);

    assert_eq!(first, second, "replay diverged between runs");
    assert!(
        !first.iter().any(is_rejection),
        "agents only submit legal actions"
    );
}

#[test]
fn self_play_keeps_every_goal_reachable() {
    let log = self_play(9);

    let actions = log.iter().filter(|event| is_action(event)).count();
    assert!(actions > 0);
}

fn is_rejection(event: &Event) -> bool {
    matches!(
        event,
        Event::ActionRejected { .. } | Event::PassRejected { .. }
    )
}

fn is_action(event: &Event) -> bool {
    matches!(event, Event::WallPlaced { .. } | Event::PawnMoved { .. })
}

fn self_play(seed: u64) -> Vec<Event> {
    let config = GameConfig {
        board_size: 7,
        agent: AgentConfig {
            depth: 2,
            wall_sample_limit: 4,
        },
        seed,
        ..GameConfig::default()
    };
    let mut game = Game::with_human_count(&config, 0).expect("game");
    let mut sampler = SeededSampler::new(config.seed);
    let mut log = Vec::new();

    for _ in 0..TURNS {
        if query::is_terminal(&game) {
            break;
        }

        let player = query::active_player(&game);
        let Controller::Automated(agent_config) = query::controller(&game, player) else {
            panic!("every seat is automated");
        };
        let mut agent = Agent::new(agent_config, &mut sampler);
        let command = match agent.best_action(query::board(&game), player) {
            Some(action) => Command::TakeTurn { player, action },
            None => Command::Pass { player },
        };

        game::apply(&mut game, command, &mut log);

        for seat in PlayerId::ALL {
            let position = query::board(&game).position(seat);
            assert!(query::goal_distance(&game, position, seat).is_reachable());
        }
    }

    log
}
