use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_game, PlayerConfig, Recorder, RulesNotFollowed};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sixty_six::Bot;
use tracing::{debug, error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record every deal's tricks as JSON files into this directory
    #[arg(short, long)]
    record_deals_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    game_points: [u32; 2],
    deals: usize,
}

fn play_matchup(
    player_1: &mut dyn Bot,
    player_2: &mut dyn Bot,
    num_games: usize,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let player_names = [String::from(player_1.name()), String::from(player_2.name())];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        let result = match play_game(rng, player_1, player_2, recorder) {
            Ok(result) => result,
            Err(err) => {
                log_rules_violation(&err);
                return Err(err.into());
            }
        };
        debug!(winner = player_names[result.winner], game_idx, deals = result.deals);
        match_score.wins[result.winner] += 1;
        match_score.game_points[0] += result.game_points[0];
        match_score.game_points[1] += result.game_points[1];
        match_score.deals += result.deals;

        if let Some(rec) = recorder {
            rec.write_deal_recordings()?;
        }
    }

    eprintln!(
        "End result:\n- {} wins by {} ({} game points)\n- {} wins by {} ({} game points)\n- {} deals played",
        match_score.wins[0],
        player_names[0],
        match_score.game_points[0],
        match_score.wins[1],
        player_names[1],
        match_score.game_points[1],
        match_score.deals
    );

    Ok(match_score)
}

fn log_rules_violation(err: &RulesNotFollowed) {
    error!(player = err.player, attempts = err.attempts, "Rules not followed");
    let mut err_dyn = err as &dyn std::error::Error;
    while let Some(src_err) = err_dyn.source() {
        error!("{}", err_dyn);
        err_dyn = src_err;
    }
    error!("{}", err_dyn);
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    player_configs: &[PlayerConfig],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results (p1 win %, p2 win %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for j in (0..player_configs.len()).rev() {
        print!(" {:19} |", player_configs[j].nick);
    }
    println!();
    for i in 0..player_configs.len() {
        for _ in 0..player_configs.len() - i + 1 {
            print!("---------------------|");
        }
        println!();
        print!(" {:19} |", player_configs[i].nick);
        for j in (0..player_configs.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some(score) = match_results.get(&(i, j)) {
                print!("{}", score_cell(score));
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

// same width as the " {:19} |" name cells
fn score_cell(score: &MatchScore) -> String {
    let num_games = score.wins[0] + score.wins[1];
    let win_1_percentage = score.wins[0] as f32 / num_games as f32 * 100.0;
    let win_2_percentage = score.wins[1] as f32 / num_games as f32 * 100.0;
    format!(
        "       {:5.1}% {:5.1}% |",
        win_1_percentage, win_2_percentage
    )
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_deals_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;

    let matchups: Vec<(usize, usize)> = (0..player_configs.len()).tuple_combinations().collect();

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in matchups {
        let mut player_1 = player_configs[i1].create_bot(&mut rng);
        let mut player_2 = player_configs[i2].create_bot(&mut rng);

        let match_score = play_matchup(
            player_1.as_mut(),
            player_2.as_mut(),
            args.num_games,
            &mut rng,
            &mut recorder,
        )?;
        info!(
            player_1 = player_configs[i1].nick,
            player_2 = player_configs[i2].nick,
            wins = ?match_score.wins,
            "Match finished"
        );

        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        print_tournament_results(&player_configs, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
