use poke_master::{
    attempt_capture, resolve_turn, BattleMove, BattlePhase, BattleState, Catalog, CaptureOutcome,
    Collection, EventBus, TurnRng, DEFAULT_CAPTURE_THRESHOLD,
};
use rand::Rng;

fn main() {
    let catalog = match Catalog::load_bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("Error loading species catalog: {}", e);
            return;
        }
    };
    println!("Loaded catalog with {} species", catalog.len());

    let mut collection = match Collection::with_starters(&catalog) {
        Ok(collection) => collection,
        Err(e) => {
            println!("Error seeding starter collection: {}", e);
            return;
        }
    };
    println!("Your collection starts with:");
    for creature in collection.creatures() {
        println!("  {} (ATK {})", creature.name, creature.attack);
    }
    println!();

    run_encounter_demo(&catalog, &mut collection);
}

fn run_encounter_demo(catalog: &Catalog, collection: &mut Collection) {
    let mut rng = rand::rng();

    // Pick the wild encounter and the player's creature from the roster
    let roster = catalog.all();
    let wild = roster[rng.random_range(0..roster.len())].instantiate();
    let ours = match catalog.get("Pikachu") {
        Ok(species) => species.instantiate(),
        Err(e) => {
            println!("Error picking the player's creature: {}", e);
            return;
        }
    };

    println!("=== Wild Encounter ===");
    println!("A wild {} appeared!", wild.name);
    println!("Go, {}!", ours.name);
    println!();

    let mut state = BattleState::new(ours, wild);
    let mut turn_rng = TurnRng::new_random();
    let mut turn_count = 0;

    while !state.is_over() {
        println!("--- Turn {} ---", state.turn_number);
        println!(
            "  {}: {} HP | {}: {} HP",
            state.player.name,
            state.player.current_hp(),
            state.opponent.name,
            state.opponent.current_hp()
        );

        let player_move = BattleMove::ALL[rng.random_range(0..BattleMove::ALL.len())];
        let mut events = EventBus::new();
        match resolve_turn(&mut state, player_move, &mut turn_rng, &mut events) {
            Ok(_) => events.print_formatted(),
            Err(e) => {
                println!("Error resolving turn: {}", e);
                return;
            }
        }
        println!();

        turn_count += 1;
        if turn_count > 50 {
            println!("Battle reached the turn limit - ending demo");
            return;
        }
    }

    if state.phase != BattlePhase::PlayerWon {
        println!("{} was defeated. Better luck next time!", state.player.name);
        return;
    }

    println!("=== Capture Attempt ===");
    let mut events = EventBus::new();
    match attempt_capture(&state, DEFAULT_CAPTURE_THRESHOLD, &mut turn_rng, &mut events) {
        Ok(CaptureOutcome::Caught(creature)) => {
            events.print_formatted();
            collection.add(creature);
        }
        Ok(CaptureOutcome::Escaped) => {
            events.print_formatted();
        }
        Err(e) => {
            println!("Error attempting capture: {}", e);
            return;
        }
    }
    println!();

    println!("Your collection now holds {} creature(s):", collection.len());
    for creature in collection.creatures() {
        println!("  {} (ATK {})", creature.name, creature.attack);
    }

    let char_matches = collection.search("char");
    if !char_matches.is_empty() {
        println!();
        println!("Creatures matching \"char\":");
        for creature in char_matches {
            println!("  {}", creature.name);
        }
    }
}
